#![no_main]

use avl_multiset::model::SplitInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: SplitInput| {
    avl_multiset::model::run_split_partition(input);
});
