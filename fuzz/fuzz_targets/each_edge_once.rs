#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    // Running out of data isn't interesting.
    let _ = cellcut::dedup::arbtests::each_edge_once(&mut u);
});
