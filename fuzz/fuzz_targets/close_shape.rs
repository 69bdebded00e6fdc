#![no_main]

use arbitrary::Unstructured;
use cellcut::{arbitrary::ring, close::close_shape, is_closed, Cut, Shape};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(rings) = (0..4).map(|_| ring(&mut u)).collect::<arbitrary::Result<Vec<_>>>() else {
        return;
    };
    let long_enough = rings.iter().filter(|r| r.len() >= 2).count();

    match close_shape(Shape::new(rings, Cut::outline(1.0))) {
        Some(shape) => {
            assert_eq!(shape.geometry.len(), long_enough);
            assert!(shape.geometry.iter().all(|r| is_closed(r)));
        }
        None => assert_eq!(long_enough, 0),
    }
});
