#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the accepted bytes
    let Ok(canvas) = ffcanvas::decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = ffcanvas::encode(&canvas, enough::Unstoppable)
        .expect("re-encoding a decoded canvas cannot fail");

    let accepted = 16 + canvas.as_bytes().len();
    assert_eq!(reencoded, &data[..accepted]);
});
