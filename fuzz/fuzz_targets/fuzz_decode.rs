#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode must never panic, whatever the input
    let _ = ffcanvas::decode(data, enough::Unstoppable);
    let _ = ffcanvas::ImageInfo::from_bytes(data);
});
