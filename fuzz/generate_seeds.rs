#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x2, four distinct pixels
    let mut ff = b"farbfeld".to_vec();
    ff.extend_from_slice(&2u32.to_be_bytes());
    ff.extend_from_slice(&2u32.to_be_bytes());
    for i in 0u8..4 {
        for ch in 0u8..4 {
            ff.extend_from_slice(&[i * 60 + ch, 0]);
        }
    }
    fs::write(format!("{dir}/ff_2x2.ff"), &ff).unwrap();

    // 0x0 (header only)
    let mut empty = b"farbfeld".to_vec();
    empty.extend_from_slice(&0u32.to_be_bytes());
    empty.extend_from_slice(&0u32.to_be_bytes());
    fs::write(format!("{dir}/ff_0x0.ff"), &empty).unwrap();

    // Truncated payload
    fs::write(format!("{dir}/ff_truncated.ff"), &ff[..20]).unwrap();

    // Wrong magic
    let mut bad = ff.clone();
    bad[0] = b'F';
    fs::write(format!("{dir}/ff_bad_magic.ff"), &bad).unwrap();
}
