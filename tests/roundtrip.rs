use enough::Unstoppable;
use ffcanvas::*;

fn checkered(w: u32, h: u32) -> Canvas {
    let mut canvas = Canvas::new(w, h).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if (x + y) % 2 == 0 {
                canvas.set(x, y, Rgba::new(255, 0, 128, 255));
            } else {
                canvas.set(x, y, Rgba::new(0, 200, 50, 64));
            }
        }
    }
    canvas
}

#[test]
fn farbfeld_roundtrip() {
    let canvas = checkered(4, 3);

    let encoded = encode(&canvas, Unstoppable).unwrap();
    assert_eq!(&encoded[0..8], b"farbfeld");

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 4);
    assert_eq!(decoded.height(), 3);
    assert_eq!(decoded, canvas);
}

#[test]
fn encoded_layout_is_exact() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.clear(Rgba::new(255, 0, 0, 255));

    let encoded = encode(&canvas, Unstoppable).unwrap();

    let mut expected = Vec::from(*b"farbfeld");
    expected.extend_from_slice(&2u32.to_be_bytes());
    expected.extend_from_slice(&2u32.to_be_bytes());
    for _ in 0..4 {
        // R=0xFF00, G=0, B=0, A=0xFF00 — high byte carries the intensity
        expected.extend_from_slice(&[0xFF, 0, 0, 0, 0, 0, 0xFF, 0]);
    }
    assert_eq!(encoded, expected);
}

#[test]
fn bad_magic_is_rejected() {
    let mut data = Vec::from(*b"dlefbraf");
    data.extend_from_slice(&[0; 8]);
    match decode(&data, Unstoppable).unwrap_err() {
        CanvasError::UnrecognizedFormat => {}
        other => panic!("expected UnrecognizedFormat, got {other:?}"),
    }
}

#[test]
fn empty_and_short_headers_are_eof() {
    for data in [&b""[..], &b"farb"[..], &b"farbfeld\x00\x00"[..]] {
        match decode(data, Unstoppable).unwrap_err() {
            CanvasError::UnexpectedEof => {}
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }
}

#[test]
fn truncated_payload_is_eof_not_partial_canvas() {
    let canvas = checkered(5, 5);
    let encoded = encode(&canvas, Unstoppable).unwrap();

    // Header intact, payload one byte short
    let result = decode(&encoded[..encoded.len() - 1], Unstoppable);
    match result.unwrap_err() {
        CanvasError::UnexpectedEof => {}
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }

    // Header only
    match decode(&encoded[..16], Unstoppable).unwrap_err() {
        CanvasError::UnexpectedEof => {}
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_are_ignored() {
    let canvas = checkered(2, 2);
    let mut encoded = encode(&canvas, Unstoppable).unwrap();
    encoded.extend_from_slice(&[1, 2, 3, 4]);

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, canvas);
}

#[test]
fn zero_dimensions_roundtrip() {
    for (w, h) in [(0, 0), (3, 0), (0, 7)] {
        let canvas = Canvas::new(w, h).unwrap();
        assert_eq!(canvas.as_bytes().len(), 0);

        let encoded = encode(&canvas, Unstoppable).unwrap();
        assert_eq!(encoded.len(), 16);

        let decoded = decode(&encoded, Unstoppable).unwrap();
        assert_eq!(decoded.width(), w);
        assert_eq!(decoded.height(), h);
    }
}

#[test]
fn nonzero_low_bytes_survive_roundtrip() {
    // A file with true 16-bit samples: the canvas keeps them byte-exact even
    // though get() only ever reads the high bytes.
    let mut data = Vec::from(*b"farbfeld");
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);

    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.get(0, 0), Rgba::new(0x12, 0x56, 0x9A, 0xDE));

    let reencoded = encode(&decoded, Unstoppable).unwrap();
    assert_eq!(reencoded, data);
}

#[test]
fn limits_reject_large() {
    let canvas = checkered(3, 3);
    let encoded = encode(&canvas, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };

    let result = decode_with_limits(&encoded, &limits, Unstoppable);
    match result.unwrap_err() {
        CanvasError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_checked_before_allocation() {
    let canvas = checkered(4, 4);
    let encoded = encode(&canvas, Unstoppable).unwrap();

    let limits = Limits {
        max_memory_bytes: Some(64), // 4*4*8 = 128 needed
        ..Default::default()
    };

    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_err());
}

#[test]
fn image_info_probe() {
    let canvas = Canvas::new(17, 9).unwrap();
    let encoded = encode(&canvas, Unstoppable).unwrap();

    // Header alone is enough for a probe
    let info = ImageInfo::from_bytes(&encoded[..16]).unwrap();
    assert_eq!(info.width, 17);
    assert_eq!(info.height, 9);
}

#[test]
fn oversized_header_dimensions_fail_cleanly() {
    // Dimensions whose byte size overflows usize must error, not wrap
    let mut data = Vec::from(*b"farbfeld");
    data.extend_from_slice(&u32::MAX.to_be_bytes());
    data.extend_from_slice(&u32::MAX.to_be_bytes());

    match decode(&data, Unstoppable).unwrap_err() {
        CanvasError::DimensionsTooLarge { width, height } => {
            assert_eq!(width, u32::MAX);
            assert_eq!(height, u32::MAX);
        }
        other => panic!("expected DimensionsTooLarge, got {other:?}"),
    }
}
