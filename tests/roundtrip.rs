use graymap::*;

fn gradient(image: &mut Graymap) {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let data = image.data_mut();
    for y in 0..h {
        for x in 0..w {
            data[y * w + x] = (x * y * 255 / (w * h)) as u8;
        }
    }
}

#[test]
fn new_binary_roundtrip() {
    let mut image = Graymap::new(240, 360);
    gradient(&mut image);
    let bytes = encode(&mut image).unwrap();

    let reread = decode(&bytes).unwrap();
    assert_eq!(reread.descriptor(), Descriptor::Binary);
    assert_eq!(reread.comment(), "");
    assert_eq!(reread.width(), 240);
    assert_eq!(reread.height(), 360);
    assert_eq!(reread.data(), image.data());
}

#[test]
fn new_ascii_roundtrip() {
    let mut image = Graymap::new(480, 120);
    gradient(&mut image);
    image.set_descriptor(Descriptor::Ascii);
    let bytes = encode(&mut image).unwrap();

    let reread = decode(&bytes).unwrap();
    assert_eq!(reread.descriptor(), Descriptor::Ascii);
    assert_eq!(reread.comment(), "");
    assert_eq!(reread.width(), 480);
    assert_eq!(reread.height(), 120);
    assert_eq!(reread.data(), image.data());
}

#[test]
fn descriptor_conversion_is_lossless() {
    let mut image = Graymap::new(33, 7);
    gradient(&mut image);
    image.set_comment("# converted");
    let binary = encode(&mut image).unwrap();

    let mut as_ascii = decode(&binary).unwrap();
    as_ascii.set_descriptor(Descriptor::Ascii);
    let ascii = encode(&mut as_ascii).unwrap();

    let mut back = decode(&ascii).unwrap();
    assert_eq!(back.data(), image.data());

    // converting back must reproduce the binary bytes exactly
    back.set_descriptor(Descriptor::Binary);
    assert_eq!(encode(&mut back).unwrap(), binary);
}

// ── Comments ────────────────────────────────────────────────────────

#[test]
fn interleaved_comments_collapse_in_order() {
    let mut input = Vec::new();
    input.extend_from_slice(
        b"# test comment\nP5\n# CREATOR: map_saver.cpp\n# test comment\n500 360\n# test comment\n# test comment\n255\n",
    );
    input.resize(input.len() + 500 * 360, 7);

    let image = decode(&input).unwrap();
    assert_eq!(image.descriptor(), Descriptor::Binary);
    assert_eq!(image.width(), 500);
    assert_eq!(image.height(), 360);
    assert_eq!(
        image.comment(),
        "# test comment\n# CREATOR: map_saver.cpp\n# test comment\n# test comment\n# test comment"
    );
}

#[test]
fn comment_survives_rewrite() {
    let mut input = Vec::new();
    input.extend_from_slice(b"P5\n# one\n# two\n6 2\n255\n");
    input.resize(input.len() + 12, 42);

    let mut image = decode(&input).unwrap();
    let bytes = encode(&mut image).unwrap();
    let reread = decode(&bytes).unwrap();
    assert_eq!(reread.comment(), "# one\n# two");
    assert_eq!(reread.data(), image.data());
}

#[test]
fn ascii_payload_comments_join_the_block() {
    let input = b"P2\n2 2\n255\n1\n# mid-data note\n2\n3\n4\n";
    let image = decode(input).unwrap();
    assert_eq!(image.comment(), "# mid-data note");
    assert_eq!(image.data(), &[1, 2, 3, 4]);
}

// ── Errors ──────────────────────────────────────────────────────────

#[test]
fn rejects_unknown_descriptor() {
    let input = b"P6\n2 2\n255\nxxxxxxxxxxxx";
    match decode(input) {
        Err(GraymapError::UnsupportedDescriptor(token)) => assert_eq!(token, "P6"),
        other => panic!("expected UnsupportedDescriptor, got {other:?}"),
    }
}

#[test]
fn rejects_descriptor_token_outside_the_pair() {
    match Descriptor::from_token(b"P3") {
        Err(GraymapError::UnsupportedDescriptor(token)) => assert_eq!(token, "P3"),
        other => panic!("expected UnsupportedDescriptor, got {other:?}"),
    }
    assert_eq!(Descriptor::from_token(b"P5").unwrap(), Descriptor::Binary);
    assert_eq!(Descriptor::from_token(b"P2").unwrap(), Descriptor::Ascii);
}

#[test]
fn rejects_size_line_without_space() {
    let err = decode(b"P5\n480x320\n255\n").unwrap_err();
    assert!(err.to_string().contains("no space in line 3"), "{err}");
}

#[test]
fn rejects_non_numeric_dimensions() {
    assert!(matches!(
        decode(b"P5\nwide tall\n255\n"),
        Err(GraymapError::MalformedHeader(_))
    ));
    assert!(matches!(
        decode(b"P5\n0 4\n255\n"),
        Err(GraymapError::MalformedHeader(_))
    ));
}

#[test]
fn rejects_non_numeric_ascii_sample() {
    let input = b"P2\n2 2\n255\n1\nfoo\n3\n4\n";
    match decode(input) {
        Err(GraymapError::MalformedSample(text)) => assert_eq!(text, "foo"),
        other => panic!("expected MalformedSample, got {other:?}"),
    }
}

#[test]
fn rejects_out_of_range_ascii_sample() {
    assert!(matches!(
        decode(b"P2\n1 1\n255\n300\n"),
        Err(GraymapError::MalformedSample(_))
    ));
}

#[test]
fn rejects_truncated_header() {
    assert!(matches!(decode(b""), Err(GraymapError::UnexpectedEof)));
    assert!(matches!(decode(b"P5\n"), Err(GraymapError::UnexpectedEof)));
    assert!(matches!(decode(b"P5\n4 4"), Err(GraymapError::UnexpectedEof)));
}

#[test]
fn rejects_not_a_graymap() {
    let input = b"\x89PNG\r\n\x1a\n\x00\x00";
    assert!(decode(input).is_err());
}

// ── Probe & limits ──────────────────────────────────────────────────

#[test]
fn info_probe_reads_header_only() {
    let mut image = Graymap::new(31, 9);
    gradient(&mut image);
    let bytes = encode(&mut image).unwrap();

    let info = GraymapInfo::from_bytes(&bytes).unwrap();
    assert_eq!(info.width, 31);
    assert_eq!(info.height, 9);
    assert_eq!(info.descriptor, Descriptor::Binary);
    assert_eq!(info.max_value, 255);

    // probing ignores the payload, so truncating it is fine
    let info = GraymapInfo::from_bytes(&bytes[..bytes.len() - 50]).unwrap();
    assert_eq!(info.width, 31);
}

#[test]
fn limits_reject_large() {
    let mut image = Graymap::new(4, 4);
    let bytes = encode(&mut image).unwrap();

    let limits = Limits {
        max_pixels: Some(8),
        ..Default::default()
    };
    let result = DecodeRequest::new(&bytes).with_limits(&limits).decode();
    match result {
        Err(GraymapError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_width: Some(16),
        max_height: Some(16),
        max_pixels: Some(64),
    };
    assert!(
        DecodeRequest::new(&bytes)
            .with_limits(&limits)
            .decode()
            .is_ok()
    );
}
