#![no_main]
use graymap::{DecodeRequest, Limits, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(mut image) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };
    let Ok(bytes) = encode(&mut image) else {
        return;
    };

    // re-reading our own output must reproduce the image exactly
    // (encode normalized the buffer, so lengths agree from here on)
    let reread = decode(&bytes).expect("re-encoded data failed to decode");
    assert_eq!(reread.width(), image.width());
    assert_eq!(reread.height(), image.height());
    assert_eq!(reread.descriptor(), image.descriptor());
    assert_eq!(reread.comment(), image.comment());
    assert_eq!(reread.data(), image.data());
});
