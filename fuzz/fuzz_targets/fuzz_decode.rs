#![no_main]
use graymap::{DecodeRequest, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // headers can declare absurd dimensions; cap them so the interesting
    // paths get exercised without gigabyte allocations
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(image) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    assert!(image.width() > 0 && image.height() > 0);
    assert_eq!(image.max_value(), 255);
    if !image.comment().is_empty() {
        for line in image.comment().split('\n') {
            assert!(line.starts_with('#'), "comment line lost its marker");
        }
    }
});
