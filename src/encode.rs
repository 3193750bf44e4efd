//! PGM serialization.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::descriptor::Descriptor;
use crate::error::GraymapError;
use crate::image::Graymap;

/// Serialize an image to PGM bytes.
///
/// Takes `&mut` because storage is normalized first: when the buffer
/// length disagrees with `width × height` (after a geometry change, or a
/// short/long decoded payload), a full-canvas [`Graymap::trim`] remaps
/// it before anything is written.
pub fn encode(image: &mut Graymap) -> Result<Vec<u8>, GraymapError> {
    let (width, height) = (image.width(), image.height());
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(GraymapError::DimensionsTooLarge { width, height })?;
    if image.data().len() != expected {
        image.trim(0, 0, width, height);
    }

    let mut header = format!("{}\n", image.descriptor().as_token());
    if !image.comment().is_empty() {
        header.push_str(image.comment());
        header.push('\n');
    }
    let _ = write!(header, "{width} {height}\n{}\n", image.max_value());

    match image.descriptor() {
        Descriptor::Binary => {
            let mut out = Vec::with_capacity(header.len() + expected);
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(image.data());
            Ok(out)
        }
        Descriptor::Ascii => {
            // worst case "255\n" per sample
            let mut payload = String::with_capacity(expected * 4);
            for &sample in image.data() {
                let _ = writeln!(payload, "{sample}");
            }
            let mut out = Vec::with_capacity(header.len() + payload.len());
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(payload.as_bytes());
            Ok(out)
        }
    }
}
