//! # graymap
//!
//! PGM (portable graymap) codec: parse `P5`/`P2` byte buffers into an
//! owned grayscale [`Graymap`], serialize back, and trim or resize the
//! canvas. Buffers in, buffers out — file and process I/O belong to the
//! caller.
//!
//! ## Format behavior
//!
//! - **Comments** (`#` lines) may sit between any two header lines (and,
//!   for `P2`, between sample lines); they round-trip as one block joined
//!   by `\n`, leading `#` preserved.
//! - **Max-value line**: located and skipped, never parsed.
//!   [`Graymap::max_value`] stays 255 unless the caller sets it. Consumers
//!   depend on this; do not "fix" it by interpreting the declared value.
//! - **`P5` payload length is not validated** against `width × height`.
//!   Short or long payloads decode as-is; [`encode`] normalizes storage
//!   (zero-padding or cutting) before writing.
//!
//! ## Non-Goals
//!
//! - Sample range validation against the declared max value
//! - Other netpbm formats (PBM, PPM, PAM) — grayscale only
//! - Whitespace layouts beyond newline-delimited lines with a
//!   single-space width/height separator
//!
//! ## Usage
//!
//! ```
//! use graymap::{Descriptor, Graymap};
//!
//! let mut image = Graymap::new(4, 2);
//! image.data_mut()[0] = 128;
//! image.set_descriptor(Descriptor::Ascii);
//! let bytes = graymap::encode(&mut image)?;
//!
//! let decoded = graymap::decode(&bytes)?;
//! assert_eq!(decoded.width(), 4);
//! assert_eq!(decoded.descriptor(), Descriptor::Ascii);
//! assert_eq!(decoded.data()[0], 128);
//!
//! // region extraction: 2x2 window at (1, 0)
//! let mut window = decoded;
//! window.trim(1, 0, 2, 2);
//! assert_eq!(window.data().len(), 4);
//! # Ok::<(), graymap::GraymapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod descriptor;
mod encode;
mod error;
mod image;
mod info;
mod limits;

// Re-exports
pub use decode::{DecodeRequest, decode};
pub use descriptor::Descriptor;
pub use encode::encode;
pub use error::GraymapError;
pub use image::Graymap;
pub use info::GraymapInfo;
pub use limits::Limits;
