use alloc::string::String;

use crate::error::GraymapError;

/// PGM sample encoding, identified by the two-byte magic token.
///
/// Only the two graymap encodings exist; anything else (`P3`, `P6`, ...)
/// is rejected at the token boundary, so a constructed `Descriptor` is
/// always valid to serialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// `P5` — samples stored as raw bytes.
    #[default]
    Binary,
    /// `P2` — one decimal sample per line.
    Ascii,
}

impl Descriptor {
    /// The magic token written at the top of the file.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Binary => "P5",
            Self::Ascii => "P2",
        }
    }

    /// Parse a magic token.
    ///
    /// Returns [`GraymapError::UnsupportedDescriptor`] naming the offending
    /// token for anything outside `P5`/`P2`.
    pub fn from_token(token: &[u8]) -> Result<Self, GraymapError> {
        match token {
            b"P5" => Ok(Self::Binary),
            b"P2" => Ok(Self::Ascii),
            other => Err(GraymapError::UnsupportedDescriptor(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }
}
