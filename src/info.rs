use crate::descriptor::Descriptor;
use crate::error::GraymapError;
use crate::image::DEFAULT_MAX_VALUE;

/// Header snapshot: geometry and encoding without the pixel payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraymapInfo {
    pub width: u32,
    pub height: u32,
    pub descriptor: Descriptor,
    /// Always 255 when probed from bytes — the file's max-value line is
    /// skipped, never interpreted.
    pub max_value: u16,
}

impl GraymapInfo {
    /// Probe a PGM header without decoding the payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self, GraymapError> {
        let header = crate::decode::parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            descriptor: header.descriptor,
            max_value: DEFAULT_MAX_VALUE,
        })
    }
}
