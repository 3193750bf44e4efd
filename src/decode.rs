//! PGM decoding: line tokenizer, header parser, sample decoders.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::descriptor::Descriptor;
use crate::error::GraymapError;
use crate::image::Graymap;
use crate::limits::Limits;

/// Borrowing cursor over newline-delimited segments of a byte buffer.
struct Lines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next segment up to (excluding) the line feed, or to the end of the
    /// buffer when no line feed remains. A line feed at the final byte
    /// does not yield a trailing empty line.
    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                self.pos += i + 1;
                Some(&rest[..i])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }

    /// Next non-comment line. Comment lines (`#` first byte) encountered
    /// on the way are appended to `comment`, joined by `\n`.
    fn next_structural(&mut self, comment: &mut String) -> Option<&'a [u8]> {
        while let Some(line) = self.next_line() {
            if line.first() == Some(&b'#') {
                if !comment.is_empty() {
                    comment.push('\n');
                }
                comment.push_str(&String::from_utf8_lossy(line));
            } else {
                return Some(line);
            }
        }
        None
    }
}

/// Parsed PGM header.
pub(crate) struct RawHeader {
    pub descriptor: Descriptor,
    pub width: u32,
    pub height: u32,
    /// Comment lines seen up to the end of the header.
    pub comment: String,
    /// First byte past the max-value line's terminating line feed.
    pub data_offset: usize,
}

/// Parse the three structural header lines, collecting interleaved
/// comment lines on the way.
pub(crate) fn parse_header(data: &[u8]) -> Result<RawHeader, GraymapError> {
    let mut lines = Lines::new(data);
    let mut comment = String::new();

    let token = lines
        .next_structural(&mut comment)
        .ok_or(GraymapError::UnexpectedEof)?;
    let descriptor = Descriptor::from_token(token)?;

    let size = lines
        .next_structural(&mut comment)
        .ok_or(GraymapError::UnexpectedEof)?;
    let (width, height) = parse_dimensions(size)?;

    // The max-value line is located and skipped, never interpreted;
    // readers rely on the default of 255.
    lines
        .next_structural(&mut comment)
        .ok_or(GraymapError::UnexpectedEof)?;

    Ok(RawHeader {
        descriptor,
        width,
        height,
        comment,
        data_offset: lines.pos,
    })
}

fn parse_dimensions(line: &[u8]) -> Result<(u32, u32), GraymapError> {
    // split on the first space byte only
    let space = line
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| GraymapError::MalformedHeader("no space in line 3".into()))?;
    let width = parse_dimension(&line[..space], "width")?;
    let height = parse_dimension(&line[space + 1..], "height")?;
    Ok((width, height))
}

fn parse_dimension(token: &[u8], what: &str) -> Result<u32, GraymapError> {
    let value = core::str::from_utf8(token.trim_ascii())
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            GraymapError::MalformedHeader(format!(
                "invalid {what} {:?}",
                String::from_utf8_lossy(token)
            ))
        })?;
    if value == 0 {
        return Err(GraymapError::MalformedHeader(format!("{what} is zero")));
    }
    Ok(value)
}

fn parse_sample(line: &[u8]) -> Result<u8, GraymapError> {
    core::str::from_utf8(line.trim_ascii())
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
        .ok_or_else(|| GraymapError::MalformedSample(String::from_utf8_lossy(line).into_owned()))
}

/// Decode the `P2` payload: one decimal sample per non-comment line, in
/// encounter order, until the input ends. Comment lines keep accumulating
/// into the comment block. Sample count is not validated against the
/// declared geometry.
fn decode_ascii(payload: &[u8], comment: &mut String) -> Result<Vec<u8>, GraymapError> {
    let mut lines = Lines::new(payload);
    let mut samples = Vec::new();
    while let Some(line) = lines.next_structural(comment) {
        samples.push(parse_sample(line)?);
    }
    Ok(samples)
}

/// Configured decode. Attach [`Limits`] when the input is untrusted.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Graymap, GraymapError> {
        let header = parse_header(self.data)?;
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
        }
        let RawHeader {
            descriptor,
            width,
            height,
            mut comment,
            data_offset,
        } = header;
        let data = match descriptor {
            // everything past the max-value line is the payload, taken
            // as-is: length is not validated against width*height
            Descriptor::Binary => self.data[data_offset..].to_vec(),
            Descriptor::Ascii => decode_ascii(&self.data[data_offset..], &mut comment)?,
        };
        Ok(Graymap::from_parts(width, height, descriptor, comment, data))
    }
}

/// Decode a PGM buffer into a [`Graymap`].
pub fn decode(data: &[u8]) -> Result<Graymap, GraymapError> {
    DecodeRequest::new(data).decode()
}
