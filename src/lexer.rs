//! Framing of raw bytes into sentences.
//!
//! A sentence starts with a six byte header `$ttXYZ` and ends with (and
//! includes) the first `\r\n` after that header. Only the sentence type `XYZ`
//! is looked at; the talker id and the leading `$` are not checked.

use std::str;

use crate::err::FieldError;

/// Length of `$ttXYZ`.
pub const HEADER_LENGTH: usize = 6;

const TYPE_OFFSET: usize = 3;
const LINE_ENDING: &[u8] = b"\r\n";
const FIELD_SEPARATOR: char = ',';
const CHECKSUM_MARKER: char = '*';

/// The sentence types the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// Global positioning system fix data.
    Gga,
    /// Recommended minimum navigation information.
    Rmc,
}

impl SentenceKind {
    /// Inspect the header at the start of `window`.
    /// Returns `None` if `window` is shorter than a header or carries a type
    /// we don't decode.
    #[inline]
    pub fn recognize(window: &[u8]) -> Option<Self> {
        match window.get(TYPE_OFFSET..HEADER_LENGTH)? {
            b"GGA" => Some(SentenceKind::Gga),
            b"RMC" => Some(SentenceKind::Rmc),
            _ => None,
        }
    }
}

/// Length of the sentence at the start of `window`, line ending included.
/// The search for `\r\n` begins right after the header. `None` means the
/// sentence is not complete yet.
pub fn sentence_length(window: &[u8]) -> Option<usize> {
    window
        .get(HEADER_LENGTH..)?
        .windows(LINE_ENDING.len())
        .position(|w| w == LINE_ENDING)
        .map(|i| HEADER_LENGTH + i + LINE_ENDING.len())
}

/// Comma separated fields of one sentence.
///
/// Field 0 is the header itself (`$GPGGA`). The line ending and the checksum
/// suffix `*HH` are not part of any field. Fields are split lazily so no
/// allocation happens per sentence.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    body: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(sentence: &'a [u8]) -> Result<Self, FieldError> {
        let sentence = sentence.strip_suffix(LINE_ENDING).unwrap_or(sentence);
        let body = str::from_utf8(sentence)?;
        let body = match body.rfind(CHECKSUM_MARKER) {
            Some(pos) => &body[..pos],
            None => body,
        };
        Ok(Fields { body })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.body.split(FIELD_SEPARATOR).nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_gga_and_rmc_regardless_of_talker() {
        assert_eq!(SentenceKind::recognize(b"$GPGGA,"), Some(SentenceKind::Gga));
        assert_eq!(SentenceKind::recognize(b"$GNGGA"), Some(SentenceKind::Gga));
        assert_eq!(SentenceKind::recognize(b"$IIRMC"), Some(SentenceKind::Rmc));
        assert_eq!(SentenceKind::recognize(b"$GPGSV,1"), None);
        assert_eq!(SentenceKind::recognize(b"$GPGG"), None);
        assert_eq!(SentenceKind::recognize(b""), None);
    }

    #[test]
    fn sentence_length_includes_crlf() {
        assert_eq!(sentence_length(b"$GPGGA,1*4F\r\nrest"), Some(13));
        assert_eq!(sentence_length(b"$GPGGA\r\n"), Some(8));
    }

    #[test]
    fn sentence_length_needs_complete_line_ending() {
        assert_eq!(sentence_length(b"$GPGGA,1,2*4F"), None);
        assert_eq!(sentence_length(b"$GPGGA,1,2*4F\r"), None);
        assert_eq!(sentence_length(b"$GPG"), None);
    }

    #[test]
    fn line_ending_inside_header_is_ignored() {
        // The search starts after the header, so this CRLF does not count.
        assert_eq!(sentence_length(b"$G\r\nGA,1\r\n"), Some(10));
    }

    #[test]
    fn fields_strip_checksum_and_line_ending() {
        let f = Fields::new(b"$GPRMC,225446,A,,N*68\r\n").unwrap();
        assert_eq!(f.get(0), Some("$GPRMC"));
        assert_eq!(f.get(3), Some(""));
        assert_eq!(f.get(4), Some("N"));
        assert_eq!(f.get(5), None);
    }

    #[test]
    fn fields_reject_non_utf8() {
        assert_matches!(Fields::new(b"$GPGGA,\xff\r\n"), Err(FieldError::Utf8(_)));
    }
}
