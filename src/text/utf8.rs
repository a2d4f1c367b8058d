// src/text/utf8.rs

//! Permissive UTF-8 codepoint decoding.
//!
//! This is not a validating decoder. It reads the sequence length from the
//! lead byte and folds in the low six bits of each following byte without
//! checking that they really are continuation bytes. Overlong forms and
//! surrogates come through as whatever number they encode. The font decides
//! what to draw for them.

use std::iter::FusedIterator;

/// Codepoint produced for lead bytes that cannot start a sequence.
pub const REPLACEMENT_CODEPOINT: u32 = 0xFFFD;

/// Decodes the codepoint at the start of `bytes`.
///
/// Returns the codepoint and how many bytes it used, or `None` when `bytes`
/// is empty. Always consumes at least one byte and never more than
/// `bytes.len()`. A sequence cut short by the end of the slice is decoded
/// as if the missing bytes were zero.
pub fn next_codepoint(bytes: &[u8]) -> Option<(u32, usize)> {
    let (&lead, rest) = bytes.split_first()?;
    let lead_bits = u32::from(lead);

    let (payload, trailing) = match lead {
        0x00..=0x7F => return Some((lead_bits, 1)),
        _ if lead & 0xE0 == 0xC0 => (lead_bits & 0x1F, 1),
        _ if lead & 0xF0 == 0xE0 => (lead_bits & 0x0F, 2),
        _ if lead & 0xF8 == 0xF0 => (lead_bits & 0x07, 3),
        // Obsolete 5 and 6 byte forms: skip the whole sequence.
        _ if lead & 0xFC == 0xF8 => return Some((REPLACEMENT_CODEPOINT, bytes.len().min(5))),
        _ if lead & 0xFE == 0xFC => return Some((REPLACEMENT_CODEPOINT, bytes.len().min(6))),
        // Stray continuation byte, 0xFE or 0xFF.
        _ => return Some((REPLACEMENT_CODEPOINT, 1)),
    };

    let codepoint = (0..trailing).fold(payload, |acc, i| {
        let bits = rest.get(i).map_or(0, |&b| u32::from(b & 0x3F));
        (acc << 6) | bits
    });
    Some((codepoint, 1 + trailing.min(rest.len())))
}

/// Lazily decodes a byte string into codepoints.
///
/// Decoding stops at the end of the slice or at the first NUL byte,
/// whichever comes first.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    remaining: &'a [u8],
}

impl<'a> Codepoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self {
            remaining: &bytes[..end],
        }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (codepoint, used) = next_codepoint(self.remaining)?;
        self.remaining = &self.remaining[used..];
        Some(codepoint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        // Sequences are at most six bytes long.
        (len.div_ceil(6), Some(len))
    }
}

impl FusedIterator for Codepoints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn decode(bytes: &[u8]) -> Vec<u32> {
        Codepoints::new(bytes).collect()
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode(b"Hi!"), vec![0x48, 0x69, 0x21]);
        assert_eq!(next_codepoint(b"A"), Some((0x41, 1)));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(next_codepoint(b""), None);
        assert!(decode(b"").is_empty());
    }

    #[test]
    fn multibyte_sequences_match_std() {
        let text = "é€😀 ok";
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(decode(text.as_bytes()), expected);
        assert_eq!(next_codepoint("€".as_bytes()), Some((0x20AC, 3)));
        assert_eq!(next_codepoint("😀".as_bytes()), Some((0x1F600, 4)));
    }

    #[test]
    fn stops_at_nul() {
        assert_eq!(decode(b"ab\0cd"), vec![0x61, 0x62]);
        assert!(decode(b"\0abc").is_empty());
    }

    #[test]
    fn truncated_sequence_uses_remaining_bytes() {
        // Lead byte of a 3-byte sequence followed by one continuation byte.
        assert_eq!(next_codepoint(&[0xE2, 0x82]), Some((0x2080, 2)));
        assert_eq!(next_codepoint(&[0xC3]), Some((0xC0, 1)));
    }

    #[test]
    fn continuation_bytes_are_not_validated() {
        // 0xC3 followed by ASCII 'A' (0x41): low six bits of 'A' are folded in.
        assert_eq!(next_codepoint(&[0xC3, 0x41]), Some((0xC1, 2)));
    }

    #[test]
    fn invalid_leads_become_replacement() {
        assert_eq!(next_codepoint(&[0x80, 0x41]), Some((REPLACEMENT_CODEPOINT, 1)));
        assert_eq!(next_codepoint(&[0xFF]), Some((REPLACEMENT_CODEPOINT, 1)));
        assert_eq!(
            next_codepoint(&[0xF8, 0x80, 0x80, 0x80, 0x80, 0x41]),
            Some((REPLACEMENT_CODEPOINT, 5))
        );
        assert_eq!(
            next_codepoint(&[0xFC, 0x80, 0x80, 0x80, 0x80, 0x80, 0x41]),
            Some((REPLACEMENT_CODEPOINT, 6))
        );
        assert_eq!(next_codepoint(&[0xFC, 0x80]), Some((REPLACEMENT_CODEPOINT, 2)));
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = Codepoints::new(b"x");
        assert_eq!(it.next(), Some(0x78));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
