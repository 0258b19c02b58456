//! Bytes to printable text and back.
//!
//! Each character carries 11 bits. The main alphabet is the 2048 CJK
//! ideographs from U+4E00 to U+55FF. When only 1 to 3 bits are left at the
//! end, a tail character from a separate 8-symbol block (U+5600 to U+5607)
//! carries them instead. All padding bits are ones.
//!
//! None of these characters are markup, whitespace, or URL delimiters, and
//! chat clients leave them alone. A build code needs a little over half as
//! many characters as the base64 of the same bytes.
//!
//! Every byte string has exactly one text form. Decoding re-encodes the
//! result and rejects the input if the two differ, so there are no
//! "almost valid" codes.

use crate::CodecError;

const BITS_PER_CHAR: u32 = 11;
const BITS_PER_TAIL: u32 = 3;
const FULL_BASE: u32 = 0x4E00;
const TAIL_BASE: u32 = FULL_BASE + (1 << BITS_PER_CHAR);

enum Symbol {
    Full(u32),
    Tail(u32),
}

fn symbol(ch: char) -> Option<Symbol> {
    let code = u32::from(ch);
    match code.checked_sub(FULL_BASE)? {
        value if value < (1 << BITS_PER_CHAR) => Some(Symbol::Full(value)),
        value => {
            let tail = value - (1 << BITS_PER_CHAR);
            (tail < (1 << BITS_PER_TAIL)).then_some(Symbol::Tail(tail))
        }
    }
}

fn full_char(value: u32) -> char {
    // 0x4E00..=0x55FF are all assigned scalar values.
    char::from_u32(FULL_BASE + value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn tail_char(value: u32) -> char {
    char::from_u32(TAIL_BASE + value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Left-aligns `width` data bits in a `slot`-bit symbol, padding with ones.
fn pad(value: u32, width: u32, slot: u32) -> u32 {
    let spare = slot - width;
    (value << spare) | ((1 << spare) - 1)
}

/// Encodes bytes as build-code text.
pub fn to_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity((bytes.len() * 8).div_ceil(BITS_PER_CHAR as usize) * 3);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            text.push(full_char((acc >> bits) & 0x7FF));
        }
        acc &= (1 << bits) - 1;
    }

    match bits {
        0 => {}
        1..=BITS_PER_TAIL => text.push(tail_char(pad(acc, bits, BITS_PER_TAIL))),
        _ => text.push(full_char(pad(acc, bits, BITS_PER_CHAR))),
    }
    text
}

/// Line terminators copy-paste may leave in a code: CR, LF, NEL, and the
/// Unicode line and paragraph separators.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Removes the line breaks that chat clients and rich-text editors insert.
pub fn strip_newlines(code: &str) -> String {
    code.chars().filter(|c| !LINE_BREAKS.contains(c)).collect()
}

/// Decodes build-code text. Line breaks anywhere in `code` are ignored.
///
/// # Errors
/// - [`CodecError::Empty`] if nothing is left after stripping line breaks.
/// - [`CodecError::CodeTooLong`] past `max_chars` characters.
/// - [`CodecError::InvalidCharacter`] for anything outside the alphabet.
/// - [`CodecError::MisplacedTail`] for a tail character before the end.
/// - [`CodecError::NonCanonical`] if the text is not what
///   [`to_text`] would produce for the decoded bytes.
pub fn from_text(code: &str, max_chars: usize) -> Result<Vec<u8>, CodecError> {
    let text = strip_newlines(code);
    let len = text.chars().count();
    if len == 0 {
        return Err(CodecError::Empty);
    }
    if len > max_chars {
        return Err(CodecError::CodeTooLong { limit: max_chars });
    }

    let mut bytes = Vec::with_capacity(len * BITS_PER_CHAR as usize / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for (position, ch) in text.chars().enumerate() {
        let (value, width) = match symbol(ch) {
            Some(Symbol::Full(value)) => (value, BITS_PER_CHAR),
            Some(Symbol::Tail(value)) if position + 1 == len => (value, BITS_PER_TAIL),
            Some(Symbol::Tail(_)) => return Err(CodecError::MisplacedTail(position)),
            None => return Err(CodecError::InvalidCharacter { ch, position }),
        };
        acc = (acc << width) | value;
        bits += width;
        while bits >= 8 {
            bits -= 8;
            bytes.push(((acc >> bits) & 0xFF) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    if to_text(&bytes) != text {
        return Err(CodecError::NonCanonical);
    }
    Ok(bytes)
}
