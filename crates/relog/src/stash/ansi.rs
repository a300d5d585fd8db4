//! Ansi — escape-sequence stripping for decode-time tolerance.
//!
//! Colorized entries are not required to round-trip, but the decoder must
//! tolerate them: escapes around the level token are noise to the grammar.
//! Returns `Cow::Borrowed` when no escapes were found, so the common plain
//! line costs no allocation.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Strip CSI (`ESC [ ... <terminator>`), OSC (`ESC ] ... BEL | ESC \`) and
/// single-character Fe escape sequences.
pub fn strip_ansi_codes(input: &str) -> Cow<'_, str> {
    if !input.contains(ESC) {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESC {
            output.push(c);
            continue;
        }
        match chars.peek() {
            // CSI: skip until a terminator byte in 0x40..=0x7E.
            Some('[') => {
                chars.next();
                for next in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&next) {
                        break;
                    }
                }
            }
            // OSC: skip until BEL or the ESC \ string terminator.
            Some(']') => {
                chars.next();
                while let Some(next) = chars.next() {
                    if next == '\x07' {
                        break;
                    }
                    if next == ESC && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Single-character Fe sequence (ESC + 0x40..=0x5F).
            Some(&next) if ('\x40'..='\x5f').contains(&next) => {
                chars.next();
            }
            // Lone trailing ESC: drop it.
            _ => {}
        }
    }

    Cow::Owned(output)
}
