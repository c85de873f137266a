//! ANSI escape code conversion utilities.
//!
//! Converts registered color pairs to SGR sequences for terminal output.

use crate::text::ColorPair;

/// Convert a foreground palette value to an ANSI escape code.
///
/// Appends the escape sequence for the color to the buffer.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is the terminal default
fn fg_to_ansi(color: i16, buf: &mut String) -> bool {
    match color {
        0..=7 => {
            buf.push_str(&format!("\x1b[{}m", 30 + color));
            true
        }
        8..=255 => {
            buf.push_str(&format!("\x1b[38;5;{}m", color));
            true
        }
        _ => false,
    }
}

/// Convert a background palette value to an ANSI escape code.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is the terminal default
fn bg_to_ansi(color: i16, buf: &mut String) -> bool {
    match color {
        0..=7 => {
            buf.push_str(&format!("\x1b[{}m", 40 + color));
            true
        }
        8..=255 => {
            buf.push_str(&format!("\x1b[48;5;{}m", color));
            true
        }
        _ => false,
    }
}

/// Append the SGR codes selecting `pair`, after a full reset.
pub fn pair_to_ansi(pair: ColorPair, buf: &mut String) {
    buf.push_str("\x1b[0m");
    fg_to_ansi(pair.fg, buf);
    bg_to_ansi(pair.bg, buf);
}

/// The character to draw for a content byte.
///
/// Text is single-byte; anything that is not printable ASCII becomes a
/// space so the cell grid stays aligned.
pub fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte)
    } else {
        ' '
    }
}
