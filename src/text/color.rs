//! 24-bit RGB to xterm 256-color palette quantization.

/// Palette index of the first 6x6x6 cube entry (pure black).
const CUBE_BASE: u8 = 16;
/// Palette index of the last cube entry (pure white).
const CUBE_WHITE: u8 = 231;
/// Palette index of the first entry of the 24-step gray ramp.
const GRAY_BASE: i32 = 232;

/// Map an RGB triple onto the nearest xterm 256-color palette index.
///
/// Components are clamped into `0..=255` first, so any integers are
/// accepted. Near-grays (all channels within 8 of each other) go to the
/// dedicated gray ramp; everything else lands in the 6x6x6 color cube.
pub fn quantize(r: i32, g: i32, b: i32) -> u8 {
    let r = r.clamp(0, 255);
    let g = g.clamp(0, 255);
    let b = b.clamp(0, 255);

    if (r - g).abs() < 8 && (g - b).abs() < 8 {
        let gray = (r + g + b) / 3;
        if gray < 8 {
            return CUBE_BASE;
        }
        if gray > 248 {
            return CUBE_WHITE;
        }
        // 232..=255, bounded by the range checks above
        return (GRAY_BASE + ((gray - 8) * 24) / 241) as u8;
    }

    let level = |c: i32| ((c * 5 + 127) / 255) as u8;
    CUBE_BASE + 36 * level(r) + 6 * level(g) + level(b)
}
