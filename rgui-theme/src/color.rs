//! Conversions between packed `0xRRGGBBAA` style values and [Color].

use vello::peniko::Color;

/// Unpack a `0xRRGGBBAA` style value.
pub fn unpack(value: u32) -> Color {
    let [r, g, b, a] = value.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Pack a color into a `0xRRGGBBAA` style value.
pub fn pack(color: Color) -> u32 {
    let rgba = color.to_rgba8();
    u32::from_be_bytes([rgba.r, rgba.g, rgba.b, rgba.a])
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` string into a packed value.
/// Six digit colors are opaque.
pub fn parse_hex(hex: &str) -> Result<u32, String> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{hex}'"));
    }
    let parsed = u32::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex color '{hex}'"));
    match digits.len() {
        6 => parsed.map(|rgb| (rgb << 8) | 0xff),
        8 => parsed,
        _ => Err("Hex color must be 6 or 8 characters".to_string()),
    }
}
