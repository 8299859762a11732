/// Stable `#rrggbb` color for a label such as a population name.
///
/// Hashes UTF-16 code units with `h = c + ((h << 5) - h)` in wrapping 32-bit
/// arithmetic, then takes the low three bytes as red, green and blue.
pub fn label_color(label: &str) -> String {
    let hash = label.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });

    (0..3).fold(String::from("#"), |mut color, channel| {
        let value = (hash >> (channel * 8)) & 0xff;
        color.push_str(&format!("{:02x}", value));
        color
    })
}
