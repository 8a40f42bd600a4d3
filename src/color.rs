//! Colors for bands, highlights and labels.

/// An RGB color as `(r, g, b)`.
pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const YELLOW: Rgb = (255, 255, 0);
pub const BLUE: Rgb = (0, 0, 255);
pub const RED: Rgb = (255, 0, 0);

const NAMED: &[(&str, Rgb)] = &[
    ("black", BLACK),
    ("white", (255, 255, 255)),
    ("red", RED),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("gold", (255, 203, 0)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
];

/// Parse a color string into an RGB tuple.
///
/// Accepts named colors (case-insensitive), `#RGB` and `#RRGGBB`.
/// Surrounding whitespace is ignored.
///
/// ```rust
/// use sortvis::color::parse_color;
///
/// assert_eq!(parse_color("Yellow"), Some((255, 255, 0)));
/// assert_eq!(parse_color("#1a1a2e"), Some((26, 26, 46)));
/// assert_eq!(parse_color("#f00"), Some((255, 0, 0)));
/// assert_eq!(parse_color("chartreuse-ish"), None);
/// ```
pub fn parse_color(s: &str) -> Option<Rgb> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, rgb)| rgb),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Color at `index` of a linear gradient spanning `count` slots.
///
/// Each channel moves from `start` towards `end` by `trunc((end - start) * index / count)`,
/// so slot 0 is exactly `start` and the last slot stops one step short of `end`.
pub fn gradient(start: Rgb, end: Rgb, index: usize, count: usize) -> Rgb {
    if count == 0 {
        return start;
    }
    let t = index as f32 / count as f32;
    let lerp = |a: u8, b: u8| {
        let offset = ((b as f32 - a as f32) * t).trunc();
        (a as f32 + offset).clamp(0.0, 255.0) as u8
    };
    (lerp(start.0, end.0), lerp(start.1, end.1), lerp(start.2, end.2))
}

/// CSS `rgb(r,g,b)` string for canvas fill styles.
pub fn css(color: Rgb) -> String {
    let (r, g, b) = color;
    format!("rgb({r},{g},{b})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_any_case() {
        assert_eq!(parse_color("black"), Some(BLACK));
        assert_eq!(parse_color("YELLOW"), Some(YELLOW));
        assert_eq!(parse_color("Grey"), Some((128, 128, 128)));
        assert_eq!(parse_color("  blue\n"), Some(BLUE));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#000000"), Some(BLACK));
        assert_eq!(parse_color("#FF0000"), Some(RED));
        assert_eq!(parse_color("#abc"), Some((170, 187, 204)));
        assert_eq!(parse_color(" #ffff00 "), Some(YELLOW));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#"), None);
        assert_eq!(parse_color("#zzz"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("notacolor"), None);
    }

    #[test]
    fn gradient_endpoints() {
        assert_eq!(gradient(BLUE, RED, 0, 200), BLUE);
        // 199 * 255 / 200 = 253.725
        assert_eq!(gradient(BLUE, RED, 199, 200), (253, 0, 2));
    }

    #[test]
    fn gradient_blue_to_red_is_complementary() {
        for i in 0..200 {
            let (r, g, b) = gradient(BLUE, RED, i, 200);
            assert_eq!(g, 0);
            assert_eq!(r as u16 + b as u16, 255, "slot {i}");
        }
    }

    #[test]
    fn gradient_empty_range() {
        assert_eq!(gradient(RED, BLUE, 3, 0), RED);
    }

    #[test]
    fn css_string() {
        assert_eq!(css((26, 26, 46)), "rgb(26,26,46)");
    }
}
