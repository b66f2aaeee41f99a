//! Plain RGB colors and the distances the matchers rank them by
pub use rgb::RGB8;

/// Opaque 8-bit RGB color
pub type Color = RGB8;

/// Euclidean distance in RGB space, not normalized
pub fn distance(a: Color, b: Color) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Unweighted mean of the three channels, in `[0, 255]`
pub fn brightness(color: Color) -> f64 {
    (color.r as f64 + color.g as f64 + color.b as f64) / 3.0
}

/// Channel-wise mean of two colors, truncated towards zero
pub fn midpoint(a: Color, b: Color) -> Color {
    let mean = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Color::new(mean(a.r, b.r), mean(a.g, b.g), mean(a.b, b.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(distance(black, black), 0.0);
        assert!((distance(black, white) - 255.0 * 3f64.sqrt()).abs() < 1e-9);
        assert_eq!(distance(Color::new(3, 0, 0), Color::new(0, 4, 0)), 5.0);
    }

    #[test]
    fn test_brightness() {
        assert_eq!(brightness(Color::new(255, 255, 255)), 255.0);
        assert_eq!(brightness(Color::new(192, 192, 192)), 192.0);
        assert!((brightness(Color::new(128, 0, 0)) - 128.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_truncates() {
        let a = Color::new(255, 0, 1);
        let b = Color::new(0, 0, 0);
        assert_eq!(midpoint(a, b), Color::new(127, 0, 0));
        assert_eq!(midpoint(a, b), midpoint(b, a));
    }
}
