//! Decimal rounding for reported figures.

/// Round half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_places() {
        assert!((round_to(2040.004, 2) - 2040.0).abs() < f64::EPSILON);
        assert!((round_to(0.178_000_000_03, 6) - 0.178).abs() < f64::EPSILON);
        assert!((round_to(16_800.0 * 1.3 * 0.3, 2) - 6552.0).abs() < f64::EPSILON);
        assert!((round_to(0.9 - 0.05 - 0.05 - 0.1, 2) - 0.7).abs() < f64::EPSILON);
    }
}
