//! Pixel and coverage helpers

/// Integer part of `x`, rounded toward negative infinity
pub fn ipart(x: f64) -> i64 {
    x.floor() as i64
}

/// Fractional part of `x`, in [0,1)
pub fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// One minus the fractional part of `x`, in (0,1]
pub fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

/// Convert a coverage in [0,1] to an opacity in [0,255]
pub fn coverage_to_opa(v: f64) -> u8 {
    (v * 255.0).round().max(0.0).min(255.0) as u8
}

/// Scale `alpha` by `opa / 255`, truncating
pub fn mul_opa(alpha: u8, opa: u8) -> u8 {
    (u32::from(alpha) * u32::from(opa) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_of_negative_values() {
        assert_eq!(ipart(-0.25), -1);
        assert_eq!(fpart(-0.25), 0.75);
        assert_eq!(rfpart(2.0), 1.0);
    }

    #[test]
    fn opacity() {
        assert_eq!(coverage_to_opa(1.0), 255);
        assert_eq!(coverage_to_opa(0.5), 128);
        assert_eq!(mul_opa(255, 128), 128);
        assert_eq!(mul_opa(200, 255), 200);
        assert_eq!(mul_opa(200, 0), 0);
    }
}
