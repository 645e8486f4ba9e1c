//! Volume and carat estimation from physical dimensions
//!
//! Dimensions are entered in millimeters; volumes come out in cm3. All
//! estimators clamp at zero so negative measurements never produce a
//! negative quantity downstream.

/// Empirical round-brilliant coefficient: carats = 0.0061 x diameter^2 x depth
const DIAMOND_COEFFICIENT: f64 = 0.0061;

/// Volume of a rectangular box, sides in mm, result in cm3
pub fn box_volume_cm3(length_mm: f64, width_mm: f64, height_mm: f64) -> f64 {
    let volume = (length_mm / 10.0) * (width_mm / 10.0) * (height_mm / 10.0);
    volume.max(0.0)
}

/// Volume of a cylinder, diameter and height in mm, result in cm3
pub fn cylinder_volume_cm3(diameter_mm: f64, height_mm: f64) -> f64 {
    let radius_cm = diameter_mm / 20.0;
    let volume = std::f64::consts::PI * radius_cm * radius_cm * (height_mm / 10.0);
    volume.max(0.0)
}

/// Estimated carat weight of a round-brilliant diamond from its girdle
/// diameter and depth, both in mm
pub fn diamond_carats(diameter_mm: f64, depth_mm: f64) -> f64 {
    (DIAMOND_COEFFICIENT * diameter_mm * diameter_mm * depth_mm).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_ten_mm_cube_is_one_cm3() {
        assert!((box_volume_cm3(10.0, 10.0, 10.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_volume() {
        // d=10mm, h=10mm: pi * 0.5^2 * 1 = 0.7854 cm3
        let expected = std::f64::consts::PI * 0.25;
        assert!((cylinder_volume_cm3(10.0, 10.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_diamond_carats_reference_stone() {
        // 6.5mm x 4.0mm round brilliant is about a one-carat stone
        let carats = diamond_carats(6.5, 4.0);
        assert!((carats - 1.0309).abs() < 1e-3);
    }

    #[test]
    fn test_zero_dimensions_yield_zero() {
        assert_eq!(box_volume_cm3(0.0, 10.0, 10.0), 0.0);
        assert_eq!(cylinder_volume_cm3(0.0, 10.0), 0.0);
        assert_eq!(diamond_carats(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        assert_eq!(box_volume_cm3(-10.0, 10.0, 10.0), 0.0);
        assert_eq!(cylinder_volume_cm3(10.0, -5.0), 0.0);
        assert_eq!(diamond_carats(6.5, -4.0), 0.0);
    }

    #[test]
    fn test_two_negatives_still_box_positive() {
        // (-1)(-1)(+1) is mathematically positive; clamp only floors at zero
        let volume = box_volume_cm3(-10.0, -10.0, 10.0);
        assert!((volume - 1.0).abs() < 1e-12);
    }
}
