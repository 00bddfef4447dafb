//! Sky coordinates to scene space.
//!
//! The scene is right-handed and centered on the origin (Earth / Sol), with
//! +Y toward the north celestial pole:
//!
//! ```text
//! x = d · cos(dec) · cos(ra)
//! y = d · sin(dec)
//! z = d · cos(dec) · sin(ra)
//! ```

use nalgebra::Point3;
use qtty::{Radian, Radians};

use crate::models::{parse_dec, parse_ra, StarRecord};

/// Right ascension in radians; 0 when the string is malformed.
pub fn ra_to_radians(ra: &str) -> Radians {
    match parse_ra(ra) {
        Some(hours) => hours.to::<Radian>(),
        None => {
            log::warn!("Malformed right ascension {:?}; using 0 rad", ra);
            Radians::new(0.0)
        }
    }
}

/// Declination in radians; 0 when the string is malformed.
pub fn dec_to_radians(dec: &str) -> Radians {
    match parse_dec(dec) {
        Some(degrees) => degrees.to::<Radian>(),
        None => {
            log::warn!("Malformed declination {:?}; using 0 rad", dec);
            Radians::new(0.0)
        }
    }
}

/// Cartesian position for angles and a distance in light-years.
pub fn spherical_to_cartesian(ra: Radians, dec: Radians, distance_ly: f64) -> Point3<f64> {
    let (ra_sin, ra_cos) = ra.sin_cos();
    let (dec_sin, dec_cos) = dec.sin_cos();
    Point3::new(
        distance_ly * dec_cos * ra_cos,
        distance_ly * dec_sin,
        distance_ly * dec_cos * ra_sin,
    )
}

/// Scene position of a catalog record.
///
/// Returns `None` for records without coordinates (`N/A` or blank), which are
/// left out of the scene rather than placed at the origin.
pub fn project_record(record: &StarRecord) -> Option<Point3<f64>> {
    if !record.has_coordinates() {
        log::debug!("Skipping {:?}: no sky coordinates", record.name);
        return None;
    }
    Some(spherical_to_cartesian(
        ra_to_radians(&record.ra),
        dec_to_radians(&record.dec),
        record.distance_ly,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarComponent;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn record(ra: &str, dec: &str, distance_ly: f64) -> StarRecord {
        StarRecord {
            name: "Probe".to_string(),
            distance_ly,
            distance_pc: distance_ly / 3.26,
            ra: ra.to_string(),
            dec: dec.to_string(),
            components: vec![StarComponent::new("Probe", "M0")],
        }
    }

    #[test]
    fn test_ra_to_radians() {
        assert_relative_eq!(ra_to_radians("12h00m00s").value(), PI, epsilon = 1e-12);
        assert_relative_eq!(ra_to_radians("06h00m00s").value(), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(ra_to_radians("garbage").value(), 0.0);
    }

    #[test]
    fn test_dec_to_radians() {
        assert_relative_eq!(dec_to_radians("+90°00′00″").value(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(dec_to_radians("−45°00′00″").value(), -PI / 4.0, epsilon = 1e-12);
        assert_eq!(dec_to_radians("garbage").value(), 0.0);
    }

    #[test]
    fn test_axes() {
        let on_x = project_record(&record("00h00m00s", "+00°00′00″", 10.0)).unwrap();
        assert_relative_eq!(on_x, Point3::new(10.0, 0.0, 0.0), epsilon = 1e-9);

        let on_z = project_record(&record("06h00m00s", "+00°00′00″", 10.0)).unwrap();
        assert_relative_eq!(on_z, Point3::new(0.0, 0.0, 10.0), epsilon = 1e-9);

        let north = project_record(&record("03h00m00s", "+90°00′00″", 4.0)).unwrap();
        assert_relative_eq!(north, Point3::new(0.0, 4.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_distance_is_preserved() {
        let p = project_record(&record("14h39m36s", "−60°50′02″", 4.37)).unwrap();
        assert_relative_eq!(p.coords.norm(), 4.37, epsilon = 1e-9);
        assert!(p.y < 0.0);
    }

    #[test]
    fn test_malformed_axis_substitutes_zero() {
        // bad dec -> dec = 0, star lands on the equatorial plane
        let p = project_record(&record("06h00m00s", "bogus", 5.0)).unwrap();
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn test_missing_coordinates_are_skipped() {
        assert!(project_record(&record("N/A", "+10°00′00″", 5.0)).is_none());
        assert!(project_record(&record("01h00m00s", "", 5.0)).is_none());
    }
}
