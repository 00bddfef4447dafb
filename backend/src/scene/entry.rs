//! Per-star scene primitives.

use nalgebra::{Point3, UnitQuaternion};

use crate::models::{spectral_color, SpectralClass, StarRecord};

pub const STAR_RADIUS: f64 = 0.15;
pub const GLOW_RADIUS: f64 = 0.25;
pub const GLOW_OPACITY: f64 = 0.3;
pub const BASE_CIRCLE_RADIUS: f64 = 0.12;
/// Base circles sit just above the grid plane.
pub const BASE_CIRCLE_HEIGHT: f64 = 0.01;

/// A sphere-like primitive centered on the star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    pub radius: f64,
    pub opacity: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub visible: bool,
}

/// Vertical drop line from the star to the y = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stalk {
    pub foot: Point3<f64>,
    pub top: Point3<f64>,
    pub visible: bool,
}

/// Marker where a stalk meets the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCircle {
    pub center: Point3<f64>,
    pub radius: f64,
    pub visible: bool,
}

/// Everything drawn for one catalog star.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStarEntry {
    /// Index into the loaded catalog
    pub record: usize,
    pub position: Point3<f64>,
    pub distance_ly: f64,
    pub spectral_class: Option<SpectralClass>,
    pub color: u32,
    pub sphere: Shell,
    pub glow: Shell,
    pub label: Label,
    /// Present only for stars off the y = 0 plane
    pub stalk: Option<Stalk>,
    pub base: Option<BaseCircle>,
}

/// Label text for a star name.
pub fn format_star_name(name: &str) -> String {
    name.to_uppercase()
}

impl SceneStarEntry {
    /// Build the primitives for `record` at its projected `position`.
    ///
    /// Everything starts hidden; the first visibility pass decides.
    pub fn new(record_index: usize, record: &StarRecord, position: Point3<f64>) -> Self {
        let spectral_type = record
            .primary()
            .map(|c| c.spectral_type.as_str())
            .unwrap_or_default();

        let (stalk, base) = if position.y != 0.0 {
            (
                Some(Stalk {
                    foot: Point3::new(position.x, 0.0, position.z),
                    top: position,
                    visible: false,
                }),
                Some(BaseCircle {
                    center: Point3::new(position.x, BASE_CIRCLE_HEIGHT, position.z),
                    radius: BASE_CIRCLE_RADIUS,
                    visible: false,
                }),
            )
        } else {
            (None, None)
        };

        Self {
            record: record_index,
            position,
            distance_ly: record.distance_ly,
            spectral_class: record.spectral_class(),
            color: spectral_color(spectral_type),
            sphere: Shell {
                radius: STAR_RADIUS,
                opacity: 1.0,
                visible: false,
            },
            glow: Shell {
                radius: GLOW_RADIUS,
                opacity: GLOW_OPACITY,
                visible: false,
            },
            label: Label {
                text: format_star_name(&record.name),
                position,
                orientation: UnitQuaternion::identity(),
                visible: false,
            },
            stalk,
            base,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.sphere.visible
    }

    /// Apply visibility to every primitive.
    ///
    /// Returns the number of primitives touched.
    pub(crate) fn apply_visibility(&mut self, shown: bool, label: bool, stalk: bool) -> usize {
        self.sphere.visible = shown;
        self.glow.visible = shown;
        self.label.visible = label;
        let mut touched = 3;
        if let Some(s) = self.stalk.as_mut() {
            s.visible = stalk;
            touched += 1;
        }
        if let Some(b) = self.base.as_mut() {
            b.visible = stalk;
            touched += 1;
        }
        touched
    }

    pub(crate) fn set_stalk_visible(&mut self, visible: bool) {
        if let Some(s) = self.stalk.as_mut() {
            s.visible = visible;
        }
        if let Some(b) = self.base.as_mut() {
            b.visible = visible;
        }
    }

    /// Ray/sphere hit distance along a normalized ray, if any.
    pub fn intersect_ray(&self, origin: &Point3<f64>, direction: &nalgebra::Vector3<f64>) -> Option<f64> {
        let oc = origin - self.position;
        let b = oc.dot(direction);
        let c = oc.norm_squared() - self.sphere.radius * self.sphere.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        [-b - sq, -b + sq].into_iter().find(|t| *t >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarComponent;
    use nalgebra::Vector3;

    fn record(name: &str, spectral_type: &str) -> StarRecord {
        StarRecord {
            name: name.to_string(),
            distance_ly: 4.37,
            distance_pc: 1.34,
            ra: "14h39m36s".to_string(),
            dec: "−60°50′02″".to_string(),
            components: vec![StarComponent::new(name, spectral_type)],
        }
    }

    #[test]
    fn test_entry_off_plane_has_stalk() {
        let entry = SceneStarEntry::new(0, &record("Alpha Centauri A", "G2V"), Point3::new(1.0, -2.0, 3.0));
        assert_eq!(entry.label.text, "ALPHA CENTAURI A");
        assert_eq!(entry.color, 0xffff33);
        assert_eq!(entry.spectral_class, Some(SpectralClass::G));

        let stalk = entry.stalk.unwrap();
        assert_eq!(stalk.foot, Point3::new(1.0, 0.0, 3.0));
        assert_eq!(entry.base.unwrap().center.y, BASE_CIRCLE_HEIGHT);
        assert!(!entry.is_visible());
    }

    #[test]
    fn test_entry_on_plane_has_no_stalk() {
        let entry = SceneStarEntry::new(0, &record("Plane", "M0"), Point3::new(1.0, 0.0, 3.0));
        assert!(entry.stalk.is_none());
        assert!(entry.base.is_none());
    }

    #[test]
    fn test_unknown_type_uses_class_a_color() {
        let entry = SceneStarEntry::new(0, &record("Mystery", "Unknown"), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(entry.spectral_class, None);
        assert_eq!(entry.color, SpectralClass::A.color());
    }

    #[test]
    fn test_ray_intersection() {
        let entry = SceneStarEntry::new(0, &record("Target", "K0"), Point3::new(0.0, 0.0, -10.0));
        let origin = Point3::origin();
        let hit = entry.intersect_ray(&origin, &-Vector3::z()).unwrap();
        assert!((hit - (10.0 - STAR_RADIUS)).abs() < 1e-9);
        assert!(entry.intersect_ray(&origin, &Vector3::z()).is_none());
        assert!(entry.intersect_ray(&origin, &Vector3::x()).is_none());
    }
}
