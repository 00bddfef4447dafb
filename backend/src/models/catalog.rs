//! Normalized star catalog records.
//!
//! These are the types written by the catalog builder and read by the scene
//! engine. Field order on [`StarRecord`] is the on-disk field order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry: a single star or a multi-star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Display label
    pub name: String,
    /// Distance from the origin in light-years
    pub distance_ly: f64,
    /// Distance in parsecs (informational)
    pub distance_pc: f64,
    /// Right ascension, `HHhMMmSSs`
    pub ra: String,
    /// Declination, `±DD°MM′SS″`
    pub dec: String,
    /// System members, primary first
    pub components: Vec<StarComponent>,
}

impl StarRecord {
    /// The first component, which drives color and filtering.
    pub fn primary(&self) -> Option<&StarComponent> {
        self.components.first()
    }

    /// Spectral class of the primary component.
    pub fn spectral_class(&self) -> Option<SpectralClass> {
        self.primary()
            .and_then(|c| SpectralClass::from_spectral_type(&c.spectral_type))
    }

    /// Whether both sky coordinates are present.
    ///
    /// A literal `N/A` or an empty string means the record has no position
    /// and must not be placed in the scene.
    pub fn has_coordinates(&self) -> bool {
        let present = |s: &str| {
            let s = s.trim();
            !s.is_empty() && !s.eq_ignore_ascii_case("n/a")
        };
        present(&self.ra) && present(&self.dec)
    }
}

/// A member of a star system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarComponent {
    pub name: String,
    pub spectral_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luminosity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

impl StarComponent {
    /// Component carrying only a name and spectral type.
    pub fn new(name: impl Into<String>, spectral_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spectral_type: spectral_type.into(),
            ..Default::default()
        }
    }
}

/// Single-letter spectral classification used for color and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
    D,
}

impl SpectralClass {
    /// All classes in hot-to-cool order, white dwarfs last.
    pub const ALL: [SpectralClass; 11] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
        SpectralClass::L,
        SpectralClass::T,
        SpectralClass::Y,
        SpectralClass::D,
    ];

    /// Class of a spectral type string such as `"G2V"` or `"m3.5"`.
    ///
    /// Only the first non-blank character counts. Returns `None` for empty
    /// strings and unrecognized letters (e.g. `"Unknown"`).
    pub fn from_spectral_type(spectral_type: &str) -> Option<Self> {
        let first = spectral_type.trim().chars().next()?;
        Self::from_letter(first)
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            'L' => Some(Self::L),
            'T' => Some(Self::T),
            'Y' => Some(Self::Y),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::O => 'O',
            Self::B => 'B',
            Self::A => 'A',
            Self::F => 'F',
            Self::G => 'G',
            Self::K => 'K',
            Self::M => 'M',
            Self::L => 'L',
            Self::T => 'T',
            Self::Y => 'Y',
            Self::D => 'D',
        }
    }

    /// Position in [`SpectralClass::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display color as `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            Self::O => 0x3399ff,
            Self::B => 0x66ccff,
            Self::A => 0xffffff,
            Self::F => 0xffff99,
            Self::G => 0xffff33,
            Self::K => 0xff9900,
            Self::M => 0xff3300,
            Self::L => 0x996633,
            Self::T => 0x9933cc,
            Self::Y => 0x330033,
            Self::D => 0xffffff,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Display color for an arbitrary spectral type string.
///
/// Unrecognized types render with class A's color.
pub fn spectral_color(spectral_type: &str) -> u32 {
    SpectralClass::from_spectral_type(spectral_type)
        .unwrap_or(SpectralClass::A)
        .color()
}
