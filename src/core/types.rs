//! Core data types for fire solutions

use nalgebra::Vector2;
use serde::{Deserialize, Serialize, Serializer};

/// Map position in meters relative to the map origin (+x east, +y north)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Bearing, range and elevation from an origin to a target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiringSolution {
    /// Bearing in degrees clockwise from north, one decimal place, [0, 360)
    #[serde(rename = "angle", serialize_with = "serialize_one_decimal")]
    pub bearing_deg: f64,
    /// Range in meters
    pub range: u32,
    /// Elevation in mils; absent outside the range table envelope
    pub mils: Option<i32>,
    pub too_close: bool,
    pub too_far: bool,
}

impl FiringSolution {
    /// True when the target lies inside the weapon envelope
    pub fn in_envelope(&self) -> bool {
        !self.too_close && !self.too_far
    }

    /// Bearing as displayed to the user
    pub fn angle_text(&self) -> String {
        format!("{:.1}", self.bearing_deg)
    }
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.1}", value))
}
