//! 2D vector helpers over `nalgebra::Vector2`

use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

pub fn add(a: &Vec2, b: &Vec2) -> Vec2 {
    a + b
}

pub fn scale(v: &Vec2, k: f64) -> Vec2 {
    v * k
}

pub fn magnitude(v: &Vec2) -> f64 {
    v.norm()
}

/// Compass bearing of `v` in degrees, clockwise from +y, in [0, 360)
///
/// `x` is the east component and goes first into `atan2`.
pub fn bearing_degrees(v: &Vec2) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }
    let angle = v.x.atan2(v.y).to_degrees();
    if angle >= 0.0 {
        return angle;
    }
    // A tiny negative angle can round up to exactly 360
    let wrapped = angle + 360.0;
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
