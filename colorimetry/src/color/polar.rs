//! Polar forms of the two chroma axes of a Lab-like model.
use crate::math::{atan2, cos, hypot, normalize_degrees, sin, to_degrees, to_radians};

/// At or below this chroma the hue is numerically meaningless and reported as 0.
///
/// Neutral colors keep a residual chroma of up to about 2.5e-4 from rounding in the XYZ matrix,
/// while one 8-bit step away from a gray is at least 8e-4.
pub(crate) const ACHROMATIC: f64 = 5e-4;

/// Chroma and hue in degrees, `hypot(a, b)` and `atan2(b, a)`.
pub(crate) fn to_polar([a, b]: [f64; 2]) -> [f64; 2] {
    let chroma = hypot(a, b);

    let hue = if chroma > ACHROMATIC {
        normalize_degrees(to_degrees(atan2(b, a)))
    } else {
        0.0
    };

    [chroma, hue]
}

pub(crate) fn from_polar([chroma, hue]: [f64; 2]) -> [f64; 2] {
    let h = to_radians(hue);
    [chroma * cos(h), chroma * sin(h)]
}

#[test]
fn quadrants() {
    let [c, h] = to_polar([0.0, -2.0]);
    assert!((c - 2.0).abs() < 1e-12);
    assert!((h - 270.0).abs() < 1e-12);

    let [c, h] = to_polar([-1.0, 1.0]);
    assert!((c - 2f64.sqrt()).abs() < 1e-12);
    assert!((h - 135.0).abs() < 1e-12);

    assert_eq!(to_polar([0.0, 0.0]), [0.0, 0.0]);
    assert_eq!(to_polar([0.00005, 0.00002])[1], 0.0);
    assert_eq!(to_polar([-0.0002, -0.0003])[1], 0.0);
    assert!(to_polar([0.0, 0.001])[1] > 0.0);
}

#[test]
fn inverse() {
    let [a, b] = from_polar(to_polar([-0.3, 0.7]));
    assert!((a + 0.3).abs() < 1e-12);
    assert!((b - 0.7).abs() < 1e-12);
}
