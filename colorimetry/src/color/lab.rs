//! CIE L*a*b* relative to a reference white.
//!
//! Lightness is stored as `L* / 100` and the chroma axes as `a* / 128` and `b* / 128`, so that
//! all three stay in the vicinity of the unit range just like the RGB channels.
use super::Whitepoint;
use crate::math::{cbrt, cub};

/// Conventional upper bound of `L*`.
pub(crate) const L_RANGE: f64 = 100.0;
/// Conventional magnitude of the `a*` and `b*` axes.
pub(crate) const AB_RANGE: f64 = 128.0;

// (6/29)^3, the threshold between the cube root and the linear segment.
const EPSILON: f64 = 216.0 / 24389.0;

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        cbrt(t)
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        cub(t)
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

pub(crate) fn lab_from_xyz([x, y, z]: [f64; 3], whitepoint: Whitepoint) -> [f64; 3] {
    let [xw, yw, zw] = whitepoint.to_xyz();
    let fy = lab_f(y / yw);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (lab_f(x / xw) - fy);
    let b = 200.0 * (fy - lab_f(z / zw));

    [l / L_RANGE, a / AB_RANGE, b / AB_RANGE]
}

// Used Reference: <http://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions>
pub(crate) fn lab_to_xyz([l, a, b]: [f64; 3], whitepoint: Whitepoint) -> [f64; 3] {
    let [xw, yw, zw] = whitepoint.to_xyz();
    let fy = (l * L_RANGE + 16.0) / 116.0;
    let fx = fy + a * AB_RANGE / 500.0;
    let fz = fy - b * AB_RANGE / 200.0;

    [xw * lab_f_inv(fx), yw * lab_f_inv(fy), zw * lab_f_inv(fz)]
}

#[test]
fn white_is_neutral() {
    let xyz = Whitepoint::D50.to_xyz();
    let [l, a, b] = lab_from_xyz(xyz, Whitepoint::D50);
    assert!((l - 1.0).abs() < 1e-12);
    assert!(a.abs() < 1e-12);
    assert!(b.abs() < 1e-12);
}

#[test]
fn inverse_through_both_segments() {
    // The second sample lies in the linear segment of every component.
    for xyz in [[0.4, 0.3, 0.2], [0.001, 0.002, 0.003], [0.95, 1.0, 1.09]] {
        let back = lab_to_xyz(lab_from_xyz(xyz, Whitepoint::D65), Whitepoint::D65);
        for (a, b) in xyz.iter().zip(back) {
            assert!((a - b).abs() < 1e-12, "{:?} became {:?}", xyz, back);
        }
    }
}
