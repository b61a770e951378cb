//! CIE L*u*v* relative to a reference white.
//!
//! All three components are stored as the conventional value divided by 100.
use super::Whitepoint;
use crate::math::{cbrt, cub};

// (6/29)^3 and (29/3)^3, the linear segment of the lightness curve.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// The u'v' chromaticity, zero where it is undefined.
fn xyz_to_uv([x, y, z]: [f64; 3]) -> [f64; 2] {
    let denom = x + 15.0 * y + 3.0 * z;

    if denom == 0.0 {
        [0.0, 0.0]
    } else {
        [4.0 * x / denom, 9.0 * y / denom]
    }
}

pub(crate) fn luv_from_xyz(xyz: [f64; 3], whitepoint: Whitepoint) -> [f64; 3] {
    let white = whitepoint.to_xyz();
    let yr = xyz[1] / white[1];

    let l = if yr <= EPSILON {
        yr * KAPPA / 100.0
    } else {
        1.16 * cbrt(yr) - 0.16
    };

    let [ubis, vbis] = xyz_to_uv(xyz);
    let [un, vn] = xyz_to_uv(white);

    [l, 13.0 * l * (ubis - un), 13.0 * l * (vbis - vn)]
}

pub(crate) fn luv_to_xyz([l, u, v]: [f64; 3], whitepoint: Whitepoint) -> [f64; 3] {
    let white = whitepoint.to_xyz();

    // Lightness of 0.08 is precisely where the linear segment ends.
    let y = if l <= 0.08 {
        white[1] * l * 100.0 / KAPPA
    } else {
        white[1] * cub((l + 0.16) / 1.16)
    };

    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let [un, vn] = xyz_to_uv(white);
    let ubis = u / (13.0 * l) + un;
    let vbis = v / (13.0 * l) + vn;

    let x = y * 9.0 * ubis / (4.0 * vbis);
    let z = y * (12.0 - 3.0 * ubis - 20.0 * vbis) / (4.0 * vbis);
    [x, y, z]
}

#[test]
fn black_has_no_chroma() {
    assert_eq!(luv_from_xyz([0.0; 3], Whitepoint::D65), [0.0; 3]);
    assert_eq!(luv_to_xyz([0.0; 3], Whitepoint::D65), [0.0; 3]);
}

#[test]
fn inverse() {
    for xyz in [[0.4, 0.3, 0.2], [0.002, 0.003, 0.004], [0.95047, 1.0, 1.08883]] {
        let back = luv_to_xyz(luv_from_xyz(xyz, Whitepoint::D50), Whitepoint::D50);
        for (a, b) in xyz.iter().zip(back) {
            assert!((a - b).abs() < 1e-12, "{:?} became {:?}", xyz, back);
        }
    }
}
