//! Linear sRGB to CIE XYZ, and the xyY chromaticity form of the latter.
use super::Whitepoint;
use crate::color_matrix::RowMatrix;
use crate::math::abs;

/// Linear sRGB primaries (Bt.709) under D65 to CIE 1931 XYZ.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SRGB_TO_XYZ: RowMatrix = RowMatrix::new([
    0.41239079926595948, 0.35758433938387796, 0.18048078840183429,
    0.21263900587151036, 0.71516867876775593, 0.072192315360733715,
    0.019330818715591851, 0.11919477979462599, 0.95053215224966058,
]);

/// The inverse of [`SRGB_TO_XYZ`].
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_SRGB: RowMatrix = RowMatrix::new([
    3.2409699419045214, -1.5373831775700935, -0.49861076029300328,
    -0.96924363628087983, 1.8759675015077207, 0.041555057407175613,
    0.055630079696993609, -0.20397695888897657, 1.0569715142428786,
]);

pub(crate) fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    SRGB_TO_XYZ.mul_vec(rgb)
}

pub(crate) fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    XYZ_TO_SRGB.mul_vec(xyz)
}

/// Split luminance from chromaticity.
///
/// Black has no chromaticity; we report that of the reference white instead, as recommended by
/// Bruce Lindbloom.
pub(crate) fn xyz_to_xyy([x, y, z]: [f64; 3], whitepoint: Whitepoint) -> [f64; 3] {
    let n = x + y + z;

    if abs(n) < 1e-14 {
        let [wx, wy, wz] = whitepoint.to_xyz();
        let wn = wx + wy + wz;
        [wx / wn, wy / wn, y]
    } else {
        [x / n, y / n, y]
    }
}

pub(crate) fn xyy_to_xyz([x, y, luminance]: [f64; 3]) -> [f64; 3] {
    if abs(y) < 1e-14 {
        [0.0, luminance, 0.0]
    } else {
        let scale = luminance / y;
        [scale * x, luminance, scale * (1.0 - x - y)]
    }
}

/// The RGB to XYZ matrix of given primary chromaticities, scaled such that RGB white maps to the
/// whitepoint.
///
/// This is done with the 'wrong' van Kries transform, where the CIE XYZ are scaled to match the
/// whitepoint individually. This is in accordance to the specification for sRGB.
#[cfg(test)]
fn primaries_to_xyz(xy: [[f64; 2]; 3], white: [f64; 3]) -> RowMatrix {
    use crate::color_matrix::ColMatrix;

    // A column of CIE XYZ intensities for that primary.
    let xyz = |[x, y]: [f64; 2]| [x / y, 1.0, (1.0 - x - y) / y];
    let columns = xy.map(xyz);

    // Virtually, N = [xyz_r | xyz_g | xyz_b]
    // As the unweighted conversion matrix for:
    //  XYZ = N · RGB
    let n1 = ColMatrix(columns).inv();
    // s is the weights that give the whitepoint when converted to xyz.
    let s = n1.mul_vec(white);

    RowMatrix::with_weighted_columns(columns, s)
}

#[test]
fn matrix_pair_is_inverse() {
    let inverse = SRGB_TO_XYZ.inv();
    for (a, b) in inverse.into_inner().iter().zip(XYZ_TO_SRGB.into_inner()) {
        assert!((a - b).abs() < 1e-9, "{:?} vs {:?}", inverse, XYZ_TO_SRGB);
    }
}

#[test]
fn matrix_matches_primaries() {
    // Bt.709 primaries with the D65 chromaticity (0.3127, 0.3290).
    let xy = [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]];
    let white = [0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290];
    let derived = primaries_to_xyz(xy, white);

    for (a, b) in derived.into_inner().iter().zip(SRGB_TO_XYZ.into_inner()) {
        assert!((a - b).abs() < 1e-9, "{:?} vs {:?}", derived, SRGB_TO_XYZ);
    }
}

#[test]
fn black_chromaticity() {
    let [x, y, luminance] = xyz_to_xyy([0.0; 3], Whitepoint::D65);
    assert!((x - 0.312727).abs() < 1e-6);
    assert!((y - 0.329023).abs() < 1e-6);
    assert_eq!(luminance, 0.0);
    assert_eq!(xyy_to_xyz([x, 0.0, 0.5]), [0.0, 0.5, 0.0]);
}
