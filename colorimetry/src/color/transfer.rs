//! The sRGB transfer functions, exactly and as fast polynomial approximations.
//!
//! Naming follows the direction of the signal: `eo` is the electro-optical transfer, from encoded
//! (gamma-corrected) device values to linear light, `oe` is its inverse.
use crate::math::pow;

// Used Reference: IEC 61966-2-1, as summarized at
// <https://www.kernel.org/doc/html/v4.11/media/uapi/v4l/pixfmt-007.html>
//
// Validated in `colour_test_vectors`.
pub fn transfer_eo_srgb(val: f64) -> f64 {
    if val <= 0.04045 {
        val / 12.92
    } else {
        pow((val + 0.055) / 1.055, 2.4)
    }
}

// Used Reference: IEC 61966-2-1, inverse of `transfer_eo_srgb`.
//
// Validated in `colour_test_vectors`.
pub fn transfer_oe_srgb(val: f64) -> f64 {
    if val <= 0.0031308 {
        12.92 * val
    } else {
        1.055 * pow(val, 1.0 / 2.4) - 0.055
    }
}

/// A 4th order Taylor expansion of [`transfer_eo_srgb`] around 0.5.
///
/// Differs from the exact function by less than 2/255 for every 8-bit input, see
/// `fast_transfer_bound`. The linear term is folded into the constant, hence `val` and not `v1`.
#[allow(clippy::excessive_precision)]
pub fn transfer_eo_srgb_fast(val: f64) -> f64 {
    let v1 = val - 0.5;
    let v2 = v1 * v1;
    let v3 = v2 * v1;
    let v4 = v2 * v2;

    -0.248750514614486 + 0.925583310193438 * val + 1.16740237321695 * v2
        + 0.280457026598666 * v3
        - 0.0757991963780179 * v4
}

/// Piecewise 5th order Taylor expansions of [`transfer_oe_srgb`].
///
/// The fractional root is much harder to approximate near zero, so there are three pieces,
/// expanded around 0.6, 0.115 and 0.015 respectively.
#[allow(clippy::excessive_precision)]
pub fn transfer_oe_srgb_fast(val: f64) -> f64 {
    fn taylor(val: f64, center: f64, c: [f64; 6]) -> f64 {
        let v1 = val - center;
        let v2 = v1 * v1;
        let v3 = v2 * v1;
        let v4 = v2 * v2;
        let v5 = v3 * v2;
        c[0] + c[1] * val + c[2] * v2 + c[3] * v3 + c[4] * v4 + c[5] * v5
    }

    if val > 0.2 {
        #[rustfmt::skip]
        const C: [f64; 6] = [
            0.442430344268235, 0.592178981271708, -0.287864782562636,
            0.253214392068985, -0.272557158129811, 0.325554383321718,
        ];
        taylor(val, 0.6, C)
    } else if val > 0.03 {
        #[rustfmt::skip]
        const C: [f64; 6] = [
            0.194915592891669, 1.55227076330229, -3.93691860257828,
            18.0679839248761, -101.468750302746, 632.341487393927,
        ];
        taylor(val, 0.115, C)
    } else {
        // Clearly visible from the constants: the low end is highly nonlinear.
        #[rustfmt::skip]
        const C: [f64; 6] = [
            0.0519565234928877, 5.09316778537561, -99.0338180489702,
            3484.52322764895, -150028.083412663, 7168008.42971613,
        ];
        taylor(val, 0.015, C)
    }
}

#[test]
fn colour_test_vectors() {
    struct TestVector {
        name: &'static str,
        eotf: fn(f64) -> f64,
        oetf: fn(f64) -> f64,
        data: &'static [(f64, f64)],
    }

    // Keep accurate comments as to how each of these are derived.
    const VECTORS: &[TestVector] = &[TestVector {
        // # colour-science    0.4.6
        name: "sRGB",
        eotf: transfer_eo_srgb,
        oetf: transfer_oe_srgb,
        data: &[
            // b = colour.EOTFS['sRGB'](a)
            (0.0, 0.0),
            (1.0, 1.0),
            (0.5, 0.21404114048223255),
            (0.25, 0.050876088171556789),
            (0.75, 0.52252155396839206),
            (0.0031308, 0.00024232198142414861),
        ],
    }];

    for vector in VECTORS {
        for (a, b) in vector.data {
            let eotf_result = (vector.eotf)(*a);
            let oetf_result = (vector.oetf)(*b);
            assert!(
                (eotf_result - *b).abs() < 1e-9,
                "{} failed for eotf {}: expected {}, got {}",
                vector.name,
                a,
                b,
                eotf_result
            );
            assert!(
                (oetf_result - *a).abs() < 1e-9,
                "{} failed for oetf {}: expected {}, got {}",
                vector.name,
                b,
                a,
                oetf_result
            );
        }
    }
}

#[test]
fn fast_transfer_bound() {
    // Within 6 values of 8-bit depth summed over all three channels. The error of a color is the
    // sum of its channel errors, so the worst color is three times the worst channel.
    const EPS: f64 = 6.0 / 255.0;

    let worst = |exact: fn(f64) -> f64, fast: fn(f64) -> f64| {
        (0..=255u8)
            .map(|v| f64::from(v) / 255.0)
            .map(|v| (exact(v) - fast(v)).abs())
            .fold(0.0f64, f64::max)
    };

    let eo = worst(transfer_eo_srgb, transfer_eo_srgb_fast);
    let oe = worst(transfer_oe_srgb, transfer_oe_srgb_fast);
    assert!(3.0 * eo <= EPS, "eo approximation off by {}", eo);
    assert!(3.0 * oe <= EPS, "oe approximation off by {}", oe);
}

#[test]
fn inverse() {
    for v in (0..=255u8).map(|v| f64::from(v) / 255.0) {
        let back = transfer_oe_srgb(transfer_eo_srgb(v));
        assert!((back - v).abs() < 1e-12, "{} became {}", v, back);
    }
}
