//! Equivalents of the `f64` float methods that are suitable on `no_std`.

#[inline]
pub(crate) fn pow(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}

#[inline]
pub(crate) fn cbrt(val: f64) -> f64 {
    libm::cbrt(val)
}

#[inline]
pub(crate) fn sqrt(val: f64) -> f64 {
    libm::sqrt(val)
}

#[inline]
pub(crate) fn abs(val: f64) -> f64 {
    libm::fabs(val)
}

#[inline]
pub(crate) fn fmod(val: f64, modulus: f64) -> f64 {
    libm::fmod(val, modulus)
}

#[inline]
pub(crate) fn hypot(a: f64, b: f64) -> f64 {
    libm::hypot(a, b)
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[inline]
pub(crate) fn sin(val: f64) -> f64 {
    libm::sin(val)
}

#[inline]
pub(crate) fn cos(val: f64) -> f64 {
    libm::cos(val)
}

#[inline]
pub(crate) fn exp(val: f64) -> f64 {
    libm::exp(val)
}

pub(crate) fn sq(val: f64) -> f64 {
    val * val
}

pub(crate) fn cub(val: f64) -> f64 {
    val * val * val
}

pub(crate) fn clamp01(val: f64) -> f64 {
    val.clamp(0.0, 1.0)
}

pub(crate) fn to_radians(degrees: f64) -> f64 {
    degrees * (core::f64::consts::PI / 180.0)
}

pub(crate) fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / core::f64::consts::PI)
}

/// Wrap an angle in degrees onto `[0, 360)`.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = fmod(degrees, 360.0);
    if wrapped >= 0.0 {
        return wrapped;
    }

    // Tiny negative angles would round up onto 360 itself.
    let wrapped = wrapped + 360.0;
    if wrapped < 360.0 {
        wrapped
    } else {
        0.0
    }
}

#[test]
fn unit_clamp_and_wrap() {
    assert_eq!([-0.5, 0.25, 1.5].map(clamp01), [0.0, 0.25, 1.0]);
    assert_eq!(normalize_degrees(-40.0), 320.0);
    assert_eq!(normalize_degrees(725.0), 5.0);
    assert_eq!(normalize_degrees(-1e-20), 0.0);
}
