//! HSV and HSL, cylindrical rearrangements of the encoded (non-linear) RGB cube.
//!
//! Hue is in degrees. We use 0 instead of an undefined hue for gray.
use crate::math::{abs, fmod, normalize_degrees};

/// The hue of a chromatic color given its largest and smallest channel.
fn hue([r, g, b]: [f64; 3], max: f64, min: f64) -> f64 {
    let chroma = max - min;

    let sector = if max == r {
        fmod((g - b) / chroma, 6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    normalize_degrees(sector * 60.0)
}

pub(crate) fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let v = r.max(g).max(b);

    let s = if v != 0.0 { (v - min) / v } else { 0.0 };
    let h = if min != v { hue(rgb, v, min) } else { 0.0 };

    [h, s, v]
}

pub(crate) fn hsv_to_rgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    let hp = normalize_degrees(h) / 60.0;
    let c = v * s;
    let x = c * (1.0 - abs(fmod(hp, 2.0) - 1.0));
    let m = v - c;

    let [r, g, b] = match hp as u8 {
        0 => [c, x, 0.0],
        1 => [x, c, 0.0],
        2 => [0.0, c, x],
        3 => [0.0, x, c],
        4 => [x, 0.0, c],
        _ => [c, 0.0, x],
    };

    [m + r, m + g, m + b]
}

pub(crate) fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let l = (max + min) / 2.0;

    if min == max {
        return [0.0, 0.0, l];
    }

    let s = if l < 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    [hue(rgb, max, min), s, l]
}

pub(crate) fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t2 = 2.0 * l - t1;
    let h = normalize_degrees(h) / 360.0;

    let channel = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if 6.0 * t < 1.0 {
            t2 + (t1 - t2) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            t1
        } else if 3.0 * t < 2.0 {
            t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
        } else {
            t2
        }
    };

    [
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    ]
}

#[test]
fn gray_has_no_hue() {
    assert_eq!(rgb_to_hsv([0.3, 0.3, 0.3]), [0.0, 0.0, 0.3]);
    assert_eq!(rgb_to_hsl([0.3, 0.3, 0.3]), [0.0, 0.0, 0.3]);
    assert_eq!(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
}

#[test]
fn full_turn_is_red() {
    assert_eq!(hsv_to_rgb([360.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);

    let [r, g, b] = hsl_to_rgb([360.0, 1.0, 0.5]);
    assert!((r - 1.0).abs() < 1e-12);
    assert!(g.abs() < 1e-12);
    assert!(b.abs() < 1e-12);
}

#[test]
fn magenta_sector() {
    // Hue from the red channel wraps negative before normalization.
    let [h, s, v] = rgb_to_hsv([1.0, 0.0, 0.5]);
    assert!((h - 330.0).abs() < 1e-12);
    assert_eq!(s, 1.0);
    assert_eq!(v, 1.0);

    let [r, g, b] = hsv_to_rgb([h, s, v]);
    assert!((r - 1.0).abs() < 1e-12);
    assert!(g.abs() < 1e-12);
    assert!((b - 0.5).abs() < 1e-12);
}
