//! Color differences.
//!
//! The perceptual metrics are evaluated on CIE L*a*b* under D65 in its conventional scale, with
//! lightness in `[0, 100]`, and report their result in ΔE units. The others are plain Euclidean
//! distances in the respective model and report in the unit of that model.
use crate::color::{Color, AB_RANGE, L_RANGE};
use crate::math::{abs, atan2, cos, exp, hypot, pow, sin, sq, sqrt, to_degrees, to_radians};

/// `25^7`, the chroma normalization of CIEDE2000.
const POW25_7: f64 = 6_103_515_625.0;

/// Weighting factors of CIE94 for graphic arts.
const CIE94_K1: f64 = 0.045;
const CIE94_K2: f64 = 0.015;

fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    sqrt(sq(a[0] - b[0]) + sq(a[1] - b[1]) + sq(a[2] - b[2]))
}

/// Lab with lightness in `[0, 100]` and chroma axes in `[-128, 128]`.
fn conventional_lab(color: Color) -> [f64; 3] {
    let [l, a, b] = color.to_lab();
    [l * L_RANGE, a * AB_RANGE, b * AB_RANGE]
}

/// CIE76, Euclidean distance of the two Lab coordinates.
pub(crate) fn cie76(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    euclidean(lab1, lab2)
}

/// CIE94 with the graphic arts weights, relative to the chroma of the first color.
pub(crate) fn cie94([l1, a1, b1]: [f64; 3], [l2, a2, b2]: [f64; 3]) -> f64 {
    let delta_l = l1 - l2;
    let c1 = hypot(a1, b1);
    let c2 = hypot(a2, b2);
    let delta_c = c1 - c2;
    // May turn marginally negative by cancellation.
    let delta_h2 = (sq(a1 - a2) + sq(b1 - b2) - sq(delta_c)).max(0.0);

    let sc = 1.0 + CIE94_K1 * c1;
    let sh = 1.0 + CIE94_K2 * c1;

    sqrt(sq(delta_l) + sq(delta_c / sc) + delta_h2 / sq(sh))
}

/// Hue angle of CIEDE2000 in degrees, within `[0, 360)`.
fn ciede2000_hue(b: f64, a: f64) -> f64 {
    if b == 0.0 && a == 0.0 {
        return 0.0;
    }

    let h = atan2(b, a);
    let h = if h < 0.0 { h + 2.0 * core::f64::consts::PI } else { h };
    to_degrees(h)
}

pub(crate) fn ciede2000(
    [l1, a1, b1]: [f64; 3],
    [l2, a2, b2]: [f64; 3],
    [kl, kc, kh]: [f64; 3],
) -> f64 {
    let c_mean = (hypot(a1, b1) + hypot(a2, b2)) / 2.0;
    let c_mean7 = pow(c_mean, 7.0);
    let g = 0.5 * (1.0 - sqrt(c_mean7 / (c_mean7 + POW25_7)));

    let ap1 = (1.0 + g) * a1;
    let ap2 = (1.0 + g) * a2;
    let cp1 = hypot(ap1, b1);
    let cp2 = hypot(ap2, b2);
    let hp1 = ciede2000_hue(b1, ap1);
    let hp2 = ciede2000_hue(b2, ap2);
    let cp_product = cp1 * cp2;

    let delta_l = l2 - l1;
    let delta_c = cp2 - cp1;
    let delta_hp = if cp_product == 0.0 {
        0.0
    } else {
        let dhp = hp2 - hp1;
        if dhp > 180.0 {
            dhp - 360.0
        } else if dhp < -180.0 {
            dhp + 360.0
        } else {
            dhp
        }
    };
    let delta_h = 2.0 * sqrt(cp_product) * sin(to_radians(delta_hp / 2.0));

    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (cp1 + cp2) / 2.0;
    let hp_mean = if cp_product == 0.0 {
        hp1 + hp2
    } else {
        let mean = (hp1 + hp2) / 2.0;
        if abs(hp1 - hp2) <= 180.0 {
            mean
        } else if hp1 + hp2 < 360.0 {
            mean + 180.0
        } else {
            mean - 180.0
        }
    };

    let t = 1.0 - 0.17 * cos(to_radians(hp_mean - 30.0))
        + 0.24 * cos(to_radians(2.0 * hp_mean))
        + 0.32 * cos(to_radians(3.0 * hp_mean + 6.0))
        - 0.2 * cos(to_radians(4.0 * hp_mean - 63.0));
    let delta_theta = 30.0 * exp(-sq((hp_mean - 275.0) / 25.0));
    let cp_mean7 = pow(cp_mean, 7.0);
    let rc = 2.0 * sqrt(cp_mean7 / (cp_mean7 + POW25_7));
    let sl = 1.0 + (0.015 * sq(l_mean - 50.0)) / sqrt(20.0 + sq(l_mean - 50.0));
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;
    let rt = -sin(to_radians(2.0 * delta_theta)) * rc;

    let dl = delta_l / (kl * sl);
    let dc = delta_c / (kc * sc);
    let dh = delta_h / (kh * sh);
    sqrt(sq(dl) + sq(dc) + sq(dh) + rt * dc * dh)
}

impl Color {
    /// Euclidean distance of the encoded channels.
    ///
    /// Cheap, but far from perceptually uniform.
    pub fn distance_rgb(self, other: Color) -> f64 {
        euclidean(self.to_array(), other.to_array())
    }

    /// Euclidean distance of the linear-light channels.
    pub fn distance_linear_rgb(self, other: Color) -> f64 {
        euclidean(self.to_linear_rgb(), other.to_linear_rgb())
    }

    /// The "redmean" distance, Euclidean on encoded channels weighted by the mean red intensity.
    ///
    /// An approximation of perceptual distance without leaving RGB. See
    /// <https://www.compuphase.com/cmetric.htm>.
    pub fn distance_riemersma(self, other: Color) -> f64 {
        let r_mean = (self.r + other.r) / 2.0;
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        sqrt((2.0 + r_mean) * sq(dr) + 4.0 * sq(dg) + (2.0 + (1.0 - r_mean)) * sq(db))
    }

    /// Euclidean distance in the normalized Lab coordinates of [`Color::to_lab`].
    pub fn distance_lab(self, other: Color) -> f64 {
        euclidean(self.to_lab(), other.to_lab())
    }

    /// Euclidean distance in the normalized Luv coordinates of [`Color::to_luv`].
    pub fn distance_luv(self, other: Color) -> f64 {
        euclidean(self.to_luv(), other.to_luv())
    }

    /// The CIE76 color difference, ΔE*ab.
    pub fn distance_cie76(self, other: Color) -> f64 {
        cie76(conventional_lab(self), conventional_lab(other))
    }

    /// The CIE94 color difference, ΔE*94, with graphic arts weights.
    ///
    /// The weights depend on the chroma of `self`, so the result is not symmetric in general.
    pub fn distance_cie94(self, other: Color) -> f64 {
        cie94(conventional_lab(self), conventional_lab(other))
    }

    /// The CIEDE2000 color difference, ΔE00.
    pub fn distance_ciede2000(self, other: Color) -> f64 {
        self.distance_ciede2000_klch(other, 1.0, 1.0, 1.0)
    }

    /// CIEDE2000 with parametric weighting factors for lightness, chroma and hue.
    pub fn distance_ciede2000_klch(self, other: Color, kl: f64, kc: f64, kh: f64) -> f64 {
        ciede2000(conventional_lab(self), conventional_lab(other), [kl, kc, kh])
    }
}

#[test]
fn identity() {
    for color in [Color::BLACK, Color::WHITE, Color::new(0.2, 0.7, 0.1)] {
        assert_eq!(color.distance_cie76(color), 0.0);
        assert_eq!(color.distance_cie94(color), 0.0);
        assert_eq!(color.distance_ciede2000(color), 0.0);
        assert_eq!(color.distance_riemersma(color), 0.0);
    }
}

#[test]
fn symmetric() {
    let pairs = [
        (Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)),
        (Color::new(0.5, 0.5, 0.5), Color::new(0.0, 1.0, 0.0)),
        (Color::new(0.1, 0.1, 0.3), Color::new(0.4, 0.4, 0.4)),
    ];

    for (a, b) in pairs {
        assert!((a.distance_cie76(b) - b.distance_cie76(a)).abs() < 1e-9);
        assert!((a.distance_ciede2000(b) - b.distance_ciede2000(a)).abs() < 1e-9);
        assert!((a.distance_riemersma(b) - b.distance_riemersma(a)).abs() < 1e-12);
    }
}

#[test]
fn sharma_pairs() {
    // Selected pairs of the CIEDE2000 test data by Sharma, Wu and Dalal.
    let pairs = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, -1.0, 2.0], [50.0, 0.0, 0.0], 2.3669),
        ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([22.7233, 20.0904, -46.694], [23.0331, 14.973, -42.5619], 2.0373),
    ];

    for (lab1, lab2, expected) in pairs {
        let d = ciede2000(lab1, lab2, [1.0, 1.0, 1.0]);
        assert!((d - expected).abs() < 1e-4, "{lab1:?} {lab2:?}: {d} != {expected}");
    }
}
