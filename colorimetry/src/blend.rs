//! Interpolation between two colors within a color model.
use crate::color::{Color, ACHROMATIC};
use crate::math::{fmod, normalize_degrees};

/// The model in which [`Color::blend`] interpolates.
///
/// | Model       | Coordinates         | Hue interpolation |
/// |-------------|---------------------|-------------------|
/// | `Rgb`       | encoded sRGB        | none              |
/// | `LinearRgb` | linear-light sRGB   | none              |
/// | `Hsl`       | hue, saturation, lightness | shorter arc |
/// | `Hsv`       | hue, saturation, value     | shorter arc |
/// | `Lab`       | CIE L\*a\*b\*       | none              |
/// | `Luv`       | CIE L\*u\*v\*       | none              |
/// | `Hcl`       | CIE LCh(ab)         | shorter arc       |
/// | `LuvLch`    | CIE LCh(uv)         | shorter arc       |
///
/// The perceptual models are relative to D65. Blending in `Hcl` clamps the result into the
/// gamut; all other models may produce out-of-gamut colors when the endpoints are out of gamut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Model {
    Rgb,
    LinearRgb,
    Hsl,
    Hsv,
    Lab,
    Luv,
    Hcl,
    LuvLch,
}

/// A point of a color model, separating a circular hue from the linear components.
#[derive(Clone, Copy, Debug)]
enum Coordinates {
    Cartesian([f64; 3]),
    Cylindrical {
        hue: f64,
        chroma: f64,
        lightness: f64,
    },
}

/// Interpolate between two angles in degrees along the shorter arc of the circle.
///
/// The result is within `[0, 360)` and takes the values `a0` and `a1` (modulo 360) for `t` of 0
/// and 1 respectively. When the angles are exactly opposite, the arc in the negative direction is
/// taken.
///
/// ```
/// use image_colorimetry::interpolate_angle;
/// assert_eq!(interpolate_angle(0.0, 90.0, 0.25), 22.5);
/// assert_eq!(interpolate_angle(0.0, 270.0, 0.25), 337.5);
/// ```
pub fn interpolate_angle(a0: f64, a1: f64, t: f64) -> f64 {
    // The signed shortest difference, within [-180, 180).
    let delta = fmod(fmod(a1 - a0, 360.0) + 540.0, 360.0) - 180.0;
    normalize_degrees(a0 + t * delta)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Model {
    /// The chroma at or below which a color has no meaningful hue.
    fn achromatic(self, chroma: f64) -> bool {
        match self {
            Model::Hcl | Model::LuvLch => chroma <= ACHROMATIC,
            _ => chroma == 0.0,
        }
    }

    fn split(self, color: Color) -> Coordinates {
        use Coordinates::*;
        match self {
            Model::Rgb => Cartesian(color.to_array()),
            Model::LinearRgb => Cartesian(color.to_linear_rgb()),
            Model::Lab => Cartesian(color.to_lab()),
            Model::Luv => Cartesian(color.to_luv()),
            Model::Hsl => {
                let [hue, chroma, lightness] = color.to_hsl();
                Cylindrical { hue, chroma, lightness }
            }
            Model::Hsv => {
                let [hue, chroma, lightness] = color.to_hsv();
                Cylindrical { hue, chroma, lightness }
            }
            Model::Hcl => {
                let [hue, chroma, lightness] = color.to_hcl();
                Cylindrical { hue, chroma, lightness }
            }
            Model::LuvLch => {
                let [lightness, chroma, hue] = color.to_luv_lch();
                Cylindrical { hue, chroma, lightness }
            }
        }
    }

    fn join(self, coordinates: Coordinates) -> Color {
        match coordinates {
            Coordinates::Cartesian([x, y, z]) => match self {
                Model::LinearRgb => Color::from_linear_rgb(x, y, z),
                Model::Lab => Color::from_lab(x, y, z),
                Model::Luv => Color::from_luv(x, y, z),
                _ => Color::new(x, y, z),
            },
            Coordinates::Cylindrical {
                hue,
                chroma,
                lightness,
            } => match self {
                Model::Hsl => Color::from_hsl(hue, chroma, lightness),
                Model::Hsv => Color::from_hsv(hue, chroma, lightness),
                Model::Hcl => Color::from_hcl(hue, chroma, lightness).clamped(),
                _ => Color::from_luv_lch(lightness, chroma, hue),
            },
        }
    }

    fn interpolate(self, from: Coordinates, to: Coordinates, t: f64) -> Coordinates {
        use Coordinates::*;
        match (from, to) {
            (
                Cylindrical {
                    hue: h1,
                    chroma: c1,
                    lightness: l1,
                },
                Cylindrical {
                    hue: h2,
                    chroma: c2,
                    lightness: l2,
                },
            ) => {
                // An achromatic endpoint takes the hue of the other one.
                let (h1, h2) = match (self.achromatic(c1), self.achromatic(c2)) {
                    (true, false) => (h2, h2),
                    (false, true) => (h1, h1),
                    _ => (h1, h2),
                };

                Cylindrical {
                    hue: interpolate_angle(h1, h2, t),
                    chroma: lerp(c1, c2, t),
                    lightness: lerp(l1, l2, t),
                }
            }
            (Cartesian(a), Cartesian(b)) => {
                Cartesian([lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)])
            }
            // Both endpoints are always split by the same model.
            (from, _) => from,
        }
    }
}

impl Color {
    /// Interpolate from `self` towards `other` in the given model.
    ///
    /// A `t` of 0 yields `self` and a `t` of 1 yields `other`, up to the rounding of the round
    /// trip through the model. Values outside `[0, 1]` extrapolate.
    ///
    /// In the models with a hue, the hue follows the shorter arc. When exactly one of the colors
    /// is achromatic, its hue is meaningless and the hue of the other color is used throughout.
    pub fn blend(self, other: Color, t: f64, model: Model) -> Color {
        let from = model.split(self);
        let to = model.split(other);
        model.join(model.interpolate(from, to, t))
    }

    pub fn blend_rgb(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Rgb)
    }

    pub fn blend_linear_rgb(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::LinearRgb)
    }

    pub fn blend_hsl(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Hsl)
    }

    pub fn blend_hsv(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Hsv)
    }

    pub fn blend_lab(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Lab)
    }

    pub fn blend_luv(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Luv)
    }

    /// Blend in CIE LCh(ab), clamping the result into the gamut.
    pub fn blend_hcl(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::Hcl)
    }

    pub fn blend_luv_lch(self, other: Color, t: f64) -> Color {
        self.blend(other, t, Model::LuvLch)
    }
}

#[cfg(test)]
const ANGLES: &[(f64, f64, f64, f64)] = &[
    (0.0, 1.0, 0.0, 0.0),
    (0.0, 1.0, 0.25, 0.25),
    (0.0, 1.0, 0.5, 0.5),
    (0.0, 1.0, 1.0, 1.0),
    (0.0, 90.0, 0.0, 0.0),
    (0.0, 90.0, 0.25, 22.5),
    (0.0, 90.0, 0.5, 45.0),
    (0.0, 90.0, 1.0, 90.0),
    (0.0, 178.0, 0.0, 0.0),
    (0.0, 178.0, 0.25, 44.5),
    (0.0, 178.0, 0.5, 89.0),
    (0.0, 178.0, 1.0, 178.0),
    (0.0, 182.0, 0.0, 0.0),
    (0.0, 182.0, 0.25, 315.5),
    (0.0, 182.0, 0.5, 271.0),
    (0.0, 182.0, 1.0, 182.0),
    (0.0, 270.0, 0.0, 0.0),
    (0.0, 270.0, 0.25, 337.5),
    (0.0, 270.0, 0.5, 315.0),
    (0.0, 270.0, 1.0, 270.0),
    (0.0, 359.0, 0.0, 0.0),
    (0.0, 359.0, 0.25, 359.75),
    (0.0, 359.0, 0.5, 359.5),
    (0.0, 359.0, 1.0, 359.0),
];

#[cfg(test)]
fn assert_relative(value: f64, expected: f64) {
    if expected.abs() > 1.0 / 256.0 {
        assert!(
            ((value - expected) / expected).abs() < 1e-15,
            "{value} != {expected}"
        );
    }
}

#[test]
fn angles_forward() {
    for &(a0, a1, t, expected) in ANGLES {
        assert_relative(interpolate_angle(a0, a1, t), expected);
    }
}

#[test]
fn angles_backward() {
    for &(a0, a1, t, expected) in ANGLES {
        assert_relative(interpolate_angle(a1, a0, 1.0 - t), expected);
    }
}

#[test]
fn opposite_angles() {
    assert_eq!(interpolate_angle(0.0, 180.0, 0.5), 270.0);
    assert_eq!(interpolate_angle(90.0, 270.0, 0.5), 0.0);
}

#[test]
fn achromatic_takes_hue() {
    let gray = Color::new(0.5, 0.5, 0.5);
    let red = Color::new(1.0, 0.0, 0.0);

    for model in [Model::Hsv, Model::Hsl] {
        let [hue, ..] = match model {
            Model::Hsv => gray.blend(red, 0.5, model).to_hsv(),
            _ => gray.blend(red, 0.5, model).to_hsl(),
        };
        assert!(hue < 1e-9 || hue > 360.0 - 1e-9, "{model:?}: {hue}");
    }

    let hcl_red = red.to_hcl()[0];
    let halfway = gray.blend_hcl(red, 0.5).to_hcl()[0];
    assert!((halfway - hcl_red).abs() < 1.0, "{halfway} != {hcl_red}");
}
