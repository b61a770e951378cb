mod hsx;
mod lab;
mod luv;
mod polar;
pub mod transfer;
mod xyz;

pub(crate) use self::lab::{AB_RANGE, L_RANGE};
pub(crate) use self::polar::ACHROMATIC;

use crate::math::{abs, clamp01};

/// A color in the sRGB space, as three encoded channel intensities.
///
/// The channels are nominally within `[0, 1]` but this is not enforced. Out-of-gamut values are
/// permitted as they occur as intermediate results of conversions from wider models, and they
/// survive a round-trip through every other model. Use [`Color::clamped`] to map into the gamut.
///
/// All other color models are expressed in terms of this type. It offers a pair of constructor
/// and extraction methods for each of them, for instance [`Color::from_lab`] and
/// [`Color::to_lab`], where the model coordinates are plain `[f64; 3]` arrays in the order of the
/// model's name. Conversions that depend on a reference white take it as an explicit argument in
/// their `_white_ref` form, the other forms fix it to [`Whitepoint::D65`].
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

/// The whitepoint/standard illuminant.
///
/// | Illuminant | X       | Y       | Z       |
/// |------------|---------|---------|---------|
/// | A          | 1.09850 | 1.00000 | 0.35585 |
/// | B          | 0.99072 | 1.00000 | 0.85223 |
/// | C          | 0.98074 | 1.00000 | 1.18232 |
/// | D50        | 0.96422 | 1.00000 | 0.82521 |
/// | D55        | 0.95682 | 1.00000 | 0.92149 |
/// | D65        | 0.95047 | 1.00000 | 1.08883 |
/// | D75        | 0.94972 | 1.00000 | 1.22638 |
/// | E          | 1.00000 | 1.00000 | 1.00000 |
/// | F2         | 0.99186 | 1.00000 | 0.67393 |
/// | F7         | 0.95041 | 1.00000 | 1.08747 |
/// | F11        | 1.00962 | 1.00000 | 0.64350 |
///
/// No chromatic adaptation is performed when a whitepoint other than D65 is used. The sRGB
/// primaries stay those defined under D65 and only the perceptual model is normalized against
/// the other white.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Whitepoint {
    A,
    B,
    C,
    D50,
    D55,
    #[default]
    D65,
    D75,
    E,
    F2,
    F7,
    F11,
    /// A white given by its tristimulus values `[X, Y, Z]`.
    Custom([f64; 3]),
}

impl Whitepoint {
    /// The tristimulus values, normalized to a luminance `Y` of 1 for the named illuminants.
    pub fn to_xyz(self) -> [f64; 3] {
        use Whitepoint::*;
        match self {
            A => [1.09850, 1.00000, 0.35585],
            B => [0.99072, 1.00000, 0.85223],
            C => [0.98074, 1.00000, 1.18232],
            D50 => [0.96422, 1.00000, 0.82521],
            D55 => [0.95682, 1.00000, 0.92149],
            D65 => [0.95047, 1.00000, 1.08883],
            D75 => [0.94972, 1.00000, 1.22638],
            E => [1.00000, 1.00000, 1.00000],
            F2 => [0.99186, 1.00000, 0.67393],
            F7 => [0.95041, 1.00000, 1.08747],
            F11 => [1.00962, 1.00000, 0.64350],
            Custom(xyz) => xyz,
        }
    }
}

/// One step of 8-bit depth, the tolerance of [`Color::almost_eq_rgb`] per channel.
pub const DELTA: f64 = 1.0 / 255.0;

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    pub(crate) const fn from_array([r, g, b]: [f64; 3]) -> Self {
        Color { r, g, b }
    }

    pub(crate) const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Check that all channels are within the gamut, `[0, 1]`.
    pub fn is_valid(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// A copy with each channel clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Color::from_array(self.to_array().map(clamp01))
    }

    /// Check that each channel differs by no more than `tolerance`.
    pub fn almost_eq(self, other: Color, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| abs(a - b) <= tolerance)
    }

    /// Check that the colors are indistinguishable at 8-bit depth.
    ///
    /// That is, the channel differences sum up to less than three steps of 8-bit depth.
    pub fn almost_eq_rgb(self, other: Color) -> bool {
        let diff: f64 = self
            .to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| abs(a - b))
            .sum();
        diff < 3.0 * DELTA
    }

    /// A color from 8-bit channels.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        let unorm = |c: u8| f64::from(c) / 255.0;
        Color::new(unorm(r), unorm(g), unorm(b))
    }

    /// The channels quantized to 8 bits, rounding to the nearest value.
    ///
    /// Channels outside the gamut saturate.
    pub fn to_rgb8(self) -> [u8; 3] {
        self.to_array().map(|c| (c * 255.0 + 0.5) as u8)
    }

    /// The channels quantized to 16 bits with an opaque alpha channel appended.
    pub fn to_rgba16(self) -> [u16; 4] {
        let [r, g, b] = self.to_array().map(|c| (c * 65535.0 + 0.5) as u16);
        [r, g, b, u16::MAX]
    }

    /// Decode the transfer function, the result are linear-light RGB intensities.
    pub fn to_linear_rgb(self) -> [f64; 3] {
        self.to_array().map(transfer::transfer_eo_srgb)
    }

    /// A color from linear-light RGB intensities.
    pub fn from_linear_rgb(r: f64, g: f64, b: f64) -> Self {
        Color::from_array([r, g, b].map(transfer::transfer_oe_srgb))
    }

    /// Approximately decode the transfer function.
    ///
    /// The result is within 6/255 summed over all channels of [`Color::to_linear_rgb`] for every
    /// color of 8-bit depth.
    pub fn to_linear_rgb_fast(self) -> [f64; 3] {
        self.to_array().map(transfer::transfer_eo_srgb_fast)
    }

    /// Approximately a color from linear-light RGB intensities.
    ///
    /// The result is within 6/255 summed over all channels of [`Color::from_linear_rgb`] for every
    /// input of 8-bit depth.
    pub fn from_linear_rgb_fast(r: f64, g: f64, b: f64) -> Self {
        Color::from_array([r, g, b].map(transfer::transfer_oe_srgb_fast))
    }

    /// The CIE 1931 XYZ tristimulus values, `[X, Y, Z]`.
    pub fn to_xyz(self) -> [f64; 3] {
        xyz::linear_rgb_to_xyz(self.to_linear_rgb())
    }

    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let [r, g, b] = xyz::xyz_to_linear_rgb([x, y, z]);
        Color::from_linear_rgb(r, g, b)
    }

    /// Chromaticity and luminance, `[x, y, Y]`.
    ///
    /// Black reports the chromaticity of D65.
    pub fn to_xyy(self) -> [f64; 3] {
        self.to_xyy_white_ref(Whitepoint::D65)
    }

    /// Chromaticity and luminance, `[x, y, Y]`, with black reporting the chromaticity of `white`.
    pub fn to_xyy_white_ref(self, white: Whitepoint) -> [f64; 3] {
        xyz::xyz_to_xyy(self.to_xyz(), white)
    }

    pub fn from_xyy(x: f64, y: f64, luminance: f64) -> Self {
        let [x, y, z] = xyz::xyy_to_xyz([x, y, luminance]);
        Color::from_xyz(x, y, z)
    }

    /// CIE L*a*b* relative to D65, `[L, a, b]`.
    ///
    /// Lightness is scaled to `[0, 1]`, the chroma axes are divided by 128.
    pub fn to_lab(self) -> [f64; 3] {
        self.to_lab_white_ref(Whitepoint::D65)
    }

    pub fn to_lab_white_ref(self, white: Whitepoint) -> [f64; 3] {
        lab::lab_from_xyz(self.to_xyz(), white)
    }

    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        Color::from_lab_white_ref(l, a, b, Whitepoint::D65)
    }

    pub fn from_lab_white_ref(l: f64, a: f64, b: f64, white: Whitepoint) -> Self {
        let [x, y, z] = lab::lab_to_xyz([l, a, b], white);
        Color::from_xyz(x, y, z)
    }

    /// CIE L*u*v* relative to D65, `[L, u, v]`, each divided by 100.
    pub fn to_luv(self) -> [f64; 3] {
        self.to_luv_white_ref(Whitepoint::D65)
    }

    pub fn to_luv_white_ref(self, white: Whitepoint) -> [f64; 3] {
        luv::luv_from_xyz(self.to_xyz(), white)
    }

    pub fn from_luv(l: f64, u: f64, v: f64) -> Self {
        Color::from_luv_white_ref(l, u, v, Whitepoint::D65)
    }

    pub fn from_luv_white_ref(l: f64, u: f64, v: f64, white: Whitepoint) -> Self {
        let [x, y, z] = luv::luv_to_xyz([l, u, v], white);
        Color::from_xyz(x, y, z)
    }

    /// CIE LCh(ab) relative to D65 in the order `[h, c, l]`, hue in degrees.
    ///
    /// The polar form of [`Color::to_lab`].
    pub fn to_hcl(self) -> [f64; 3] {
        self.to_hcl_white_ref(Whitepoint::D65)
    }

    pub fn to_hcl_white_ref(self, white: Whitepoint) -> [f64; 3] {
        let [l, a, b] = self.to_lab_white_ref(white);
        let [c, h] = polar::to_polar([a, b]);
        [h, c, l]
    }

    pub fn from_hcl(h: f64, c: f64, l: f64) -> Self {
        Color::from_hcl_white_ref(h, c, l, Whitepoint::D65)
    }

    pub fn from_hcl_white_ref(h: f64, c: f64, l: f64, white: Whitepoint) -> Self {
        let [a, b] = polar::from_polar([c, h]);
        Color::from_lab_white_ref(l, a, b, white)
    }

    /// CIE LCh(uv) relative to D65, `[l, c, h]`, hue in degrees.
    ///
    /// The polar form of [`Color::to_luv`].
    pub fn to_luv_lch(self) -> [f64; 3] {
        self.to_luv_lch_white_ref(Whitepoint::D65)
    }

    pub fn to_luv_lch_white_ref(self, white: Whitepoint) -> [f64; 3] {
        let [l, u, v] = self.to_luv_white_ref(white);
        let [c, h] = polar::to_polar([u, v]);
        [l, c, h]
    }

    pub fn from_luv_lch(l: f64, c: f64, h: f64) -> Self {
        Color::from_luv_lch_white_ref(l, c, h, Whitepoint::D65)
    }

    pub fn from_luv_lch_white_ref(l: f64, c: f64, h: f64, white: Whitepoint) -> Self {
        let [u, v] = polar::from_polar([c, h]);
        Color::from_luv_white_ref(l, u, v, white)
    }

    /// Hue, saturation, value, `[h, s, v]`.
    pub fn to_hsv(self) -> [f64; 3] {
        hsx::rgb_to_hsv(self.to_array())
    }

    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Color::from_array(hsx::hsv_to_rgb([h, s, v]))
    }

    /// Hue, saturation, lightness, `[h, s, l]`.
    pub fn to_hsl(self) -> [f64; 3] {
        hsx::rgb_to_hsl(self.to_array())
    }

    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Color::from_array(hsx::hsl_to_rgb([h, s, l]))
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        bytemuck::cast(rgb)
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> Self {
        bytemuck::cast(color)
    }
}

#[test]
fn clamped() {
    let color = Color::new(1.1, -0.1, 0.5);
    assert!(!color.is_valid());
    assert_eq!(color.clamped(), Color::new(1.0, 0.0, 0.5));
    assert!(color.clamped().is_valid());
}

#[test]
fn quantization() {
    let color = Color::new(0.5, 1.0, 0.0);
    assert_eq!(color.to_rgb8(), [128, 255, 0]);
    assert_eq!(color.to_rgba16(), [32768, 65535, 0, 65535]);
    assert_eq!(Color::new(1.5, -0.5, 0.0).to_rgb8(), [255, 0, 0]);
    assert!(Color::from_rgb8([128, 255, 0]).almost_eq_rgb(color));
}

#[test]
fn array_cast() {
    let color = Color::from([0.25, 0.5, 0.75]);
    assert_eq!(color, Color::new(0.25, 0.5, 0.75));
    assert_eq!(<[f64; 3]>::from(color), [0.25, 0.5, 0.75]);
}
