//! Conversions, differences and blends of single colors.
//!
//! The central type is [`Color`], an sRGB color with `f64` channels. It converts from and to
//! linear RGB, CIE XYZ and xyY, CIE L\*a\*b\* and L\*u\*v\* with their polar LCh forms, as well
//! as HSL and HSV. Perceptual models are computed relative to an explicit [`Whitepoint`], D65 if
//! none is given.
//!
//! # Usage
//!
//! Converting between models goes through a `Color`:
//!
//! ```
//! use image_colorimetry::Color;
//!
//! let red = Color::from_hex("#ff0000")?;
//! let [l, a, b] = red.to_lab();
//! assert!((l - 0.532390).abs() < 1e-4);
//!
//! // CIE LCh(ab), in the order hue, chroma, lightness.
//! let [h, c, l] = red.to_hcl();
//! let back = Color::from_hcl(h, c, l);
//! assert!(back.almost_eq_rgb(red));
//! # let _ = (a, b);
//! # use image_colorimetry::HexError;
//! # Ok::<(), HexError>(())
//! ```
//!
//! Comparing and mixing two colors:
//!
//! ```
//! use image_colorimetry::{Color, Model};
//!
//! let navy = Color::from_hex("#1a1a46")?;
//! let gray = Color::from_hex("#666666")?;
//!
//! // Perceptual difference in ΔE units.
//! let delta = navy.distance_ciede2000(gray);
//! assert!(delta > 1.0);
//!
//! // The ends of a blend are the colors themselves, in every model.
//! assert_eq!(navy.blend(gray, 0.0, Model::Hcl).to_hex(), "#1a1a46");
//! assert_eq!(navy.blend(gray, 1.0, Model::Hcl).to_hex(), "#666666");
//! # use image_colorimetry::HexError;
//! # Ok::<(), HexError>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

/// Interpolation in color models.
mod blend;
/// The color value and all of its models.
pub mod color;
mod color_matrix;
/// Color difference metrics.
mod distance;
mod hex;
mod math;
pub mod pixel;

#[cfg(test)]
mod tests;

pub use self::blend::{interpolate_angle, Model};
pub use self::color::{Color, Whitepoint};
pub use self::hex::{HexError, HexErrorKind};
pub use self::pixel::{Gray16, Gray8, Nrgba16, Nrgba8, Pixel, Rgba16, Rgba8};
