//! Fixed-point pixels and their conversion from and to [`Color`].
//!
//! All pixel types are plain old data, so a buffer of bytes can be reinterpreted as a slice of
//! pixels with `bytemuck` before converting them one by one.
use crate::color::Color;

/// A pixel that can be read as alpha-premultiplied RGBA with 16 bits per channel.
pub trait Pixel {
    /// The channels `[r, g, b, a]`, with the color channels premultiplied by alpha.
    fn to_rgba16_premultiplied(&self) -> [u16; 4];
}

/// 8-bit RGBA with alpha-premultiplied color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 8-bit RGBA with straight, not premultiplied, color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Nrgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 16-bit RGBA with alpha-premultiplied color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// 16-bit RGBA with straight, not premultiplied, color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Nrgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// An opaque 8-bit gray value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Gray8(pub u8);

/// An opaque 16-bit gray value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Gray16(pub u16);

/// Extend 8 bits to 16 bits, mapping 0xff to 0xffff.
fn widen(v: u8) -> u32 {
    u32::from(v) * 0x101
}

impl Pixel for Rgba8 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a].map(|c| widen(c) as u16)
    }
}

impl Pixel for Nrgba8 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        let a = u32::from(self.a);
        let [r, g, b] = [self.r, self.g, self.b].map(|c| (widen(c) * a / 0xff) as u16);
        [r, g, b, widen(self.a) as u16]
    }
}

impl Pixel for Rgba16 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Pixel for Nrgba16 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        let a = u32::from(self.a);
        let [r, g, b] = [self.r, self.g, self.b].map(|c| (u32::from(c) * a / 0xffff) as u16);
        [r, g, b, self.a]
    }
}

impl Pixel for Gray8 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        let y = widen(self.0) as u16;
        [y, y, y, u16::MAX]
    }
}

impl Pixel for Gray16 {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        [self.0, self.0, self.0, u16::MAX]
    }
}

/// A color is an opaque pixel, with channels rounded to 16 bits.
impl Pixel for Color {
    fn to_rgba16_premultiplied(&self) -> [u16; 4] {
        self.to_rgba16()
    }
}

impl Color {
    /// Recover the color of a pixel by undoing the alpha premultiplication.
    ///
    /// The flag reports whether the color could be recovered. A fully transparent pixel carries
    /// no color information, for it the result is black and the flag `false`.
    ///
    /// ```
    /// use image_colorimetry::{Color, Nrgba8};
    /// let (color, ok) = Color::from_pixel(&Nrgba8 { r: 123, g: 45, b: 67, a: 128 });
    /// assert!(ok);
    /// assert_eq!(color.to_rgb8(), [123, 45, 67]);
    /// ```
    pub fn from_pixel<P: Pixel + ?Sized>(pixel: &P) -> (Color, bool) {
        let [r, g, b, a] = pixel.to_rgba16_premultiplied().map(u32::from);
        if a == 0 {
            return (Color::BLACK, false);
        }

        let straight = |c: u32| f64::from(c * 0xffff / a) / 65535.0;
        (Color::new(straight(r), straight(g), straight(b)), true)
    }
}

#[test]
fn from_bytes() {
    let bytes: [u8; 8] = [255, 0, 0, 255, 0, 64, 0, 128];
    let pixels: &[Nrgba8] = bytemuck::cast_slice(&bytes);
    let colors = pixels.iter().map(|p| Color::from_pixel(p).0.to_rgb8());
    assert!(colors.eq([[255, 0, 0], [0, 64, 0]]));
}
