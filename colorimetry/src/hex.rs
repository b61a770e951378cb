//! The hexadecimal notation of colors, as used by HTML and CSS.
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::color::Color;

/// Error that occurs when a string is not a hexadecimal color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexError {
    kind: HexErrorKind,
}

/// The reason a string was not accepted as a hexadecimal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HexErrorKind {
    /// The number of digits is not 3, 4, 6 or 8, or a character is not a hexadecimal digit.
    InvalidFormat,
}

impl HexError {
    pub fn kind(&self) -> HexErrorKind {
        self.kind
    }
}

impl From<HexErrorKind> for HexError {
    fn from(kind: HexErrorKind) -> Self {
        HexError { kind }
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HexErrorKind::InvalidFormat => f.write_str("invalid hexadecimal color format"),
        }
    }
}

impl core::error::Error for HexError {}

impl Color {
    /// Parse a color from its hexadecimal notation.
    ///
    /// Accepts `rgb`, `rgba`, `rrggbb` and `rrggbbaa` digits, optionally preceded by `#`, in any
    /// case. Single digits are scaled to the full range, so `#f80` equals `#ff8800`. The alpha
    /// digits are validated but otherwise ignored.
    ///
    /// ```
    /// use image_colorimetry::Color;
    /// let color = Color::from_hex("#FF8000").unwrap();
    /// assert_eq!(color.to_rgb8(), [255, 128, 0]);
    /// assert_eq!(Color::from_hex("f80").unwrap().to_hex(), "#ff8800");
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        let mut values = [0u8; 8];
        if digits.len() > values.len() {
            return Err(HexErrorKind::InvalidFormat.into());
        }

        for (value, &digit) in values.iter_mut().zip(digits) {
            *value = match digit {
                b'0'..=b'9' => digit - b'0',
                b'a'..=b'f' => digit - b'a' + 10,
                b'A'..=b'F' => digit - b'A' + 10,
                _ => return Err(HexErrorKind::InvalidFormat.into()),
            };
        }

        let short = |v: u8| f64::from(v) / 15.0;
        let long = |hi: u8, lo: u8| f64::from((hi << 4) | lo) / 255.0;

        match digits.len() {
            3 | 4 => Ok(Color::new(
                short(values[0]),
                short(values[1]),
                short(values[2]),
            )),
            6 | 8 => Ok(Color::new(
                long(values[0], values[1]),
                long(values[2], values[3]),
                long(values[4], values[5]),
            )),
            _ => Err(HexErrorKind::InvalidFormat.into()),
        }
    }

    /// The hexadecimal notation `#rrggbb` in lower case, of the color rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        alloc::format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = HexError;

    fn from_str(hex: &str) -> Result<Self, HexError> {
        Color::from_hex(hex)
    }
}

#[test]
fn digit_counts() {
    let orange = Color::new(1.0, 0.6, 0.0);
    assert_eq!(Color::from_hex("#f90"), Ok(orange));
    assert_eq!(Color::from_hex("f90c"), Ok(orange));
    assert_eq!(Color::from_hex("#FF9900"), Ok(orange));
    assert_eq!(Color::from_hex("ff9900cc"), Ok(orange));
}

#[test]
fn rejected() {
    for hex in ["", "#", "#ff", "#fffff", "#fffffff", "#fffffffff", "#ggg", "##fff", "#ff 000"] {
        let err = Color::from_hex(hex).unwrap_err();
        assert_eq!(err.kind(), HexErrorKind::InvalidFormat, "{hex:?}");
    }
}

#[test]
fn formatting() {
    assert_eq!(Color::new(1.0, 0.5, 0.0).to_hex(), "#ff8000");
    assert_eq!(Color::new(1.2, -0.3, 0.0).to_hex(), "#ff0000");
    assert_eq!(Color::new(0.0, 1.0 / 255.0, 0.5).to_hex(), "#000180");
    assert_eq!(Color::WHITE.to_hex().len(), 7);
    assert_eq!("#1a1a46".parse::<Color>().map(Color::to_hex).as_deref(), Ok("#1a1a46"));
}
