use bytemuck::{Pod, Zeroable};

use crate::error::{RejectedValue, ValidationError, ValidationErrorKind};

/// Straight-alpha RGBA color, one byte per channel.
///
/// Channel range `[0, 255]` is guaranteed by the type. Values coming from an
/// untyped host (script integers) go through [`Rgba8::try_from`] instead.
///
/// `repr(C)` + `Pod` so renderers can upload colors without conversion.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 4]", into = "[u8; 4]"))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const OPAQUE_WHITE: Self = Self::new(255, 255, 255, 255);
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

impl From<(u8, u8, u8, u8)> for Rgba8 {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Checked conversion from wide integer channels.
///
/// Fails with [`ValidationErrorKind::OutOfRange`] naming the first channel
/// outside `[0, 255]`.
impl TryFrom<[i64; 4]> for Rgba8 {
    type Error = ValidationError;

    fn try_from(channels: [i64; 4]) -> Result<Self, Self::Error> {
        const FIELDS: [&str; 4] = ["color.r", "color.g", "color.b", "color.a"];

        let mut out = [0u8; 4];
        for ((slot, value), field) in out.iter_mut().zip(channels).zip(FIELDS) {
            *slot = u8::try_from(value).map_err(|_| {
                ValidationError::new(ValidationErrorKind::OutOfRange, field, RejectedValue::Int(value))
            })?;
        }
        Ok(Self::from(out))
    }
}
