use crate::color::Rgba8;
use crate::error::ValidationError;
use crate::validate::check;

/// Text payload. An empty `value` is a valid draw of nothing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextCmd {
    pub value: String,
    pub x: f32,
    pub y: f32,
    /// Font size in canvas units.
    pub size: f32,
    pub color: Rgba8,
}

impl TextCmd {
    pub const DEFAULT_SIZE: f32 = 16.0;

    #[inline]
    pub fn new(value: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            value: value.into(),
            x,
            y,
            size: Self::DEFAULT_SIZE,
            color: Rgba8::OPAQUE_WHITE,
        }
    }

    #[inline]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn checked(self) -> Result<Self, ValidationError> {
        check::finite("x", self.x)?;
        check::finite("y", self.y)?;
        check::positive("size", self.size)?;
        Ok(self)
    }
}
