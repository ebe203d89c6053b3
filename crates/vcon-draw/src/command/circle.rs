use crate::color::Rgba8;
use crate::error::ValidationError;
use crate::validate::check;

/// Circle payload centered on (`x`, `y`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleCmd {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub color: Rgba8,
    pub filled: bool,
    pub thickness: f32,
}

impl CircleCmd {
    pub const DEFAULT_THICKNESS: f32 = 1.0;

    #[inline]
    pub fn new(x: f32, y: f32, r: f32, color: Rgba8) -> Self {
        Self { x, y, r, color, filled: true, thickness: Self::DEFAULT_THICKNESS }
    }

    #[inline]
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[inline]
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub(crate) fn checked(self) -> Result<Self, ValidationError> {
        check::finite("x", self.x)?;
        check::finite("y", self.y)?;
        check::non_negative("r", self.r)?;
        check::outline("thickness", self.thickness, self.filled)?;
        Ok(self)
    }
}
