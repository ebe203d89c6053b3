use crate::color::Rgba8;
use crate::error::ValidationError;
use crate::validate::check;

/// Line segment payload. Coordinates are canvas units.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCmd {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: Rgba8,
    pub thickness: f32,
}

impl LineCmd {
    pub const DEFAULT_THICKNESS: f32 = 1.0;

    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba8) -> Self {
        Self { x1, y1, x2, y2, color, thickness: Self::DEFAULT_THICKNESS }
    }

    #[inline]
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub(crate) fn checked(self) -> Result<Self, ValidationError> {
        check::finite("x1", self.x1)?;
        check::finite("y1", self.y1)?;
        check::finite("x2", self.x2)?;
        check::finite("y2", self.y2)?;
        check::non_negative("thickness", self.thickness)?;
        Ok(self)
    }
}
