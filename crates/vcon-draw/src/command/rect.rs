use crate::color::Rgba8;
use crate::error::ValidationError;
use crate::validate::check;

/// Axis-aligned rectangle payload.
///
/// `w`/`h` may be negative before validation; admission normalizes them so
/// the origin is the top-left corner of the same region.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectCmd {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba8,
    pub filled: bool,
    pub thickness: f32,
}

impl RectCmd {
    pub const DEFAULT_THICKNESS: f32 = 1.0;

    /// Filled rectangle with the default outline thickness.
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Rgba8) -> Self {
        Self { x, y, w, h, color, filled: true, thickness: Self::DEFAULT_THICKNESS }
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

    /// Returns the rectangle with non-negative `w`/`h`, covering the same region.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.w < 0.0 {
            r.x += r.w;
            r.w = -r.w;
        }
        if r.h < 0.0 {
            r.y += r.h;
            r.h = -r.h;
        }
        r
    }

    pub(crate) fn checked(self) -> Result<Self, ValidationError> {
        check::finite("x", self.x)?;
        check::finite("y", self.y)?;
        check::finite("w", self.w)?;
        check::finite("h", self.h)?;
        check::outline("thickness", self.thickness, self.filled)?;

        // Moving the origin across a huge negative extent can overflow.
        let n = self.normalized();
        check::finite("x", n.x)?;
        check::finite("y", n.y)?;
        Ok(n)
    }
}
