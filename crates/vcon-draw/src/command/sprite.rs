use std::f32::consts::TAU;

use crate::color::Rgba8;
use crate::error::ValidationError;
use crate::validate::check;

/// Sprite payload.
///
/// `asset_id` is an opaque handle into an asset registry owned by the host;
/// only its shape is checked here, never its existence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteCmd {
    pub asset_id: String,
    pub x: f32,
    pub y: f32,
    /// Radians. Any finite value; see [`SpriteCmd::normalized_rotation`].
    pub rotation: f32,
    pub scale: f32,
    /// Tint.
    pub color: Rgba8,
}

impl SpriteCmd {
    pub const DEFAULT_SCALE: f32 = 1.0;

    #[inline]
    pub fn new(asset_id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            asset_id: asset_id.into(),
            x,
            y,
            rotation: 0.0,
            scale: Self::DEFAULT_SCALE,
            color: Rgba8::OPAQUE_WHITE,
        }
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Rotation reduced into `[0, 2π)`.
    #[inline]
    pub fn normalized_rotation(&self) -> f32 {
        let r = self.rotation.rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative inputs.
        if r >= TAU { 0.0 } else { r }
    }

    pub(crate) fn checked(self) -> Result<Self, ValidationError> {
        check::identifier("asset_id", &self.asset_id)?;
        check::finite("x", self.x)?;
        check::finite("y", self.y)?;
        check::finite("rotation", self.rotation)?;
        check::positive("scale", self.scale)?;
        Ok(self)
    }
}
