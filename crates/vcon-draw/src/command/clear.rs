use crate::color::Rgba8;

/// Fills the whole canvas with one color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearCmd {
    pub color: Rgba8,
}

impl ClearCmd {
    #[inline]
    pub const fn new(color: Rgba8) -> Self {
        Self { color }
    }
}
