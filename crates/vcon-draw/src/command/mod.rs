//! Draw command types.
//!
//! One payload struct per shape lives under `command::*`; each carries its
//! constructor defaults and its admission checks. [`Command`] is the closed
//! set handed to renderers.

mod circle;
mod clear;
mod line;
mod rect;
mod sprite;
mod text;

pub use circle::CircleCmd;
pub use clear::ClearCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use sprite::SpriteCmd;
pub use text::TextCmd;

use std::fmt;

use crate::color::Rgba8;

/// Renderer-agnostic draw intent.
///
/// Adding a command kind:
/// - add a payload module under `command::*` with `new` and `checked`
/// - add a variant here and to [`CommandKind`]
/// - route it in `validate::validate`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Command {
    Clear(ClearCmd),
    Line(LineCmd),
    Rect(RectCmd),
    Circle(CircleCmd),
    Sprite(SpriteCmd),
    Text(TextCmd),
}

/// Fieldless tag of a [`Command`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CommandKind {
    Clear,
    Line,
    Rect,
    Circle,
    Sprite,
    Text,
}

impl CommandKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Sprite => "sprite",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    #[inline]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Clear(_) => CommandKind::Clear,
            Self::Line(_) => CommandKind::Line,
            Self::Rect(_) => CommandKind::Rect,
            Self::Circle(_) => CommandKind::Circle,
            Self::Sprite(_) => CommandKind::Sprite,
            Self::Text(_) => CommandKind::Text,
        }
    }

    /// Color (or tint) the command paints with.
    #[inline]
    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Clear(c) => c.color,
            Self::Line(c) => c.color,
            Self::Rect(c) => c.color,
            Self::Circle(c) => c.color,
            Self::Sprite(c) => c.color,
            Self::Text(c) => c.color,
        }
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Command {
                #[inline]
                fn from(cmd: $payload) -> Self {
                    Command::$variant(cmd)
                }
            }
        )*
    };
}

impl_from_payload! {
    ClearCmd => Clear,
    LineCmd => Line,
    RectCmd => Rect,
    CircleCmd => Circle,
    SpriteCmd => Sprite,
    TextCmd => Text,
}
