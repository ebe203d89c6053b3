//! Draw-command core for the vcon engine.
//!
//! Scripts describe a frame as a sequence of draw intents. This crate owns
//! how those intents are represented, admitted, and queued for a renderer;
//! rasterization and asset resolution live behind [`Submitter`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgba8` |
//! | [`command`] | `Command` and one payload struct per shape |
//! | [`validate`] | `validate`, `ValidCommand` |
//! | [`buffer`] | `CommandBuffer`, `BufferConfig` |
//! | [`submit`] | `Submitter`, `FrameRecorder` |
//! | `wire` | `CommandStream` (feature `serde`) |
//!
//! # Frame cycle
//!
//! ```rust
//! use vcon_draw::{CircleCmd, ClearCmd, CommandBuffer, Rgba8, ValidCommand};
//!
//! let mut buffer = CommandBuffer::new();
//! buffer.push(ClearCmd::new(Rgba8::OPAQUE_BLACK).into()).unwrap();
//! buffer.push(CircleCmd::new(64.0, 64.0, 8.0, Rgba8::rgb(255, 200, 0)).into()).unwrap();
//!
//! let mut painted = 0;
//! let mut renderer = |frame: Vec<ValidCommand>| painted += frame.len();
//! buffer.submit_to(&mut renderer);
//! assert_eq!(painted, 2);
//! ```

pub mod buffer;
pub mod color;
pub mod command;
pub mod error;
pub mod logging;
pub mod submit;
pub mod validate;
#[cfg(feature = "serde")]
pub mod wire;

pub use buffer::{BufferConfig, BufferState, CommandBuffer};
pub use color::Rgba8;
pub use command::{CircleCmd, ClearCmd, Command, CommandKind, LineCmd, RectCmd, SpriteCmd, TextCmd};
pub use error::{CapacityExceeded, DrawError, RejectedValue, ValidationError, ValidationErrorKind};
pub use submit::{FrameRecorder, Submitter};
pub use validate::{ValidCommand, validate};
#[cfg(feature = "serde")]
pub use wire::{CommandStream, SCHEMA_VERSION, WireError};
