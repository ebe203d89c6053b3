//! Versioned tagged-record encoding for crossing a process boundary.
//!
//! Each command encodes as a record tagged by `kind` with its fields in
//! declaration order; colors encode as `[r, g, b, a]`. Decoding a
//! [`ValidCommand`] re-runs the validator, so a stream read from outside is
//! admitted under the same rules as one built in-process.

use serde::{Deserialize, Serialize};

use crate::buffer::CommandBuffer;
use crate::error::CapacityExceeded;
use crate::validate::ValidCommand;

/// Current encoding version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum WireError {
    #[error("unsupported draw stream schema {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },

    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}

/// One frame of commands plus the schema tag it was encoded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandStream {
    pub schema: u32,
    pub commands: Vec<ValidCommand>,
}

impl CommandStream {
    #[inline]
    pub fn new(commands: Vec<ValidCommand>) -> Self {
        Self { schema: SCHEMA_VERSION, commands }
    }

    /// Drains `buffer` into a stream tagged with the current schema.
    pub fn from_buffer(buffer: &mut CommandBuffer) -> Self {
        Self::new(buffer.drain())
    }

    pub fn check_schema(&self) -> Result<(), WireError> {
        if self.schema != SCHEMA_VERSION {
            return Err(WireError::UnsupportedSchema {
                found: self.schema,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    /// Appends the decoded commands to `buffer` in stream order.
    ///
    /// Stops at the first capacity rejection; commands before it stay appended.
    pub fn append_into(self, buffer: &mut CommandBuffer) -> Result<usize, WireError> {
        self.check_schema()?;
        let count = self.commands.len();
        for cmd in self.commands {
            buffer.append(cmd)?;
        }
        Ok(count)
    }
}
