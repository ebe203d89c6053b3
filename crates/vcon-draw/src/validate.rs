//! Admission gate between constructed commands and the buffer.
//!
//! [`validate`] is the only way to obtain a [`ValidCommand`], so anything
//! holding one has passed the field checks.

use std::ops::Deref;

use crate::command::Command;
use crate::error::ValidationError;

/// A command that passed [`validate`].
///
/// Rect extents are already normalized. Read access derefs to [`Command`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Command", into = "Command"))]
pub struct ValidCommand(Command);

impl ValidCommand {
    #[inline]
    pub fn as_command(&self) -> &Command {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Command {
        self.0
    }
}

impl Deref for ValidCommand {
    type Target = Command;

    #[inline]
    fn deref(&self) -> &Command {
        &self.0
    }
}

impl AsRef<Command> for ValidCommand {
    #[inline]
    fn as_ref(&self) -> &Command {
        &self.0
    }
}

impl From<ValidCommand> for Command {
    #[inline]
    fn from(cmd: ValidCommand) -> Self {
        cmd.0
    }
}

impl TryFrom<Command> for ValidCommand {
    type Error = ValidationError;

    #[inline]
    fn try_from(cmd: Command) -> Result<Self, Self::Error> {
        validate(cmd)
    }
}

/// Checks a command's field constraints and admits it.
///
/// Fields are checked in declaration order; the first violation is returned.
pub fn validate(cmd: Command) -> Result<ValidCommand, ValidationError> {
    let admitted = match cmd {
        // Color is the only field and u8 channels cannot be out of range.
        Command::Clear(c) => Command::Clear(c),
        Command::Line(c) => Command::Line(c.checked()?),
        Command::Rect(c) => Command::Rect(c.checked()?),
        Command::Circle(c) => Command::Circle(c.checked()?),
        Command::Sprite(c) => Command::Sprite(c.checked()?),
        Command::Text(c) => Command::Text(c.checked()?),
    };
    Ok(ValidCommand(admitted))
}

/// Field checks shared by the payload modules.
pub(crate) mod check {
    use crate::error::{RejectedValue, ValidationError, ValidationErrorKind};

    #[inline]
    fn reject(kind: ValidationErrorKind, field: &'static str, value: f32) -> ValidationError {
        ValidationError::new(kind, field, RejectedValue::Float(value))
    }

    #[inline]
    pub(crate) fn finite(field: &'static str, v: f32) -> Result<(), ValidationError> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(reject(ValidationErrorKind::NonFinite, field, v))
        }
    }

    /// Finite and `>= 0`.
    #[inline]
    pub(crate) fn non_negative(field: &'static str, v: f32) -> Result<(), ValidationError> {
        finite(field, v)?;
        if v < 0.0 {
            return Err(reject(ValidationErrorKind::OutOfRange, field, v));
        }
        Ok(())
    }

    /// Finite and `> 0`.
    #[inline]
    pub(crate) fn positive(field: &'static str, v: f32) -> Result<(), ValidationError> {
        finite(field, v)?;
        if v <= 0.0 {
            return Err(reject(ValidationErrorKind::NonPositive, field, v));
        }
        Ok(())
    }

    /// Outline thickness of a shape. An unfilled shape with zero thickness
    /// would draw nothing.
    #[inline]
    pub(crate) fn outline(field: &'static str, thickness: f32, filled: bool) -> Result<(), ValidationError> {
        non_negative(field, thickness)?;
        if !filled && thickness == 0.0 {
            return Err(reject(ValidationErrorKind::NonPositive, field, thickness));
        }
        Ok(())
    }

    /// Non-empty. The handle is otherwise opaque.
    #[inline]
    pub(crate) fn identifier(field: &'static str, s: &str) -> Result<(), ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyRequiredField,
                field,
                RejectedValue::Text(s.to_owned()),
            ));
        }
        Ok(())
    }
}
