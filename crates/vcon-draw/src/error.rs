use std::fmt;

/// Why a command field was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ValidationErrorKind {
    /// NaN or ±infinity in a numeric field.
    NonFinite,
    /// Value outside the field's allowed range (negative extent, color channel > 255).
    OutOfRange,
    /// Identifier that must name something is empty.
    EmptyRequiredField,
    /// Zero or negative where a strictly positive value is required.
    NonPositive,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonFinite => "value is not finite",
            Self::OutOfRange => "value is out of range",
            Self::EmptyRequiredField => "required field is empty",
            Self::NonPositive => "value must be positive",
        };
        f.write_str(s)
    }
}

/// The offending value carried by a [`ValidationError`].
#[derive(Debug, Clone, PartialEq)]
pub enum RejectedValue {
    Float(f32),
    Int(i64),
    Text(String),
}

impl fmt::Display for RejectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// A command failed admission.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid draw command field `{field}`: {kind} (got {value})")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: &'static str,
    pub value: RejectedValue,
}

impl ValidationError {
    #[inline]
    pub fn new(kind: ValidationErrorKind, field: &'static str, value: RejectedValue) -> Self {
        Self { kind, field, value }
    }
}

/// The buffer is full for this frame.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("command buffer capacity exceeded (max {limit} commands per frame)")]
pub struct CapacityExceeded {
    pub limit: usize,
}

/// Either failure of the validate-then-append path.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}
