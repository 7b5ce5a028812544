use thiserror::Error;

/// Errors surfaced by [`format`](crate::format) and
/// [`format_to_parts`](crate::format_to_parts). Both are deterministic
/// input-validation failures; neither is worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The locale engine cannot be constructed for the requested locale, or
    /// the requested option combination is not representable. Callers must
    /// handle this (e.g. by falling back to a simpler display); the library
    /// never degrades silently.
    #[error("unsupported configuration: {0}")]
    Configuration(String),

    /// The value cannot be formatted (non-finite input).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
