//! Error types shared by the constraint parser and the enum descriptor builder.

/// Errors raised while extracting documentation metadata
///
/// Only [`EnrichError::FieldAccess`] ever reaches a caller of
/// [`EnumDescriptorBuilder::build`](crate::enums::EnumDescriptorBuilder::build).
/// The other variants are absorbed where they occur and only show up in logs.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichError {
	/// A designated field name does not resolve on the enum type
	#[error("Field '{field}' not found on type '{type_name}'")]
	FieldNotFound { type_name: String, field: String },

	/// Reading a resolved field off one constant failed
	#[error("Cannot read field '{field}' of {type_name}::{constant}: {reason}")]
	FieldAccess {
		type_name: String,
		field: String,
		constant: String,
		reason: String,
	},

	/// A `range...` expression did not split into open, lower, upper and close
	#[error("Unable to parse range specified {expression} correctly ({tokens} of 4 parts)")]
	MalformedRange { expression: String, tokens: usize },
}

impl EnrichError {
	/// Returns `true` when the error only degrades the result instead of failing it.
	pub fn is_recoverable(&self) -> bool {
		!matches!(self, Self::FieldAccess { .. })
	}
}

/// Result type for metadata extraction
pub type EnrichResult<T> = std::result::Result<T, EnrichError>;
