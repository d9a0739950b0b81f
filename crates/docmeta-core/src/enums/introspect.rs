//! Capabilities an enum type exposes to the descriptor builder
//!
//! Field lookup is explicit: a [`TypeDescriptor`] hands out a [`FieldAccessor`]
//! for every field name it knows, registered ahead of time, instead of the
//! builder discovering fields at runtime.

use crate::error::EnrichResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read off one enum constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(String),
}

impl FieldValue {
	/// Scalar type this value serializes as.
	pub fn scalar_type(&self) -> ScalarType {
		match self {
			Self::Boolean(_) => ScalarType::Boolean,
			Self::Integer(_) => ScalarType::Integer,
			Self::Float(_) => ScalarType::Number,
			Self::String(_) => ScalarType::String,
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Boolean(v) => write!(f, "{}", v),
			Self::Integer(v) => write!(f, "{}", v),
			// keeps the fractional part: 1.0 renders as `1.0`, not `1`
			Self::Float(v) => write!(f, "{:?}", v),
			Self::String(v) => f.write_str(v),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

/// Scalar types a documented value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
	String,
	Integer,
	Number,
	Boolean,
	Object,
}

impl ScalarType {
	/// Looks up a scalar type by a declared type name.
	///
	/// Accepts the OpenAPI names as well as the common Rust primitive names.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::enums::ScalarType;
	///
	/// assert_eq!(ScalarType::from_name("i32"), Some(ScalarType::Integer));
	/// assert_eq!(ScalarType::from_name("Number"), Some(ScalarType::Number));
	/// assert_eq!(ScalarType::from_name("Widget"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"string" | "str" | "char" => Some(Self::String),
			"integer" | "int" | "long" | "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32"
			| "u64" | "isize" | "usize" => Some(Self::Integer),
			"number" | "float" | "double" | "decimal" | "f32" | "f64" => Some(Self::Number),
			"boolean" | "bool" => Some(Self::Boolean),
			"object" => Some(Self::Object),
			_ => None,
		}
	}

	/// `true` for integer and floating point types.
	pub fn is_numeric(self) -> bool {
		matches!(self, Self::Integer | Self::Number)
	}
}

/// Reads one named field off the constants of an enum type
pub trait FieldAccessor<C: ?Sized> {
	/// Name of the field this accessor reads
	fn field_name(&self) -> &str;

	/// Reads the field off `constant`.
	///
	/// `Ok(None)` means the constant carries no value for the field. An
	/// [`EnrichError::FieldAccess`](crate::EnrichError::FieldAccess) aborts the
	/// descriptor being built.
	fn read(&self, constant: &C) -> EnrichResult<Option<FieldValue>>;
}

/// An enum type: its constants in declaration order plus its field accessors
pub trait TypeDescriptor {
	/// Handle for one constant of the type
	type Constant;

	/// Name of the type, used in log events and errors
	fn type_name(&self) -> &str;

	/// Constants in declaration order
	fn constants(&self) -> &[Self::Constant];

	/// Canonical name of a constant, e.g. `RED`
	fn constant_name(&self, constant: &Self::Constant) -> String;

	/// Resolves a field by name.
	///
	/// # Errors
	///
	/// Returns [`EnrichError::FieldNotFound`](crate::EnrichError::FieldNotFound)
	/// when the type has no such field.
	fn field_accessor(&self, field: &str) -> EnrichResult<&dyn FieldAccessor<Self::Constant>>;

	/// Scalar type the constants serialize as on the wire, when known
	fn value_type(&self) -> Option<ScalarType> {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldValue::from("R"), "R")]
	#[case(FieldValue::from(42), "42")]
	#[case(FieldValue::from(-7i64), "-7")]
	#[case(FieldValue::from(1.5), "1.5")]
	#[case(FieldValue::from(1.0), "1.0")]
	#[case(FieldValue::from(-0.25), "-0.25")]
	#[case(FieldValue::from(true), "true")]
	fn test_field_value_display(#[case] value: FieldValue, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_field_value_scalar_type() {
		assert_eq!(FieldValue::from(1).scalar_type(), ScalarType::Integer);
		assert_eq!(FieldValue::from("x").scalar_type(), ScalarType::String);
		assert_eq!(FieldValue::from(0.5).scalar_type(), ScalarType::Number);
		assert_eq!(FieldValue::from(false).scalar_type(), ScalarType::Boolean);
	}

	#[rstest]
	#[case("Integer", Some(ScalarType::Integer))]
	#[case(" u64 ", Some(ScalarType::Integer))]
	#[case("double", Some(ScalarType::Number))]
	#[case("bool", Some(ScalarType::Boolean))]
	#[case("String", Some(ScalarType::String))]
	#[case("Object", Some(ScalarType::Object))]
	#[case("java.lang.Integer", None)]
	fn test_scalar_type_from_name(#[case] name: &str, #[case] expected: Option<ScalarType>) {
		assert_eq!(ScalarType::from_name(name), expected);
	}
}
