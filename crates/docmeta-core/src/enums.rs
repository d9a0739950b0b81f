//! Enum descriptors
//!
//! Derives ordered `(code, label)` pairs and a display text from an enum type.
//! Which values end up as code and label depends on the designated fields that
//! resolve on the type:
//!
//! | code field | message field | code | label | display text |
//! |------------|---------------|------|-------|--------------|
//! | -          | -             | ordinal | constant name | `,(0:RED;1:GREEN)` |
//! | resolved   | -             | code value | constant name | `(R:RED;G:GREEN)` |
//! | resolved   | resolved      | code value | message value | `(R:Red;G:Green)` |
//! | -          | resolved      | ordinal | message value | `(0:Red;1:Green)` |
//!
//! ## Example
//!
//! ```rust
//! use docmeta_core::enums::{EnumDescriptorBuilder, EnumLabels, EnumTable};
//!
//! let color = EnumTable::new("Color")
//!     .with_constants(["RED", "GREEN"])
//!     .column("code", ["R", "G"])
//!     .column("message", ["Red", "Green"]);
//!
//! let descriptor = EnumDescriptorBuilder::from_labels(&EnumLabels::default())
//!     .build(&color)
//!     .unwrap();
//! assert_eq!(descriptor.display_text(), "(R:Red;G:Green)");
//! ```

mod descriptor;
mod introspect;
mod native;
mod table;

pub use descriptor::{
	DISPLAY_SUFFIX, EnumConstantEntry, EnumDescriptor, FieldResolution, LABELED_PREFIX,
	UNLABELED_PREFIX,
};
pub use introspect::{FieldAccessor, FieldValue, ScalarType, TypeDescriptor};
pub use native::{DocumentedEnum, NativeEnum, NativeField};
pub use table::{EnumTable, TableColumn, TableConstant};

use crate::error::EnrichResult;
use serde::{Deserialize, Serialize};

/// Text written for a field that holds no value on a constant
const NULL_VALUE: &str = "null";

/// Designated field names of an enum type
///
/// Declaring labels for a type means "look these fields up". A type without
/// labels is documented by ordinal and constant name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumLabels {
	/// Field holding the wire code of each constant
	pub code_field: String,

	/// Field holding the human readable message of each constant
	pub message_field: String,
}

impl Default for EnumLabels {
	fn default() -> Self {
		Self {
			code_field: "code".to_string(),
			message_field: "message".to_string(),
		}
	}
}

impl EnumLabels {
	pub fn new(code_field: impl Into<String>, message_field: impl Into<String>) -> Self {
		Self {
			code_field: code_field.into(),
			message_field: message_field.into(),
		}
	}
}

/// Builds [`EnumDescriptor`]s from [`TypeDescriptor`]s
///
/// The builder holds only field names and can be reused across types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDescriptorBuilder {
	code_field: Option<String>,
	message_field: Option<String>,
}

impl EnumDescriptorBuilder {
	/// Builder for a type without labels.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder requesting the fields named by `labels`.
	pub fn from_labels(labels: &EnumLabels) -> Self {
		Self::new()
			.code_field(&labels.code_field)
			.message_field(&labels.message_field)
	}

	/// Requests the code field. A blank name requests nothing.
	pub fn code_field(mut self, name: impl AsRef<str>) -> Self {
		self.code_field = requested(name.as_ref());
		self
	}

	/// Requests the message field. A blank name requests nothing.
	pub fn message_field(mut self, name: impl AsRef<str>) -> Self {
		self.message_field = requested(name.as_ref());
		self
	}

	/// Builds the descriptor of `ty`.
	///
	/// A requested field that does not exist on the type is treated as not
	/// requested.
	///
	/// # Errors
	///
	/// Returns [`EnrichError::FieldAccess`](crate::EnrichError::FieldAccess)
	/// when a resolved field cannot be read off one of the constants.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::enums::{EnumDescriptorBuilder, EnumTable};
	///
	/// let color = EnumTable::new("Color").with_constants(["RED", "GREEN"]);
	///
	/// let descriptor = EnumDescriptorBuilder::new()
	///     .code_field("does_not_exist")
	///     .build(&color)
	///     .unwrap();
	/// assert_eq!(descriptor.display_text(), ",(0:RED;1:GREEN)");
	/// ```
	pub fn build<T>(&self, ty: &T) -> EnrichResult<EnumDescriptor>
	where
		T: TypeDescriptor + ?Sized,
	{
		let code_accessor = resolve(ty, self.code_field.as_deref());
		let message_accessor = resolve(ty, self.message_field.as_deref());

		if self.code_field.is_some()
			&& self.message_field.is_some()
			&& code_accessor.is_none()
			&& message_accessor.is_none()
		{
			tracing::warn!(
				type_name = ty.type_name(),
				code_field = self.code_field.as_deref(),
				message_field = self.message_field.as_deref(),
				"None of the requested enum fields resolved; documenting by ordinal and name"
			);
		}

		let resolution = FieldResolution {
			code: code_accessor.is_some(),
			message: message_accessor.is_some(),
		};

		let mut entries = Vec::with_capacity(ty.constants().len());
		for (ordinal, constant) in ty.constants().iter().enumerate() {
			let name = ty.constant_name(constant);
			let code = match code_accessor {
				Some(accessor) => render(accessor.read(constant)?),
				None => ordinal.to_string(),
			};
			let label = match message_accessor {
				Some(accessor) => render(accessor.read(constant)?),
				None => name.clone(),
			};
			entries.push(EnumConstantEntry {
				code,
				label,
				ordinal,
				name,
			});
		}

		Ok(EnumDescriptor::new(entries, resolution))
	}
}

/// Builds the descriptor of `ty` with optional code and message field names.
///
/// Shorthand for [`EnumDescriptorBuilder`].
pub fn build_enum_descriptor<T>(
	ty: &T,
	code_field: Option<&str>,
	message_field: Option<&str>,
) -> EnrichResult<EnumDescriptor>
where
	T: TypeDescriptor + ?Sized,
{
	let mut builder = EnumDescriptorBuilder::new();
	if let Some(name) = code_field {
		builder = builder.code_field(name);
	}
	if let Some(name) = message_field {
		builder = builder.message_field(name);
	}
	builder.build(ty)
}

fn requested(name: &str) -> Option<String> {
	let name = name.trim();
	(!name.is_empty()).then(|| name.to_string())
}

fn resolve<'a, T>(ty: &'a T, field: Option<&str>) -> Option<&'a dyn FieldAccessor<T::Constant>>
where
	T: TypeDescriptor + ?Sized,
{
	let field = field?;
	match ty.field_accessor(field) {
		Ok(accessor) => Some(accessor),
		Err(err) => {
			tracing::debug!(type_name = ty.type_name(), "{}", err);
			None
		}
	}
}

fn render(value: Option<FieldValue>) -> String {
	value.map_or_else(|| NULL_VALUE.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::EnrichError;
	use rstest::{fixture, rstest};

	#[fixture]
	fn color() -> EnumTable {
		EnumTable::new("Color").with_constants(["RED", "GREEN"])
	}

	fn codes_and_labels(descriptor: &EnumDescriptor) -> Vec<(String, String)> {
		descriptor
			.entries()
			.iter()
			.map(|e| (e.code().to_string(), e.label().to_string()))
			.collect()
	}

	#[rstest]
	fn test_unlabeled_type(color: EnumTable) {
		let descriptor = EnumDescriptorBuilder::new().build(&color).unwrap();
		assert_eq!(
			codes_and_labels(&descriptor),
			vec![
				("0".to_string(), "RED".to_string()),
				("1".to_string(), "GREEN".to_string())
			]
		);
		assert_eq!(descriptor.display_text(), ",(0:RED;1:GREEN)");
		assert!(descriptor.resolution().is_unlabeled());
	}

	#[rstest]
	fn test_code_field_only(color: EnumTable) {
		let color = color.column("code", ["R", "G"]);
		let descriptor = EnumDescriptorBuilder::from_labels(&EnumLabels::default())
			.build(&color)
			.unwrap();
		assert_eq!(descriptor.display_text(), "(R:RED;G:GREEN)");
	}

	#[rstest]
	fn test_code_and_message_fields(color: EnumTable) {
		let color = color
			.column("code", ["R", "G"])
			.column("message", ["Red", "Green"]);
		let descriptor = build_enum_descriptor(&color, Some("code"), Some("message")).unwrap();
		assert_eq!(descriptor.display_text(), "(R:Red;G:Green)");
		assert_eq!(descriptor.entries()[1].name(), "GREEN");
		assert_eq!(descriptor.entries()[1].ordinal(), 1);
	}

	#[rstest]
	fn test_message_field_only_keeps_ordinal_codes(color: EnumTable) {
		let color = color.column("message", ["Red", "Green"]);
		let descriptor = build_enum_descriptor(&color, Some("code"), Some("message")).unwrap();
		assert_eq!(descriptor.display_text(), "(0:Red;1:Green)");
	}

	#[rstest]
	fn test_custom_field_names(color: EnumTable) {
		let color = color.column("value", [1, 2]).column("desc", ["Red", "Green"]);
		let labels = EnumLabels::new("value", "desc");
		let descriptor = EnumDescriptorBuilder::from_labels(&labels).build(&color).unwrap();
		assert_eq!(descriptor.display_text(), "(1:Red;2:Green)");
	}

	#[rstest]
	fn test_missing_value_renders_null(color: EnumTable) {
		let color = color.nullable_column("code", [Some(FieldValue::from(1)), None]);
		let descriptor = build_enum_descriptor(&color, Some("code"), None).unwrap();
		assert_eq!(descriptor.display_text(), "(1:RED;null:GREEN)");
	}

	#[rstest]
	#[case(Some(""), Some("  "))]
	#[case(None, None)]
	#[case(Some("nope"), Some("nada"))]
	fn test_unrequested_or_unknown_fields_fall_back(
		color: EnumTable,
		#[case] code: Option<&str>,
		#[case] message: Option<&str>,
	) {
		let color = color.column("code", ["R", "G"]);
		let descriptor = build_enum_descriptor(&color, code, message).unwrap();
		assert_eq!(descriptor.display_text(), ",(0:RED;1:GREEN)");
	}

	#[rstest]
	fn test_float_codes_keep_fraction() {
		let ratio = EnumTable::new("Ratio")
			.with_constants(["ONE", "HALF"])
			.column("code", [1.0, 0.5]);
		let descriptor = build_enum_descriptor(&ratio, Some("code"), None).unwrap();
		assert_eq!(descriptor.display_text(), "(1.0:ONE;0.5:HALF)");
	}

	#[rstest]
	fn test_access_failure_aborts_build(color: EnumTable) {
		let color = color.restricted_column("code", "access denied");
		let err = build_enum_descriptor(&color, Some("code"), None).unwrap_err();
		assert!(matches!(err, EnrichError::FieldAccess { ref constant, .. } if constant == "RED"));
	}

	#[rstest]
	fn test_build_is_idempotent(color: EnumTable) {
		let color = color.column("code", ["R", "G"]);
		let builder = EnumDescriptorBuilder::from_labels(&EnumLabels::default());
		assert_eq!(builder.build(&color).unwrap(), builder.build(&color).unwrap());
	}

	#[rstest]
	fn test_blank_names_are_not_requested() {
		let builder = EnumDescriptorBuilder::new().code_field(" ").message_field("");
		assert_eq!(builder, EnumDescriptorBuilder::new());
	}
}
