//! Documenting Rust enums
//!
//! Implement [`DocumentedEnum`] on a fieldless enum and wrap it in
//! [`NativeEnum`] to get a [`TypeDescriptor`]. Fields are looked up through a
//! single accessor keyed by field name.
//!
//! ```
//! use docmeta_core::enums::{build_enum_descriptor, DocumentedEnum, FieldValue, NativeEnum};
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Color {
//!     Red,
//!     Green,
//! }
//!
//! impl DocumentedEnum for Color {
//!     fn type_name() -> &'static str {
//!         "Color"
//!     }
//!
//!     fn variants() -> &'static [Self] {
//!         &[Color::Red, Color::Green]
//!     }
//!
//!     fn variant_name(&self) -> &'static str {
//!         match self {
//!             Color::Red => "RED",
//!             Color::Green => "GREEN",
//!         }
//!     }
//!
//!     fn fields() -> &'static [&'static str] {
//!         &["code"]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match (name, self) {
//!             ("code", Color::Red) => Some("R".into()),
//!             ("code", Color::Green) => Some("G".into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let descriptor = build_enum_descriptor(&NativeEnum::<Color>::new(), Some("code"), Some("message")).unwrap();
//! assert_eq!(descriptor.display_text(), "(R:RED;G:GREEN)");
//! ```

use super::introspect::{FieldAccessor, FieldValue, ScalarType, TypeDescriptor};
use crate::error::{EnrichError, EnrichResult};
use std::marker::PhantomData;

/// A Rust enum that can describe its own constants and fields
pub trait DocumentedEnum: Sized + 'static {
	fn type_name() -> &'static str;

	/// All variants in declaration order
	fn variants() -> &'static [Self];

	/// Canonical name of the variant
	fn variant_name(&self) -> &'static str;

	/// Names of the fields [`DocumentedEnum::field`] answers for
	fn fields() -> &'static [&'static str] {
		&[]
	}

	fn field(&self, _name: &str) -> Option<FieldValue> {
		None
	}

	fn value_type() -> Option<ScalarType> {
		None
	}
}

/// Reads one declared field of a [`DocumentedEnum`]
pub struct NativeField<T> {
	name: &'static str,
	_marker: PhantomData<fn(&T)>,
}

impl<T: DocumentedEnum> FieldAccessor<T> for NativeField<T> {
	fn field_name(&self) -> &str {
		self.name
	}

	fn read(&self, constant: &T) -> EnrichResult<Option<FieldValue>> {
		Ok(constant.field(self.name))
	}
}

/// [`TypeDescriptor`] over a [`DocumentedEnum`]
pub struct NativeEnum<T> {
	fields: Vec<NativeField<T>>,
}

impl<T: DocumentedEnum> NativeEnum<T> {
	pub fn new() -> Self {
		Self {
			fields: T::fields()
				.iter()
				.map(|&name| NativeField {
					name,
					_marker: PhantomData,
				})
				.collect(),
		}
	}
}

impl<T: DocumentedEnum> Default for NativeEnum<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: DocumentedEnum> TypeDescriptor for NativeEnum<T> {
	type Constant = T;

	fn type_name(&self) -> &str {
		T::type_name()
	}

	fn constants(&self) -> &[T] {
		T::variants()
	}

	fn constant_name(&self, constant: &T) -> String {
		constant.variant_name().to_string()
	}

	fn field_accessor(&self, field: &str) -> EnrichResult<&dyn FieldAccessor<T>> {
		self.fields
			.iter()
			.find(|accessor| accessor.name == field)
			.map(|accessor| accessor as &dyn FieldAccessor<T>)
			.ok_or_else(|| EnrichError::FieldNotFound {
				type_name: T::type_name().to_string(),
				field: field.to_string(),
			})
	}

	fn value_type(&self) -> Option<ScalarType> {
		T::value_type()
	}
}
