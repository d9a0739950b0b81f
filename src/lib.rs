//! # docmeta
//!
//! Documentation metadata enrichment: turns declarative field directives into
//! structured documentation metadata.
//!
//! docmeta reads two kinds of directives:
//!
//! - **Constraint expressions** such as `range[1,10]`, `range(0,infinity)` or
//!   `A,B,C`, parsed into a [`ValueConstraint`]
//! - **Enum types** described through [`TypeDescriptor`], turned into an
//!   [`EnumDescriptor`] with ordered code/label pairs and a display text
//!
//! ## Feature Flags
//!
//! - `minimal` - Core parsing and descriptor building only (with `default-features = false`)
//! - `openapi` (default) - OpenAPI property and parameter enrichment
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use docmeta::prelude::*;
//!
//! let status = EnumTable::new("Status")
//!     .with_constants(["ACTIVE", "INACTIVE"])
//!     .column("code", ["A", "I"])
//!     .column("message", ["Active", "Inactive"]);
//!
//! let descriptor = EnumDescriptorBuilder::from_labels(&EnumLabels::default())
//!     .build(&status)
//!     .unwrap();
//! assert_eq!(descriptor.display_text(), "(A:Active;I:Inactive)");
//!
//! assert!(parse_constraint("range[1,10]").is_range());
//! ```

pub use docmeta_core::{constraint, enums, error, settings};

pub use docmeta_core::{
	DocumentedEnum, EnrichError, EnrichResult, EnrichmentSettings, EnumConstantEntry,
	EnumDescriptor, EnumDescriptorBuilder, EnumLabels, EnumTable, ExampleSettings, FieldAccessor,
	FieldResolution, FieldValue, NativeEnum, ScalarType, SettingsError, TypeDescriptor,
	ValueConstraint, build_enum_descriptor, parse_constraint,
};

#[cfg(feature = "openapi")]
pub use docmeta_openapi as openapi;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		DocumentedEnum, EnrichError, EnrichResult, EnrichmentSettings, EnumDescriptor,
		EnumDescriptorBuilder, EnumLabels, EnumTable, FieldAccessor, FieldValue, NativeEnum,
		ScalarType, TypeDescriptor, ValueConstraint, build_enum_descriptor, parse_constraint,
	};

	// OpenAPI feature - property and parameter enrichment
	#[cfg(feature = "openapi")]
	pub use crate::openapi::{
		DeclaredType, DescriptionResolver, EnumSource, FieldSchema, ParameterAnnotation,
		ParameterEnricher, PropertyAnnotation, PropertyEnricher,
	};
}
