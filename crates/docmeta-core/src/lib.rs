//! # docmeta core
//!
//! Structured documentation metadata from declarative field directives.
//!
//! ## Features
//!
//! - **Constraint expressions**: `range[1,10]`, `range(0,infinity)`, `A,B,C`
//!   parsed into a [`ValueConstraint`]
//! - **Enum descriptors**: ordered code/label pairs and a display text for enum
//!   types, from ordinals and names or from designated code and message fields
//! - **Explicit introspection**: enum types are described through the
//!   [`TypeDescriptor`] and [`FieldAccessor`] traits, implemented by
//!   [`EnumTable`] for data-driven types and [`NativeEnum`] for Rust enums
//! - **Settings**: default field names and example values, loadable from TOML
//!
//! Both components are pure functions over their inputs: no I/O, no shared
//! state, safe to call from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use docmeta_core::{build_enum_descriptor, parse_constraint, EnumTable, ValueConstraint};
//!
//! assert_eq!(parse_constraint("A, B ,C"), ValueConstraint::list(["A", "B", "C"]));
//!
//! let color = EnumTable::new("Color").with_constants(["RED", "GREEN"]);
//! let descriptor = build_enum_descriptor(&color, None, None).unwrap();
//! assert_eq!(descriptor.display_text(), ",(0:RED;1:GREEN)");
//! ```

pub mod constraint;
pub mod enums;
pub mod error;
pub mod settings;

pub use constraint::{ValueConstraint, parse_constraint};
pub use enums::{
	DocumentedEnum, EnumConstantEntry, EnumDescriptor, EnumDescriptorBuilder, EnumLabels,
	EnumTable, FieldAccessor, FieldResolution, FieldValue, NativeEnum, ScalarType, TypeDescriptor,
	build_enum_descriptor,
};
pub use error::{EnrichError, EnrichResult};
pub use settings::{EnrichmentSettings, ExampleSettings, SettingsError};
