//! # docmeta OpenAPI
//!
//! Applies docmeta descriptors to OpenAPI 3.0 property and parameter
//! documentation.
//!
//! ## Features
//!
//! - **Field schema**: serde model of an OpenAPI field schema, with
//!   constraint expressions written as `enum` or `minimum`/`maximum`
//! - **Property enrichment**: example values for numeric and boolean
//!   properties; display text, schema type and allowable values for enum
//!   properties
//! - **Parameter enrichment**: enum codes or names as allowable values of a
//!   request parameter, with placeholder resolution in its description
//!
//! ## Example
//!
//! ```rust
//! use docmeta_core::{EnumLabels, EnumTable};
//! use docmeta_openapi::{DeclaredType, EnumSource, ParameterAnnotation, ParameterEnricher};
//!
//! let status = EnumTable::new("Status")
//!     .with_constants(["ACTIVE", "INACTIVE"])
//!     .column("code", ["A", "I"])
//!     .column("message", ["Active", "Inactive"]);
//! let source = EnumSource::resolve(&status, Some(&EnumLabels::default())).unwrap();
//!
//! let spec = ParameterEnricher::new()
//!     .apply("status", DeclaredType::Enum(&source), Some(&ParameterAnnotation::new("Status")))
//!     .unwrap();
//! assert_eq!(spec.description, "Status(A:Active;I:Inactive)");
//! ```

pub mod annotations;
pub mod description;
pub mod parameter;
pub mod property;
pub mod schema;
pub mod source;

pub use annotations::{ParameterAnnotation, PropertyAnnotation};
pub use description::{DescriptionResolver, PlainDescriptions, PropertyDescriptions};
pub use parameter::{ENUM_PLUGIN_ORDER, OAS_PLUGIN_ORDER, ParameterEnricher, ParameterSpecification};
pub use property::{PropertyEnricher, PropertySpecification};
pub use schema::FieldSchema;
pub use source::{DeclaredType, EnumSource};
