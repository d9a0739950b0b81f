//! Request parameter enrichment

use crate::annotations::ParameterAnnotation;
use crate::description::{DescriptionResolver, PlainDescriptions};
use crate::schema::FieldSchema;
use crate::source::DeclaredType;
use docmeta_core::{ScalarType, ValueConstraint, parse_constraint};
use serde::Serialize;

/// Order of the built-in documentation passes
pub const OAS_PLUGIN_ORDER: i32 = i32::MIN + 1000;

/// Order of the enum parameter pass, after the built-in passes
pub const ENUM_PLUGIN_ORDER: i32 = OAS_PLUGIN_ORDER + 2;

/// Documentation of one request parameter after enrichment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSpecification {
	pub name: String,
	pub description: String,
	pub allowable_values: Option<ValueConstraint>,

	/// Scalar schema, set for enum parameters
	pub schema: Option<FieldSchema>,
	pub order: i32,
}

/// Fills in request parameter documentation from its annotation
#[derive(Debug, Clone, Default)]
pub struct ParameterEnricher<R = PlainDescriptions> {
	descriptions: R,
}

impl ParameterEnricher {
	pub fn new() -> Self {
		Self::default()
	}
}

impl<R: DescriptionResolver> ParameterEnricher<R> {
	/// Enricher resolving annotation text through `descriptions`.
	pub fn with_descriptions(descriptions: R) -> Self {
		Self { descriptions }
	}

	/// Enriches one parameter.
	///
	/// Returns `None` when the parameter carries no annotation.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::{ScalarType, ValueConstraint};
	/// use docmeta_openapi::{DeclaredType, ParameterAnnotation, ParameterEnricher};
	///
	/// let annotation = ParameterAnnotation::new("Page size").allowable_values("range[1,100]");
	/// let spec = ParameterEnricher::new()
	///     .apply("size", DeclaredType::Scalar(ScalarType::Integer), Some(&annotation))
	///     .unwrap();
	///
	/// assert_eq!(spec.description, "Page size");
	/// assert!(spec.allowable_values.unwrap().is_range());
	/// ```
	pub fn apply(
		&self,
		name: &str,
		declared: DeclaredType<'_>,
		annotation: Option<&ParameterAnnotation>,
	) -> Option<ParameterSpecification> {
		let annotation = annotation?;
		let resolved = self.descriptions.resolve(&annotation.value);

		let spec = match declared.as_enum() {
			Some(source) => {
				let descriptor = source.descriptor();
				let allowable = descriptor.allowable_values();
				let mut schema =
					FieldSchema::scalar(source.value_type().unwrap_or(ScalarType::String));
				schema.apply_constraint(&allowable);

				ParameterSpecification {
					name: name.to_string(),
					description: descriptor.describe(Some(&resolved)),
					allowable_values: Some(allowable),
					schema: Some(schema),
					order: ENUM_PLUGIN_ORDER,
				}
			}
			None => ParameterSpecification {
				name: name.to_string(),
				description: resolved,
				allowable_values: (!annotation.allowable_values.is_empty())
					.then(|| parse_constraint(&annotation.allowable_values)),
				schema: None,
				order: ENUM_PLUGIN_ORDER,
			},
		};

		tracing::debug!(
			parameter = name,
			order = spec.order,
			"Enriched request parameter"
		);
		Some(spec)
	}
}
