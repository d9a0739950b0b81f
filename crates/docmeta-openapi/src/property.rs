//! Model property enrichment

use crate::annotations::PropertyAnnotation;
use crate::schema::FieldSchema;
use crate::source::{DeclaredType, EnumSource};
use docmeta_core::{EnrichmentSettings, ExampleSettings, ScalarType, parse_constraint};
use serde::Serialize;

/// Documentation of one model property after enrichment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySpecification {
	pub schema: FieldSchema,
	pub required: bool,
	pub hidden: bool,
	pub position: i32,
}

/// Fills in property documentation from its annotation and declared type
///
/// Numeric and boolean properties get example values. Enum properties get
/// their display text appended to the description, a schema type and the
/// annotation's allowable values.
#[derive(Debug, Clone, Default)]
pub struct PropertyEnricher {
	examples: ExampleSettings,
}

impl PropertyEnricher {
	pub fn new(settings: &EnrichmentSettings) -> Self {
		Self {
			examples: settings.examples.clone(),
		}
	}

	/// Enriches one property.
	///
	/// Returns `None` when the property carries no annotation.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::{EnrichmentSettings, EnumTable};
	/// use docmeta_openapi::{DeclaredType, EnumSource, PropertyAnnotation, PropertyEnricher};
	///
	/// let color = EnumTable::new("Color").with_constants(["RED", "GREEN"]);
	/// let source = EnumSource::resolve(&color, None).unwrap();
	/// let enricher = PropertyEnricher::new(&EnrichmentSettings::default());
	///
	/// let spec = enricher
	///     .apply(DeclaredType::Enum(&source), Some(&PropertyAnnotation::new("Color")), Some("Color"))
	///     .unwrap();
	/// assert_eq!(spec.schema.description.as_deref(), Some("Color,(0:RED;1:GREEN)"));
	/// ```
	pub fn apply(
		&self,
		declared: DeclaredType<'_>,
		annotation: Option<&PropertyAnnotation>,
		description: Option<&str>,
	) -> Option<PropertySpecification> {
		let annotation = annotation?;

		let schema = match declared {
			DeclaredType::Scalar(scalar) => self.scalar_schema(scalar, annotation, description),
			DeclaredType::Enum(source) => enum_schema(source, annotation, description),
		};

		Some(PropertySpecification {
			schema,
			required: annotation.required,
			hidden: annotation.hidden,
			position: annotation.position,
		})
	}

	fn scalar_schema(
		&self,
		scalar: ScalarType,
		annotation: &PropertyAnnotation,
		description: Option<&str>,
	) -> FieldSchema {
		let mut schema = FieldSchema::scalar(scalar);
		schema.description = description.map(str::to_string);
		schema.read_only = annotation.read_only.then_some(true);
		schema.example = example(annotation).or_else(|| self.default_example(scalar));
		schema
	}

	fn default_example(&self, scalar: ScalarType) -> Option<String> {
		if !self.examples.enabled {
			return None;
		}
		match scalar {
			ScalarType::Integer | ScalarType::Number => Some(self.examples.number.clone()),
			ScalarType::Boolean => Some(self.examples.boolean.clone()),
			_ => None,
		}
	}
}

fn enum_schema(
	source: &EnumSource,
	annotation: &PropertyAnnotation,
	description: Option<&str>,
) -> FieldSchema {
	let mut schema = FieldSchema {
		description: Some(source.descriptor().describe(description)),
		read_only: annotation.read_only.then_some(true),
		example: example(annotation),
		..FieldSchema::default()
	};

	if !annotation.data_type.trim().is_empty() {
		// Unknown type names document as a plain object
		schema.set_type(ScalarType::from_name(&annotation.data_type).unwrap_or(ScalarType::Object));
	} else if let Some(value_type) = source.value_type() {
		schema.set_type(value_type);
	}

	schema.apply_constraint(&parse_constraint(&annotation.allowable_values));
	schema
}

fn example(annotation: &PropertyAnnotation) -> Option<String> {
	(!annotation.example.is_empty()).then(|| annotation.example.clone())
}
