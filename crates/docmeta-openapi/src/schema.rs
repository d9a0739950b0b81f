//! OpenAPI 3.0 field schema

use docmeta_core::{ScalarType, ValueConstraint};
use serde::{Deserialize, Serialize};

/// OpenAPI 3.0 schema of a single property or parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldSchema {
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub schema_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub format: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub minimum: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub maximum: Option<f64>,
	#[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
	pub exclusive_minimum: Option<bool>,
	#[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
	pub exclusive_maximum: Option<bool>,
	#[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
	pub enum_values: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
	#[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
	pub read_only: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nullable: Option<bool>,
}

impl FieldSchema {
	/// Schema holding only the type and format of `scalar`.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::ScalarType;
	/// use docmeta_openapi::FieldSchema;
	///
	/// let schema = FieldSchema::scalar(ScalarType::Integer);
	/// assert_eq!(schema.schema_type.as_deref(), Some("integer"));
	/// assert_eq!(schema.format.as_deref(), Some("int64"));
	/// ```
	pub fn scalar(scalar: ScalarType) -> Self {
		let mut schema = Self::default();
		schema.set_type(scalar);
		schema
	}

	/// Replaces type and format with those of `scalar`.
	pub fn set_type(&mut self, scalar: ScalarType) {
		let (schema_type, format) = match scalar {
			ScalarType::String => ("string", None),
			ScalarType::Integer => ("integer", Some("int64")),
			ScalarType::Number => ("number", Some("double")),
			ScalarType::Boolean => ("boolean", None),
			ScalarType::Object => ("object", None),
		};
		self.schema_type = Some(schema_type.to_string());
		self.format = format.map(str::to_string);
	}

	/// Writes an allowable-values constraint into the schema.
	///
	/// A non-empty list becomes `enum`. A range becomes `minimum`/`maximum`
	/// with the boolean exclusive flags; bounds that are not numbers are
	/// dropped.
	pub fn apply_constraint(&mut self, constraint: &ValueConstraint) {
		match constraint {
			ValueConstraint::List { values } => {
				if !values.is_empty() {
					self.enum_values = Some(values.clone());
				}
			}
			ValueConstraint::Range {
				min,
				min_exclusive,
				max,
				max_exclusive,
			} => {
				self.minimum = min.as_deref().and_then(numeric_bound);
				self.exclusive_minimum = self.minimum.and(min_exclusive.then_some(true));
				self.maximum = max.as_deref().and_then(numeric_bound);
				self.exclusive_maximum = self.maximum.and(max_exclusive.then_some(true));
			}
		}
	}
}

fn numeric_bound(bound: &str) -> Option<f64> {
	match bound.parse::<f64>() {
		Ok(value) if value.is_finite() => Some(value),
		_ => {
			tracing::warn!(bound, "Ignoring non-numeric range bound");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use docmeta_core::parse_constraint;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(ScalarType::String, "string", None)]
	#[case(ScalarType::Integer, "integer", Some("int64"))]
	#[case(ScalarType::Number, "number", Some("double"))]
	#[case(ScalarType::Boolean, "boolean", None)]
	#[case(ScalarType::Object, "object", None)]
	fn test_scalar_mapping(
		#[case] scalar: ScalarType,
		#[case] schema_type: &str,
		#[case] format: Option<&str>,
	) {
		let schema = FieldSchema::scalar(scalar);
		assert_eq!(schema.schema_type.as_deref(), Some(schema_type));
		assert_eq!(schema.format.as_deref(), format);
	}

	#[rstest]
	fn test_list_constraint() {
		let mut schema = FieldSchema::scalar(ScalarType::String);
		schema.apply_constraint(&parse_constraint("A,B"));
		assert_eq!(schema.enum_values, Some(vec!["A".to_string(), "B".to_string()]));
	}

	#[rstest]
	fn test_empty_list_leaves_enum_unset() {
		let mut schema = FieldSchema::default();
		schema.apply_constraint(&parse_constraint(""));
		assert_eq!(schema.enum_values, None);
	}

	#[rstest]
	fn test_range_constraint() {
		let mut schema = FieldSchema::scalar(ScalarType::Integer);
		schema.apply_constraint(&parse_constraint("range(1,infinity)"));
		assert_eq!(schema.minimum, Some(1.0));
		assert_eq!(schema.exclusive_minimum, Some(true));
		assert_eq!(schema.maximum, None);
		assert_eq!(schema.exclusive_maximum, None);
	}

	#[rstest]
	fn test_non_numeric_bound_dropped() {
		let mut schema = FieldSchema::default();
		schema.apply_constraint(&parse_constraint("range[a,10)"));
		assert_eq!(schema.minimum, None);
		assert_eq!(schema.exclusive_minimum, None);
		assert_eq!(schema.maximum, Some(10.0));
		assert_eq!(schema.exclusive_maximum, Some(true));
	}

	#[rstest]
	fn test_serialization_keys() {
		let mut schema = FieldSchema::scalar(ScalarType::Number);
		schema.apply_constraint(&parse_constraint("range[0,1)"));
		schema.read_only = Some(true);

		let value = serde_json::to_value(&schema).unwrap();
		assert_eq!(
			value,
			json!({
				"type": "number",
				"format": "double",
				"minimum": 0.0,
				"maximum": 1.0,
				"exclusiveMaximum": true,
				"readOnly": true
			})
		);
	}
}
