//! Parameter Enrichment Tests
//!
//! Tests for request parameter enrichment of scalar and enum parameters.

use docmeta_core::{EnumLabels, EnumTable, ScalarType, ValueConstraint};
use docmeta_openapi::{
	DeclaredType, ENUM_PLUGIN_ORDER, EnumSource, ParameterAnnotation, ParameterEnricher,
	PropertyDescriptions,
};
use rstest::*;

#[fixture]
fn status_table() -> EnumTable {
	EnumTable::new("Status")
		.with_constants(["ACTIVE", "INACTIVE"])
		.column("code", ["A", "I"])
		.column("message", ["Active", "Inactive"])
}

#[rstest]
fn test_enum_parameter_lists_codes(status_table: EnumTable) {
	let source = EnumSource::resolve(&status_table, Some(&EnumLabels::default())).unwrap();
	let spec = ParameterEnricher::new()
		.apply(
			"status",
			DeclaredType::Enum(&source),
			Some(&ParameterAnnotation::new("Status filter")),
		)
		.unwrap();

	assert_eq!(spec.name, "status");
	assert_eq!(spec.description, "Status filter(A:Active;I:Inactive)");
	assert_eq!(spec.allowable_values, Some(ValueConstraint::list(["A", "I"])));
	assert_eq!(spec.order, ENUM_PLUGIN_ORDER);

	let schema = spec.schema.unwrap();
	assert_eq!(schema.schema_type.as_deref(), Some("string"));
	assert_eq!(schema.enum_values, Some(vec!["A".to_string(), "I".to_string()]));
}

#[rstest]
fn test_unlabeled_enum_parameter_lists_names(status_table: EnumTable) {
	let source = EnumSource::resolve(&status_table, None).unwrap();
	let spec = ParameterEnricher::new()
		.apply(
			"status",
			DeclaredType::Enum(&source),
			Some(&ParameterAnnotation::new("Status")),
		)
		.unwrap();

	assert_eq!(spec.description, "Status,(0:ACTIVE;1:INACTIVE)");
	assert_eq!(
		spec.allowable_values,
		Some(ValueConstraint::list(["ACTIVE", "INACTIVE"]))
	);
}

#[rstest]
fn test_enum_ignores_annotation_allowable_values(status_table: EnumTable) {
	let source = EnumSource::resolve(&status_table, Some(&EnumLabels::default())).unwrap();
	let annotation = ParameterAnnotation::new("Status").allowable_values("X,Y");
	let spec = ParameterEnricher::new()
		.apply("status", DeclaredType::Enum(&source), Some(&annotation))
		.unwrap();
	assert_eq!(spec.allowable_values, Some(ValueConstraint::list(["A", "I"])));
}

#[rstest]
fn test_enum_schema_uses_value_type(status_table: EnumTable) {
	let table = status_table.with_value_type(ScalarType::Integer);
	let source = EnumSource::resolve(&table, None).unwrap();
	let spec = ParameterEnricher::new()
		.apply(
			"status",
			DeclaredType::Enum(&source),
			Some(&ParameterAnnotation::default()),
		)
		.unwrap();
	assert_eq!(
		spec.schema.and_then(|s| s.schema_type).as_deref(),
		Some("integer")
	);
}

#[rstest]
#[case("range[1,100]", ValueConstraint::Range {
	min: Some("1".to_string()),
	min_exclusive: false,
	max: Some("100".to_string()),
	max_exclusive: false,
})]
#[case("asc, desc", ValueConstraint::list(["asc", "desc"]))]
fn test_scalar_parameter_parses_allowable_values(
	#[case] expression: &str,
	#[case] expected: ValueConstraint,
) {
	let annotation = ParameterAnnotation::new("Param").allowable_values(expression);
	let spec = ParameterEnricher::new()
		.apply("p", DeclaredType::Scalar(ScalarType::Integer), Some(&annotation))
		.unwrap();
	assert_eq!(spec.allowable_values, Some(expected));
	assert_eq!(spec.schema, None);
}

#[rstest]
fn test_description_placeholders(status_table: EnumTable) {
	let descriptions = PropertyDescriptions::new().property("status.doc", "Account status");
	let enricher = ParameterEnricher::with_descriptions(descriptions);
	let source = EnumSource::resolve(&status_table, Some(&EnumLabels::default())).unwrap();

	let spec = enricher
		.apply(
			"status",
			DeclaredType::Enum(&source),
			Some(&ParameterAnnotation::new("${status.doc}")),
		)
		.unwrap();
	assert_eq!(spec.description, "Account status(A:Active;I:Inactive)");

	let spec = enricher
		.apply(
			"page",
			DeclaredType::Scalar(ScalarType::Integer),
			Some(&ParameterAnnotation::new("${page.doc:Page number}")),
		)
		.unwrap();
	assert_eq!(spec.description, "Page number");
}
