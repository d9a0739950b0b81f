//! In-memory enum type description
//!
//! [`EnumTable`] is the [`TypeDescriptor`] to reach for when enum metadata
//! comes from somewhere other than Rust code: a schema file, a database
//! catalog, a code generator. Constants are rows, fields are columns.

use super::introspect::{FieldAccessor, FieldValue, ScalarType, TypeDescriptor};
use crate::error::{EnrichError, EnrichResult};

/// One constant of an [`EnumTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConstant {
	ordinal: usize,
	name: String,
}

impl TableConstant {
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

/// One field of an [`EnumTable`], holding a value per constant
#[derive(Debug, Clone)]
pub struct TableColumn {
	type_name: String,
	field: String,
	values: Vec<Option<FieldValue>>,
	restricted: Option<String>,
}

impl FieldAccessor<TableConstant> for TableColumn {
	fn field_name(&self) -> &str {
		&self.field
	}

	fn read(&self, constant: &TableConstant) -> EnrichResult<Option<FieldValue>> {
		if let Some(reason) = &self.restricted {
			return Err(EnrichError::FieldAccess {
				type_name: self.type_name.clone(),
				field: self.field.clone(),
				constant: constant.name.clone(),
				reason: reason.clone(),
			});
		}
		Ok(self.values.get(constant.ordinal).cloned().flatten())
	}
}

/// Enum type described by rows of constants and columns of field values
///
/// # Examples
///
/// ```
/// use docmeta_core::enums::{EnumTable, TypeDescriptor};
///
/// let status = EnumTable::new("OrderStatus")
///     .with_constants(["PENDING", "SHIPPED"])
///     .column("code", [10, 20])
///     .column("message", ["Pending", "Shipped"]);
///
/// assert_eq!(status.constants().len(), 2);
/// assert!(status.field_accessor("code").is_ok());
/// assert!(status.field_accessor("label").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EnumTable {
	name: String,
	constants: Vec<TableConstant>,
	columns: Vec<TableColumn>,
	value_type: Option<ScalarType>,
}

impl EnumTable {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			constants: Vec::new(),
			columns: Vec::new(),
			value_type: None,
		}
	}

	/// Appends one constant.
	pub fn constant(mut self, name: impl Into<String>) -> Self {
		let ordinal = self.constants.len();
		self.constants.push(TableConstant {
			ordinal,
			name: name.into(),
		});
		self
	}

	/// Appends constants in order.
	pub fn with_constants<I, S>(self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		names.into_iter().fold(self, |table, name| table.constant(name))
	}

	/// Adds a field with one value per constant, by declaration position.
	///
	/// Constants past the end of `values` have no value for the field. A field
	/// with the same name replaces the earlier one.
	pub fn column<I, V>(self, field: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<FieldValue>,
	{
		self.nullable_column(field, values.into_iter().map(|v| Some(v.into())))
	}

	/// Adds a field whose values may be missing for some constants.
	pub fn nullable_column<I>(mut self, field: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = Option<FieldValue>>,
	{
		let column = TableColumn {
			type_name: self.name.clone(),
			field: field.into(),
			values: values.into_iter().collect(),
			restricted: None,
		};
		self.push_column(column);
		self
	}

	/// Adds a field that resolves but cannot be read.
	///
	/// Reading it fails with [`EnrichError::FieldAccess`] carrying `reason`.
	pub fn restricted_column(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
		let column = TableColumn {
			type_name: self.name.clone(),
			field: field.into(),
			values: Vec::new(),
			restricted: Some(reason.into()),
		};
		self.push_column(column);
		self
	}

	/// Declares the scalar type the constants serialize as.
	pub fn with_value_type(mut self, value_type: ScalarType) -> Self {
		self.value_type = Some(value_type);
		self
	}

	fn push_column(&mut self, column: TableColumn) {
		self.columns.retain(|existing| existing.field != column.field);
		self.columns.push(column);
	}
}

impl TypeDescriptor for EnumTable {
	type Constant = TableConstant;

	fn type_name(&self) -> &str {
		&self.name
	}

	fn constants(&self) -> &[TableConstant] {
		&self.constants
	}

	fn constant_name(&self, constant: &TableConstant) -> String {
		constant.name.clone()
	}

	fn field_accessor(&self, field: &str) -> EnrichResult<&dyn FieldAccessor<TableConstant>> {
		self.columns
			.iter()
			.find(|column| column.field == field)
			.map(|column| column as &dyn FieldAccessor<TableConstant>)
			.ok_or_else(|| EnrichError::FieldNotFound {
				type_name: self.name.clone(),
				field: field.to_string(),
			})
	}

	fn value_type(&self) -> Option<ScalarType> {
		self.value_type
	}
}
