//! Declared kinds of documented fields

use docmeta_core::{
	EnrichResult, EnumDescriptor, EnumDescriptorBuilder, EnumLabels, ScalarType, TypeDescriptor,
};

/// A built enum descriptor together with the wire type of the enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSource {
	descriptor: EnumDescriptor,
	value_type: Option<ScalarType>,
}

impl EnumSource {
	pub fn new(descriptor: EnumDescriptor, value_type: Option<ScalarType>) -> Self {
		Self {
			descriptor,
			value_type,
		}
	}

	/// Builds the descriptor of `ty`.
	///
	/// `labels` is the designated field configuration of the type; `None`
	/// documents it by ordinal and constant name.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::{EnumLabels, EnumTable};
	/// use docmeta_openapi::EnumSource;
	///
	/// let status = EnumTable::new("Status")
	///     .with_constants(["ACTIVE", "INACTIVE"])
	///     .column("code", ["A", "I"]);
	///
	/// let source = EnumSource::resolve(&status, Some(&EnumLabels::default())).unwrap();
	/// assert_eq!(source.descriptor().display_text(), "(A:ACTIVE;I:INACTIVE)");
	/// ```
	pub fn resolve<T>(ty: &T, labels: Option<&EnumLabels>) -> EnrichResult<Self>
	where
		T: TypeDescriptor + ?Sized,
	{
		let builder = labels.map_or_else(EnumDescriptorBuilder::new, EnumDescriptorBuilder::from_labels);
		Ok(Self::new(builder.build(ty)?, ty.value_type()))
	}

	pub fn descriptor(&self) -> &EnumDescriptor {
		&self.descriptor
	}

	pub fn value_type(&self) -> Option<ScalarType> {
		self.value_type
	}
}

/// Kind of a documented field as declared in its host type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType<'a> {
	Scalar(ScalarType),
	Enum(&'a EnumSource),
}

impl<'a> DeclaredType<'a> {
	pub fn as_enum(&self) -> Option<&'a EnumSource> {
		match *self {
			Self::Enum(source) => Some(source),
			Self::Scalar(_) => None,
		}
	}
}

impl From<ScalarType> for DeclaredType<'_> {
	fn from(scalar: ScalarType) -> Self {
		Self::Scalar(scalar)
	}
}

impl<'a> From<&'a EnumSource> for DeclaredType<'a> {
	fn from(source: &'a EnumSource) -> Self {
		Self::Enum(source)
	}
}
