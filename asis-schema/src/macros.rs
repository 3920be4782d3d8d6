//! Macro that turns the dashboard table declarations into Arrow schemas and batch wrappers.

use crate::SchemaError;

/// Runtime conformance check: a batch must carry exactly the declared columns, in order.
pub fn __check_schema(
    table_name: &str,
    declared: &::arrow::datatypes::Schema,
    actual: &::arrow::datatypes::Schema,
) -> Result<(), SchemaError> {
    if declared.fields().len() != actual.fields().len() {
        return Err(SchemaError::Mismatch {
            table: table_name.to_string(),
            detail: format!(
                "expected {} columns, got {}",
                declared.fields().len(),
                actual.fields().len()
            ),
        });
    }
    for (want, got) in declared.fields().iter().zip(actual.fields().iter()) {
        if want.name() != got.name() || want.data_type() != got.data_type() {
            return Err(SchemaError::Mismatch {
                table: table_name.to_string(),
                detail: format!(
                    "expected column {}: {}, got {}: {}",
                    want.name(),
                    want.data_type(),
                    got.name(),
                    got.data_type()
                ),
            });
        }
    }
    Ok(())
}

/// Map DSL token -> Arrow DataType.
#[macro_export]
macro_rules! __ty_to_arrow {
    ( Utf8 ) => { ::arrow::datatypes::DataType::Utf8 };
    ( UInt32 ) => { ::arrow::datatypes::DataType::UInt32 };
    ( UInt64 ) => { ::arrow::datatypes::DataType::UInt64 };
    ( Float64 ) => { ::arrow::datatypes::DataType::Float64 };
    ( Date32 ) => { ::arrow::datatypes::DataType::Date32 };
    ( DictU8Utf8 ) => {
        ::arrow::datatypes::DataType::Dictionary(
            Box::new(::arrow::datatypes::DataType::UInt8),
            Box::new(::arrow::datatypes::DataType::Utf8),
        )
    };
}

/// Declarative table definitions. Generates schemas and batch wrappers.
#[macro_export]
macro_rules! define_tables {
    (
        $(
            table $Name:ident {
                section: $section:path,
                kind: $kind:literal,
                fields: {
                    $( $fname:ident : $fty:ident ),* $(,)?
                }
            }
        ),* $(,)?
    ) => {
        $(
            /// Strongly-typed wrapper for the `$Name` table.
            #[derive(Clone, Debug)]
            pub struct $Name {
                inner: ::std::sync::Arc<::arrow::record_batch::RecordBatch>,
            }

            impl $Name {
                pub const KIND: &'static str = $kind;
                pub const SECTION: $crate::section::Section = $section;

                /// Arrow schema for this table.
                pub fn schema() -> ::arrow::datatypes::Schema {
                    ::arrow::datatypes::Schema::new(vec![
                        $(
                            ::arrow::datatypes::Field::new(
                                stringify!($fname),
                                $crate::__ty_to_arrow!($fty),
                                false,
                            ),
                        )*
                    ])
                }

                /// Construct a new batch wrapper (checks the batch against the declared schema).
                pub fn new(
                    inner: ::std::sync::Arc<::arrow::record_batch::RecordBatch>,
                ) -> Result<Self, $crate::SchemaError> {
                    $crate::macros::__check_schema(
                        stringify!($Name),
                        &Self::schema(),
                        inner.schema().as_ref(),
                    )?;
                    Ok(Self { inner })
                }

                /// Build from column arrays in declaration order.
                pub(crate) fn from_columns(
                    columns: Vec<::arrow::array::ArrayRef>,
                ) -> Result<Self, $crate::SchemaError> {
                    let batch = ::arrow::record_batch::RecordBatch::try_new(
                        ::std::sync::Arc::new(Self::schema()),
                        columns,
                    )?;
                    Self::new(::std::sync::Arc::new(batch))
                }

                /// Underlying Arrow batch.
                pub fn inner(&self) -> &::std::sync::Arc<::arrow::record_batch::RecordBatch> {
                    &self.inner
                }

                pub fn num_rows(&self) -> usize {
                    self.inner.num_rows()
                }
            }

            impl $crate::ColumnTable for $Name {
                fn kind(&self) -> &'static str {
                    Self::KIND
                }

                fn section(&self) -> $crate::section::Section {
                    Self::SECTION
                }

                fn batch(&self) -> &::arrow::record_batch::RecordBatch {
                    self.inner.as_ref()
                }
            }
        )*
    };
}
