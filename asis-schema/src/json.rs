//! Column-oriented JSON view of a batch: `{"columns": {name: [values..]}}`.

use arrow::array::{Array, ArrayRef, Date32Array, DictionaryArray, Float64Array, StringArray, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, UInt8Type};
use arrow::record_batch::RecordBatch;
use serde_json::{json, Map, Value};

use crate::section::Section;
use crate::SchemaError;

/// Render a batch as `{table, section, num_rows, columns}` with columns in schema order.
pub fn to_column_json(kind: &str, section: Section, batch: &RecordBatch) -> Result<Value, SchemaError> {
    let schema = batch.schema();
    let mut columns = Map::new();
    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        columns.insert(field.name().clone(), Value::Array(column_values(field.name(), column)?));
    }
    Ok(json!({
        "table": kind,
        "section": section.slug(),
        "num_rows": batch.num_rows(),
        "columns": columns,
    }))
}

fn column_values(name: &str, column: &ArrayRef) -> Result<Vec<Value>, SchemaError> {
    let unsupported = || SchemaError::UnsupportedType {
        column: name.to_string(),
        data_type: column.data_type().to_string(),
    };

    let mut out = Vec::with_capacity(column.len());
    match column.data_type() {
        DataType::Utf8 => {
            let arr = column.as_any().downcast_ref::<StringArray>().ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                out.push(if arr.is_null(i) { Value::Null } else { Value::from(arr.value(i)) });
            }
        }
        DataType::UInt32 => {
            let arr = column.as_any().downcast_ref::<UInt32Array>().ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                out.push(if arr.is_null(i) { Value::Null } else { Value::from(arr.value(i)) });
            }
        }
        DataType::UInt64 => {
            let arr = column.as_any().downcast_ref::<UInt64Array>().ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                out.push(if arr.is_null(i) { Value::Null } else { Value::from(arr.value(i)) });
            }
        }
        DataType::Float64 => {
            let arr = column.as_any().downcast_ref::<Float64Array>().ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                // NaN has no JSON form.
                let v = serde_json::Number::from_f64(arr.value(i)).map(Value::Number);
                out.push(if arr.is_null(i) { Value::Null } else { v.unwrap_or(Value::Null) });
            }
        }
        DataType::Date32 => {
            let arr = column.as_any().downcast_ref::<Date32Array>().ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                let v = arr
                    .value_as_date(i)
                    .filter(|_| !arr.is_null(i))
                    .map(|d| Value::from(d.format("%Y-%m-%d").to_string()));
                out.push(v.unwrap_or(Value::Null));
            }
        }
        DataType::Dictionary(key, value)
            if key.as_ref() == &DataType::UInt8 && value.as_ref() == &DataType::Utf8 =>
        {
            let arr = column
                .as_any()
                .downcast_ref::<DictionaryArray<UInt8Type>>()
                .ok_or_else(unsupported)?;
            let values = arr
                .values()
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(unsupported)?;
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    out.push(Value::Null);
                } else {
                    let k = arr.keys().value(i) as usize;
                    out.push(Value::from(values.value(k)));
                }
            }
        }
        _ => return Err(unsupported()),
    }
    Ok(out)
}
