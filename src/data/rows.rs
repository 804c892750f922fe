use super::Record;
use crate::error::{Result, UtilErr};

/// Parses string records into a rectangular numeric dataset.
///
/// Surrounding whitespace is trimmed from every field before parsing.
///
/// # Errors
/// * `UtilErr::Parse` for the first field that isn't a number, with a
///   1-based record index (header and skipped lines are not counted) and a
///   0-based column.
/// * `UtilErr::ShapeMismatch` if the records differ in length.
pub fn to_numeric(records: &[Record]) -> Result<Vec<Vec<f64>>> {
    let expected = records.first().map(Vec::len).unwrap_or_default();

    records
        .iter()
        .enumerate()
        .map(|(i, record)| -> Result<Vec<f64>> {
            if record.len() != expected {
                return Err(UtilErr::ShapeMismatch {
                    what: "record",
                    got: record.len(),
                    expected,
                });
            }

            record
                .iter()
                .enumerate()
                .map(|(column, field)| {
                    field.trim().parse::<f64>().map_err(|_| UtilErr::Parse {
                        record: i + 1,
                        column,
                        field: field.clone(),
                    })
                })
                .collect()
        })
        .collect()
}
