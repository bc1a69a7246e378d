//! Parsing of comma-separated box fields, as typed on a command line.

use thiserror::Error;

use crate::measurement::Measurements;

/// Error type for box field lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxSpecError {
    /// The list did not have exactly four fields.
    #[error("expected 4 comma-separated fields (top,right,bottom,left), got {0}")]
    FieldCount(usize),
    /// Every field was blank, so there is nothing to add.
    #[error("at least one of top, right, bottom, left must be set")]
    Empty,
}

/// Parse `"top,right,bottom,left"`. Blank fields are unset.
///
/// # Errors
///
/// Returns [`BoxSpecError::FieldCount`] unless there are exactly four
/// fields, and [`BoxSpecError::Empty`] when all four are blank.
pub fn parse_box_fields(raw: &str) -> Result<Measurements, BoxSpecError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [top, right, bottom, left] = fields.as_slice() else {
        return Err(BoxSpecError::FieldCount(fields.len()));
    };
    let measurements = Measurements::from_fields(top, right, bottom, left);
    if measurements.is_empty() {
        return Err(BoxSpecError::Empty);
    }
    Ok(measurements)
}
