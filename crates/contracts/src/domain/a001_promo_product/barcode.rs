use super::row::{ProductRow, RowStatus};

/// GTIN-8/EAN-8, UPC-A, EAN-13 and the 7-digit internal codes still in use.
pub const VALID_BARCODE_LENGTHS: [usize; 4] = [7, 8, 12, 13];

/// `true` when a non-empty barcode has a length outside
/// [`VALID_BARCODE_LENGTHS`]. An empty field is neutral.
pub fn has_format_error(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    !VALID_BARCODE_LENGTHS.contains(&value.chars().count())
}

/// Format check run by the bulk "validate format" action.
///
/// Only the length error is touched; price and GTIN marks are left alone
/// unless the barcode is malformed, in which case the format error wins.
pub fn apply_format_check(row: &mut ProductRow, barcode_field: &str) {
    if has_format_error(row.value(barcode_field)) {
        row.status = RowStatus::LengthError;
    } else if row.status == RowStatus::LengthError {
        row.status = RowStatus::Unvalidated;
    }
}

/// Check run on every keystroke in the barcode field.
///
/// Editing the barcode invalidates any earlier database confirmation, so
/// valid/invalid marks are dropped along with the old length error.
pub fn apply_barcode_input(row: &mut ProductRow, barcode_field: &str) {
    if has_format_error(row.value(barcode_field)) {
        row.status = RowStatus::LengthError;
        return;
    }
    if matches!(
        row.status,
        RowStatus::LengthError | RowStatus::ConfirmedValid | RowStatus::ConfirmedInvalid
    ) {
        row.status = RowStatus::Unvalidated;
    }
}
