use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// Row to model conversion used by every repository.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Reads a text column into a bounded string.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    column: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(column)?;
    bounded_text(&value, column)
}

/// Fails when `value` does not fit in `N` bytes. The column's VARCHAR bound
/// should make this unreachable.
pub(crate) fn bounded_text<const N: usize>(
    value: &str,
    column: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("column '{column}' holds {} bytes, limit is {N}", value.len()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_text() {
        let ok: HeaplessString<8> = bounded_text("TL-1", "trade_license_number").unwrap();
        assert_eq!(ok.as_str(), "TL-1");

        let err = bounded_text::<4>("too long", "full_name").unwrap_err();
        assert_eq!(err.to_string(), "column 'full_name' holds 8 bytes, limit is 4");
    }
}
