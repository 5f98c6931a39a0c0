//! Byte capacities of free-text columns.
//!
//! `VARCHAR(n)` bounds characters while `HeaplessString<N>` bounds UTF-8
//! bytes. One character takes at most four bytes, so a column of `n`
//! characters always fits in `varchar_bytes(n)`.

pub const fn varchar_bytes(chars: usize) -> usize {
    chars * 4
}

/// `VARCHAR(255)` free text: names and filenames.
pub const NAME_BYTES: usize = varchar_bytes(255);

/// `VARCHAR(100)`: trade license number.
pub const LICENSE_NUMBER_BYTES: usize = varchar_bytes(100);

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;

    #[test]
    fn test_capacity_holds_widest_characters() {
        let arabic = "\u{0634}".repeat(255);
        assert!(HeaplessString::<NAME_BYTES>::try_from(arabic.as_str()).is_ok());

        let emoji = "\u{1F600}".repeat(100);
        assert!(HeaplessString::<LICENSE_NUMBER_BYTES>::try_from(emoji.as_str()).is_ok());
    }
}
