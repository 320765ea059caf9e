use std::fmt::Formatter;

/// 1-based spreadsheet column, rendered as A1 letters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn new(value: u32) -> Self {
        if value == 0 {
            panic!("Column number cannot be zero");
        }
        Column(value)
    }

    /// Builds a column from a 0-based index (the order used by both APIs).
    pub fn from_index(index: usize) -> Self {
        Column::new(index as u32 + 1)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", number_to_letters(self.0))
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Show both the numeric and letter representation
        write!(f, "Column(u32: {}, letters: {})", self.0, self)
    }
}

impl From<u32> for Column {
    fn from(value: u32) -> Self {
        Column::new(value)
    }
}

impl From<Column> for String {
    fn from(col: Column) -> Self {
        number_to_letters(col.0)
    }
}

fn number_to_letters(number: u32) -> String {
    if number == 0 {
        panic!("Column number cannot be zero");
    }

    let mut number = number;
    let mut result = String::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        let letter = (remainder as u8 + b'A') as char;
        result.push(letter);
        number = (number - remainder) / 26;
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_display_a() {
        let col = Column::new(1);
        assert_eq!(col.to_string(), "A");
    }

    #[test]
    fn test_column_display_z() {
        let col = Column::new(26);
        assert_eq!(col.to_string(), "Z");
    }

    #[test]
    fn test_column_display_aa() {
        let col = Column::new(27);
        assert_eq!(col.to_string(), "AA");
    }

    #[test]
    fn test_column_display_az() {
        let col = Column::new(52);
        assert_eq!(col.to_string(), "AZ");
    }

    #[test]
    fn test_column_display_ba() {
        let col = Column::new(53);
        assert_eq!(col.to_string(), "BA");
    }

    #[test]
    fn test_column_from_index() {
        assert_eq!(Column::from_index(0), Column::new(1));
        assert_eq!(Column::from_index(8).to_string(), "I");
    }

    #[test]
    fn test_column_from_u32() {
        let col: Column = 5.into();
        assert_eq!(col, Column::new(5));
    }

    #[test]
    fn test_column_to_string_letters() {
        let col = Column::new(28);
        let s: String = col.into();
        assert_eq!(s, "AB");
    }

    #[test]
    #[should_panic(expected = "Column number cannot be zero")]
    fn test_column_zero_panics() {
        let _ = Column::new(0);
    }
}
