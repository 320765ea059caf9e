use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_row<T: AsRef<str>>(cells: &[T]) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_row<T: AsRef<str>>(cells: &[T]) -> Self {
        let row = cells
            .iter()
            .map(|cell| Value::String(cell.as_ref().to_owned()))
            .collect();

        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(vec![row]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_builds_a_single_row() {
        let value_range = ValueRange::from_row(&["#", "Company Name", "Notes"]);

        assert_eq!(value_range.major_dimension.as_deref(), Some("ROWS"));
        let values = value_range.values.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(
            values[0],
            vec![
                Value::String("#".into()),
                Value::String("Company Name".into()),
                Value::String("Notes".into()),
            ]
        );
    }
}
