//! The capability a type needs to be shown in a [`DataTable`](super::DataTable).

use std::collections::BTreeMap;

use super::value::CellValue;

/// A row the table can look properties up on.
///
/// The table never assumes a schema: `value` for an unknown key returns
/// [`CellValue::Empty`], and search runs over everything `values` yields,
/// including properties no column displays.
pub trait TableRow {
    fn value(&self, key: &str) -> CellValue;

    fn values(&self) -> Vec<CellValue>;
}

/// Schema-less row keyed by property name.
pub type Record = BTreeMap<String, CellValue>;

/// Builds a [`Record`] from `(key, value)` pairs.
pub fn record<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl TableRow for Record {
    fn value(&self, key: &str) -> CellValue {
        self.get(key).cloned().unwrap_or_default()
    }

    fn values(&self) -> Vec<CellValue> {
        self.values().cloned().collect()
    }
}

impl TableRow for serde_json::Map<String, serde_json::Value> {
    fn value(&self, key: &str) -> CellValue {
        self.get(key).map(CellValue::from).unwrap_or_default()
    }

    fn values(&self) -> Vec<CellValue> {
        self.values().map(CellValue::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup() {
        let row = record([("name", CellValue::from("Ani")), ("age", CellValue::from(25))]);
        assert_eq!(row.value("name"), CellValue::from("Ani"));
        assert_eq!(row.value("missing"), CellValue::Empty);
        assert_eq!(TableRow::values(&row).len(), 2);
    }

    #[test]
    fn test_json_object_lookup() {
        let serde_json::Value::Object(row) = serde_json::json!({"name": "Coki", "age": 40}) else {
            panic!("expected an object");
        };
        assert_eq!(row.value("age"), CellValue::Number(40.0));
        assert_eq!(row.value("nope"), CellValue::Empty);
        assert_eq!(TableRow::values(&row).len(), 2);
    }
}
