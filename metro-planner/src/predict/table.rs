//! Static table of precomputed delays.

use std::collections::HashMap;

use tracing::warn;

use super::key::DelayKey;

/// Immutable mapping from condition key to delay in minutes.
///
/// Values may be fractional or negative; they are returned to callers
/// exactly as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayTable {
    entries: HashMap<DelayKey, f64>,
}

impl DelayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table document: a JSON object of `"line_hour_weather_holiday_event": minutes`.
    ///
    /// Entries with malformed keys or non-numeric values are skipped and
    /// logged. A key is malformed when it does not split into five fields,
    /// when a weather, holiday or event label contains `_`, or when the hour
    /// is padded or signed (`08`, `+8`). Only a document that is not a JSON
    /// object is an error.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut table = Self::new();
        let mut skipped = 0usize;

        for (raw_key, value) in raw {
            let key = match DelayKey::parse(&raw_key) {
                Ok(key) => key,
                Err(e) => {
                    warn!(error = %e, "skipping delay table entry");
                    skipped += 1;
                    continue;
                }
            };
            let Some(minutes) = value.as_f64() else {
                warn!(key = %raw_key, value = %value, "skipping non-numeric delay");
                skipped += 1;
                continue;
            };
            table.insert(key, minutes);
        }

        if skipped > 0 {
            warn!(skipped, kept = table.len(), "delay table had invalid entries");
        }
        Ok(table)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: DelayKey, minutes: f64) {
        self.entries.insert(key, minutes);
    }

    pub fn get(&self, key: &DelayKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(DelayKey, f64)> for DelayTable {
    fn from_iter<I: IntoIterator<Item = (DelayKey, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DelayKey {
        DelayKey::parse(s).unwrap()
    }

    #[test]
    fn parse_document() {
        let json = r#"{
            "Purple_8_Rain_No_None": 7.4,
            "Green_18_Clear_Festival_Stadium Match": 22,
            "Purple_6_Clear_No_None": -2
        }"#;
        let table = DelayTable::from_json_str(json).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&key("Purple_8_Rain_No_None")), Some(7.4));
        assert_eq!(
            table.get(&key("Green_18_Clear_Festival_Stadium Match")),
            Some(22.0)
        );
        assert_eq!(table.get(&key("Purple_6_Clear_No_None")), Some(-2.0));
        assert_eq!(table.get(&key("Purple_9_Rain_No_None")), None);
    }

    #[test]
    fn skips_invalid_entries() {
        let json = r#"{
            "Purple_8_Rain_No_None": 5,
            "Purple_8_Rain": 5,
            "Purple_99_Rain_No_None": 5,
            "Green_8_Rain_No_None": "late"
        }"#;
        let table = DelayTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn padded_or_signed_hours_do_not_shadow_exact_keys() {
        let json = r#"{
            "Purple_8_Rain_No_None": 5,
            "Purple_08_Rain_No_None": 40,
            "Purple_+8_Clear_No_None": 33
        }"#;
        let table = DelayTable::from_json_str(json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("Purple_8_Rain_No_None")), Some(5.0));
        assert_eq!(table.get(&key("Purple_8_Clear_No_None")), None);
    }

    #[test]
    fn line_with_separator_is_kept() {
        let table = DelayTable::from_json_str(r#"{"Blue_Line_8_Clear_No_None": 33}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("Blue_Line_8_Clear_No_None")), Some(33.0));
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(DelayTable::from_json_str("[1, 2, 3]").is_err());
        assert!(DelayTable::from_json_str("not json").is_err());
    }

    #[test]
    fn empty_document_gives_empty_table() {
        let table = DelayTable::from_json_str("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn insert_replaces() {
        let mut table = DelayTable::new();
        table.insert(key("Purple_8_Rain_No_None"), 1.0);
        table.insert(key("Purple_8_Rain_No_None"), 99.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("Purple_8_Rain_No_None")), Some(99.0));
    }
}
