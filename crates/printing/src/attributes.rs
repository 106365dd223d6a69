use std::collections::BTreeMap;

/// One value held under an attribute key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Integer(i32),
}

/// Key-to-values store produced by a device capability negotiation.
/// 裝置能力協商後產生的鍵值儲存結構。
///
/// The protocol layer populates the bag; everything downstream only reads
/// it. Every read accessor is total: absent keys yield the caller-supplied
/// default or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
    entries: BTreeMap<String, Vec<AttributeValue>>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one text value under `key`.
    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(AttributeValue::Text(value.into()));
    }

    /// Appends one integer value under `key`.
    pub fn insert_integer(&mut self, key: impl Into<String>, value: i32) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(AttributeValue::Integer(value));
    }

    /// Appends a run of text values under `key`.
    pub fn insert_texts<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(key.into()).or_default();
        for value in values {
            entry.push(AttributeValue::Text(value.into()));
        }
    }

    /// Appends a run of integer values under `key`.
    pub fn insert_integers(&mut self, key: impl Into<String>, values: impl IntoIterator<Item = i32>) {
        let entry = self.entries.entry(key.into()).or_default();
        for value in values {
            entry.push(AttributeValue::Integer(value));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First text value under `key`, or `default` when the key is absent or
    /// holds no text values.
    pub fn first_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries
            .get(key)
            .and_then(|values| {
                values.iter().find_map(|value| match value {
                    AttributeValue::Text(text) => Some(text.as_str()),
                    AttributeValue::Integer(_) => None,
                })
            })
            .unwrap_or(default)
    }

    /// All text values under `key`; integer values are skipped. Empty when
    /// the key is absent.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.entries
            .get(key)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|value| match value {
                        AttributeValue::Text(text) => Some(text.clone()),
                        AttributeValue::Integer(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First integer value under `key`, or `default` when the key is absent
    /// or holds no integer values.
    pub fn first_integer(&self, key: &str, default: i32) -> i32 {
        self.entries
            .get(key)
            .and_then(|values| {
                values.iter().find_map(|value| match value {
                    AttributeValue::Integer(number) => Some(*number),
                    AttributeValue::Text(_) => None,
                })
            })
            .unwrap_or(default)
    }

    /// All integer values under `key`; text values are skipped. Empty when
    /// the key is absent.
    pub fn integers(&self, key: &str) -> Vec<i32> {
        self.entries
            .get(key)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|value| match value {
                        AttributeValue::Integer(number) => Some(*number),
                        AttributeValue::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
