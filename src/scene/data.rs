use std::fmt;

use crate::config::series::ItemConfig;

/// Stable identity of a datum across renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct ItemKey(pub String);

impl ItemKey {
    pub fn from_index(idx: usize) -> Self {
        Self(idx.to_string())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One value of the gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// `None` never matches a previous wave: the datum is always treated as new.
    pub key: Option<ItemKey>,
    /// Fill fraction, nominally in `[0, 1]`.
    pub value: f64,
    pub item: ItemConfig,
}

impl Datum {
    pub fn new(key: impl Into<ItemKey>, value: f64) -> Self {
        Self {
            key: Some(key.into()),
            value,
            item: ItemConfig::default(),
        }
    }

    pub fn unkeyed(value: f64) -> Self {
        Self {
            key: None,
            value,
            item: ItemConfig::default(),
        }
    }

    pub fn with_item(mut self, item: ItemConfig) -> Self {
        self.item = item;
        self
    }
}

/// Ordered data of one render pass. Keys are expected to be unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    items: Vec<Datum>,
}

impl DataSet {
    pub fn new(items: Vec<Datum>) -> Self {
        Self { items }
    }

    /// Values keyed by their position, like inline numeric data.
    pub fn from_values(values: &[f64]) -> Self {
        values
            .iter()
            .enumerate()
            .map(|(idx, v)| Datum::new(ItemKey::from_index(idx), *v))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Datum> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Datum> {
        self.items.iter()
    }

    pub fn keys(&self) -> Vec<Option<&ItemKey>> {
        self.items.iter().map(|d| d.key.as_ref()).collect()
    }
}

impl FromIterator<Datum> for DataSet {
    fn from_iter<I: IntoIterator<Item = Datum>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Datum;
    type IntoIter = std::slice::Iter<'a, Datum>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
