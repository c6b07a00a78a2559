//! Feature values and mappings.
use std::collections::BTreeMap;

use serde::Serialize;

/// Value of a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Float(f64),
    Bool(bool),
}

impl FeatureValue {
    /// Numeric view, booleans being `1.0`/`0.0`.
    pub fn as_f64(&self) -> f64 {
        match self {
            FeatureValue::Float(v) => *v,
            FeatureValue::Bool(true) => 1.0,
            FeatureValue::Bool(false) => 0.0,
        }
    }

    /// `0.0` or `false`.
    pub fn is_default(&self) -> bool {
        match self {
            FeatureValue::Float(v) => *v == 0.0,
            FeatureValue::Bool(b) => !b,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Bool(b)
    }
}

/// Named feature values of a document.
///
/// Keys are sorted, so two mappings with the same schema iterate in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Features(BTreeMap<&'static str, FeatureValue>);

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<V: Into<FeatureValue>>(&mut self, key: &'static str, value: V) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    /// Numeric value of a feature, if present.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).map(FeatureValue::as_f64)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move every feature of `other` into `self`.
    ///
    /// Keys have to be disjoint, which [super::Extractors] checks when it is built.
    pub fn merge(&mut self, other: Features) {
        for (key, value) in other.0 {
            let previous = self.0.insert(key, value);
            debug_assert!(previous.is_none(), "feature {} emitted twice", key);
        }
    }
}
