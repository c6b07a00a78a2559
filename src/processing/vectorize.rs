/*! Feature mapping vectorization

[DictVectorizer] turns feature mappings into fixed width rows.

It is fitted once (on the train split): its columns are the sorted names of every feature seen.
Transforming then maps booleans to `1.0`/`0.0`, fills missing features with `0.0`
and ignores features that were not seen during fitting.
!*/
use std::collections::{BTreeSet, HashMap};

use crate::features::Features;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictVectorizer {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl DictVectorizer {
    /// Fit on a list of mappings.
    pub fn fit(mappings: &[Features]) -> Self {
        let names: BTreeSet<&str> = mappings.iter().flat_map(|f| f.keys()).collect();
        Self::from_columns(names.into_iter().map(String::from).collect())
    }

    /// Vectorizer with known columns, in the given order.
    pub fn from_columns(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { columns, index }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn transform_one(&self, features: &Features) -> Vec<f64> {
        let mut row = vec![0.0; self.columns.len()];
        for (name, value) in features.iter() {
            if let Some(idx) = self.index.get(name) {
                row[*idx] = value.as_f64();
            }
        }
        row
    }

    pub fn transform(&self, mappings: &[Features]) -> Vec<Vec<f64>> {
        mappings.iter().map(|f| self.transform_one(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DictVectorizer;
    use crate::features::Features;

    fn mapping(values: &[(&'static str, f64)], flags: &[(&'static str, bool)]) -> Features {
        let mut f = Features::new();
        for (k, v) in values {
            f.insert(*k, *v);
        }
        for (k, v) in flags {
            f.insert(*k, *v);
        }
        f
    }

    #[test]
    fn sorted_columns() {
        let train = vec![
            mapping(&[("b", 1.0)], &[("a", true)]),
            mapping(&[("c", 2.0)], &[]),
        ];
        let v = DictVectorizer::fit(&train);
        assert_eq!(v.columns(), &["a", "b", "c"]);
        assert_eq!(v.transform(&train), vec![vec![1.0, 1.0, 0.0], vec![0.0, 0.0, 2.0]]);
    }

    #[test]
    fn unseen_features_are_ignored() {
        let v = DictVectorizer::fit(&[mapping(&[("x", 1.0)], &[])]);
        let row = v.transform_one(&mapping(&[("x", 0.5), ("y", 3.0)], &[("z", true)]));
        assert_eq!(row, vec![0.5]);
    }

    #[test]
    fn false_is_zero() {
        let v = DictVectorizer::fit(&[mapping(&[], &[("flag", false)])]);
        assert_eq!(v.transform_one(&mapping(&[], &[("flag", false)])), vec![0.0]);
        assert_eq!(v.transform_one(&mapping(&[], &[("flag", true)])), vec![1.0]);
    }

    #[test]
    fn empty_fit() {
        let v = DictVectorizer::fit(&[]);
        assert_eq!(v.width(), 0);
        assert_eq!(v.transform_one(&mapping(&[("x", 1.0)], &[])), Vec::<f64>::new());
    }
}
