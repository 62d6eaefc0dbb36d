//! TF-IDF vector space over a small in-memory corpus.
//!
//! Weights follow the smoothed scheme: `tf(t, d) * (ln((1 + n) / (1 + df(t))) + 1)`,
//! with raw counts as term frequency and every row L2-normalized.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::ranking::stop_words::StopWords;
use crate::ranking::tokenizer::tokenize;

/// Sparse row: `(vocabulary index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    /// Scales to unit length. Zero vectors are left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Output of [`TfIdfVectorizer::fit_transform`]: one row per corpus document.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// Sorted lexicographically; a term's position is its column index.
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub rows: Vec<SparseVector>,
}

#[cfg(test)]
impl TfIdfMatrix {
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }
}

pub struct TfIdfVectorizer<'a> {
    stop_words: &'a StopWords,
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    pub fn fit_transform(&self, corpus: &[&str]) -> TfIdfMatrix {
        let counts: Vec<BTreeMap<String, usize>> = corpus
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for term in tokenize(doc, self.stop_words) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|tf| tf.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for term in tf.keys() {
                df[columns[term.as_str()]] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                // BTreeMap iteration is sorted, and so is the vocabulary, so
                // the column indices come out ascending.
                let mut row = SparseVector {
                    entries: tf
                        .iter()
                        .map(|(term, &count)| {
                            let col = columns[term.as_str()];
                            (col, count as f64 * idf[col])
                        })
                        .collect(),
                };
                row.normalize();
                row
            })
            .collect();

        TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(corpus: &[&str]) -> TfIdfMatrix {
        TfIdfVectorizer::new(&StopWords::None).fit_transform(corpus)
    }

    #[test]
    fn test_vocabulary_is_sorted_union() {
        let m = fit(&["zeta alpha", "beta alpha"]);
        assert_eq!(m.vocabulary, vec!["alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_smoothed_idf() {
        // n = 2; "alpha" in both docs, "beta" in one.
        let m = fit(&["alpha beta", "alpha"]);
        let alpha = m.idf[m.column("alpha").unwrap()];
        let beta = m.idf[m.column("beta").unwrap()];
        assert!((alpha - 1.0).abs() < 1e-12, "alpha idf was {alpha}");
        assert!((beta - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let m = fit(&["rust rust go", "go python", "java"]);
        for row in &m.rows {
            assert!((row.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_term_frequency_is_raw_count() {
        // One document: idf is 1.0 everywhere, so weights are proportional to counts.
        let m = fit(&["rust rust go"]);
        let row = &m.rows[0];
        let rust = row.entries[m.column("rust").unwrap()].1;
        let go = row.entries[m.column("go").unwrap()].1;
        assert!((rust / go - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_yields_zero_row() {
        let m = fit(&["rust", ""]);
        assert!(m.rows[1].is_zero());
        assert!(m.rows[1].entries.is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let m = TfIdfVectorizer::new(&StopWords::English).fit_transform(&["the of", "and"]);
        assert!(m.vocabulary.is_empty());
        assert!(m.rows.iter().all(SparseVector::is_zero));
    }

    #[test]
    fn test_sparse_dot_matches_only_shared_columns() {
        let a = SparseVector {
            entries: vec![(0, 1.0), (2, 2.0), (5, 3.0)],
        };
        let b = SparseVector {
            entries: vec![(2, 4.0), (3, 1.0), (5, 1.0)],
        };
        assert!((a.dot(&b) - 11.0).abs() < 1e-12);
    }
}
