use crate::consts::MAX_NGRAM_ORDER;
use crate::error::{GlResult, GlossaError};
use std::collections::HashMap;
use std::io::Read;

/// Frozen n-gram statistics for one language: per order 1..=5, a map
/// from gram to log10 relative frequency within that order.
///
/// Built once from TSV `gram\tcount` lines and never mutated. Grams the
/// table does not contain score the caller-supplied floor, which must
/// sit below every observed value.
#[derive(Debug)]
pub struct LanguageModel {
    tables: [HashMap<Box<str>, f64>; MAX_NGRAM_ORDER],
    gram_count: usize,
    min_logp: f64,
}

impl LanguageModel {
    /// Parses a model from TSV `gram\tcount` lines, the same shape the
    /// corpus tooling emits. Orders are inferred from gram length.
    /// Malformed lines are load failures, not skips: a frequency table
    /// with silently missing rows would skew every score built on it.
    pub fn from_tsv_reader<R: Read>(reader: R) -> GlResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(reader);

        let mut counts: [HashMap<Box<str>, f64>; MAX_NGRAM_ORDER] =
            std::array::from_fn(|_| HashMap::new());

        for record in rdr.records() {
            let record = record?;
            let gram = record
                .get(0)
                .ok_or_else(|| GlossaError::ModelLoad("missing gram field".to_string()))?
                .trim();
            let count_field = record
                .get(1)
                .ok_or_else(|| GlossaError::ModelLoad(format!("gram '{gram}' has no count")))?;

            let order = gram.chars().count();
            if order == 0 || order > MAX_NGRAM_ORDER {
                return Err(GlossaError::ModelLoad(format!(
                    "gram '{gram}' has unsupported order {order}"
                )));
            }

            let count: f64 = count_field.trim().parse().map_err(|_| {
                GlossaError::ModelLoad(format!("gram '{gram}' has non-numeric count"))
            })?;
            if !count.is_finite() || count <= 0.0 {
                return Err(GlossaError::ModelLoad(format!(
                    "gram '{gram}' has non-positive count"
                )));
            }

            let gram = gram.to_lowercase();
            *counts[order - 1].entry(gram.into_boxed_str()).or_insert(0.0) += count;
        }

        Self::from_counts(counts)
    }

    fn from_counts(counts: [HashMap<Box<str>, f64>; MAX_NGRAM_ORDER]) -> GlResult<Self> {
        let mut tables: [HashMap<Box<str>, f64>; MAX_NGRAM_ORDER] =
            std::array::from_fn(|_| HashMap::new());
        let mut gram_count = 0;
        let mut min_logp = f64::INFINITY;

        for (idx, table) in counts.into_iter().enumerate() {
            if table.is_empty() {
                continue;
            }
            let total: f64 = table.values().sum();
            for (gram, count) in table {
                let logp = (count / total).log10();
                min_logp = min_logp.min(logp);
                tables[idx].insert(gram, logp);
                gram_count += 1;
            }
        }

        if gram_count == 0 {
            return Err(GlossaError::ModelLoad("model has no n-grams".to_string()));
        }

        Ok(Self {
            tables,
            gram_count,
            min_logp,
        })
    }

    /// Log10 probability of a gram at the given order, or `floor` when
    /// the table has no entry for it.
    pub fn log_prob(&self, order: usize, gram: &str, floor: f64) -> f64 {
        debug_assert!((1..=MAX_NGRAM_ORDER).contains(&order));
        self.tables[order - 1].get(gram).copied().unwrap_or(floor)
    }

    /// Total number of grams across all orders.
    pub fn gram_count(&self) -> usize {
        self.gram_count
    }

    /// Smallest observed log10 probability. The unseen floor should sit
    /// below this value.
    pub fn min_logp(&self) -> f64 {
        self.min_logp
    }
}
