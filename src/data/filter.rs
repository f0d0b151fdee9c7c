use std::collections::BTreeSet;

use super::model::{PepperDataset, PepperRecord};

/// Bounds of the subjective heat-score scale.
pub const HEAT_MIN: f64 = 0.0;
pub const HEAT_MAX: f64 = 10.0;

// ---------------------------------------------------------------------------
// FilterCriteria – current sidebar selections
// ---------------------------------------------------------------------------

/// The user's current filter selections, rebuilt from widget state on every
/// interaction.
///
/// Category semantics: an empty species/varietal selection hides everything
/// (nothing is checked), and a selection covering every unique value means
/// "no constraint". The widgets default to everything selected, so a fresh
/// dataset starts unfiltered.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against cultivar or notes.
    pub search: String,
    pub species: BTreeSet<String>,
    pub varietals: BTreeSet<String>,
    /// Inclusive heat-score window within [`HEAT_MIN`, `HEAT_MAX`].
    pub heat_range: (f64, f64),
    /// Exact-cultivar selection, `None` for any.
    pub cultivar: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            search: String::new(),
            species: BTreeSet::new(),
            varietals: BTreeSet::new(),
            heat_range: (HEAT_MIN, HEAT_MAX),
            cultivar: None,
        }
    }
}

impl FilterCriteria {
    /// Criteria that show the whole dataset: every category value selected,
    /// full heat range, no search.
    pub fn unconstrained(dataset: &PepperDataset) -> Self {
        FilterCriteria {
            species: dataset.species.clone(),
            varietals: dataset.varietals.clone(),
            ..FilterCriteria::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass all active filters, in dataset order.
pub fn filtered_indices(dataset: &PepperDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| record_matches(rec, criteria, dataset))
        .map(|(i, _)| i)
        .collect()
}

fn record_matches(record: &PepperRecord, criteria: &FilterCriteria, dataset: &PepperDataset) -> bool {
    if !selection_passes(&criteria.species, &dataset.species, &record.species) {
        return false;
    }
    if !selection_passes(&criteria.varietals, &dataset.varietals, &record.varietal) {
        return false;
    }

    let (lo, hi) = criteria.heat_range;
    if record.heat_score < lo || record.heat_score > hi {
        return false;
    }

    if let Some(cultivar) = &criteria.cultivar {
        if record.cultivar != *cultivar {
            return false;
        }
    }

    let needle = criteria.search.trim().to_lowercase();
    if !needle.is_empty()
        && !record.cultivar.to_lowercase().contains(&needle)
        && !record.notes.to_lowercase().contains(&needle)
    {
        return false;
    }

    true
}

/// A record passes a category filter when:
/// * the selection is empty → nothing selected → fails
/// * the selection covers every unique value → no effective filter → passes
/// * the record's value is in the selected set → passes
fn selection_passes(selected: &BTreeSet<String>, all: &BTreeSet<String>, value: &str) -> bool {
    if selected.is_empty() {
        return false;
    }
    if selected.len() == all.len() {
        return true;
    }
    selected.contains(value)
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Aggregate metrics over the visible subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Highest SHU among visible records; 0.0 when nothing is visible.
    pub max_shu: f64,
    /// Distinct species among visible records.
    pub species_count: usize,
}

/// Compute the dashboard metrics for the given visible indices.
pub fn summarize(dataset: &PepperDataset, indices: &[usize]) -> Summary {
    let max_shu = indices
        .iter()
        .map(|&i| dataset.records[i].shu)
        .fold(0.0_f64, f64::max);

    let species: BTreeSet<&str> = indices
        .iter()
        .map(|&i| dataset.records[i].species.as_str())
        .collect();

    Summary {
        count: indices.len(),
        max_shu,
        species_count: species.len(),
    }
}
