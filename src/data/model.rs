use std::collections::BTreeSet;

use serde::Serialize;

/// Species fallback when the source cell is blank.
pub const DEFAULT_SPECIES: &str = "Unknown";
/// Varietal fallback when the source cell is blank.
pub const DEFAULT_VARIETAL: &str = "Other";

// ---------------------------------------------------------------------------
// PepperRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single pepper variety after sanitization: text fields are defaulted
/// when blank, `heat_score` and `shu` are finite (0.0 for malformed cells).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PepperRecord {
    pub cultivar: String,
    pub species: String,
    pub varietal: String,
    pub heat_score: f64,
    #[serde(rename = "SHU")]
    pub shu: f64,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// PepperDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed category indices.
#[derive(Debug, Clone)]
pub struct PepperDataset {
    /// All varieties, sorted by cultivar name.
    pub records: Vec<PepperRecord>,
    /// Sorted unique species names.
    pub species: BTreeSet<String>,
    /// Sorted unique varietal names.
    pub varietals: BTreeSet<String>,
}

impl PepperDataset {
    /// Sort the records by cultivar and build the category indices.
    pub fn from_records(mut records: Vec<PepperRecord>) -> Self {
        records.sort_by(|a, b| a.cultivar.cmp(&b.cultivar));

        let species = records.iter().map(|r| r.species.clone()).collect();
        let varietals = records.iter().map(|r| r.varietal.clone()).collect();

        PepperDataset {
            records,
            species,
            varietals,
        }
    }

    /// Number of varieties.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Format a SHU value as an integer with `,` thousands separators.
/// Sanitized SHU values are non-negative.
pub fn format_shu(shu: f64) -> String {
    let digits = (shu.max(0.0).round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cultivar: &str, species: &str, varietal: &str) -> PepperRecord {
        PepperRecord {
            cultivar: cultivar.to_string(),
            species: species.to_string(),
            varietal: varietal.to_string(),
            heat_score: 5.0,
            shu: 1000.0,
            notes: String::new(),
        }
    }

    #[test]
    fn from_records_sorts_by_cultivar() {
        let ds = PepperDataset::from_records(vec![
            record("Serrano", "Capsicum annuum", "Serrano"),
            record("Cayenne", "Capsicum annuum", "Cayenne"),
            record("Habanero", "Capsicum chinense", "Habanero"),
        ]);
        let names: Vec<&str> = ds.records.iter().map(|r| r.cultivar.as_str()).collect();
        assert_eq!(names, ["Cayenne", "Habanero", "Serrano"]);
    }

    #[test]
    fn from_records_indexes_unique_categories() {
        let ds = PepperDataset::from_records(vec![
            record("Serrano", "Capsicum annuum", "Serrano"),
            record("Cayenne", "Capsicum annuum", "Cayenne"),
            record("Habanero", "Capsicum chinense", "Habanero"),
        ]);
        assert_eq!(ds.species.len(), 2);
        assert!(ds.species.contains("Capsicum chinense"));
        assert_eq!(ds.varietals.len(), 3);
    }

    #[test]
    fn format_shu_inserts_thousands_separators() {
        assert_eq!(format_shu(0.0), "0");
        assert_eq!(format_shu(750.4), "750");
        assert_eq!(format_shu(5000.0), "5,000");
        assert_eq!(format_shu(1_569_300.0), "1,569,300");
    }
}
