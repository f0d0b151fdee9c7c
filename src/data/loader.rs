use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{PepperDataset, PepperRecord, DEFAULT_SPECIES, DEFAULT_VARIETAL};
use super::sanitize::{clean_shu, sanitize_heat_score};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Load failures. `MissingFile` is distinguished so the UI can point the
/// user at File → Open instead of showing a generic parse error. Malformed
/// cells are NOT errors: the sanitizers recover them as 0.0.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {0}")]
    MissingFile(PathBuf),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("unsupported file extension: .{0}")]
    Unsupported(String),

    #[error("reading dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a pepper dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with Cultivar / Species / Varietal / SHU /
///             heat-score / Notes columns (quoted fields welcome)
/// * `.json` – records-oriented array of objects with the same fields
pub fn load_file(path: &Path) -> Result<PepperDataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::Unsupported(other.to_string())),
    }
}

/// Write records as a records-oriented JSON array (the shape `load_file`
/// reads back).
pub fn export_json(path: &Path, records: &[PepperRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, records).context("writing JSON records")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Indices of the six required columns after tolerant header matching.
struct ColumnMap {
    cultivar: usize,
    species: usize,
    varietal: usize,
    shu: usize,
    heat: usize,
    notes: usize,
}

impl ColumnMap {
    /// Locate columns by name. The numeric columns drifted across dataset
    /// exports ("Research-Accepted SHU", "SHU", "0/10", "Heat Score"), so
    /// those two match on substrings.
    fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        Ok(ColumnMap {
            cultivar: find_column(headers, "Cultivar", |h| h == "cultivar")?,
            species: find_column(headers, "Species", |h| h == "species")?,
            varietal: find_column(headers, "Varietal", |h| h == "varietal")?,
            shu: find_column(headers, "SHU", |h| h.contains("shu"))?,
            heat: find_column(headers, "heat score (0/10)", |h| {
                h.contains("0/10") || h.contains("heat")
            })?,
            notes: find_column(headers, "Notes", |h| h == "notes")?,
        })
    }

    fn record_from_row(&self, row: &csv::StringRecord) -> PepperRecord {
        let cell = |idx: usize| row.get(idx).map(str::trim).filter(|s| !s.is_empty());

        PepperRecord {
            cultivar: cell(self.cultivar).unwrap_or("").to_string(),
            species: cell(self.species).unwrap_or(DEFAULT_SPECIES).to_string(),
            varietal: cell(self.varietal).unwrap_or(DEFAULT_VARIETAL).to_string(),
            heat_score: sanitize_heat_score(cell(self.heat)),
            shu: clean_shu(cell(self.shu)),
            notes: cell(self.notes).unwrap_or("").to_string(),
        }
    }
}

fn find_column(
    headers: &[String],
    wanted: &'static str,
    matches: impl Fn(&str) -> bool,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| matches(h.trim().to_lowercase().as_str()))
        .ok_or(LoadError::MissingColumn(wanted))
}

fn load_csv(path: &Path) -> Result<PepperDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(columns.record_from_row(&row));
    }

    Ok(PepperDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Cultivar": "Habanero",
///     "Species": "Capsicum chinense",
///     "Varietal": "Habanero",
///     "SHU": "100,000-350,000",
///     "HeatScore": "8/10",
///     "Notes": "Floral, apricot notes"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<PepperDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or_else(|| {
        LoadError::Invalid("expected a top-level JSON array of records".to_string())
    })?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::Invalid(format!("row {i} is not a JSON object")))?;

        records.push(PepperRecord {
            cultivar: text_field(obj, "Cultivar").unwrap_or_default(),
            species: text_field(obj, "Species")
                .unwrap_or_else(|| DEFAULT_SPECIES.to_string()),
            varietal: text_field(obj, "Varietal")
                .unwrap_or_else(|| DEFAULT_VARIETAL.to_string()),
            heat_score: sanitize_heat_score(raw_field(obj, "HeatScore").as_deref()),
            shu: clean_shu(raw_field(obj, "SHU").as_deref()),
            notes: text_field(obj, "Notes").unwrap_or_default(),
        });
    }

    Ok(PepperDataset::from_records(records))
}

fn text_field(obj: &serde_json::Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Raw heat/SHU cells arrive as strings or numbers; both go through the
/// sanitizers as text.
fn raw_field(obj: &serde_json::Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Cultivar,Species,Varietal,Research-Accepted SHU,0/10,Notes\n";

    fn file_with(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn sanitizes_shu_column_in_row_order() {
        let csv = format!(
            "{HEADER}\
             Anaheim,Capsicum annuum,New Mexico,N/A,3,Mild roasting chile\n\
             Bhut Jolokia,Capsicum chinense,Ghost,100-200,9+,Slow-building heat\n\
             Cayenne,Capsicum annuum,Cayenne,5000,7,Classic dried and powdered\n"
        );
        let file = file_with(".csv", &csv);

        let ds = load_file(file.path()).expect("load fixture");
        let shu: Vec<f64> = ds.records.iter().map(|r| r.shu).collect();
        assert_eq!(shu, [0.0, 150.0, 5000.0]);
        let heat: Vec<f64> = ds.records.iter().map(|r| r.heat_score).collect();
        assert_eq!(heat, [3.0, 9.0, 7.0]);
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let csv = format!(
            "{HEADER}Habanero,Capsicum chinense,Habanero,\"100,000-350,000\",8,\"Floral, apricot notes\"\n"
        );
        let file = file_with(".csv", &csv);

        let ds = load_file(file.path()).expect("load fixture");
        assert_eq!(ds.records[0].shu, 225_000.0);
        assert_eq!(ds.records[0].notes, "Floral, apricot notes");
    }

    #[test]
    fn blank_category_cells_get_defaults() {
        let csv = format!("{HEADER}Hatch Green,,,1000-8000,3,Roasted by the sack\n");
        let file = file_with(".csv", &csv);

        let ds = load_file(file.path()).expect("load fixture");
        assert_eq!(ds.records[0].species, DEFAULT_SPECIES);
        assert_eq!(ds.records[0].varietal, DEFAULT_VARIETAL);
    }

    #[test]
    fn records_are_sorted_by_cultivar() {
        let csv = format!(
            "{HEADER}\
             Serrano,Capsicum annuum,Serrano,10000-23000,6,Crisp and grassy\n\
             Cayenne,Capsicum annuum,Cayenne,30000-50000,7,Classic dried\n"
        );
        let file = file_with(".csv", &csv);

        let ds = load_file(file.path()).expect("load fixture");
        assert_eq!(ds.records[0].cultivar, "Cayenne");
        assert_eq!(ds.records[1].cultivar, "Serrano");
    }

    #[test]
    fn missing_file_is_distinguished() {
        let err = load_file(Path::new("definitely_not_here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::MissingFile(_)));
    }

    #[test]
    fn missing_column_names_the_column() {
        let csv = "Cultivar,Species,Research-Accepted SHU,0/10,Notes\n\
                   Cayenne,Capsicum annuum,30000,7,Classic\n";
        let file = file_with(".csv", csv);

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Varietal")));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = file_with(".txt", "not a dataset");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Unsupported(ext) if ext == "txt"));
    }

    #[test]
    fn json_export_loads_back_unchanged() {
        let csv = format!(
            "{HEADER}\
             Habanero,Capsicum chinense,Habanero,\"100,000-350,000\",2026-08-10,\"Floral, apricot notes\"\n\
             Jalape\u{f1}o,Capsicum annuum,Jalape\u{f1}o,\"2,500-8,000\",5/10,The benchmark medium chile\n"
        );
        let csv_file = file_with(".csv", &csv);
        let ds = load_file(csv_file.path()).expect("load fixture");

        let json_file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("create temp file");
        export_json(json_file.path(), &ds.records).expect("export");

        let reloaded = load_file(json_file.path()).expect("reload exported JSON");
        assert_eq!(reloaded.records, ds.records);
    }
}
