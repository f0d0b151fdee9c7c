use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::color::SpeciesColors;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::loader::{self, LoadError};
use crate::data::model::{PepperDataset, PepperRecord};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once and treated as immutable; every interaction
/// only rebuilds `criteria` and `visible_indices`.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<PepperDataset>,

    /// Current sidebar filter selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Species → colour mapping for the table and sidebar.
    pub species_colors: SpeciesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Path of the loaded file, key of the load cache.
    pub source_path: Option<PathBuf>,

    /// Modification time of the source at load; Reload skips re-parsing
    /// while this matches the file on disk.
    source_modified: Option<SystemTime>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            dataset: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            species_colors: SpeciesColors::default(),
            status_message: None,
            source_path: None,
            source_modified: None,
        }
    }
}

impl AppState {
    /// Load a dataset file, replacing the current one on success. Failures
    /// become a status message; the previous dataset (if any) stays usable.
    pub fn load(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("{} contains no varieties", path.display());
                }
                log::info!(
                    "loaded {} pepper varieties from {}",
                    dataset.len(),
                    path.display()
                );
                self.source_modified = file_mtime(path);
                self.source_path = Some(path.to_path_buf());
                self.set_dataset(dataset);
            }
            Err(LoadError::MissingFile(p)) => {
                log::error!("dataset file not found: {}", p.display());
                self.status_message = Some(format!(
                    "No dataset at {} — use File → Open…",
                    p.display()
                ));
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset, reset filters and colours.
    pub fn set_dataset(&mut self, dataset: PepperDataset) {
        self.criteria = FilterCriteria::unconstrained(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.species_colors = SpeciesColors::new(&dataset.species);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
        }
    }

    /// Re-read the source file only if it changed on disk since the last
    /// load (cache keyed on path + mtime, invalidated here on demand).
    pub fn reload_if_changed(&mut self) {
        let Some(path) = self.source_path.clone() else {
            return;
        };
        let current = file_mtime(&path);
        if current.is_some() && current == self.source_modified {
            log::debug!("{} unchanged, keeping cached dataset", path.display());
            return;
        }
        self.load(&path);
    }

    /// Write the currently visible records to a JSON file.
    pub fn export_visible(&mut self, path: &Path) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let rows: Vec<PepperRecord> = self
            .visible_indices
            .iter()
            .map(|&i| ds.records[i].clone())
            .collect();

        match loader::export_json(path, &rows) {
            Ok(()) => {
                log::info!("exported {} varieties to {}", rows.len(), path.display());
                self.status_message = Some(format!(
                    "Exported {} varieties to {}",
                    rows.len(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn file_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PepperDataset;
    use std::io::Write;

    fn sample_dataset() -> PepperDataset {
        PepperDataset::from_records(vec![
            PepperRecord {
                cultivar: "Habanero".to_string(),
                species: "Capsicum chinense".to_string(),
                varietal: "Habanero".to_string(),
                heat_score: 8.0,
                shu: 225_000.0,
                notes: "Floral, apricot notes".to_string(),
            },
            PepperRecord {
                cultivar: "Poblano".to_string(),
                species: "Capsicum annuum".to_string(),
                varietal: "Ancho".to_string(),
                heat_score: 3.0,
                shu: 1_250.0,
                notes: "Earthy and mild".to_string(),
            },
        ])
    }

    #[test]
    fn ingesting_a_dataset_starts_unfiltered() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        let ds = state.dataset.as_ref().unwrap();
        assert_eq!(state.criteria.species, ds.species);
        assert_eq!(state.criteria.varietals, ds.varietals);
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn refilter_applies_current_criteria() {
        let mut state = AppState::default();
        state.set_dataset(sample_dataset());

        state.criteria.search = "earthy".to_string();
        state.refilter();
        assert_eq!(state.visible_indices.len(), 1);

        state.criteria.species.clear();
        state.refilter();
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn loading_a_missing_file_degrades_to_a_message() {
        let mut state = AppState::default();
        state.load(Path::new("definitely_not_here.csv"));

        assert!(state.dataset.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("No dataset"));
    }

    #[test]
    fn reload_keeps_cached_dataset_while_file_is_unchanged() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp file");
        write!(
            file,
            "Cultivar,Species,Varietal,Research-Accepted SHU,0/10,Notes\n\
             Cayenne,Capsicum annuum,Cayenne,\"30,000-50,000\",7,Classic dried\n"
        )
        .expect("write fixture");

        let mut state = AppState::default();
        state.load(file.path());
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(1));

        state.reload_if_changed();
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(1));
        assert!(state.status_message.is_none());
    }
}
