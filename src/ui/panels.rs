use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::SpeciesColors;
use crate::data::filter::{HEAT_MAX, HEAT_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search & Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate criteria inside the closures.
    let all_species = dataset.species.clone();
    let all_varietals = dataset.varietals.clone();
    let cultivars: Vec<String> = dataset.records.iter().map(|r| r.cultivar.clone()).collect();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Free-text search ----
            ui.strong("Search variety or keyword");
            if ui.text_edit_singleline(&mut state.criteria.search).changed() {
                changed = true;
            }
            ui.separator();

            // ---- Heat range ----
            ui.strong("Heat intensity (0–10)");
            let (mut lo, mut hi) = state.criteria.heat_range;
            if ui
                .add(egui::Slider::new(&mut lo, HEAT_MIN..=HEAT_MAX).text("min"))
                .changed()
            {
                changed = true;
            }
            if ui
                .add(egui::Slider::new(&mut hi, HEAT_MIN..=HEAT_MAX).text("max"))
                .changed()
            {
                changed = true;
            }
            if hi < lo {
                std::mem::swap(&mut lo, &mut hi);
            }
            state.criteria.heat_range = (lo, hi);
            ui.separator();

            // ---- Exact variety ----
            ui.strong("Exact variety");
            let current = state
                .criteria
                .cultivar
                .clone()
                .unwrap_or_else(|| "(any)".to_string());
            egui::ComboBox::from_id_salt("exact_cultivar")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.criteria.cultivar.is_none(), "(any)")
                        .clicked()
                    {
                        state.criteria.cultivar = None;
                        changed = true;
                    }
                    for cultivar in &cultivars {
                        let selected = state.criteria.cultivar.as_deref() == Some(cultivar);
                        if ui.selectable_label(selected, cultivar).clicked() {
                            state.criteria.cultivar = Some(cultivar.clone());
                            changed = true;
                        }
                    }
                });
            ui.separator();

            // ---- Category membership ----
            changed |= selection_group(
                ui,
                "Species",
                &all_species,
                &mut state.criteria.species,
                Some(&state.species_colors),
            );
            changed |= selection_group(
                ui,
                "Varietal",
                &all_varietals,
                &mut state.criteria.varietals,
                None,
            );
        });

    // Recompute visible indices only when a widget actually changed.
    if changed {
        state.refilter();
    }
}

/// Collapsible checkbox group for one category column, with All/None
/// shortcuts. Returns true when the selection changed.
fn selection_group(
    ui: &mut Ui,
    title: &str,
    all_values: &BTreeSet<String>,
    selected: &mut BTreeSet<String>,
    colors: Option<&SpeciesColors>,
) -> bool {
    let mut changed = false;
    let header_text = format!("{title}  ({}/{})", selected.len(), all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            // Select all / none buttons
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for value in all_values {
                let mut checked = selected.contains(value);

                let mut text = RichText::new(value);
                if let Some(colors) = colors {
                    text = text.color(colors.color_for(value));
                }

                if ui.checkbox(&mut checked, text).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload_if_changed();
                ui.close_menu();
            }
            if ui.button("Export visible as JSON…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} varieties loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Credits bar
// ---------------------------------------------------------------------------

/// Static attribution strip, not functionally load-bearing.
pub fn credits_bar(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.small("Data: community-maintained chile cultivar index (CC BY-SA 4.0)");
        ui.separator();
        ui.small("Pungency per the Scoville organoleptic test (Scoville, 1912)");
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open pepper dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export visible varieties")
        .add_filter("JSON", &["json"])
        .set_file_name("peppers.json")
        .save_file();

    if let Some(path) = file {
        state.export_visible(&path);
    }
}
