use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::heat_color;
use crate::data::filter::summarize;
use crate::data::model::format_shu;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – summary metrics + filtered table
// ---------------------------------------------------------------------------

/// Render the dashboard metrics and the visible records.
pub fn pepper_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to browse peppers  (File → Open…)");
        });
        return;
    };

    let summary = summarize(dataset, &state.visible_indices);

    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Varieties", &summary.count.to_string());
        ui.separator();
        metric(ui, "Hottest SHU", &format_shu(summary.max_shu));
        ui.separator();
        metric(ui, "Species", &summary.species_count.to_string());
    });
    ui.separator();

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("No matches found for those filters.").italics());
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0)) // Variety Name
        .column(Column::auto().at_least(130.0)) // Scientific Name
        .column(Column::auto().at_least(90.0)) // Scoville (SHU)
        .column(Column::auto().at_least(75.0)) // Heat Score
        .column(Column::remainder()) // Notes
        .header(20.0, |mut header| {
            for title in [
                "Variety Name",
                "Scientific Name",
                "Scoville (SHU)",
                "Heat Score",
                "Notes",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let record = &dataset.records[state.visible_indices[row.index()]];

                row.col(|ui| {
                    ui.label(&record.cultivar);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&record.species)
                            .color(state.species_colors.color_for(&record.species))
                            .italics(),
                    );
                });
                row.col(|ui| {
                    ui.label(format_shu(record.shu));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format!("{:.1}", record.heat_score))
                            .color(heat_color(record.heat_score)),
                    );
                });
                row.col(|ui| {
                    ui.label(&record.notes);
                });
            });
        });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.small(label);
        ui.strong(RichText::new(value).size(18.0));
    });
}
