use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::filter::HEAT_MAX;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// Map a 0–10 heat score onto a green → red ramp.
pub fn heat_color(score: f64) -> Color32 {
    let t = (score / HEAT_MAX).clamp(0.0, 1.0) as f32;
    let hue = 120.0 * (1.0 - t);
    hsl_to_color32(Hsl::new(hue, 0.75, 0.45))
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species name to a stable distinct colour.
#[derive(Debug, Clone, Default)]
pub struct SpeciesColors {
    mapping: BTreeMap<String, Color32>,
}

impl SpeciesColors {
    /// Build a colour map from the dataset's unique species.
    pub fn new(species: &BTreeSet<String>) -> Self {
        let palette = generate_palette(species.len());
        let mapping: BTreeMap<String, Color32> = species
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SpeciesColors { mapping }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping.get(species).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_ramp_runs_green_to_red() {
        let mild = heat_color(0.0);
        let hot = heat_color(10.0);
        assert!(mild.g() > mild.r());
        assert!(hot.r() > hot.g());
    }

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_species_falls_back_to_gray() {
        let colors = SpeciesColors::default();
        assert_eq!(colors.color_for("Capsicum mystery"), Color32::GRAY);
    }
}
