use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Operator → colour mapping
// ---------------------------------------------------------------------------

/// Assigns each operator a distinct colour, used on the filter checkboxes
/// and the per-operator count table.
#[derive(Debug, Clone, Default)]
pub struct OperatorColors {
    mapping: BTreeMap<String, Color32>,
}

impl OperatorColors {
    /// Build the mapping from the table's operator list.
    pub fn new(operators: &[String]) -> Self {
        let palette = generate_palette(operators.len());
        let mapping = operators
            .iter()
            .cloned()
            .zip(palette)
            .collect();
        OperatorColors { mapping }
    }

    /// Colour for an operator; grey for names outside the loaded table.
    pub fn color_for(&self, operator: &str) -> Color32 {
        self.mapping.get(operator).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn adjacent_palette_entries_differ() {
        let palette = generate_palette(12);
        for pair in palette.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn unknown_operator_falls_back_to_grey() {
        let colors = OperatorColors::new(&["Izivia".to_string()]);
        assert_eq!(colors.color_for("nobody"), Color32::GRAY);
        assert_ne!(colors.color_for("Izivia"), Color32::GRAY);
    }
}
