use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::Srgb;

use crate::data::model::ErrorTable;

// ---------------------------------------------------------------------------
// Jet gradient
// ---------------------------------------------------------------------------

/// Anchor points `(position, value)` of one colour channel.
type Channel = &'static [(f32, f32)];

const JET_RED: Channel = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_GREEN: Channel = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_BLUE: Channel = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

/// Sample the jet gradient (dark blue → cyan → yellow → dark red) at `t`.
/// Values outside `[0, 1]` are clamped.
pub fn jet(t: f32) -> Srgb {
    let t = t.clamp(0.0, 1.0);
    Srgb::new(
        interpolate(JET_RED, t),
        interpolate(JET_GREEN, t),
        interpolate(JET_BLUE, t),
    )
}

fn interpolate(anchors: Channel, t: f32) -> f32 {
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let f = if x1 > x0 { (t - x0) / (x1 - x0) } else { 0.0 };
            return y0 + (y1 - y0) * f;
        }
    }
    anchors.last().map(|&(_, y)| y).unwrap_or(0.0)
}

pub fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Colour mapping: marker name → Color32
// ---------------------------------------------------------------------------

/// Assigns each marker the jet colour at `rank / count`, where `rank` is the
/// marker's position in lexicographic order. Header order plays no part.
#[derive(Debug, Clone)]
pub struct MarkerColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl MarkerColors {
    pub fn for_table(table: &ErrorTable) -> Self {
        Self::for_names(table.marker_names().iter().map(String::as_str))
    }

    /// Build the map from marker names in any order.
    pub fn for_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let sorted: BTreeSet<&str> = names.into_iter().collect();
        let count = sorted.len();
        let mapping = sorted
            .into_iter()
            .enumerate()
            .map(|(rank, name)| {
                let color = to_color32(jet(rank as f32 / count as f32));
                (name.to_string(), color)
            })
            .collect();

        MarkerColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a marker.
    pub fn color_for(&self, marker: &str) -> Color32 {
        self.mapping
            .get(marker)
            .copied()
            .unwrap_or(self.default_color)
    }
}
