/// Data layer: the loaded table and its aggregates.
///
/// Architecture:
/// ```text
///   fitting_log.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse header + rows → ErrorTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ErrorTable  │  marker name → Vec<f64> (one value per frame)
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  per-marker means, average of averages
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
