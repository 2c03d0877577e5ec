/// Data layer: the measurement record type and CSV loading.
///
/// Architecture:
/// ```text
///  data/ray_measurements.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Measurement>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ Measurement │  species_id + coerced f64 columns
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
