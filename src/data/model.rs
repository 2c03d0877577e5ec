use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Measurement – one row of the measurement table
// ---------------------------------------------------------------------------

/// A single ray specimen measurement (one data row of the source CSV).
///
/// Built once by the loader and immutable afterwards. The three numeric
/// fields are coerced from text at load time; no range or sign validation
/// is applied beyond that.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Specimen identifier, kept verbatim as text.
    pub species_id: String,
    /// Total length in cm.
    pub total_length: f64,
    /// Disc width (across the pectoral fins) in cm.
    pub disc_width: f64,
    /// Weight; no unit is enforced. Coerced so a malformed value fails the
    /// load, but nothing downstream reads it back outside the tests.
    #[allow(dead_code)]
    pub weight: f64,
    /// Any additional CSV columns, passed through as text and ignored by
    /// the ratio computation.
    pub extra: BTreeMap<String, String>,
}
