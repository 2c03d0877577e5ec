use std::path::Path;

use anyhow::{Context, Result};

use crate::data::loader::load_measurements;
use crate::data::model::Measurement;
use crate::morpho::calculate_disc_ratio;

// ---------------------------------------------------------------------------
// Console report
// ---------------------------------------------------------------------------

/// Fixed input path, relative to the process working directory.
pub const DATA_PATH: &str = "data/ray_measurements.csv";

/// Run the disc width ratio report against [`DATA_PATH`].
///
/// A missing data file is reported on stdout and treated as a normal end of
/// the run. Parse and division failures propagate to the caller and abort
/// the report mid-stream.
pub fn run() -> Result<()> {
    let data_path = Path::new(DATA_PATH);
    if !data_path.exists() {
        println!("Data file not found: {DATA_PATH}");
        return Ok(());
    }

    let measurements = load_measurements(data_path)?;
    log::info!("Loaded {} measurements from {DATA_PATH}", measurements.len());
    if let Some(first) = measurements.first() {
        if !first.extra.is_empty() {
            log::debug!(
                "Passthrough columns: {:?}",
                first.extra.keys().collect::<Vec<_>>()
            );
        }
    }

    println!("Disc width ratios:");
    for m in &measurements {
        println!("{}", report_line(m)?);
    }
    Ok(())
}

/// Format one report line: the identifier, both lengths at one decimal,
/// and the ratio at three.
fn report_line(m: &Measurement) -> Result<String> {
    let ratio = calculate_disc_ratio(m.total_length, m.disc_width)
        .with_context(|| format!("computing disc ratio for {}", m.species_id))?;
    Ok(format!(
        "{}: total_length={:.1}, disc_width={:.1}, ratio={:.3}",
        m.species_id, m.total_length, m.disc_width, ratio
    ))
}
