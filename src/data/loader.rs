use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Measurement;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load ray measurements from a CSV file.
///
/// Expected layout: comma-separated UTF-8 text with a header row naming at
/// least `species_id`, `total_length`, `disc_width` and `weight`, one
/// specimen per data row:
///
/// ```csv
/// species_id,total_length,disc_width,weight
/// RC-001,98.4,77.2,4190.0
/// ```
///
/// `total_length`, `disc_width` and `weight` are coerced to `f64`;
/// `species_id` stays text. Any further columns ride along untouched in
/// [`Measurement::extra`]. Row order is preserved.
///
/// The file handle lives inside the `csv::Reader` and is released on every
/// exit path, including parse failures.
pub fn load_measurements(path: &Path) -> Result<Vec<Measurement>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let species_idx = require_column(&headers, "species_id")?;
    let length_idx = require_column(&headers, "total_length")?;
    let width_idx = require_column(&headers, "disc_width")?;
    let weight_idx = require_column(&headers, "weight")?;
    let consumed = [species_idx, length_idx, width_idx, weight_idx];

    let mut measurements = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let total_length =
            parse_float(record.get(length_idx).unwrap_or(""), row_no, "total_length")?;
        let disc_width = parse_float(record.get(width_idx).unwrap_or(""), row_no, "disc_width")?;
        let weight = parse_float(record.get(weight_idx).unwrap_or(""), row_no, "weight")?;

        let mut extra = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if consumed.contains(&col_idx) {
                continue;
            }
            extra.insert(headers[col_idx].clone(), value.to_string());
        }

        measurements.push(Measurement {
            species_id: record.get(species_idx).unwrap_or("").to_string(),
            total_length,
            disc_width,
            weight,
            extra,
        });
    }

    Ok(measurements)
}

fn require_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

fn parse_float(value: &str, row: usize, col: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{value}' is not a number"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn preserves_row_order_and_count() {
        let file = write_csv(
            "species_id,total_length,disc_width,weight\n\
             RC-001,98.4,77.2,4190.0\n\
             TM-002,55.0,30.3,1780.5\n\
             DP-003,120.6,74.8,7025.0\n",
        );

        let measurements = load_measurements(file.path()).unwrap();

        assert_eq!(measurements.len(), 3);
        assert_eq!(measurements[0].species_id, "RC-001");
        assert_eq!(measurements[1].species_id, "TM-002");
        assert_eq!(measurements[2].species_id, "DP-003");
    }

    #[test]
    fn coerces_numeric_columns_and_keeps_species_id_text() {
        let file = write_csv("species_id,total_length,disc_width,weight\n007,98.4,77.2,4190.0\n");

        let measurements = load_measurements(file.path()).unwrap();

        assert_eq!(measurements[0].species_id, "007");
        assert_eq!(measurements[0].total_length, 98.4);
        assert_eq!(measurements[0].disc_width, 77.2);
        assert_eq!(measurements[0].weight, 4190.0);
    }

    #[test]
    fn extra_columns_pass_through_as_text() {
        let file = write_csv(
            "species_id,site,total_length,disc_width,weight,sex\n\
             RC-001,Adriatic,98.4,77.2,4190.0,F\n",
        );

        let measurements = load_measurements(file.path()).unwrap();

        let extra = &measurements[0].extra;
        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("site").map(String::as_str), Some("Adriatic"));
        assert_eq!(extra.get("sex").map(String::as_str), Some("F"));
    }

    #[test]
    fn column_order_in_the_header_does_not_matter() {
        let file =
            write_csv("weight,disc_width,species_id,total_length\n4190.0,77.2,RC-001,98.4\n");

        let measurements = load_measurements(file.path()).unwrap();

        assert_eq!(measurements[0].species_id, "RC-001");
        assert_eq!(measurements[0].total_length, 98.4);
        assert_eq!(measurements[0].disc_width, 77.2);
    }

    #[test]
    fn non_numeric_field_is_an_error_not_a_default() {
        let file =
            write_csv("species_id,total_length,disc_width,weight\nRC-001,98.4,77.2,heavy\n");

        let err = load_measurements(file.path()).unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.contains("weight"), "unexpected error: {msg}");
        assert!(msg.contains("'heavy'"), "unexpected error: {msg}");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let file = write_csv("species_id,total_length,weight\nRC-001,98.4,4190.0\n");

        let err = load_measurements(file.path()).unwrap_err();

        assert!(format!("{err:#}").contains("CSV missing 'disc_width' column"));
    }

    #[test]
    fn nonexistent_path_is_an_error() {
        let err = load_measurements(Path::new("no/such/file.csv")).unwrap_err();

        assert!(format!("{err:#}").contains("opening CSV"));
    }

    #[test]
    fn header_only_file_yields_no_records() {
        let file = write_csv("species_id,total_length,disc_width,weight\n");

        let measurements = load_measurements(file.path()).unwrap();

        assert!(measurements.is_empty());
    }
}
