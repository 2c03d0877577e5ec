use thiserror::Error;

// ---------------------------------------------------------------------------
// Disc width ratio
// ---------------------------------------------------------------------------

/// Error raised by [`calculate_disc_ratio`].
#[derive(Debug, Error, PartialEq)]
pub enum RatioError {
    #[error("Total length cannot be zero")]
    ZeroTotalLength,
}

/// Calculate the disc width ratio (`disc_width / total_length`).
///
/// The ratio is a unitless shape descriptor that separates dorsoventrally
/// flattened species (like thornback rays) from more torpedo-shaped ones
/// (like electric rays). The caller supplies both lengths in cm, but no
/// unit check is enforced.
///
/// A `total_length` of exactly `0.0` is rejected. The check is strict
/// equality by policy, not a tolerance band: values arbitrarily close to
/// zero divide normally under IEEE-754 semantics.
pub fn calculate_disc_ratio(total_length: f64, disc_width: f64) -> Result<f64, RatioError> {
    if total_length == 0.0 {
        return Err(RatioError::ZeroTotalLength);
    }
    Ok(disc_width / total_length)
}
