//! # Results Loading Delay
//!
//! The results view shows a short loading animation before the dashboard
//! appears. The pause is cosmetic: it gates nothing, computes nothing, and
//! owns no state, so skipping it (or tearing the view down mid-pause)
//! cannot leave anything dangling. The band keeps it between "noticeable"
//! and "annoying".

use std::time::Duration;

/// Shortest allowed loading pause.
pub const MIN_LOADING_DELAY: Duration = Duration::from_millis(800);

/// Longest allowed loading pause, and the default (what the shipped
/// results page used).
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2_000);

/// Clamp a requested pause into the allowed band.
pub fn clamp_loading_delay(requested: Duration) -> Duration {
    requested.clamp(MIN_LOADING_DELAY, DEFAULT_LOADING_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_clamping() {
        assert_eq!(
            clamp_loading_delay(Duration::from_millis(100)),
            MIN_LOADING_DELAY
        );
        assert_eq!(
            clamp_loading_delay(Duration::from_millis(1_200)),
            Duration::from_millis(1_200)
        );
        assert_eq!(
            clamp_loading_delay(Duration::from_secs(30)),
            DEFAULT_LOADING_DELAY
        );
    }
}
