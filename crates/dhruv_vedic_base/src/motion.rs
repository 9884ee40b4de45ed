//! Apparent motion and retrograde (vakri) detection.
//!
//! Motion is the signed change of tropical longitude over a short probe
//! interval. A raw difference whose magnitude exceeds the wrap threshold
//! is a crossing of 0°/360° and is folded back by one full turn.

use dhruv_core::{Body, Ephemeris, GeoLocation};
use dhruv_time::Moment;

use crate::error::VedicError;
use crate::sidereal::tropical_longitude;

/// Default probe interval in hours.
pub const DEFAULT_PROBE_HOURS: f64 = 1.0;

/// Default wrap threshold in degrees.
pub const DEFAULT_WRAP_THRESHOLD_DEG: f64 = 300.0;

/// Signed longitude change `current − previous`, folded across 0°/360°
/// when `|raw| > wrap_threshold_deg`.
pub fn signed_motion_deg(current_deg: f64, previous_deg: f64, wrap_threshold_deg: f64) -> f64 {
    let diff = current_deg - previous_deg;
    if diff < -wrap_threshold_deg {
        diff + 360.0
    } else if diff > wrap_threshold_deg {
        diff - 360.0
    } else {
        diff
    }
}

/// Retrograde iff the folded motion is negative.
pub fn is_retrograde(current_deg: f64, previous_deg: f64, wrap_threshold_deg: f64) -> bool {
    signed_motion_deg(current_deg, previous_deg, wrap_threshold_deg) < 0.0
}

/// Hourly motion in degrees per hour for `body`, sampling tropical
/// longitude at `moment` and `probe_hours` earlier.
pub fn hourly_motion_deg<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    moment: &Moment,
    location: &GeoLocation,
    current_tropical_deg: f64,
    probe_hours: f64,
    wrap_threshold_deg: f64,
) -> Result<f64, VedicError> {
    if !(probe_hours.is_finite() && probe_hours > 0.0) {
        return Err(VedicError::Domain("probe interval must be positive"));
    }
    let earlier = moment.shifted_hours(-probe_hours)?;
    let previous = tropical_longitude(ephemeris, body, &earlier, location)?;
    Ok(signed_motion_deg(current_tropical_deg, previous, wrap_threshold_deg) / probe_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_across_zero() {
        // previous 359.5, current 0.3: forward by 0.8°
        let m = signed_motion_deg(0.3, 359.5, DEFAULT_WRAP_THRESHOLD_DEG);
        assert!((m - 0.8).abs() < 1e-10, "m = {m}");
        assert!(!is_retrograde(0.3, 359.5, DEFAULT_WRAP_THRESHOLD_DEG));
    }

    #[test]
    fn backward_across_zero() {
        let m = signed_motion_deg(359.9, 0.1, DEFAULT_WRAP_THRESHOLD_DEG);
        assert!((m + 0.2).abs() < 1e-10, "m = {m}");
        assert!(is_retrograde(359.9, 0.1, DEFAULT_WRAP_THRESHOLD_DEG));
    }

    #[test]
    fn plain_direct_and_retrograde() {
        assert!(!is_retrograde(100.05, 100.0, DEFAULT_WRAP_THRESHOLD_DEG));
        assert!(is_retrograde(99.99, 100.0, DEFAULT_WRAP_THRESHOLD_DEG));
    }

    #[test]
    fn stationary_is_direct() {
        assert!(!is_retrograde(42.0, 42.0, DEFAULT_WRAP_THRESHOLD_DEG));
    }
}
