//! Golden values for the linear Lahiri ayanamsha.
//!
//! Published Lahiri values (Indian Astronomical Ephemeris) agree with the
//! linear model to a few arcminutes over 1900-2050.

use dhruv_time::{J2000_JD, Moment, calendar_to_jd};
use dhruv_vedic_base::{LinearAyanamsha, ayanamsha_deg};

#[test]
fn j2000_base_value() {
    let aya = LinearAyanamsha::LAHIRI.at_jd(J2000_JD);
    // 23° 51' 25.5"
    assert!((aya - 23.857_08).abs() < 1e-9, "aya = {aya}");
}

#[test]
fn year_2024_near_published() {
    // Lahiri 2024-01-01 ≈ 24° 11'
    let aya = LinearAyanamsha::LAHIRI.at_jd(calendar_to_jd(2024, 1, 1.0));
    assert!((aya - 24.19).abs() < 0.05, "aya = {aya}");
}

#[test]
fn year_1900_near_published() {
    // Lahiri 1900-01-01 ≈ 22° 28'
    let aya = LinearAyanamsha::LAHIRI.at_jd(calendar_to_jd(1900, 1, 1.0));
    assert!((aya - 22.46).abs() < 0.05, "aya = {aya}");
}

#[test]
fn chart_moment_2026() {
    // 2026-02-05 10:00 IST
    let m = Moment::parse("2026-02-05T10:00:00+05:30", 0).unwrap();
    let aya = ayanamsha_deg(&m);
    assert!((aya - 24.2216).abs() < 1e-3, "aya = {aya}");
}

#[test]
fn one_century_of_growth() {
    let a0 = LinearAyanamsha::LAHIRI.at_jd(J2000_JD);
    let a1 = LinearAyanamsha::LAHIRI.at_jd(J2000_JD + 36_525.0);
    // 100 × 50.29″ = 1.39694°
    assert!((a1 - a0 - 1.396_944).abs() < 1e-5);
}

#[test]
fn custom_epoch_and_rate() {
    let model = LinearAyanamsha::new(24.0, 36.0, 2_460_000.5);
    assert!((model.at_jd(2_460_000.5) - 24.0).abs() < 1e-12);
    // One Julian year at 36″/yr = 0.01°
    assert!((model.at_jd(2_460_000.5 + 365.25) - 24.01).abs() < 1e-12);
}

#[test]
fn default_is_lahiri() {
    assert_eq!(LinearAyanamsha::default(), LinearAyanamsha::LAHIRI);
}
