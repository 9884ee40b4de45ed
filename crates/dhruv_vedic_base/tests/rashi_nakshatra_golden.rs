//! Integration tests for rashi, nakshatra and nari lookup.

use dhruv_vedic_base::{
    ALL_RASHIS, LinearAyanamsha, Nakshatra, Nari, Rashi, deg_to_dms, dms_to_deg,
    nakshatra_from_longitude, rashi_from_longitude, sign_number, to_sidereal,
};

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
        assert_eq!(info.rashi_index, i as u8);
        assert_eq!(sign_number(lon), i as u8 + 1);
    }
}

#[test]
fn rashi_dms_precision() {
    // 45° 30' 15.5" → Vrishabha 15° 30' 15.5"
    let lon = 45.0 + 30.0 / 60.0 + 15.5 / 3600.0;
    let info = rashi_from_longitude(lon);
    assert_eq!(info.rashi, Rashi::Vrishabha);
    assert_eq!(info.dms.degrees, 15);
    assert_eq!(info.dms.minutes, 30);
    assert!((info.dms.seconds - 15.5).abs() < 0.01, "seconds = {}", info.dms.seconds);
    assert_eq!(info.dms.to_string(), "15° 30'");
}

#[test]
fn sun_at_j2000_is_dhanu() {
    // Tropical 280.46 at J2000 minus Lahiri 23.857 → 256.6
    let sid = to_sidereal(280.46, LinearAyanamsha::LAHIRI.base_deg);
    let info = rashi_from_longitude(sid);
    assert_eq!(info.rashi, Rashi::Dhanu);
    assert!((info.degrees_in_rashi - 16.603).abs() < 0.01);
}

#[test]
fn sidereal_wraps_below_zero() {
    // Tropical 10° with 24° ayanamsha → 346° → Meena
    let sid = to_sidereal(10.0, 24.0);
    assert!((sid - 346.0).abs() < 1e-10);
    assert_eq!(rashi_from_longitude(sid).rashi, Rashi::Meena);
}

#[test]
fn dms_round_trip() {
    let d = deg_to_dms(23.853);
    assert!((dms_to_deg(&d) - 23.853).abs() < 1e-10);
}

#[test]
fn display_names() {
    assert_eq!(Rashi::Kumbha.to_string(), "Kumbha (Aquarius)");
    assert_eq!(Rashi::Mesha.to_string(), "Mesha (Aries)");
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_all_27() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        let lon = i as f64 * span + span / 2.0;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra_index, i, "nakshatra at {lon} deg");
    }
}

#[test]
fn nakshatra_pada_boundaries() {
    let pada_span = 360.0 / 27.0 / 4.0;
    assert_eq!(nakshatra_from_longitude(1.0).pada, 1);
    assert_eq!(nakshatra_from_longitude(pada_span + 0.5).pada, 2);
    assert_eq!(nakshatra_from_longitude(2.0 * pada_span + 0.5).pada, 3);
    assert_eq!(nakshatra_from_longitude(3.0 * pada_span + 0.5).pada, 4);
}

#[test]
fn spot_check_sun_j2000() {
    let sid = 280.46 - 23.857;
    let nak = nakshatra_from_longitude(sid);
    // 19 × 13.333 = 253.333, offset 3.27 → Purva Ashadha pada 1
    assert_eq!(nak.nakshatra, Nakshatra::PurvaAshadha);
    assert_eq!(nak.pada, 1);
}

#[test]
fn revati_end_of_zodiac() {
    let info = nakshatra_from_longitude(359.99);
    assert_eq!(info.nakshatra, Nakshatra::Revati);
    assert_eq!(info.pada, 4);
}

#[test]
fn revati_starts_at_26th_boundary() {
    let info = nakshatra_from_longitude(26.0 * (360.0 / 27.0));
    assert_eq!(info.nakshatra_index, 26);
    assert_eq!(info.nakshatra, Nakshatra::Revati);
    assert_eq!(info.pada, 1);
}

#[test]
fn just_below_360_stays_in_revati() {
    let info = nakshatra_from_longitude(360.0 - 1e-13);
    assert!(info.nakshatra_index <= 26);
    assert_eq!(info.nakshatra, Nakshatra::Revati);
    assert_eq!(info.pada, 4);
}

#[test]
fn every_nakshatra_start_maps_to_itself() {
    for i in 0..27u8 {
        let info = nakshatra_from_longitude(f64::from(i) * (360.0 / 27.0));
        assert_eq!(info.nakshatra_index, i, "start of nakshatra {i}");
        assert_eq!(info.pada, 1, "start of nakshatra {i}");
    }
}

// ---------------------------------------------------------------------------
// Nari
// ---------------------------------------------------------------------------

#[test]
fn nari_cycle_of_six() {
    let expected = [
        Nari::Aadi,
        Nari::Madhya,
        Nari::Antya,
        Nari::Antya,
        Nari::Madhya,
        Nari::Aadi,
    ];
    for i in 0..27usize {
        let n = Nakshatra::all()[i];
        assert_eq!(n.nari(), expected[i % 6], "{}", n.name());
    }
}

#[test]
fn nari_known_members() {
    assert_eq!(Nakshatra::Ashwini.nari(), Nari::Aadi);
    assert_eq!(Nakshatra::Bharani.nari(), Nari::Madhya);
    assert_eq!(Nakshatra::Krittika.nari(), Nari::Antya);
    assert_eq!(Nakshatra::Revati.nari(), Nari::Antya);
    assert_eq!(Nari::Madhya.to_string(), "Madhya (Pitta)");
}
