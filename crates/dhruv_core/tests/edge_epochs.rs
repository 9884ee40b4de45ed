//! Behaviour at the edges of the engine's validity window.

use dhruv_core::{Body, Engine, EngineConfig, EngineError, Ephemeris, GeoLocation};
use dhruv_time::{Moment, calendar_to_jd};

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090, 216.0)
}

fn moment_at(year: i32, month: u32, day: f64) -> Moment {
    Moment::from_jd_ut(calendar_to_jd(year, month, day)).expect("valid JD")
}

#[test]
fn positions_inside_window() {
    let engine = Engine::default();
    for (y, m, d) in [(1800, 1, 2.0), (1900, 6, 15.0), (2000, 1, 1.5), (2050, 12, 30.0)] {
        let moment = moment_at(y, m, d);
        for body in Body::ALL {
            let p = engine
                .equatorial_position(body, &moment, &delhi())
                .unwrap_or_else(|e| panic!("{body} at {y}-{m}: {e}"));
            assert!((0.0..24.0).contains(&p.ra_hours));
            assert!((-90.0..=90.0).contains(&p.dec_deg));
            assert!(p.distance_au > 0.0);
        }
    }
}

#[test]
fn rejects_epoch_before_window() {
    let engine = Engine::default();
    let err = engine
        .equatorial_position(Body::Mars, &moment_at(1750, 1, 1.0), &delhi())
        .unwrap_err();
    assert!(matches!(err, EngineError::EpochOutOfRange { .. }));
}

#[test]
fn rejects_epoch_after_window() {
    let engine = Engine::default();
    let err = engine
        .equatorial_position(Body::Moon, &moment_at(2100, 1, 1.0), &delhi())
        .unwrap_err();
    assert!(matches!(err, EngineError::EpochOutOfRange { .. }));
}

#[test]
fn custom_window_is_honoured() {
    let engine = Engine::new(EngineConfig {
        valid_from_jd_tt: calendar_to_jd(2000, 1, 1.0),
        valid_to_jd_tt: calendar_to_jd(2001, 1, 1.0),
        ..EngineConfig::default()
    })
    .expect("valid config");
    assert!(
        engine
            .equatorial_position(Body::Sun, &moment_at(2000, 7, 1.0), &delhi())
            .is_ok()
    );
    assert!(
        engine
            .equatorial_position(Body::Sun, &moment_at(2002, 7, 1.0), &delhi())
            .is_err()
    );
}

#[test]
fn batch_errors_propagate_per_body() {
    let engine = Engine::default();
    let results =
        engine.equatorial_positions(&Body::ALL, &moment_at(1700, 1, 1.0), &delhi());
    assert_eq!(results.len(), Body::ALL.len());
    assert!(results.iter().all(|r| r.is_err()));
}
