//! Chart-wide invariants over random moments and observers.

use dhruv_config::ChartConfig;
use dhruv_core::{Engine, GeoLocation};
use dhruv_kundali::compute_chart;
use dhruv_time::Moment;
use dhruv_vedic_base::{Graha, normalize_360, sign_number};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_chart_is_well_formed(
        jd in 2_415_020.5f64..2_469_807.5,
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
    ) {
        let moment = Moment::from_jd_ut(jd).unwrap();
        let loc = GeoLocation::new(lat, lon, 0.0);
        let c = compute_chart(&Engine::default(), &moment, &loc, &ChartConfig::default()).unwrap();

        for p in &c.d1.planets {
            prop_assert!((0.0..360.0).contains(&p.sidereal_longitude));
            prop_assert_eq!(p.sign, sign_number(p.sidereal_longitude));
            prop_assert!(p.nakshatra.index() <= 26);
        }
        prop_assert!((1..=12).contains(&c.d1.lagna.sign));

        let rahu = c.d1.planet(Graha::Rahu).sidereal_longitude;
        let ketu = c.d1.planet(Graha::Ketu).sidereal_longitude;
        prop_assert_eq!(ketu, normalize_360(rahu + 180.0));

        prop_assert_eq!(c.vargas.len(), 6);
        for v in &c.vargas {
            for p in &v.chart.planets {
                prop_assert!((1..=12).contains(&p.sign));
            }
        }

        // Sun, Moon and the nodes never carry a retrograde flag.
        for g in [Graha::Surya, Graha::Chandra, Graha::Rahu, Graha::Ketu] {
            prop_assert!(!c.d1.planet(g).retrograde);
        }
        prop_assert!(!c.d1.planet(Graha::Surya).combust);

        if c.d1.planet(Graha::Mangal).sign == c.d1.lagna.sign {
            prop_assert!(c.dosha.manglik.from_lagna);
        }
    }
}
