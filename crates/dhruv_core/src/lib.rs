//! Ephemeris seam and the analytic reference engine.
//!
//! Chart computation needs three things from an ephemeris: the apparent
//! equatorial position of a body as seen from an observer, the obliquity
//! of the ecliptic, and Greenwich sidereal time. The [`Ephemeris`] trait
//! names exactly that contract so downstream crates never depend on a
//! particular theory or data file.
//!
//! [`Engine`] implements the contract analytically: mean Keplerian
//! elements for the planets, the principal ELP terms for the Moon, and a
//! diurnal parallax correction for the observer. Coordinates are referred
//! to the mean equator and equinox of date.

mod keplerian;
mod lunar;
mod parallax;

use std::error::Error;
use std::fmt::{Display, Formatter};

use dhruv_frames::{
    SphericalCoords, cartesian_to_spherical, ecliptic_to_equatorial, mean_obliquity_deg,
    precess_longitude_from_j2000_deg, spherical_to_cartesian,
};
use dhruv_time::{DAYS_PER_JULIAN_CENTURY, Moment, calendar_to_jd, gmst_hours};

use keplerian::OrbitalElements;

/// Light travel time for 1 AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;
const KM_PER_AU: f64 = 149_597_870.7;

/// Bodies an ephemeris can be asked for.
///
/// Computed points (lunar nodes, lagna) are not bodies; they belong to
/// `dhruv_vedic_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    pub const ALL: [Body; 7] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
    ];

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Moon => 301,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            301 => Some(Self::Moon),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    const fn elements(self) -> Option<&'static OrbitalElements> {
        match self {
            Self::Mercury => Some(&keplerian::MERCURY),
            Self::Venus => Some(&keplerian::VENUS),
            Self::Mars => Some(&keplerian::MARS),
            Self::Jupiter => Some(&keplerian::JUPITER),
            Self::Saturn => Some(&keplerian::SATURN),
            Self::Sun | Self::Moon => None,
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic location on Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above the ellipsoid in metres.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EngineError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EngineError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EngineError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Apparent equatorial position, mean equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in hours, [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
    /// Distance from the observer in AU.
    pub distance_au: f64,
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    InvalidLocation(&'static str),
    UnsupportedBody(Body),
    EpochOutOfRange { jd_tt: f64 },
    Internal(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnsupportedBody(body) => write!(f, "unsupported body: {body}"),
            Self::EpochOutOfRange { jd_tt } => write!(f, "epoch out of range: JD(TT) {jd_tt}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// The astronomy adapter a chart is computed against.
///
/// Implementations must be deterministic: the same body, moment and
/// location always produce the same position.
pub trait Ephemeris: Send + Sync {
    /// Apparent equatorial coordinates of `body` for an observer at `location`.
    fn equatorial_position(
        &self,
        body: Body,
        moment: &Moment,
        location: &GeoLocation,
    ) -> Result<EquatorialPosition, EngineError>;

    /// Positions for several bodies at one moment, in input order.
    fn equatorial_positions(
        &self,
        bodies: &[Body],
        moment: &Moment,
        location: &GeoLocation,
    ) -> Vec<Result<EquatorialPosition, EngineError>> {
        bodies
            .iter()
            .map(|&b| self.equatorial_position(b, moment, location))
            .collect()
    }

    /// Obliquity of the ecliptic in degrees.
    fn obliquity_deg(&self, moment: &Moment) -> Result<f64, EngineError>;

    /// Greenwich sidereal time in hours, [0, 24).
    fn sidereal_time_hours(&self, moment: &Moment) -> Result<f64, EngineError>;
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Apply diurnal parallax for the observer location.
    pub topocentric: bool,
    /// Earliest supported epoch, JD(TT).
    pub valid_from_jd_tt: f64,
    /// Latest supported epoch, JD(TT).
    pub valid_to_jd_tt: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Validity window of the mean-element table (1800–2050).
        Self {
            topocentric: true,
            valid_from_jd_tt: calendar_to_jd(1800, 1, 1.0),
            valid_to_jd_tt: calendar_to_jd(2051, 1, 1.0),
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if !self.valid_from_jd_tt.is_finite() || !self.valid_to_jd_tt.is_finite() {
            return Err(EngineError::InvalidConfig("validity bounds must be finite"));
        }
        if self.valid_from_jd_tt >= self.valid_to_jd_tt {
            return Err(EngineError::InvalidConfig(
                "valid_from_jd_tt must precede valid_to_jd_tt",
            ));
        }
        Ok(())
    }
}

/// Analytic ephemeris engine.
///
/// Stateless apart from its configuration, so it is [`Send`] + [`Sync`]
/// and can be shared across threads by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_epoch(&self, moment: &Moment) -> Result<f64, EngineError> {
        let jd_tt = moment.jd_tt();
        if !(self.config.valid_from_jd_tt..=self.config.valid_to_jd_tt).contains(&jd_tt) {
            return Err(EngineError::EpochOutOfRange { jd_tt });
        }
        Ok(moment.centuries_tt())
    }

    /// Geocentric ecliptic coordinates of date (longitude, latitude in
    /// degrees, distance in AU).
    ///
    /// `earth` is the heliocentric Earth–Moon barycenter at `t`, shared by
    /// every body evaluated at the same epoch.
    fn geocentric_ecliptic(&self, body: Body, t: f64, earth: &[f64; 3]) -> SphericalCoords {
        if body == Body::Moon {
            let p = lunar::moon_position(t);
            return SphericalCoords {
                lon_deg: p.lon_deg,
                lat_deg: p.lat_deg,
                distance: p.distance_km / KM_PER_AU,
            };
        }

        let mut s = match body.elements() {
            Some(el) => {
                let geometric = relative(&keplerian::heliocentric_ecliptic(el, t), earth);
                let tau = cartesian_to_spherical(&geometric).distance * LIGHT_TIME_DAYS_PER_AU
                    / DAYS_PER_JULIAN_CENTURY;
                let retarded = keplerian::heliocentric_ecliptic(el, t - tau);
                cartesian_to_spherical(&relative(&retarded, earth))
            }
            None => cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]),
        };
        s.lon_deg = precess_longitude_from_j2000_deg(s.lon_deg, t);
        s
    }

    fn to_equatorial(
        &self,
        ecl: &SphericalCoords,
        moment: &Moment,
        location: &GeoLocation,
        eps_rad: f64,
        rho_terms: (f64, f64),
    ) -> EquatorialPosition {
        let xyz = ecliptic_to_equatorial(&spherical_to_cartesian(ecl), eps_rad);
        let eq = cartesian_to_spherical(&xyz);
        let (mut ra_deg, mut dec_deg) = (eq.lon_deg, eq.lat_deg);

        if self.config.topocentric {
            let lst_deg = gmst_hours(moment.jd_ut()) * 15.0 + location.longitude_deg;
            (ra_deg, dec_deg) =
                parallax::topocentric_shift(ra_deg, dec_deg, eq.distance, lst_deg, rho_terms);
        }

        EquatorialPosition {
            ra_hours: (ra_deg / 15.0).rem_euclid(24.0),
            dec_deg,
            distance_au: eq.distance,
        }
    }

    fn evaluate(
        &self,
        bodies: &[Body],
        moment: &Moment,
        location: &GeoLocation,
    ) -> Result<Vec<EquatorialPosition>, EngineError> {
        location.validate()?;
        let t = self.check_epoch(moment)?;
        let earth = keplerian::heliocentric_ecliptic(&keplerian::EARTH_MOON_BARYCENTER, t);
        let eps_rad = mean_obliquity_deg(t).to_radians();
        let rho_terms =
            parallax::geocentric_radius_terms(location.latitude_deg, location.altitude_m);

        Ok(bodies
            .iter()
            .map(|&body| {
                let ecl = self.geocentric_ecliptic(body, t, &earth);
                self.to_equatorial(&ecl, moment, location, eps_rad, rho_terms)
            })
            .collect())
    }
}

fn relative(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

impl Ephemeris for Engine {
    fn equatorial_position(
        &self,
        body: Body,
        moment: &Moment,
        location: &GeoLocation,
    ) -> Result<EquatorialPosition, EngineError> {
        self.evaluate(&[body], moment, location)?
            .pop()
            .ok_or_else(|| EngineError::Internal("empty evaluation".into()))
    }

    /// Shares the Earth vector, obliquity and observer terms across bodies.
    fn equatorial_positions(
        &self,
        bodies: &[Body],
        moment: &Moment,
        location: &GeoLocation,
    ) -> Vec<Result<EquatorialPosition, EngineError>> {
        match self.evaluate(bodies, moment, location) {
            Ok(positions) => positions.into_iter().map(Ok).collect(),
            Err(e) => bodies.iter().map(|_| Err(e.clone())).collect(),
        }
    }

    fn obliquity_deg(&self, moment: &Moment) -> Result<f64, EngineError> {
        Ok(mean_obliquity_deg(moment.centuries_tt()))
    }

    fn sidereal_time_hours(&self, moment: &Moment) -> Result<f64, EngineError> {
        let jd_ut = moment.jd_ut();
        if !jd_ut.is_finite() {
            return Err(EngineError::EpochOutOfRange { jd_tt: moment.jd_tt() });
        }
        Ok(gmst_hours(jd_ut))
    }
}
