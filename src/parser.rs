//! This module extracts readings from the fields of *GGA* and *RMC*
//! sentences of the *NMEA 0183* protocol.

use crate::err::FieldError;
use crate::lexer::{Fields, SentenceKind};

const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const ABS_MAX_LAT: f64 = 90.0;
const ABS_MAX_LONG: f64 = 180.0;
const MAX_COURSE: f64 = 360.0;

/// Field positions inside a GGA sentence.
mod gga {
    pub const LAT: usize = 2;
    pub const LAT_DIR: usize = 3;
    pub const LONG: usize = 4;
    pub const LONG_DIR: usize = 5;
}

/// Field positions inside an RMC sentence.
mod rmc {
    pub const LAT: usize = 3;
    pub const LAT_DIR: usize = 4;
    pub const LONG: usize = 5;
    pub const LONG_DIR: usize = 6;
    pub const SPEED: usize = 7;
    pub const COURSE: usize = 8;
}

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    /// Anything other than `"S"` is taken as north.
    #[inline]
    fn latitude(field: &str) -> Self {
        match field {
            "S" => CardDir::South,
            _ => CardDir::North,
        }
    }

    /// Anything other than `"W"` is taken as east.
    #[inline]
    fn longitude(field: &str) -> Self {
        match field {
            "W" => CardDir::West,
            _ => CardDir::East,
        }
    }

    #[inline]
    fn get_sign(self) -> f64 {
        match self {
            CardDir::North | CardDir::East => 1.0,
            CardDir::South | CardDir::West => -1.0,
        }
    }
}

/// Everything one sentence yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub longitude: f64,
    /// Course over ground in radians. Only RMC carries it.
    pub heading: Option<f32>,
    /// Speed over ground in metres per second. Only RMC carries it, and only
    /// when the field is filled in.
    pub speed: Option<f32>,
}

/// Extract a `Fix` from the fields of a sentence of type `kind`.
/// Fails if a required field is missing, empty, not a finite number or out
/// of range.
pub fn parse_fields(kind: SentenceKind, fields: &Fields) -> Result<Fix, FieldError> {
    match kind {
        SentenceKind::Gga => parse_gga(fields),
        SentenceKind::Rmc => parse_rmc(fields),
    }
}

fn parse_gga(fields: &Fields) -> Result<Fix, FieldError> {
    let lat = number_field!(fields, gga::LAT, "latitude");
    let lat_dir = CardDir::latitude(field!(fields, gga::LAT_DIR, "latitude hemisphere"));
    let long = number_field!(fields, gga::LONG, "longitude");
    let long_dir = CardDir::longitude(field!(fields, gga::LONG_DIR, "longitude hemisphere"));

    Ok(Fix {
        latitude: parse_coord(lat, lat_dir, ABS_MAX_LAT)?,
        longitude: parse_coord(long, long_dir, ABS_MAX_LONG)?,
        heading: None,
        speed: None,
    })
}

fn parse_rmc(fields: &Fields) -> Result<Fix, FieldError> {
    let lat = number_field!(fields, rmc::LAT, "latitude");
    let lat_dir = CardDir::latitude(field!(fields, rmc::LAT_DIR, "latitude hemisphere"));
    let long = number_field!(fields, rmc::LONG, "longitude");
    let long_dir = CardDir::longitude(field!(fields, rmc::LONG_DIR, "longitude hemisphere"));

    // Speed is optional, an empty field just means no speed reading.
    let speed = match field!(fields, rmc::SPEED, "speed over ground") {
        "" => None,
        knots => match knots.parse::<f64>()? {
            k if k.is_finite() => Some(knots_to_metres_per_second(k)),
            _ => return Err(FieldError::NotFinite("speed over ground")),
        },
    };
    let course = number_field!(fields, rmc::COURSE, "course over ground");
    if course.abs() > MAX_COURSE {
        return Err(FieldError::Range(course, MAX_COURSE));
    }

    Ok(Fix {
        latitude: parse_coord(lat, lat_dir, ABS_MAX_LAT)?,
        longitude: parse_coord(long, long_dir, ABS_MAX_LONG)?,
        heading: Some(course.to_radians() as f32),
        speed,
    })
}

/// Convert a coordinate in `ddmm.mmmm` (or `dddmm.mmmm`) notation to decimal
/// degrees and apply the sign of `dir`.
/// `abs_max` is maximum value in degree, e.g. 180 for longitude.
#[inline]
fn parse_coord(raw: f64, dir: CardDir, abs_max: f64) -> Result<f64, FieldError> {
    let scaled = raw / 100.0;
    let degrees = scaled.trunc();
    let minutes = (scaled - degrees) * 100.0;
    let dec_deg = degrees + minutes / 60.0;
    if !dec_deg.is_finite() || dec_deg.abs() > abs_max {
        return Err(FieldError::Range(dec_deg, abs_max));
    }
    Ok(dec_deg * dir.get_sign())
}

#[inline]
fn knots_to_metres_per_second(knots: f64) -> f32 {
    (knots * METRES_PER_NAUTICAL_MILE / SECONDS_PER_HOUR) as f32
}
