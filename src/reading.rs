//! Readings produced by the decoder and the sinks that receive them.

use chrono::{DateTime, Utc};
use std::fmt;

/// Arrival time of the chunk a reading was decoded from.
pub type Timestamp = DateTime<Utc>;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticReading {
    /// Decimal degrees, negative in the southern hemisphere.
    pub latitude: f64,
    /// Decimal degrees, negative in the western hemisphere.
    pub longitude: f64,
    pub timestamp: Timestamp,
}

/// Course over ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingReading {
    /// Radians, clockwise from true north.
    pub heading: f32,
    pub timestamp: Timestamp,
}

/// Speed over ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedReading {
    /// Metres per second.
    pub speed: f32,
    pub timestamp: Timestamp,
}

/// Any of the readings, for sinks that collect them in one list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Geodetic(GeodeticReading),
    Heading(HeadingReading),
    Speed(SpeedReading),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reading::Geodetic(r) => write!(
                f,
                "latitude = {}, longitude = {} @ {}",
                r.latitude, r.longitude, r.timestamp
            ),
            Reading::Heading(r) => write!(f, "heading = {} @ {}", r.heading, r.timestamp),
            Reading::Speed(r) => write!(f, "speed = {} @ {}", r.speed, r.timestamp),
        }
    }
}

/// Receiver of decoded readings.
///
/// Methods are called synchronously from within
/// [`StreamDecoder::feed`](../decoder/struct.StreamDecoder.html#method.feed),
/// in the order the sentences appear in the stream. Every method defaults to
/// doing nothing, so a sink only implements what it cares about.
pub trait ReadingSink {
    fn on_geodetic(&mut self, _reading: GeodeticReading) {}

    fn on_heading(&mut self, _reading: HeadingReading) {}

    fn on_speed(&mut self, _reading: SpeedReading) {}
}

/// Discards everything.
impl ReadingSink for () {}

impl<S: ReadingSink + ?Sized> ReadingSink for &mut S {
    fn on_geodetic(&mut self, reading: GeodeticReading) {
        (**self).on_geodetic(reading)
    }

    fn on_heading(&mut self, reading: HeadingReading) {
        (**self).on_heading(reading)
    }

    fn on_speed(&mut self, reading: SpeedReading) {
        (**self).on_speed(reading)
    }
}

/// Collects readings in arrival order.
impl ReadingSink for Vec<Reading> {
    fn on_geodetic(&mut self, reading: GeodeticReading) {
        self.push(Reading::Geodetic(reading))
    }

    fn on_heading(&mut self, reading: HeadingReading) {
        self.push(Reading::Heading(reading))
    }

    fn on_speed(&mut self, reading: SpeedReading) {
        self.push(Reading::Speed(reading))
    }
}

type Slot<'a, T> = Option<Box<dyn FnMut(T) + 'a>>;

/// A sink made of closures. Slots that are never set are no-ops.
///
/// ```ignore
/// let sink = Callbacks::new()
///     .with_geodetic(|r| println!("{} {}", r.latitude, r.longitude))
///     .with_heading(|r| println!("{}", r.heading));
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    geodetic: Slot<'a, GeodeticReading>,
    heading: Slot<'a, HeadingReading>,
    speed: Slot<'a, SpeedReading>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geodetic<F: FnMut(GeodeticReading) + 'a>(mut self, f: F) -> Self {
        self.geodetic = Some(Box::new(f));
        self
    }

    pub fn with_heading<F: FnMut(HeadingReading) + 'a>(mut self, f: F) -> Self {
        self.heading = Some(Box::new(f));
        self
    }

    pub fn with_speed<F: FnMut(SpeedReading) + 'a>(mut self, f: F) -> Self {
        self.speed = Some(Box::new(f));
        self
    }
}

impl<'a> fmt::Debug for Callbacks<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("geodetic", &self.geodetic.is_some())
            .field("heading", &self.heading.is_some())
            .field("speed", &self.speed.is_some())
            .finish()
    }
}

impl<'a> ReadingSink for Callbacks<'a> {
    fn on_geodetic(&mut self, reading: GeodeticReading) {
        if let Some(f) = self.geodetic.as_mut() {
            f(reading)
        }
    }

    fn on_heading(&mut self, reading: HeadingReading) {
        if let Some(f) = self.heading.as_mut() {
            f(reading)
        }
    }

    fn on_speed(&mut self, reading: SpeedReading) {
        if let Some(f) = self.speed.as_mut() {
            f(reading)
        }
    }
}
