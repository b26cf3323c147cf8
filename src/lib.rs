//! Streaming decoder for the *GGA* and *RMC* sentences of the *NMEA 0183*
//! protocol.
//!
//! Feed the bytes of a connection to a [`StreamDecoder`] in whatever chunks
//! they arrive; positions, headings and speeds come out of the
//! [`ReadingSink`] it was built with.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;
pub mod decoder;
pub mod err;
mod lexer;
mod parser;
pub mod reading;

pub use decoder::{StreamDecoder, DEFAULT_CAPACITY};
pub use err::{FeedError, FieldError};
pub use lexer::{SentenceKind, HEADER_LENGTH};
pub use reading::{
    Callbacks, GeodeticReading, HeadingReading, Reading, ReadingSink, SpeedReading, Timestamp,
};
