use std::{num, str};

quick_error! {
    /// Reasons a recognized sentence could not be turned into readings.
    ///
    /// These never leave the decoder: the sentence is dropped and decoding
    /// carries on with the next one.
    #[derive(Debug, PartialEq)]
    pub enum FieldError {
        Missing(index: usize, name: &'static str) {
            display("Missing field {} ({})", index, name)
        }
        Number(err: num::ParseFloatError) {
            from()
            display("Could not parse field as number: {}", err)
            source(err)
        }
        NotFinite(name: &'static str) {
            display("Field {} is not a finite number", name)
        }
        Range(val: f64, max: f64) {
            display("Invalid value: {} should be between {} and {}", val, max * -1.0, max)
        }
        Utf8(err: str::Utf8Error) {
            from()
            display("Sentence is not valid ASCII: {}", err)
            source(err)
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum FeedError {
        /// The buffer filled up without a sentence ever completing. The
        /// buffer has been reset and `discarded` bytes were thrown away.
        Overflow(discarded: usize, capacity: usize) {
            display("Buffer of {} bytes saturated, discarded {} bytes", capacity, discarded)
        }
    }
}
