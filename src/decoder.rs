//! The streaming decoder.
//!
//! Bytes arrive in arbitrary chunks. They are appended to a fixed-capacity
//! buffer, complete GGA and RMC sentences are cut out of it and decoded, and
//! whatever could still become a sentence is kept for the next chunk.

use arrayvec::ArrayVec;

use crate::err::FeedError;
use crate::lexer::{self, Fields, SentenceKind, HEADER_LENGTH};
use crate::parser;
use crate::reading::{GeodeticReading, HeadingReading, ReadingSink, SpeedReading, Timestamp};

/// Buffer capacity used by [`StreamDecoder::new`].
pub const DEFAULT_CAPACITY: usize = 2048;

/// Smallest buffer that can hold a sentence: a header and a line ending.
const MIN_CAPACITY: usize = HEADER_LENGTH + 2;

/// Decodes GGA and RMC sentences from a fragmented byte stream and hands the
/// readings to a [`ReadingSink`].
///
/// One decoder serves one connection. Chunks must be fed in arrival order;
/// the decoder does no locking, so callers sharing it between threads have
/// to serialize access themselves.
#[derive(Debug)]
pub struct StreamDecoder<S, const CAP: usize = DEFAULT_CAPACITY> {
    buf: ArrayVec<u8, CAP>,
    sink: S,
}

impl<S: ReadingSink> StreamDecoder<S> {
    /// A decoder with a buffer of [`DEFAULT_CAPACITY`] bytes.
    pub fn new(sink: S) -> Self {
        Self::with_sink(sink)
    }
}

impl<S: ReadingSink, const CAP: usize> StreamDecoder<S, CAP> {
    /// A decoder with a buffer of `CAP` bytes.
    ///
    /// # Panics
    ///
    /// If `CAP` cannot hold even the shortest sentence.
    pub fn with_sink(sink: S) -> Self {
        assert!(
            CAP >= MIN_CAPACITY,
            "decoder capacity {} is below the minimum of {}",
            CAP,
            MIN_CAPACITY
        );
        StreamDecoder {
            buf: ArrayVec::new(),
            sink,
        }
    }

    /// Feed the next chunk of the stream.
    ///
    /// Readings of every sentence completed by `chunk` are delivered to the
    /// sink, stamped with `timestamp`, before this returns. Incomplete
    /// sentences are kept until a later chunk completes them.
    ///
    /// Fails only if the buffer fills up without a sentence ever
    /// completing. In that case the buffer is reset and the rest of `chunk` is
    /// dropped, so the next call starts from a clean state. Reporting the
    /// overflow is left to the caller.
    pub fn feed(&mut self, chunk: &[u8], timestamp: Timestamp) -> Result<(), FeedError> {
        let mut rest = chunk;
        loop {
            let take = rest.len().min(self.buf.remaining_capacity());
            let (head, tail) = rest.split_at(take);
            self.buf.extend(head.iter().copied());
            rest = tail;

            let consumed = scan(&self.buf, timestamp, &mut self.sink);
            self.buf.drain(..consumed);

            if self.buf.is_full() {
                let discarded = self.buf.len() + rest.len();
                self.buf.clear();
                return Err(FeedError::Overflow(discarded, CAP));
            }
            if rest.is_empty() {
                return Ok(());
            }
        }
    }

    /// Number of bytes waiting for the rest of their sentence.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Forget any partially received data.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// One pass over `buf`. Decodes every complete sentence and returns how many
/// leading bytes are done with: decoded sentences and junk in front of them.
fn scan<S: ReadingSink>(buf: &[u8], timestamp: Timestamp, sink: &mut S) -> usize {
    let mut offset = 0;
    while buf.len() - offset >= HEADER_LENGTH {
        let window = &buf[offset..];
        let kind = match SentenceKind::recognize(window) {
            Some(kind) => kind,
            None => {
                // Not a header we know, slide by one byte.
                offset += 1;
                continue;
            }
        };
        let length = match lexer::sentence_length(window) {
            Some(length) => length,
            // Keep the header, the line ending has not arrived yet.
            None => return offset,
        };
        decode_sentence(kind, &window[..length], timestamp, sink);
        offset += length;
    }
    offset
}

fn decode_sentence<S: ReadingSink>(
    kind: SentenceKind,
    sentence: &[u8],
    timestamp: Timestamp,
    sink: &mut S,
) {
    let fix = match Fields::new(sentence).and_then(|fields| parser::parse_fields(kind, &fields)) {
        Ok(fix) => fix,
        Err(e) => {
            debug!("Discarding {:?} sentence: {}", kind, e);
            return;
        }
    };
    trace!("Decoded {:?} sentence: {:?}", kind, fix);

    sink.on_geodetic(GeodeticReading {
        latitude: fix.latitude,
        longitude: fix.longitude,
        timestamp,
    });
    if let Some(heading) = fix.heading {
        sink.on_heading(HeadingReading { heading, timestamp });
    }
    if let Some(speed) = fix.speed {
        sink.on_speed(SpeedReading { speed, timestamp });
    }
}
