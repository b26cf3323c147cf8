#![no_main]
use libfuzzer_sys::fuzz_target;

use chrono::Utc;
use nmea_stream::{Reading, StreamDecoder};

// The first byte picks the chunk size, the rest is the stream.
fuzz_target!(|data: &[u8]| {
    let (size, stream) = match data.split_first() {
        Some((&size, stream)) => (usize::from(size).max(1), stream),
        None => return,
    };

    let mut decoder = StreamDecoder::<_, 256>::with_sink(Vec::<Reading>::new());
    for chunk in stream.chunks(size) {
        let _ = decoder.feed(chunk, Utc::now());
        assert!(decoder.buffered() < 256);
    }
});
