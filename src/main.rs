//! Reads NMEA 0183 from a device over TCP and reports decoded positions,
//! headings and speeds.

use std::io::{self, Read};
use std::net::TcpStream;
use std::process;

use chrono::Utc;
use clap::Parser;
use log::{error, info, warn};

use nmea_stream::{Reading, StreamDecoder};

const READ_BUFFER_SIZE: usize = 4096;

/// Decodes latitude/longitude/heading/speed from a GPS unit that streams
/// NMEA sentences over TCP.
#[derive(Debug, Parser)]
#[command(name = "nmea-relay", version)]
struct Args {
    /// IPv4 address of the NMEA device
    #[arg(long, value_name = "IP")]
    nmea_ip: String,

    /// TCP port of the NMEA device
    #[arg(long, value_name = "PORT")]
    nmea_port: u16,

    /// Sender id, in case several units are attached
    #[arg(long, default_value_t = 0)]
    id: u32,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn relay(args: &Args) -> io::Result<()> {
    let mut stream = TcpStream::connect((args.nmea_ip.as_str(), args.nmea_port))?;
    info!("Connected to {}:{}", args.nmea_ip, args.nmea_port);

    let mut decoder = StreamDecoder::new(Vec::<Reading>::new());
    let mut chunk = [0u8; READ_BUFFER_SIZE];
    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "device closed the connection",
            ));
        }

        if let Err(e) = decoder.feed(&chunk[..n], Utc::now()) {
            warn!("[{}] {}", args.id, e);
        }
        for reading in decoder.sink_mut().drain(..) {
            info!("[{}] {}", args.id, reading);
        }
    }
}

fn main() {
    let args = Args::parse();
    args.init_logging();

    if let Err(e) = relay(&args) {
        error!("Connection lost: {}", e);
        process::exit(1);
    }
}
