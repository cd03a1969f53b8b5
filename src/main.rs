use std::error::Error;

use clap::Parser;
use log::{error, info};

use huffman_roundtrip::config::{Args, Config};
use huffman_roundtrip::pipeline::{RunReport, run};

fn print_summary(config: &Config, report: &RunReport) {
    let trip = &report.round_trip;

    if config.echo {
        println!("Encoded Text: {}", trip.encoded);
        println!("Decoded Text: {}", trip.decoded);
    }
    println!("Encoded data saved to {}", config.output.display());
    println!("Decoding successful!");

    println!(
        "\r\n✅ Round trip verified.\n\
         📂  Input:       {} ({} bytes)\n\
         💾  Output:      {} ({} bytes, {})\n\
         🔣  Symbols:     {} ({} distinct)\n\
         📏  Bits:        {} ({:.4} bits/symbol)\n\
         ℹ️  Entropy:     {:.4} bits/symbol",
        config.input.display(),
        report.input_bytes,
        config.output.display(),
        report.output_bytes,
        report.format,
        trip.symbol_count(),
        trip.codes.len(),
        trip.encoded.len(),
        trip.average_code_length(),
        trip.entropy(),
    );
}

fn main() {
    env_logger::init();

    let config = Config::from(Args::parse());
    info!(
        "Input: {}, output: {}, format: {}",
        config.input.display(),
        config.output.display(),
        config.format
    );

    match run(&config) {
        Ok(report) => print_summary(&config, &report),
        Err(e) => {
            error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
