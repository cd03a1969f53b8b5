use std::borrow::Cow;
use std::time::Instant;

use log::{debug, error, info};

use crate::config::{Config, OutputFormat};
use crate::decoder::decode_text;
use crate::encoder::{encode_text, pack_bits};
use crate::error::{HuffmanError, Result};
use crate::huffman::{
    CodeTable, FreqTable, HuffmanTree, build_code_table, build_huffman_tree, count_frequencies,
    entropy_from_freq, weighted_code_length,
};
use crate::io::{read_all_text, write_all_bytes};

#[derive(Debug)]
pub struct RoundTrip {
    pub frequencies: FreqTable,
    pub tree: HuffmanTree,
    pub codes: CodeTable,
    pub encoded: String,
    pub decoded: String,
}

impl RoundTrip {
    pub fn symbol_count(&self) -> u64 {
        self.tree.freq()
    }

    pub fn average_code_length(&self) -> f64 {
        self.encoded.len() as f64 / self.symbol_count() as f64
    }

    pub fn entropy(&self) -> f64 {
        entropy_from_freq(&self.frequencies)
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub round_trip: RoundTrip,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub format: OutputFormat,
}

pub fn round_trip(text: &str) -> Result<RoundTrip> {
    let start_time = Instant::now();

    let frequencies = count_frequencies(text);
    let tree = build_huffman_tree(&frequencies)?;
    let codes = build_code_table(&tree);
    let encoded = encode_text(text, &codes)?;
    debug_assert_eq!(
        encoded.len() as u64,
        weighted_code_length(&frequencies, &codes)
    );
    let decoded = decode_text(&encoded, &tree)?;

    if decoded != text {
        error!("Decoding failed!");
        return Err(HuffmanError::RoundTripMismatch {
            original: text.chars().count(),
            decoded: decoded.chars().count(),
        });
    }

    debug!("Round trip finished in {:.2?}", start_time.elapsed());
    Ok(RoundTrip {
        frequencies,
        tree,
        codes,
        encoded,
        decoded,
    })
}

/// Nothing is written unless the decoded text matches the input.
pub fn run(config: &Config) -> Result<RunReport> {
    info!("--- Start ---");
    let text = read_all_text(&config.input)?;
    let trip = round_trip(&text)?;
    info!("Decoding successful!");

    let payload: Cow<[u8]> = match config.format {
        OutputFormat::Ascii => Cow::Borrowed(trip.encoded.as_bytes()),
        OutputFormat::Packed => Cow::Owned(pack_bits(&trip.encoded)?),
    };
    write_all_bytes(&config.output, &payload)?;
    let output_bytes = payload.len();
    info!(
        "Encoded data saved to {} ({} format)",
        config.output.display(),
        config.format
    );
    info!("--- End ---");

    Ok(RunReport {
        round_trip: trip,
        input_bytes: text.len(),
        output_bytes,
        format: config.format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_abracadabra() {
        let rt = round_trip("abracadabra").unwrap();
        assert_eq!(rt.decoded, "abracadabra");
        assert_eq!(rt.encoded.len(), 23);
        assert_eq!(rt.symbol_count(), 11);
        assert!((rt.average_code_length() - 23.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn round_trip_empty_text_fails() {
        assert!(matches!(round_trip(""), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn run_writes_ascii_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: dir.path().join("input.txt"),
            output: dir.path().join("encoded.txt"),
            ..Config::default()
        };
        std::fs::write(&config.input, "aaaa").unwrap();

        let report = run(&config).unwrap();
        assert_eq!(std::fs::read(&config.output).unwrap(), b"0000");
        assert_eq!(report.input_bytes, 4);
        assert_eq!(report.output_bytes, 4);
    }

    #[test]
    fn run_output_size_follows_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        std::fs::write(&input, "abracadabra").unwrap();

        for (format, expected) in [(OutputFormat::Ascii, 23), (OutputFormat::Packed, 3)] {
            let config = Config {
                input: input.clone(),
                output: dir.path().join(format!("{}.out", format)),
                format,
                echo: false,
            };
            let report = run(&config).unwrap();
            assert_eq!(report.output_bytes, expected);
            assert_eq!(std::fs::read(&config.output).unwrap().len(), expected);
            assert_eq!(report.round_trip.encoded.len(), 23);
        }
    }
}
