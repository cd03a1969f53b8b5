use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "encoded.txt";

/// How the encoded bit-string is stored on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One ASCII '0' or '1' byte per bit
    #[default]
    Ascii,
    /// Eight bits per byte, most significant bit first, zero padded
    Packed,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Ascii => write!(f, "ascii"),
            OutputFormat::Packed => write!(f, "packed"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Huffman encode a text file and verify the round trip", long_about = None)]
pub struct Args {
    /// Path of the text file to encode
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path of the encoded output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Storage format of the encoded output
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,

    /// Do not echo the encoded and decoded text
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::default(),
            echo: true,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            format: args.format,
            echo: !args.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_filenames() {
        let config = Config::from(Args::parse_from(["huffman"]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "huffman", "-i", "in.txt", "--output", "out.bin", "--format", "packed", "-q",
        ]);
        let config = Config::from(args);
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from("out.bin"));
        assert_eq!(config.format, OutputFormat::Packed);
        assert!(!config.echo);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["huffman", "--format", "zip"]).is_err());
    }
}
