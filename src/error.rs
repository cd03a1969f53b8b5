use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    InvalidBit(char),
    // a '1' against a tree that is a single leaf
    NoSuchBranch,
    Truncated,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::InvalidBit(c) => write!(f, "invalid bit {:?}", c),
            MalformedKind::NoSuchBranch => write!(f, "no branch for bit"),
            MalformedKind::Truncated => write!(f, "input ends in the middle of a code"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree: input has no symbols")]
    EmptyInput,

    #[error("malformed encoding at bit {position}: {kind}")]
    MalformedEncoding { position: usize, kind: MalformedKind },

    #[error("symbol {0:?} has no entry in the code table")]
    MissingCode(char),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("round trip mismatch: {original} symbols in, {decoded} symbols out")]
    RoundTripMismatch { original: usize, decoded: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_position_and_kind() {
        let err = HuffmanError::MalformedEncoding {
            position: 7,
            kind: MalformedKind::InvalidBit('x'),
        };
        assert_eq!(err.to_string(), "malformed encoding at bit 7: invalid bit 'x'");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = HuffmanError::Read {
            path: PathBuf::from("input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read input.txt");
        assert!(err.source().is_some());
    }
}
