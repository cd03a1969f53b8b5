//! Huffman coding of text files.
//!
//! The pipeline counts symbol frequencies, builds a Huffman tree with a
//! min-heap, derives a prefix-free code table from the tree, encodes the text
//! as a string of `'0'`/`'1'` characters and decodes it back by walking the
//! tree.
//!
//! ```
//! use huffman_roundtrip::{build_code_table, build_huffman_tree, count_frequencies};
//! use huffman_roundtrip::{decode_text, encode_text};
//!
//! let text = "abracadabra";
//! let tree = build_huffman_tree(&count_frequencies(text))?;
//! let codes = build_code_table(&tree);
//! let bits = encode_text(text, &codes)?;
//! assert_eq!(decode_text(&bits, &tree)?, text);
//! # Ok::<(), huffman_roundtrip::HuffmanError>(())
//! ```

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod huffman;
pub mod io;
pub mod pipeline;

mod min_heap;

pub use config::{Config, OutputFormat};
pub use decoder::decode_text;
pub use encoder::{encode_text, pack_bits};
pub use error::{HuffmanError, MalformedKind, Result};
pub use huffman::{
    CodeTable, FreqTable, HuffmanTree, Node, Symbol, build_code_table, build_huffman_tree,
    count_frequencies, entropy_from_freq, weighted_code_length,
};
pub use io::{read_all_text, write_all_bytes};
pub use pipeline::{RoundTrip, RunReport, round_trip, run};
