use std::time::Instant;

use log::{debug, trace};

use crate::error::{HuffmanError, MalformedKind, Result};
use crate::huffman::{HuffmanTree, Node};

/// Walks `tree` bit by bit, emitting a symbol every time a leaf is reached.
///
/// A tree that is a single leaf decodes each `'0'` as its symbol. Any other
/// character, a branch the tree does not have, or input that stops in the
/// middle of a code is a [`HuffmanError::MalformedEncoding`].
pub fn decode_text(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    debug!("Starting bitstream decoding...");
    let start_time = Instant::now();

    let mut result = String::new();
    let mut current = tree;
    let mut depth = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        let go_right = match c {
            '0' => false,
            '1' => true,
            other => {
                return Err(malformed(position, MalformedKind::InvalidBit(other)));
            }
        };

        let next = match current {
            Node::Internal { left, right, .. } => {
                if go_right {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // only reachable when the root itself is a leaf
            Node::Leaf { .. } if !go_right => current,
            Node::Leaf { .. } => {
                return Err(malformed(position, MalformedKind::NoSuchBranch));
            }
        };

        if let Node::Leaf { symbol, .. } = next {
            result.push(*symbol);
            current = tree;
            depth = 0;
        } else {
            current = next;
            depth += 1;
        }
    }

    if depth != 0 {
        return Err(malformed(encoded.chars().count(), MalformedKind::Truncated));
    }

    trace!("Decoded {} symbols", result.chars().count());
    debug!("Bitstream decoding finished in {:.2?}.", start_time.elapsed());
    Ok(result)
}

fn malformed(position: usize, kind: MalformedKind) -> HuffmanError {
    debug!("Malformed encoding at bit {}: {}", position, kind);
    HuffmanError::MalformedEncoding { position, kind }
}
