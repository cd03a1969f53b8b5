use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::min_heap::MinHeap;

pub type Symbol = char;
pub type CodeTable = HashMap<Symbol, String>;
pub type FreqTable = HashMap<Symbol, u64>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

pub type HuffmanTree = Node;

// `seq` is the insertion counter, used to break frequency ties
struct HeapNode {
    freq: u64,
    seq: u64,
    node: Node,
}

fn by_freq_then_seq(a: &HeapNode, b: &HeapNode) -> Ordering {
    a.freq.cmp(&b.freq).then(a.seq.cmp(&b.seq))
}

pub fn count_frequencies(text: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    for symbol in text.chars() {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    debug!(
        "Counted {} distinct symbols in {} bytes of text",
        freq.len(),
        text.len()
    );
    freq
}

pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}

// Leaves are seeded in ascending symbol order and every node carries its
// insertion number, so equal weights always resolve the same way.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    let mut leaves: Vec<(Symbol, u64)> = frequencies.iter().map(|(&s, &f)| (s, f)).collect();
    leaves.sort_unstable_by_key(|&(symbol, _)| symbol);

    let mut seq = 0u64;
    let seeded: Vec<HeapNode> = leaves
        .into_iter()
        .map(|(symbol, freq)| {
            seq += 1;
            HeapNode {
                freq,
                seq,
                node: Node::Leaf { symbol, freq },
            }
        })
        .collect();
    let mut heap = MinHeap::from_vec(seeded, by_freq_then_seq);
    debug!("Initial heap size: {}", heap.len());

    // the queue only ever starts empty; after a merge it holds at least one node
    loop {
        let left = heap.extract_min().ok_or(HuffmanError::EmptyInput)?;
        let Some(right) = heap.extract_min() else {
            debug!("Tree construction complete, root weight {}", left.freq);
            return Ok(left.node);
        };

        let node = Node::merge(left.node, right.node);
        trace!(
            "Merged weights {} + {} -> {}",
            left.freq,
            right.freq,
            node.freq()
        );
        seq += 1;
        heap.insert(HeapNode {
            freq: node.freq(),
            seq,
            node,
        });
    }
}

pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::new();
    match tree {
        // a lone leaf still needs a non-empty code
        Node::Leaf { symbol, .. } => {
            trace!("Single-symbol tree, assigning {:?} : '0'", symbol);
            table.insert(*symbol, String::from("0"));
        }
        Node::Internal { .. } => assign_codes(tree, String::new(), &mut table),
    }
    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to symbol {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}

pub fn weighted_code_length(frequencies: &FreqTable, codes: &CodeTable) -> u64 {
    frequencies
        .iter()
        .map(|(symbol, &freq)| freq * codes.get(symbol).map_or(0, |c| c.len() as u64))
        .sum()
}
