use log::{debug, error};

use crate::error::{HuffmanError, MalformedKind, Result};
use crate::huffman::CodeTable;

pub fn encode_text(text: &str, code_table: &CodeTable) -> Result<String> {
    debug!("Starting text encoding...");
    // exact output size; unknown symbols are reported in the loop below
    let bit_count: usize = text
        .chars()
        .map(|symbol| code_table.get(&symbol).map_or(0, String::len))
        .sum();
    let mut encoded = String::with_capacity(bit_count);

    for symbol in text.chars() {
        match code_table.get(&symbol) {
            Some(code) => encoded.push_str(code),
            None => {
                error!("Symbol {:?} found in text but not in code table!", symbol);
                return Err(HuffmanError::MissingCode(symbol));
            }
        }
    }

    debug!("Encoded {} symbols into {} bits", text.chars().count(), encoded.len());
    Ok(encoded)
}

// First bit goes to the most significant position, last byte is zero padded.
pub fn pack_bits(bits: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    let mut byte = 0u8;

    for (position, c) in bits.chars().enumerate() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(HuffmanError::MalformedEncoding {
                    position,
                    kind: MalformedKind::InvalidBit(other),
                });
            }
        };
        byte = (byte << 1) | bit;
        if position % 8 == 7 {
            bytes.push(byte);
            byte = 0;
        }
    }

    let rem = bits.len() % 8;
    if rem != 0 {
        bytes.push(byte << (8 - rem));
    }

    debug!("Packed {} bits into {} bytes", bits.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{build_code_table, build_huffman_tree, count_frequencies};

    fn table_for(text: &str) -> CodeTable {
        build_code_table(&build_huffman_tree(&count_frequencies(text)).unwrap())
    }

    #[test]
    fn encodes_abracadabra() {
        let encoded = encode_text("abracadabra", &table_for("abracadabra")).unwrap();
        assert_eq!(encoded, "01101110100010101101110");
    }

    #[test]
    fn single_symbol_encodes_one_bit_each() {
        assert_eq!(encode_text("aaaa", &table_for("aaaa")).unwrap(), "0000");
    }

    #[test]
    fn empty_text_encodes_to_empty_string() {
        assert_eq!(encode_text("", &table_for("ab")).unwrap(), "");
    }

    #[test]
    fn skewed_text_reserves_only_what_it_needs() {
        // fibonacci weights give one code per tree level, plus a dominant 'z'
        let mut text = String::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in 'a'..='t' {
            text.extend(std::iter::repeat_n(symbol, a));
            (a, b) = (b, a + b);
        }
        text.extend(std::iter::repeat_n('z', 100_000));

        let table = table_for(&text);
        assert!(table.values().map(String::len).max().unwrap() >= 20);

        let encoded = encode_text(&text, &table).unwrap();
        assert!(
            encoded.capacity() <= 2 * encoded.len(),
            "capacity {} for {} bits",
            encoded.capacity(),
            encoded.len()
        );
    }

    #[test]
    fn missing_symbol_is_reported() {
        let err = encode_text("abz", &table_for("ab")).unwrap_err();
        assert!(matches!(err, HuffmanError::MissingCode('z')));
    }

    #[test]
    fn pack_full_and_partial_bytes() {
        assert_eq!(pack_bits("10101101").unwrap(), vec![0b1010_1101]);
        assert_eq!(pack_bits("101011011").unwrap(), vec![0b1010_1101, 0b1000_0000]);
        assert_eq!(pack_bits("011").unwrap(), vec![0b0110_0000]);
        assert!(pack_bits("").unwrap().is_empty());
    }

    #[test]
    fn pack_rejects_non_binary() {
        let err = pack_bits("01x").unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::MalformedEncoding { position: 2, .. }
        ));
    }
}
