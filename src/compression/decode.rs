use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::partitioning::codebook::Codebook;

/// Rebuild the text from a bitstring. Since the codes are prefix-free, bits are collected
/// until they match a code, which is then emitted.
pub fn decode(bits: &str, codes: &Codebook) -> Result<String> {
    let lookup = codes
        .iter()
        .map(|(&c, code)| (code.as_str(), c))
        .collect::<FxHashMap<&str, char>>();

    let mut out = String::new();
    let mut start = 0;
    for (position, bit) in bits.char_indices() {
        if bit != '0' && bit != '1' {
            return Err(Error::InvalidBit { bit, position });
        }
        if let Some(&c) = lookup.get(&bits[start..=position]) {
            out.push(c);
            start = position + 1;
        }
    }
    if start < bits.len() {
        return Err(Error::IncompleteCode { position: start });
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::encode::encode;
    use crate::partitioning::codebook::build_codebook;
    use crate::partitioning::partition::build_partition_history;
    use crate::tools::freq_count::{freqs, sort_by_freq};

    fn codes_for(text: &str) -> Codebook {
        let f = freqs(text);
        build_codebook(&build_partition_history(&sort_by_freq(&f), &f))
    }

    #[test]
    fn decode_aabc_test() {
        let codes = codes_for("aabc");
        assert_eq!(decode("001011", &codes).unwrap(), "aabc");
        assert_eq!(decode("1110", &codes).unwrap(), "cb");
    }

    #[test]
    fn round_trip_test() {
        for text in [
            "shannon-fano",
            "hello world",
            "mississippi",
            "compression",
            "tab\tand\nnewline, ünïcödé too",
        ] {
            let codes = codes_for(text);
            let bits = encode(text, &codes).unwrap();
            assert_eq!(decode(&bits, &codes).unwrap(), text);
        }
    }

    #[test]
    fn decode_errors_test() {
        let codes = codes_for("aabc");
        match decode("0x1", &codes) {
            Err(Error::InvalidBit { bit, position }) => assert_eq!((bit, position), ('x', 1)),
            other => panic!("expected invalid bit, got {:?}", other),
        }
        match decode("001", &codes) {
            Err(Error::IncompleteCode { position }) => assert_eq!(position, 2),
            other => panic!("expected incomplete code, got {:?}", other),
        }
    }
}
