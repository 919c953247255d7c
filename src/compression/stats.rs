use crate::error::{Error, Result};
use crate::partitioning::codebook::Codebook;

/// Bits per character of the uncoded text
pub const BITS_PER_CHAR: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Text length times 8 bits
    pub original_size: usize,
    /// Total bits of the encoded text
    pub compressed_size: usize,
    /// Percent saved. Negative when coding makes the text longer.
    pub compression_ratio: f64,
    /// Bits per character of the encoded text
    pub average_code_length: f64,
}

/// Size and ratio figures for `text` coded with `codes`. Empty text gives all zeros.
pub fn compute_statistics(text: &str, codes: &Codebook) -> Result<Statistics> {
    let len = text.chars().count();
    let original_size = len * BITS_PER_CHAR;
    let compressed_size = text.chars().try_fold(0_usize, |sum, c| {
        codes
            .get(&c)
            .map(|code| sum + code.len())
            .ok_or(Error::MissingCode(c))
    })?;

    let compression_ratio = if original_size > 0 {
        (1.0 - compressed_size as f64 / original_size as f64) * 100.0
    } else {
        0.0
    };
    let average_code_length = if len > 0 {
        compressed_size as f64 / len as f64
    } else {
        0.0
    };

    Ok(Statistics {
        original_size,
        compressed_size,
        compression_ratio,
        average_code_length,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn codes(entries: &[(char, &str)]) -> Codebook {
        entries.iter().map(|&(c, s)| (c, s.to_string())).collect()
    }

    #[test]
    fn aabc_stats_test() {
        let s = compute_statistics("aabc", &codes(&[('a', "0"), ('b', "10"), ('c', "11")])).unwrap();
        assert_eq!(s.original_size, 32);
        assert_eq!(s.compressed_size, 6);
        assert!((s.compression_ratio - 81.25).abs() < 1e-9);
        assert!((s.average_code_length - 1.5).abs() < 1e-9);
    }

    #[test]
    fn single_char_stats_test() {
        let s = compute_statistics("aaaa", &codes(&[('a', "0")])).unwrap();
        assert_eq!(s.compressed_size, 4);
        assert!((s.compression_ratio - 87.5).abs() < 1e-9);
    }

    #[test]
    fn empty_stats_test() {
        let s = compute_statistics("", &Codebook::default()).unwrap();
        assert_eq!(s, Statistics::default());
    }

    #[test]
    fn negative_ratio_test() {
        let s = compute_statistics("ab", &codes(&[('a', "000000000"), ('b', "1111111111")])).unwrap();
        assert_eq!(s.compressed_size, 19);
        assert!(s.compression_ratio < 0.0);
        assert!((s.compression_ratio - (1.0 - 19.0 / 16.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_code_test() {
        assert!(matches!(
            compute_statistics("ab", &codes(&[('a', "0")])),
            Err(Error::MissingCode('b'))
        ));
    }
}
