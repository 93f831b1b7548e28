//! Cost measures for a generated code.

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::huffman::CodeTable;

/// Σ frequency × code length over all symbols, in bits. Summed in `u128`,
/// which holds the product of any `u64` frequency and any code length.
pub fn weighted_length<S: Eq + Hash>(
    table: &CodeTable<S>,
    symbols: &[S],
    frequencies: &[i64],
) -> Result<u128> {
    if symbols.len() != frequencies.len() {
        return Err(Error::LengthMismatch {
            symbols: symbols.len(),
            frequencies: frequencies.len(),
        });
    }

    let mut total: u128 = 0;
    for (index, (symbol, &frequency)) in symbols.iter().zip(frequencies).enumerate() {
        let freq = u64::try_from(frequency)
            .map_err(|_| Error::NegativeFrequency { index, frequency })?;
        let code = table.get(symbol).ok_or(Error::UnknownSymbol { index })?;
        total += u128::from(freq) * code.len() as u128;
    }
    Ok(total)
}

/// Expected code length in bits per symbol. Zero when all frequencies are zero.
pub fn average_code_length<S: Eq + Hash>(
    table: &CodeTable<S>,
    symbols: &[S],
    frequencies: &[i64],
) -> Result<f64> {
    let weighted = weighted_length(table, symbols, frequencies)?;
    // weighted_length already rejected negatives
    let total: f64 = frequencies.iter().map(|&f| f as f64).sum();
    if total == 0.0 {
        return Ok(0.0);
    }
    Ok(weighted as f64 / total)
}

/// Shannon entropy in bits per symbol, the lower bound for the average code
/// length. Entries that are not positive contribute nothing.
pub fn entropy(frequencies: &[i64]) -> f64 {
    let total: f64 = frequencies.iter().filter(|&&f| f > 0).map(|&f| f as f64).sum();
    if total == 0.0 {
        return 0.0;
    }

    frequencies
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{build_tree, generate_codes};

    const CLASSIC: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
    const CLASSIC_FREQ: [i64; 6] = [5, 9, 12, 13, 16, 45];

    #[test]
    fn test_classic_weighted_length() {
        let table = generate_codes(&build_tree(&CLASSIC, &CLASSIC_FREQ).unwrap());
        assert_eq!(weighted_length(&table, &CLASSIC, &CLASSIC_FREQ), Ok(224));

        let avg = average_code_length(&table, &CLASSIC, &CLASSIC_FREQ).unwrap();
        assert!((avg - 2.24).abs() < 1e-9);
        assert!(avg >= entropy(&CLASSIC_FREQ));
    }

    #[test]
    fn test_weighted_length_errors() {
        let table = generate_codes(&build_tree(&['a', 'b'], &[1, 2]).unwrap());
        assert_eq!(
            weighted_length(&table, &['a', 'c'], &[1, 2]),
            Err(Error::UnknownSymbol { index: 1 })
        );
        assert_eq!(
            weighted_length(&table, &['a', 'b'], &[1, -2]),
            Err(Error::NegativeFrequency {
                index: 1,
                frequency: -2
            })
        );
        assert_eq!(
            weighted_length(&table, &['a'], &[1, 2]),
            Err(Error::LengthMismatch {
                symbols: 1,
                frequencies: 2
            })
        );
    }

    #[test]
    fn test_single_symbol_costs_nothing() {
        let table = generate_codes(&build_tree(&['x'], &[10]).unwrap());
        assert_eq!(weighted_length(&table, &['x'], &[10]), Ok(0));
        assert_eq!(entropy(&[10]), 0.0);
    }

    #[test]
    fn test_all_zero_frequencies() {
        let table = generate_codes(&build_tree(&['a', 'b'], &[0, 0]).unwrap());
        assert_eq!(average_code_length(&table, &['a', 'b'], &[0, 0]), Ok(0.0));
        assert_eq!(entropy(&[0, 0]), 0.0);
    }

    #[test]
    fn test_weighted_length_past_u64() {
        let symbols = ['a', 'b', 'c'];
        let frequencies = [i64::MAX, i64::MAX, 1];
        let table = generate_codes(&build_tree(&symbols, &frequencies).unwrap());

        // b = 0, c = 10, a = 11
        let expected = 3 * i64::MAX as u128 + 2;
        let weighted = weighted_length(&table, &symbols, &frequencies).unwrap();
        assert!(weighted > u64::MAX as u128);
        assert_eq!(weighted, expected);
        assert!(average_code_length(&table, &symbols, &frequencies).is_ok());
    }

    #[test]
    fn test_uniform_entropy() {
        assert!((entropy(&[3, 3, 3, 3]) - 2.0).abs() < 1e-12);
    }
}
