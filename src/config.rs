//! Command-line configuration for the `huffman-codes` binary.

use crate::error::{Error, Result};

pub const USAGE: &str = "\
Usage: huffman-codes [--symbols=<chars> --frequencies=<n,n,...>] [TOKEN=FREQ ...]
  --symbols=<chars>       every character is one symbol
  --frequencies=<n,...>   one frequency per symbol, comma separated
  TOKEN=FREQ              a symbol and its frequency (repeatable)
With no arguments the table a..f / 5,9,12,13,16,45 is used.";

/// Alphabet and frequency table to build a code for. Values are checked by
/// `build_tree`, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub symbols: Vec<String>,
    pub frequencies: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symbols: ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec(),
            frequencies: vec![5, 9, 12, 13, 16, 45],
        }
    }
}

impl Config {
    /// Parses arguments (without the program name). `Ok(None)` means help
    /// was requested.
    pub fn from_args(args: &[String]) -> Result<Option<Config>> {
        let mut symbols = None;
        let mut frequencies = None;
        let mut pairs = Vec::new();

        for arg in args {
            if arg == "--help" || arg == "-h" {
                return Ok(None);
            } else if let Some(value) = arg.strip_prefix("--symbols=") {
                symbols = Some(value.chars().map(String::from).collect::<Vec<_>>());
            } else if let Some(value) = arg.strip_prefix("--frequencies=") {
                frequencies = Some(parse_frequency_list(value)?);
            } else if arg.starts_with("--") {
                return Err(Error::InvalidArgument(format!("unknown option '{}'", arg)));
            } else {
                pairs.push(parse_pair(arg)?);
            }
        }

        let config = match (symbols, frequencies) {
            (Some(_), Some(_)) if !pairs.is_empty() => {
                return Err(Error::InvalidArgument(
                    "TOKEN=FREQ pairs cannot be combined with --symbols/--frequencies".into(),
                ));
            }
            (Some(symbols), Some(frequencies)) => Config {
                symbols,
                frequencies,
            },
            (None, None) if pairs.is_empty() => Config::default(),
            (None, None) => {
                let (symbols, frequencies) = pairs.into_iter().unzip();
                Config {
                    symbols,
                    frequencies,
                }
            }
            _ => {
                return Err(Error::InvalidArgument(
                    "--symbols and --frequencies must be given together".into(),
                ));
            }
        };
        Ok(Some(config))
    }
}

fn parse_frequency(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| Error::InvalidArgument(format!("bad frequency '{}': {}", value, e)))
}

fn parse_frequency_list(value: &str) -> Result<Vec<i64>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value.split(',').map(parse_frequency).collect()
}

fn parse_pair(arg: &str) -> Result<(String, i64)> {
    match arg.rsplit_once('=') {
        Some((token, freq)) if !token.is_empty() => Ok((token.to_string(), parse_frequency(freq)?)),
        _ => Err(Error::InvalidArgument(format!(
            "expected TOKEN=FREQ, got '{}'",
            arg
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_uses_default() {
        assert_eq!(Config::from_args(&[]), Ok(Some(Config::default())));
    }

    #[test]
    fn test_symbols_and_frequencies() {
        let config = Config::from_args(&args(&["--symbols=xyz", "--frequencies=1, 2,3"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.symbols, args(&["x", "y", "z"]));
        assert_eq!(config.frequencies, vec![1, 2, 3]);
    }

    #[test]
    fn test_pairs() {
        let config = Config::from_args(&args(&["the=120", "a=b=7", "neg=-1"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.symbols, args(&["the", "a=b", "neg"]));
        assert_eq!(config.frequencies, vec![120, 7, -1]);
    }

    #[test]
    fn test_help() {
        assert_eq!(Config::from_args(&args(&["the=1", "--help"])), Ok(None));
    }

    #[test]
    fn test_rejected_arguments() {
        for bad in [
            vec!["--symbols=ab"],
            vec!["--frequencies=1,2"],
            vec!["--symbols=ab", "--frequencies=1,2", "c=3"],
            vec!["--order=2"],
            vec!["=5"],
            vec!["plain"],
            vec!["a=many"],
            vec!["--symbols=ab", "--frequencies=1,,2"],
        ] {
            assert!(
                matches!(Config::from_args(&args(&bad)), Err(Error::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_empty_frequency_list() {
        let config = Config::from_args(&args(&["--symbols=", "--frequencies="]))
            .unwrap()
            .unwrap();
        assert!(config.symbols.is_empty());
        assert!(config.frequencies.is_empty());
    }
}
