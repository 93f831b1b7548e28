//! # huffman_codes
//!
//! Builds an optimal prefix-free binary code for an alphabet from per-symbol
//! frequencies.
//!
//! ```rust
//! use huffman_codes::{build_tree, generate_codes};
//!
//! let symbols = ['a', 'b', 'c', 'd', 'e', 'f'];
//! let tree = build_tree(&symbols, &[5, 9, 12, 13, 16, 45])?;
//! let table = generate_codes(&tree);
//! drop(tree);
//!
//! assert_eq!(table.get(&'f').map(|code| code.len()), Some(1));
//! # Ok::<(), huffman_codes::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod huffman;
pub mod report;
pub mod stats;

pub use error::{Error, Result};
pub use huffman::{Code, CodeTable, HuffmanTree, Node, build_tree, generate_codes};
