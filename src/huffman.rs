use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Root of a built tree.
pub type HuffmanTree<S> = Node<S>;

/// Heap entry. `seq` grows with every push, so among equal frequencies
/// the node pushed first is popped first.
struct HeapNode<S> {
    freq: u64,
    seq: usize,
    node: Box<Node<S>>,
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl<S> Eq for HeapNode<S> {}

impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A codeword: `false` is a 0 bit (left branch), `true` a 1 bit (right branch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True when `other` starts with this code. Every code is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn with_bit(&self, bit: bool) -> Code {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Code { bits }
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping, one entry per leaf of the tree it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    codes: HashMap<S, Code>,
}

impl<S: Eq + Hash> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    /// Concatenates the codes of `message`.
    pub fn encode(&self, message: &[S]) -> Result<Vec<bool>> {
        let mut bits = Vec::new();
        for (index, symbol) in message.iter().enumerate() {
            let code = self.codes.get(symbol).ok_or(Error::UnknownSymbol { index })?;
            bits.extend_from_slice(code.bits());
        }
        Ok(bits)
    }
}

/// Checks the input and returns the frequencies as `u64` with their total.
fn validate<S: Eq + Hash>(symbols: &[S], frequencies: &[i64]) -> Result<(Vec<u64>, u64)> {
    if symbols.len() != frequencies.len() {
        return Err(Error::LengthMismatch {
            symbols: symbols.len(),
            frequencies: frequencies.len(),
        });
    }
    if symbols.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut weights = Vec::with_capacity(frequencies.len());
    let mut total: u64 = 0;
    for (index, &frequency) in frequencies.iter().enumerate() {
        let freq = u64::try_from(frequency)
            .map_err(|_| Error::NegativeFrequency { index, frequency })?;
        total = total.checked_add(freq).ok_or(Error::FrequencyOverflow)?;
        weights.push(freq);
    }

    let mut seen = HashMap::with_capacity(symbols.len());
    for (second, symbol) in symbols.iter().enumerate() {
        if let Some(&first) = seen.get(symbol) {
            return Err(Error::DuplicateSymbol { first, second });
        }
        seen.insert(symbol, second);
    }

    Ok((weights, total))
}

/// Builds a Huffman tree whose leaves are exactly `symbols`.
///
/// The two lowest-frequency nodes are merged until one remains; the first one
/// popped becomes the left child. Ties go to the node inserted earliest, so
/// leaves are ranked by their input position and ahead of any internal node
/// of the same frequency. A single symbol comes back as a bare leaf.
pub fn build_tree<S: Eq + Hash + Clone>(
    symbols: &[S],
    frequencies: &[i64],
) -> Result<HuffmanTree<S>> {
    let (weights, total) = validate(symbols, frequencies)?;
    debug!(
        "Building Huffman tree from {} symbols (total frequency {})",
        symbols.len(),
        total
    );

    let mut heap = BinaryHeap::with_capacity(symbols.len());
    let mut seq = 0;
    for (symbol, &freq) in symbols.iter().zip(&weights) {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf {
                symbol: symbol.clone(),
                freq,
            }),
        });
        seq += 1;
    }

    let root = loop {
        let left = heap.pop().ok_or(Error::EmptyAlphabet)?;
        let Some(right) = heap.pop() else {
            break left.node;
        };

        // Bounded by `total`, which fits.
        let freq = left.freq + right.freq;
        trace!("Merging {} + {} -> {}", left.freq, right.freq, freq);
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    };

    debug!(
        "Tree construction complete: {} leaves, depth {}",
        root.leaf_count(),
        root.depth()
    );
    Ok(*root)
}

/// Walks the tree and records the path to every leaf, `0` for left and `1`
/// for right. A tree that is a single leaf gives that symbol the empty code.
pub fn generate_codes<S: Eq + Hash + Clone>(root: &Node<S>) -> CodeTable<S> {
    let mut codes = HashMap::new();
    assign_codes(root, Code::new(), &mut codes);
    debug!("Generated {} codes", codes.len());
    CodeTable { codes }
}

fn assign_codes<S: Eq + Hash + Clone>(node: &Node<S>, prefix: Code, codes: &mut HashMap<S, Code>) {
    match node {
        Node::Leaf { symbol, freq } => {
            trace!("Assigning code '{}' to leaf with frequency {}", prefix, freq);
            codes.insert(symbol.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, prefix.with_bit(false), codes);
            assign_codes(right, prefix.with_bit(true), codes);
        }
    }
}
