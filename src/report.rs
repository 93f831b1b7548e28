use std::fmt::Display;
use std::hash::Hash;

use log::{debug, info};

use crate::error::Result;
use crate::huffman::{CodeTable, build_tree, generate_codes};
use crate::stats;

/// Renders `symbol: code` lines in the order of `symbols`.
pub fn format_code_table<S: Eq + Hash + Display>(symbols: &[S], table: &CodeTable<S>) -> String {
    let mut out = String::from("Huffman codes:\n");
    for symbol in symbols {
        let code = match table.get(symbol) {
            Some(code) if code.is_empty() => "(empty)".to_string(),
            Some(code) => code.to_string(),
            None => "-".to_string(),
        };
        out.push_str(&format!("{}: {}\n", symbol, code));
    }
    out
}

/// Builds the code for `symbols` and renders the table followed by its cost
/// summary. Fails only when `build_tree` rejects the input.
pub fn render_report<S: Eq + Hash + Clone + Display>(
    symbols: &[S],
    frequencies: &[i64],
) -> Result<String> {
    info!("Building codes for {} symbols", symbols.len());

    let tree = build_tree(symbols, frequencies)?;
    let table = generate_codes(&tree);
    drop(tree);
    debug!("Tree released, {} codes kept", table.len());

    let mut out = format_code_table(symbols, &table);
    let weighted = stats::weighted_length(&table, symbols, frequencies)?;
    let average = stats::average_code_length(&table, symbols, frequencies)?;
    let entropy = stats::entropy(frequencies);
    out.push_str(&format!(
        "\n✅ Code table built.\n\
         ⚖️  Weighted length: {} bits\n\
         📏  Average length:  {:.4} bits/symbol\n\
         ℹ️  Entropy:         {:.4} bits/symbol\n",
        weighted, average, entropy
    ));
    Ok(out)
}
