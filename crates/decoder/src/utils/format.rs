//! Formatting helpers for hex strings and coin amounts.

/// Smallest units per whole coin (MIST per SUI).
pub const MIST_PER_COIN: u64 = 1_000_000_000;

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Keep the first `chars` characters and append "..." when anything was cut.
pub fn shorten(s: &str, chars: usize) -> String {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Render a smallest-unit amount as whole coins.
///
/// Amounts of at least one coin get 2 decimals, smaller ones get 4. Rounding
/// is half-up and done on integers, so values above 2^53 stay exact.
pub fn format_mist(mist: u64) -> String {
    let decimals: u32 = if mist >= MIST_PER_COIN { 2 } else { 4 };
    let scale = 10u128.pow(9 - decimals);
    let rounded = (u128::from(mist) + scale / 2) / scale;
    let unit = 10u128.pow(decimals);

    format!(
        "{}.{:0width$}",
        rounded / unit,
        rounded % unit,
        width = decimals as usize
    )
}
