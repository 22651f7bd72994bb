/// Shortens a `0x`-prefixed hex string (address or transaction hash) to
/// `0xabcd:wxyz` for narrow status lines.
pub fn shorten_hex(hex: impl Into<String>) -> String {
    let hex_string: String = hex.into();
    match hex_string.strip_prefix("0x") {
        Some(stripped) if stripped.len() > 10 => {
            let len = stripped.len();
            let heading = &stripped[0..4];
            let trail = &stripped[(len - 4)..len];
            format!("0x{heading}:{trail}")
        }
        _ => hex_string,
    }
}
