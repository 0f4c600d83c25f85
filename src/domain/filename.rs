//! Upload filename sanitisation.
//!
//! Normalises untrusted filenames into something safe to join onto a storage
//! path: NFKD normalisation, path separators collapsed away, and everything
//! outside ASCII word characters, `.`, `-` and the CJK block stripped. CJK
//! filenames survive sanitisation instead of collapsing to an empty string.

use unicode_normalization::UnicodeNormalization;

const WINDOWS_DEVICE_FILES: [&str; 11] = [
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

/// CJK Radicals Supplement through CJK Compatibility Forms.
const CJK_RANGE: std::ops::RangeInclusive<char> = '\u{2E80}'..='\u{FE4F}';

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-' || CJK_RANGE.contains(&c)
}

/// Sanitise an untrusted filename for storage.
///
/// The result contains only `[A-Za-z0-9_.-]` and CJK characters, with
/// whitespace runs replaced by `_` and leading/trailing `.`/`_` trimmed.
/// Both `/` and `\` are treated as path separators regardless of the host
/// OS, since uploads can originate from any client. May return an empty
/// string when nothing survives; callers decide how to handle that.
pub fn secure_filename(filename: &str) -> String {
    let normalized: String = filename.nfkd().collect();
    let spaced: String = normalized
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined.chars().filter(|&c| is_allowed(c)).collect();
    let trimmed = kept.trim_matches(['.', '_']).to_string();

    // Reserved device names shadow real files on Windows.
    if cfg!(windows) && !trimmed.is_empty() {
        let stem = trimmed
            .split('.')
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        if WINDOWS_DEVICE_FILES.contains(&stem.as_str()) {
            return format!("_{trimmed}");
        }
    }

    trimmed
}
