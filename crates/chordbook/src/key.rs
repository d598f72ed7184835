//! Key name normalization ("Csharp" -> "C#", "Bflat" -> "Bb").

use std::sync::OnceLock;

use regex::Regex;

static SHARP_RE: OnceLock<Regex> = OnceLock::new();
static FLAT_RE: OnceLock<Regex> = OnceLock::new();

fn sharp_re() -> &'static Regex {
    SHARP_RE.get_or_init(|| Regex::new(r"(?i)sharp").expect("sharp pattern compiles"))
}

fn flat_re() -> &'static Regex {
    FLAT_RE.get_or_init(|| Regex::new(r"(?i)flat").expect("flat pattern compiles"))
}

/// Replace the words "sharp" and "flat" (any case) with `#` and `b`.
///
/// Anything else passes through untouched; no validation is done here.
pub fn normalize_key(raw: &str) -> String {
    let sharped = sharp_re().replace_all(raw, "#");
    flat_re().replace_all(&sharped, "b").into_owned()
}
