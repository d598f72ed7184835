//! Chord symbol construction from a normalized key and a suffix code.

/// Source suffix code to symbol fragment understood by the theory service.
///
/// Codes missing from this table are used as the fragment verbatim.
pub static SUFFIX_SYMBOLS: &[(&str, &str)] = &[
    ("major", ""),
    ("minor", "m"),
    ("dim", "dim"),
    ("dim7", "dim7"),
    ("sus", "sus4"),
    ("sus2", "sus2"),
    ("sus4", "sus4"),
    ("sus2sus4", "sus24"),
    ("7sus4", "7sus4"),
    ("7sus2", "7sus2"),
    ("alt", "7alt"),
    ("aug", "aug"),
    ("5", "5"),
    ("6", "6"),
    ("69", "69"),
    ("7", "7"),
    ("7b5", "7b5"),
    ("aug7", "7#5"),
    ("9", "9"),
    ("9b5", "9b5"),
    ("aug9", "9#5"),
    ("7b9", "7b9"),
    ("7#9", "7#9"),
    ("11", "11"),
    ("9#11", "9#11"),
    ("13", "13"),
    ("13b9", "13b9"),
    ("maj7", "maj7"),
    ("maj7b5", "maj7b5"),
    ("maj7#5", "maj7#5"),
    ("maj9", "maj9"),
    ("maj11", "maj11"),
    ("maj13", "maj13"),
    ("m6", "m6"),
    ("m69", "m69"),
    ("m7", "m7"),
    ("m7b5", "m7b5"),
    ("m9", "m9"),
    ("m11", "m11"),
    ("m13", "m13"),
    ("mmaj7", "mMaj7"),
    ("mmaj7b5", "mMaj7b5"),
    ("mmaj9", "mMaj9"),
    ("mmaj11", "mMaj11"),
    ("add9", "add9"),
    ("madd9", "madd9"),
    ("add11", "add11"),
];

/// Translate a suffix code into its symbol fragment.
pub fn suffix_fragment(code: &str) -> &str {
    SUFFIX_SYMBOLS
        .iter()
        .find(|(suffix, _)| *suffix == code)
        .map(|(_, fragment)| *fragment)
        .unwrap_or(code)
}

/// Build a chord symbol: `("C#", "m7")` -> `"C#m7"`, `("C", "m/G")` -> `"Cm/G"`.
pub fn build_symbol(key: &str, suffix: &str) -> String {
    match suffix.split_once('/') {
        Some((base_suffix, bass)) => {
            format!("{}{}/{}", key, suffix_fragment(base_suffix), bass)
        }
        None => format!("{}{}", key, suffix_fragment(suffix)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::{MusicTheory, TonalTheory};

    #[test]
    fn plain_suffixes() {
        assert_eq!(build_symbol("C", "major"), "C");
        assert_eq!(build_symbol("C#", "minor"), "C#m");
        assert_eq!(build_symbol("Bb", "mmaj7"), "BbmMaj7");
        assert_eq!(build_symbol("E", "aug7"), "E7#5");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(build_symbol("G", "7#11"), "G7#11");
        assert_eq!(build_symbol("G", ""), "G");
    }

    #[test]
    fn slash_bass_for_every_table_code() {
        for (code, fragment) in SUFFIX_SYMBOLS {
            let symbol = build_symbol("C", &format!("{}/G", code));
            assert!(symbol.ends_with("/G"), "{} -> {}", code, symbol);
            assert_eq!(symbol, format!("C{}/G", fragment));
            if fragment.is_empty() {
                assert_eq!(build_symbol("C", code), "C");
            }
        }
    }

    #[test]
    fn bare_slash_suffix_means_major_over_bass() {
        assert_eq!(build_symbol("C", "/E"), "C/E");
        assert_eq!(build_symbol("A", "m/C"), "Am/C");
    }

    #[test]
    fn every_table_fragment_resolves() {
        let theory = TonalTheory::default();
        for (code, _) in SUFFIX_SYMBOLS {
            let symbol = build_symbol("D", code);
            assert!(
                theory.resolve_symbol(&symbol).is_some(),
                "{} ({}) did not resolve",
                code,
                symbol
            );
        }
    }
}
