//! Suffix code to chord quality, by ordered substring rules.

use crate::types::ChordQuality;

/// A test against the raw suffix code.
#[derive(Debug, Clone, Copy)]
pub enum SuffixTest {
    Exact(&'static str),
    Contains(&'static str),
    /// Contains the first string and none of the others.
    ContainsExcept(&'static str, &'static [&'static str]),
    /// Contains the first string and does not start with the second.
    ContainsUnlessPrefix(&'static str, &'static str),
    ContainsAny(&'static [&'static str]),
}

impl SuffixTest {
    pub fn matches(&self, suffix: &str) -> bool {
        match *self {
            SuffixTest::Exact(code) => suffix == code,
            SuffixTest::Contains(part) => suffix.contains(part),
            SuffixTest::ContainsExcept(part, except) => {
                suffix.contains(part) && !except.iter().any(|e| suffix.contains(e))
            }
            SuffixTest::ContainsUnlessPrefix(part, prefix) => {
                suffix.contains(part) && !suffix.starts_with(prefix)
            }
            SuffixTest::ContainsAny(parts) => parts.iter().any(|p| suffix.contains(p)),
        }
    }
}

/// Quality rules, first match wins.
///
/// `dim7` is caught by the `m7` rule and `69` by the ninth rule. The minor
/// rule skips the `maj*` family (`major`, `maj13`); `mmaj11` stays minor.
pub static QUALITY_RULES: &[(SuffixTest, ChordQuality)] = &[
    (SuffixTest::Contains("maj7"), ChordQuality::MajorSeventh),
    (SuffixTest::Contains("m7"), ChordQuality::MinorSeventh),
    (SuffixTest::Contains("dim7"), ChordQuality::DiminishedSeventh),
    (SuffixTest::Contains("aug7"), ChordQuality::AugmentedSeventh),
    (SuffixTest::Contains("m9"), ChordQuality::MinorNinth),
    (SuffixTest::Contains("maj9"), ChordQuality::MajorNinth),
    (SuffixTest::ContainsExcept("9", &["maj"]), ChordQuality::DominantNinth),
    (SuffixTest::Contains("dim"), ChordQuality::Diminished),
    (SuffixTest::Contains("aug"), ChordQuality::Augmented),
    (SuffixTest::Contains("sus"), ChordQuality::Suspended),
    (SuffixTest::ContainsUnlessPrefix("m", "maj"), ChordQuality::Minor),
    (SuffixTest::Exact("5"), ChordQuality::Power),
    (SuffixTest::Exact("6"), ChordQuality::Sixth),
    (SuffixTest::Exact("69"), ChordQuality::SixNine),
];

/// Classify a suffix code. Defaults to major when no rule matches.
pub fn classify_quality(suffix: &str) -> ChordQuality {
    QUALITY_RULES
        .iter()
        .find(|(test, _)| test.matches(suffix))
        .map(|(_, quality)| *quality)
        .unwrap_or(ChordQuality::Major)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sevenths() {
        assert_eq!(classify_quality("maj7"), ChordQuality::MajorSeventh);
        assert_eq!(classify_quality("mmaj7"), ChordQuality::MajorSeventh);
        assert_eq!(classify_quality("m7"), ChordQuality::MinorSeventh);
        assert_eq!(classify_quality("aug7"), ChordQuality::AugmentedSeventh);
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        assert_eq!(classify_quality("dim7"), ChordQuality::MinorSeventh);
        assert_eq!(classify_quality("69"), ChordQuality::DominantNinth);
        assert_eq!(classify_quality("m69"), ChordQuality::DominantNinth);
    }

    #[test]
    fn half_diminished_is_minor_seventh_not_minor() {
        assert_eq!(classify_quality("m7b5"), ChordQuality::MinorSeventh);
    }

    #[test]
    fn ninths() {
        assert_eq!(classify_quality("m9"), ChordQuality::MinorNinth);
        assert_eq!(classify_quality("maj9"), ChordQuality::MajorNinth);
        assert_eq!(classify_quality("9"), ChordQuality::DominantNinth);
        assert_eq!(classify_quality("7b9"), ChordQuality::DominantNinth);
        assert_eq!(classify_quality("aug9"), ChordQuality::DominantNinth);
        assert_eq!(classify_quality("mmaj9"), ChordQuality::MajorNinth);
    }

    #[test]
    fn triads_and_the_rest() {
        assert_eq!(classify_quality("dim"), ChordQuality::Diminished);
        assert_eq!(classify_quality("aug"), ChordQuality::Augmented);
        assert_eq!(classify_quality("sus2"), ChordQuality::Suspended);
        assert_eq!(classify_quality("7sus4"), ChordQuality::Suspended);
        assert_eq!(classify_quality("minor"), ChordQuality::Minor);
        assert_eq!(classify_quality("m6"), ChordQuality::Minor);
        assert_eq!(classify_quality("mmaj11"), ChordQuality::Minor);
        assert_eq!(classify_quality("5"), ChordQuality::Power);
        assert_eq!(classify_quality("6"), ChordQuality::Sixth);
    }

    #[test]
    fn major_is_the_default() {
        assert_eq!(classify_quality("major"), ChordQuality::Major);
        assert_eq!(classify_quality(""), ChordQuality::Major);
        assert_eq!(classify_quality("7"), ChordQuality::Major);
        assert_eq!(classify_quality("maj13"), ChordQuality::Major);
        assert_eq!(classify_quality("add11"), ChordQuality::Major);
    }
}
