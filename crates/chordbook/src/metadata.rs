//! Descriptive tags, genre associations, and common progressions.

use crate::quality::SuffixTest;
use crate::types::GuitarFingering;

/// Aggregate difficulty at or below which a chord is tagged "beginner".
pub const BEGINNER_MAX: f64 = 2.0;
/// Aggregate difficulty at or above which a chord is tagged "advanced".
pub const ADVANCED_MIN: f64 = 4.0;

/// Tag rules on the suffix code. Every match contributes.
pub static TAG_RULES: &[(SuffixTest, &str)] = &[
    (SuffixTest::Exact("major"), "major"),
    (SuffixTest::Contains("maj"), "major"),
    (SuffixTest::Contains("m7"), "minor-7th"),
    (SuffixTest::ContainsAny(&["9", "11", "13"]), "extended"),
    (SuffixTest::Contains("sus"), "suspended"),
    (SuffixTest::Contains("dim"), "diminished"),
    (SuffixTest::Contains("aug"), "augmented"),
    (SuffixTest::Contains("add"), "added-tone"),
    (SuffixTest::Exact("5"), "power-chord"),
];

/// Genre rules on the suffix code. Every match contributes.
pub static GENRE_RULES: &[(SuffixTest, &[&str])] = &[
    (SuffixTest::ContainsAny(&["7", "9"]), &["blues", "jazz", "funk"]),
    (SuffixTest::Contains("sus"), &["pop", "rock", "folk"]),
    (SuffixTest::ContainsAny(&["maj7", "m9"]), &["jazz", "bossa-nova", "r&b"]),
    (SuffixTest::Exact("5"), &["rock", "metal", "punk"]),
    (SuffixTest::Exact("major"), &["all-genres", "essential"]),
    (SuffixTest::Exact("minor"), &["all-genres", "essential"]),
];

/// Progression rules on the suffix code. First match wins, so every `m7`
/// code takes the dominant list.
pub static PROGRESSION_RULES: &[(SuffixTest, &[&str])] = &[
    (
        SuffixTest::Exact("major"),
        &["I-IV-V", "I-V-vi-IV", "I-vi-IV-V", "ii-V-I"],
    ),
    (
        SuffixTest::Exact("minor"),
        &["i-iv-v", "i-VI-III-VII", "i-iv-VII", "ii°-V-i"],
    ),
    (
        SuffixTest::Contains("7"),
        &["I7-IV7-V7", "V7-I", "III7-vi"],
    ),
    (
        SuffixTest::Contains("m7"),
        &["ii7-V7-Imaj7", "i7-iv7", "vi7-ii7-V7-I"],
    ),
];

/// Everything the metadata generator derives for one chord.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordMetadata {
    pub tags: Vec<String>,
    pub genre_tags: Vec<String>,
    pub common_progressions: Vec<String>,
}

/// Derive tags, genres and progressions for a suffix and its fingerings.
pub fn generate_metadata(
    suffix: &str,
    fingerings: &[GuitarFingering],
    difficulty: f64,
) -> ChordMetadata {
    ChordMetadata {
        tags: tags(suffix, fingerings, difficulty),
        genre_tags: genre_tags(suffix),
        common_progressions: common_progressions(suffix),
    }
}

pub fn tags(suffix: &str, fingerings: &[GuitarFingering], difficulty: f64) -> Vec<String> {
    let mut tags = Vec::new();

    for (test, tag) in TAG_RULES {
        if test.matches(suffix) {
            push_unique(&mut tags, tag);
        }
    }

    if fingerings.iter().any(|f| f.barre.is_some()) {
        push_unique(&mut tags, "barre");
    }
    if fingerings.iter().any(|f| f.frets.contains(&0)) {
        push_unique(&mut tags, "open-chord");
    }
    if fingerings.iter().any(|f| f.capo) {
        push_unique(&mut tags, "capo");
    }

    if difficulty <= BEGINNER_MAX {
        push_unique(&mut tags, "beginner");
    } else if difficulty >= ADVANCED_MIN {
        push_unique(&mut tags, "advanced");
    }

    tags
}

pub fn genre_tags(suffix: &str) -> Vec<String> {
    let mut genres = Vec::new();
    for (test, names) in GENRE_RULES {
        if test.matches(suffix) {
            for name in names.iter() {
                push_unique(&mut genres, name);
            }
        }
    }
    genres
}

pub fn common_progressions(suffix: &str) -> Vec<String> {
    PROGRESSION_RULES
        .iter()
        .find(|(test, _)| test.matches(suffix))
        .map(|(_, progressions)| progressions.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BarreInfo;
    use pretty_assertions::assert_eq;

    fn fingering(frets: [i32; 6], barre: bool, capo: bool) -> GuitarFingering {
        GuitarFingering {
            id: String::new(),
            name: String::new(),
            frets: frets.to_vec(),
            fingers: vec![0; 6],
            base_fret: 1,
            muted_strings: vec![],
            barre: barre.then_some(BarreInfo {
                from_string: 6,
                to_string: 1,
                fret: 1,
            }),
            midi: vec![],
            notes: vec![],
            intervals: vec![],
            difficulty: 1.0,
            capo,
        }
    }

    #[test]
    fn major_open_chord_tags() {
        let fingerings = [fingering([-1, 3, 2, 0, 1, 0], false, false)];
        assert_eq!(tags("major", &fingerings, 1.0), vec!["major", "open-chord", "beginner"]);
    }

    #[test]
    fn suffix_tags_are_deduplicated_in_order() {
        let fingerings = [
            fingering([1, 3, 3, 2, 1, 1], true, false),
            fingering([1, 3, 3, 2, 1, 1], true, true),
        ];
        assert_eq!(
            tags("maj9", &fingerings, 4.5),
            vec!["major", "extended", "barre", "capo", "advanced"]
        );
    }

    #[test]
    fn plain_minor_has_no_quality_tag() {
        assert!(tags("minor", &[], 3.0).is_empty());
    }

    #[test]
    fn middling_difficulty_has_no_level_tag() {
        let got = tags("m7b5", &[], 3.0);
        assert_eq!(got, vec!["minor-7th"]);
    }

    #[test]
    fn genres() {
        assert_eq!(genre_tags("maj7"), vec!["blues", "jazz", "funk", "bossa-nova", "r&b"]);
        assert_eq!(genre_tags("7sus4"), vec!["blues", "jazz", "funk", "pop", "rock", "folk"]);
        assert_eq!(genre_tags("5"), vec!["rock", "metal", "punk"]);
        assert_eq!(genre_tags("minor"), vec!["all-genres", "essential"]);
        assert!(genre_tags("dim").is_empty());
    }

    #[test]
    fn progressions_first_match_wins() {
        assert_eq!(common_progressions("major")[0], "I-IV-V");
        assert_eq!(common_progressions("minor")[0], "i-iv-v");
        assert_eq!(common_progressions("m7b5")[0], "I7-IV7-V7");
        assert_eq!(common_progressions("m7")[0], "I7-IV7-V7");
        assert_eq!(common_progressions("7")[0], "I7-IV7-V7");
        assert_eq!(common_progressions("maj7")[0], "I7-IV7-V7");
        assert!(common_progressions("sus2").is_empty());
    }
}
