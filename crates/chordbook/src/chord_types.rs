//! Chord type dictionary: interval formula, long name, and accepted aliases.

/// A chord type as an interval formula over the root.
pub struct ChordType {
    pub name: &'static str,
    pub intervals: &'static [&'static str],
    /// Symbol fragments that name this type. The first is canonical.
    pub aliases: &'static [&'static str],
}

impl ChordType {
    const fn new(
        name: &'static str,
        intervals: &'static [&'static str],
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            intervals,
            aliases,
        }
    }
}

/// All recognized chord types. Aliases are unique across the table.
pub static CHORD_TYPES: &[ChordType] = &[
    // Triads and dyads
    ChordType::new("major", &["1P", "3M", "5P"], &["M", "", "maj", "^"]),
    ChordType::new("minor", &["1P", "3m", "5P"], &["m", "min", "-"]),
    ChordType::new("diminished", &["1P", "3m", "5d"], &["dim", "°", "o"]),
    ChordType::new("augmented", &["1P", "3M", "5A"], &["aug", "+", "+5"]),
    ChordType::new("suspended fourth", &["1P", "4P", "5P"], &["sus4", "sus"]),
    ChordType::new("suspended second", &["1P", "2M", "5P"], &["sus2"]),
    ChordType::new(
        "suspended second and fourth",
        &["1P", "2M", "4P", "5P"],
        &["sus24", "sus4add9"],
    ),
    ChordType::new("fifth", &["1P", "5P"], &["5"]),
    // Sixths and added tones
    ChordType::new("sixth", &["1P", "3M", "5P", "6M"], &["6", "M6", "add6"]),
    ChordType::new(
        "sixth added ninth",
        &["1P", "3M", "5P", "6M", "9M"],
        &["69", "6/9", "6add9"],
    ),
    ChordType::new("minor sixth", &["1P", "3m", "5P", "6M"], &["m6", "-6"]),
    ChordType::new(
        "minor sixth added ninth",
        &["1P", "3m", "5P", "6M", "9M"],
        &["m69", "m6/9", "-69"],
    ),
    ChordType::new("added ninth", &["1P", "3M", "5P", "9M"], &["add9", "Madd9", "2"]),
    ChordType::new(
        "minor added ninth",
        &["1P", "3m", "5P", "9M"],
        &["madd9", "m(add9)", "madd2"],
    ),
    ChordType::new("added eleventh", &["1P", "3M", "5P", "11P"], &["add11"]),
    // Dominant family
    ChordType::new("dominant seventh", &["1P", "3M", "5P", "7m"], &["7", "dom"]),
    ChordType::new(
        "suspended fourth seventh",
        &["1P", "4P", "5P", "7m"],
        &["7sus4", "7sus"],
    ),
    ChordType::new("suspended second seventh", &["1P", "2M", "5P", "7m"], &["7sus2"]),
    ChordType::new("dominant flat fifth", &["1P", "3M", "5d", "7m"], &["7b5"]),
    ChordType::new(
        "augmented seventh",
        &["1P", "3M", "5A", "7m"],
        &["7#5", "+7", "7+", "7aug", "aug7"],
    ),
    ChordType::new(
        "altered",
        &["1P", "3M", "7m", "9m", "9A", "11A", "13m"],
        &["7alt", "alt7", "alt"],
    ),
    ChordType::new("dominant flat ninth", &["1P", "3M", "5P", "7m", "9m"], &["7b9"]),
    ChordType::new("dominant sharp ninth", &["1P", "3M", "5P", "7m", "9A"], &["7#9"]),
    ChordType::new("dominant ninth", &["1P", "3M", "5P", "7m", "9M"], &["9"]),
    ChordType::new("ninth flat fifth", &["1P", "3M", "5d", "7m", "9M"], &["9b5"]),
    ChordType::new(
        "augmented ninth",
        &["1P", "3M", "5A", "7m", "9M"],
        &["9#5", "9+", "aug9"],
    ),
    ChordType::new(
        "dominant ninth sharp eleventh",
        &["1P", "3M", "5P", "7m", "9M", "11A"],
        &["9#11"],
    ),
    ChordType::new("eleventh", &["1P", "5P", "7m", "9M", "11P"], &["11"]),
    ChordType::new(
        "dominant thirteenth",
        &["1P", "3M", "5P", "7m", "9M", "13M"],
        &["13"],
    ),
    ChordType::new(
        "dominant thirteenth flat ninth",
        &["1P", "3M", "5P", "7m", "9m", "13M"],
        &["13b9"],
    ),
    // Major sevenths
    ChordType::new(
        "major seventh",
        &["1P", "3M", "5P", "7M"],
        &["maj7", "M7", "Maj7", "ma7", "Δ", "^7"],
    ),
    ChordType::new(
        "major seventh flat fifth",
        &["1P", "3M", "5d", "7M"],
        &["maj7b5", "M7b5"],
    ),
    ChordType::new(
        "augmented major seventh",
        &["1P", "3M", "5A", "7M"],
        &["maj7#5", "M7#5", "+maj7"],
    ),
    ChordType::new("major ninth", &["1P", "3M", "5P", "7M", "9M"], &["maj9", "M9", "^9"]),
    ChordType::new(
        "major eleventh",
        &["1P", "3M", "5P", "7M", "9M", "11P"],
        &["maj11", "M11"],
    ),
    ChordType::new(
        "major thirteenth",
        &["1P", "3M", "5P", "7M", "9M", "13M"],
        &["maj13", "M13", "^13"],
    ),
    // Minor sevenths
    ChordType::new(
        "minor seventh",
        &["1P", "3m", "5P", "7m"],
        &["m7", "min7", "mi7", "-7"],
    ),
    ChordType::new(
        "half-diminished",
        &["1P", "3m", "5d", "7m"],
        &["m7b5", "ø", "-7b5", "h7"],
    ),
    ChordType::new(
        "diminished seventh",
        &["1P", "3m", "5d", "7d"],
        &["dim7", "°7", "o7"],
    ),
    ChordType::new("minor ninth", &["1P", "3m", "5P", "7m", "9M"], &["m9", "-9"]),
    ChordType::new(
        "minor eleventh",
        &["1P", "3m", "5P", "7m", "9M", "11P"],
        &["m11", "-11"],
    ),
    ChordType::new(
        "minor thirteenth",
        &["1P", "3m", "5P", "7m", "9M", "11P", "13M"],
        &["m13", "-13"],
    ),
    // Minor/major hybrids
    ChordType::new(
        "minor/major seventh",
        &["1P", "3m", "5P", "7M"],
        &["mMaj7", "mmaj7", "m/ma7", "m/maj7", "mM7"],
    ),
    ChordType::new(
        "minor/major seventh flat fifth",
        &["1P", "3m", "5d", "7M"],
        &["mMaj7b5", "mmaj7b5"],
    ),
    ChordType::new(
        "minor/major ninth",
        &["1P", "3m", "5P", "7M", "9M"],
        &["mMaj9", "mmaj9", "mM9"],
    ),
    ChordType::new(
        "minor/major eleventh",
        &["1P", "3m", "5P", "7M", "9M", "11P"],
        &["mMaj11", "mmaj11"],
    ),
];

/// Look up a chord type by any of its aliases.
pub fn find(alias: &str) -> Option<&'static ChordType> {
    CHORD_TYPES
        .iter()
        .find(|chord_type| chord_type.aliases.contains(&alias))
}
