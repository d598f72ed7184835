use serde::{Deserialize, Serialize};

use crate::chord_types;
use crate::pitch::{Interval, Pitch};

/// What the theory service knows about a chord symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordIdentity {
    pub symbol: String,
    pub tonic: String,
    /// Long name: "C# major", "G dominant seventh over B"
    pub name: String,
    pub aliases: Vec<String>,
    pub notes: Vec<String>,
    pub intervals: Vec<String>,
    pub bass: Option<String>,
}

/// Trait for music theory backends.
///
/// Lookups return `None` when the input cannot be resolved.
pub trait MusicTheory: Send + Sync {
    fn resolve_symbol(&self, symbol: &str) -> Option<ChordIdentity>;

    fn note_from_midi(&self, midi: i32) -> Option<String>;

    fn pitch_class_of(&self, note: &str) -> Option<String>;

    fn interval_between(&self, pitch_class: &str, note: &str) -> Option<String>;
}

/// How MIDI numbers are spelled when converted to note names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidiSpelling {
    #[default]
    Flats,
    Sharps,
}

/// Built-in theory backend using spelled interval arithmetic and the
/// chord type dictionary.
#[derive(Debug, Clone, Default)]
pub struct TonalTheory {
    spelling: MidiSpelling,
}

impl TonalTheory {
    pub fn new(spelling: MidiSpelling) -> Self {
        Self { spelling }
    }
}

impl MusicTheory for TonalTheory {
    fn resolve_symbol(&self, symbol: &str) -> Option<ChordIdentity> {
        let (tonic, rest) = split_tonic(symbol)?;

        // Whole remainder first: some aliases contain a slash ("6/9")
        let (chord_type, bass) = match chord_types::find(rest) {
            Some(chord_type) => (chord_type, None),
            None => {
                let (type_part, bass_part) = rest.rsplit_once('/')?;
                let bass = Pitch::parse(bass_part)?;
                if bass.octave.is_some() {
                    return None;
                }
                (chord_types::find(type_part)?, Some(bass))
            }
        };

        let mut notes = Vec::with_capacity(chord_type.intervals.len() + 1);
        let mut intervals = Vec::with_capacity(chord_type.intervals.len() + 1);
        for label in chord_type.intervals {
            let interval = Interval::parse(label)?;
            notes.push(tonic.transpose(interval));
            intervals.push((*label).to_string());
        }

        let mut name = format!("{} {}", tonic, chord_type.name);
        if let Some(bass) = bass {
            name.push_str(&format!(" over {}", bass));
            if !notes.iter().any(|n| n.chroma() == bass.chroma()) {
                notes.insert(0, bass);
                intervals.insert(0, Interval::between(&tonic, &bass).label());
            }
        }

        Some(ChordIdentity {
            symbol: symbol.to_string(),
            tonic: tonic.to_string(),
            name,
            aliases: chord_type.aliases.iter().map(|a| a.to_string()).collect(),
            notes: notes.iter().map(|n| n.to_string()).collect(),
            intervals,
            bass: bass.map(|b| b.to_string()),
        })
    }

    fn note_from_midi(&self, midi: i32) -> Option<String> {
        let use_flats = self.spelling == MidiSpelling::Flats;
        Pitch::from_midi(midi, use_flats).map(|p| p.to_string())
    }

    fn pitch_class_of(&self, note: &str) -> Option<String> {
        Pitch::parse(note).map(|p| p.pitch_class().to_string())
    }

    fn interval_between(&self, pitch_class: &str, note: &str) -> Option<String> {
        let from = Pitch::parse(pitch_class)?;
        let to = Pitch::parse(note)?;
        Some(Interval::between(&from, &to).label())
    }
}

/// Split `C#m7/G` into the tonic pitch and the remaining `m7/G`.
fn split_tonic(symbol: &str) -> Option<(Pitch, &str)> {
    let letter_len = symbol.chars().next()?.len_utf8();
    let accidentals = symbol[letter_len..]
        .chars()
        .take_while(|c| matches!(c, '#' | 'b'))
        .count();
    let end = letter_len + accidentals;
    let tonic = Pitch::parse(&symbol[..end])?;
    Some((tonic, &symbol[end..]))
}
