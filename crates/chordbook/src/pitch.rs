//! Spelled pitch arithmetic.
//!
//! Notes keep their letter and accidental so that transposition produces
//! correctly spelled chord tones (C# + major third = E#, not F). Interval
//! labels use the `{number}{quality}` shorthand: `1P`, `3M`, `7m`, `5d`, `4A`.

use std::fmt;

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Semitone offset of each natural letter (and of each simple interval
/// number's major/perfect form) above C.
const STEP_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A spelled note, optionally with an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    /// Letter index, C=0 .. B=6
    pub step: u8,
    /// Accidental offset in semitones: +1 sharp, -1 flat
    pub alter: i8,
    pub octave: Option<i32>,
}

impl Pitch {
    /// Parse `C`, `F#`, `Bb`, `Ebb`, `G#4`, `C-1`.
    ///
    /// Only uppercase letters are accepted so that a trailing `b` is never
    /// confused with the note B.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars().peekable();
        let letter = chars.next()?;
        let step = LETTERS.iter().position(|&l| l == letter)? as u8;

        let mut alter: i8 = 0;
        while let Some(&c) = chars.peek() {
            match c {
                '#' => alter = alter.checked_add(1)?,
                'b' => alter = alter.checked_sub(1)?,
                _ => break,
            }
            chars.next();
        }

        let rest: String = chars.collect();
        let octave = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<i32>().ok()?)
        };

        Some(Pitch {
            step,
            alter,
            octave,
        })
    }

    /// Build a pitch from a MIDI note number, spelled with flats or sharps.
    pub fn from_midi(midi: i32, use_flats: bool) -> Option<Self> {
        if !(0..=127).contains(&midi) {
            return None;
        }
        let names = if use_flats {
            NOTE_NAMES_FLAT
        } else {
            NOTE_NAMES_SHARP
        };
        let mut pitch = Pitch::parse(names[(midi % 12) as usize])?;
        pitch.octave = Some(midi / 12 - 1);
        Some(pitch)
    }

    /// Pitch class number 0–11 (C=0).
    pub fn chroma(&self) -> u8 {
        (STEP_SEMITONES[self.step as usize] + self.alter as i32).rem_euclid(12) as u8
    }

    /// The same spelling with the octave dropped.
    pub fn pitch_class(&self) -> Pitch {
        Pitch {
            octave: None,
            ..*self
        }
    }

    /// Transpose upward by a spelled interval, preserving letter arithmetic.
    pub fn transpose(&self, interval: Interval) -> Pitch {
        let raw_step = self.step as i32 + interval.step();
        let step = raw_step.rem_euclid(7);
        let target = self.chroma() as i32 + interval.semitones;
        let alter = normalize_offset(target - STEP_SEMITONES[step as usize]);

        let octave = self.octave.map(|o| {
            let natural = STEP_SEMITONES[self.step as usize] + self.alter as i32;
            let absolute = o * 12 + natural + interval.semitones;
            let spelled_natural = STEP_SEMITONES[step as usize] + alter as i32;
            (absolute - spelled_natural).div_euclid(12)
        });

        Pitch {
            step: step as u8,
            alter,
            octave,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", LETTERS[self.step as usize])?;
        let accidental = if self.alter > 0 { "#" } else { "b" };
        for _ in 0..self.alter.unsigned_abs() {
            f.write_str(accidental)?;
        }
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}

/// A spelled interval: a diatonic number plus an exact semitone size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// 1-based interval number (1 = unison, 3 = third, 9 = ninth)
    pub number: i32,
    pub semitones: i32,
}

impl Interval {
    /// Parse labels like `1P`, `3m`, `5d`, `9A`, `13M`.
    pub fn parse(label: &str) -> Option<Self> {
        let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
        let number: i32 = digits.parse().ok()?;
        if number < 1 {
            return None;
        }
        let quality = &label[digits.len()..];

        let simple = ((number - 1) % 7) as usize;
        let octaves = (number - 1) / 7;
        let base = STEP_SEMITONES[simple] + 12 * octaves;

        let offset = if is_perfectable(simple) {
            match quality {
                "P" => 0,
                q if !q.is_empty() && q.chars().all(|c| c == 'A') => q.len() as i32,
                q if !q.is_empty() && q.chars().all(|c| c == 'd') => -(q.len() as i32),
                _ => return None,
            }
        } else {
            match quality {
                "M" => 0,
                "m" => -1,
                q if !q.is_empty() && q.chars().all(|c| c == 'A') => q.len() as i32,
                q if !q.is_empty() && q.chars().all(|c| c == 'd') => -(q.len() as i32) - 1,
                _ => return None,
            }
        };

        Some(Interval {
            number,
            semitones: base + offset,
        })
    }

    /// Ascending simple interval between two pitch classes.
    pub fn between(from: &Pitch, to: &Pitch) -> Interval {
        let step = (to.step as i32 - from.step as i32).rem_euclid(7);
        let semitones = (to.chroma() as i32 - from.chroma() as i32).rem_euclid(12);
        Interval {
            number: step + 1,
            semitones,
        }
    }

    /// Zero-based diatonic step count, including octaves.
    fn step(&self) -> i32 {
        self.number - 1
    }

    /// Render as `{number}{quality}`.
    pub fn label(&self) -> String {
        let simple = ((self.number - 1) % 7) as usize;
        let octaves = (self.number - 1) / 7;
        let diff = normalize_offset(self.semitones - STEP_SEMITONES[simple] - 12 * octaves) as i32;

        let quality = if is_perfectable(simple) {
            match diff {
                0 => "P".to_string(),
                d if d > 0 => "A".repeat(d as usize),
                d => "d".repeat((-d) as usize),
            }
        } else {
            match diff {
                0 => "M".to_string(),
                -1 => "m".to_string(),
                d if d > 0 => "A".repeat(d as usize),
                d => "d".repeat((-d - 1) as usize),
            }
        };

        format!("{}{}", self.number, quality)
    }
}

fn is_perfectable(simple: usize) -> bool {
    matches!(simple, 0 | 3 | 4)
}

/// Fold a semitone difference into -6..=6.
fn normalize_offset(diff: i32) -> i8 {
    let folded = diff.rem_euclid(12);
    if folded > 6 {
        (folded - 12) as i8
    } else {
        folded as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(name: &str) -> Pitch {
        Pitch::parse(name).unwrap()
    }

    #[test]
    fn parses_names_with_accidentals_and_octaves() {
        assert_eq!(p("C").chroma(), 0);
        assert_eq!(p("C#").chroma(), 1);
        assert_eq!(p("Bb").chroma(), 10);
        assert_eq!(p("Cb").chroma(), 11);
        assert_eq!(p("G#4").octave, Some(4));
        assert_eq!(p("C-1").octave, Some(-1));
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(Pitch::parse("").is_none());
        assert!(Pitch::parse("H").is_none());
        assert!(Pitch::parse("c").is_none());
        assert!(Pitch::parse("C#x").is_none());
    }

    #[test]
    fn accidental_runs_past_i8_are_rejected() {
        let sharps = format!("C{}", "#".repeat(130));
        let flats = format!("E{}", "b".repeat(130));
        assert!(Pitch::parse(&sharps).is_none());
        assert!(Pitch::parse(&flats).is_none());
        assert_eq!(Pitch::parse(&format!("C{}", "#".repeat(127))).unwrap().alter, 127);
    }

    #[test]
    fn midi_spelling() {
        assert_eq!(Pitch::from_midi(60, true).unwrap().to_string(), "C4");
        assert_eq!(Pitch::from_midi(61, true).unwrap().to_string(), "Db4");
        assert_eq!(Pitch::from_midi(61, false).unwrap().to_string(), "C#4");
        assert_eq!(Pitch::from_midi(40, true).unwrap().to_string(), "E2");
        assert!(Pitch::from_midi(-1, true).is_none());
        assert!(Pitch::from_midi(128, true).is_none());
    }

    #[test]
    fn interval_labels_round_trip_through_parse() {
        for label in ["1P", "2m", "3M", "4A", "5d", "5P", "6m", "7M", "9A", "11P", "13M"] {
            assert_eq!(Interval::parse(label).unwrap().label(), label);
        }
        assert!(Interval::parse("3P").is_none());
        assert!(Interval::parse("5M").is_none());
        assert!(Interval::parse("x").is_none());
    }

    #[test]
    fn distance_between_pitch_classes() {
        let label = |a: &str, b: &str| Interval::between(&p(a), &p(b)).label();
        assert_eq!(label("C", "C"), "1P");
        assert_eq!(label("C", "E"), "3M");
        assert_eq!(label("C", "Bb"), "7m");
        assert_eq!(label("E", "C"), "6m");
        assert_eq!(label("C#", "E#"), "3M");
        assert_eq!(label("C#", "Db"), "2d");
        assert_eq!(label("B", "F"), "5d");
    }

    #[test]
    fn transposition_keeps_spelling() {
        let up = |n: &str, i: &str| p(n).transpose(Interval::parse(i).unwrap()).to_string();
        assert_eq!(up("C#", "3M"), "E#");
        assert_eq!(up("Bb", "3m"), "Db");
        assert_eq!(up("F", "7m"), "Eb");
        assert_eq!(up("G", "9M"), "A");
        assert_eq!(up("B3", "2m"), "C4");
        assert_eq!(up("C4", "9M"), "D5");
    }
}
