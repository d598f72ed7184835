use crate::difficulty::score_fingering;
use crate::theory::MusicTheory;
use crate::types::{BarreInfo, GuitarFingering, RawPosition};
use crate::{Error, Result};

pub const STRING_COUNT: usize = 6;

/// Analyze one raw diagram into a fingering.
///
/// `root` is the chord's tonic; intervals are measured from its pitch class.
/// Notes and intervals that the theory service cannot resolve are dropped,
/// each list on its own, so the two may differ in length.
pub fn analyze_position(
    position: &RawPosition,
    suffix: &str,
    root: &str,
    theory: &dyn MusicTheory,
) -> Result<GuitarFingering> {
    if position.frets.len() != STRING_COUNT || position.fingers.len() != STRING_COUNT {
        return Err(Error::MalformedPosition {
            frets: position.frets.len(),
            fingers: position.fingers.len(),
        });
    }

    let muted_strings = muted_strings(&position.frets);
    let barre = detect_barre(&position.frets, &position.barres);
    let capo = position.capo.unwrap_or(false);

    let notes: Vec<String> = position
        .midi
        .iter()
        .filter_map(|&midi| theory.note_from_midi(midi))
        .map(|note| strip_octave(&note).to_string())
        .filter(|note| !note.is_empty())
        .collect();

    let intervals: Vec<String> = match theory.pitch_class_of(root) {
        Some(root_pc) => notes
            .iter()
            .filter_map(|note| theory.interval_between(&root_pc, note))
            .filter(|interval| !interval.is_empty())
            .collect(),
        None => Vec::new(),
    };

    let difficulty = score_fingering(&position.frets, position.base_fret, barre.as_ref(), capo);

    Ok(GuitarFingering {
        id: format!("{}-{}-{}", root, suffix, position.base_fret),
        name: fingering_name(&position.frets, position.base_fret, barre.as_ref()),
        frets: position.frets.clone(),
        fingers: position.fingers.clone(),
        base_fret: position.base_fret,
        muted_strings,
        barre,
        midi: position.midi.clone(),
        notes,
        intervals,
        difficulty,
        capo,
    })
}

/// String numbers (6 = low E .. 1 = high E) of every muted string.
pub fn muted_strings(frets: &[i32]) -> Vec<u8> {
    frets
        .iter()
        .enumerate()
        .filter(|&(_, &fret)| fret == -1)
        .map(|(i, _)| string_number(i))
        .collect()
}

/// Barre across every string sitting on the first listed barre fret.
///
/// Only the first barre fret is modeled.
pub fn detect_barre(frets: &[i32], barres: &[i32]) -> Option<BarreInfo> {
    let fret = *barres.first()?;

    let strings: Vec<u8> = frets
        .iter()
        .enumerate()
        .filter(|&(_, &f)| f == fret)
        .map(|(i, _)| string_number(i))
        .collect();

    let from_string = *strings.iter().max()?;
    let to_string = *strings.iter().min()?;

    Some(BarreInfo {
        from_string,
        to_string,
        fret,
    })
}

/// Human label for a diagram: "Open Position", "Barre - 3rd fret", ...
pub fn fingering_name(frets: &[i32], base_fret: i32, barre: Option<&BarreInfo>) -> String {
    let has_open = frets.contains(&0);

    if base_fret == 1 && has_open {
        return "Open Position".to_string();
    }

    match barre {
        Some(barre) if has_open => format!("Open - {} fret", ordinal(barre.fret)),
        Some(barre) => format!("Barre - {} fret", ordinal(barre.fret)),
        None if has_open => format!("Open - {} fret", ordinal(base_fret)),
        None => format!("{} fret", ordinal(base_fret)),
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st.
pub fn ordinal(n: i32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn string_number(index: usize) -> u8 {
    (STRING_COUNT - index) as u8
}

fn strip_octave(note: &str) -> &str {
    note.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-')
}
