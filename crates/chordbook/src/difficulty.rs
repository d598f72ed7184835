//! Deterministic difficulty heuristic for fingerings and chords.

use crate::types::{BarreInfo, GuitarFingering};

pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 5.0;

/// Aggregate difficulty for a chord with no known fingerings.
pub const NEUTRAL_DIFFICULTY: f64 = 3.0;

/// Score one fingering from 1.0 to 5.0 in half steps.
///
/// Barres, high positions, and wide stretches push the score up; a capo
/// pulls it back down by half a step.
pub fn score_fingering(
    frets: &[i32],
    base_fret: i32,
    barre: Option<&BarreInfo>,
    capo: bool,
) -> f64 {
    let mut score = 1.0;

    if let Some(barre) = barre {
        score += 1.5;
        if barre.fret > 5 {
            score += 0.5;
        }
    }

    if base_fret > 7 {
        score += 1.0;
    } else if base_fret > 3 {
        score += 0.5;
    }

    let active = frets.iter().copied().filter(|&f| f > 0);
    if let (Some(min), Some(max)) = (active.clone().min(), active.max()) {
        let stretch = max - min;
        if stretch > 4 {
            score += 1.0;
        } else if stretch > 2 {
            score += 0.5;
        }
    }

    if capo {
        score = f64::max(score - 0.5, MIN_DIFFICULTY);
    }

    round_half(score.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY))
}

/// Mean fingering difficulty to one decimal place; neutral when empty.
pub fn chord_difficulty(fingerings: &[GuitarFingering]) -> f64 {
    if fingerings.is_empty() {
        return NEUTRAL_DIFFICULTY;
    }
    let total: f64 = fingerings.iter().map(|f| f.difficulty).sum();
    let mean = total / fingerings.len() as f64;
    (mean * 10.0).round() / 10.0
}

fn round_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}
