//! Die kinds, face tables, and uniform draws.
//!
//! Two skill-die colors (blue, red) and four crisis-die kinds share the same
//! 1/6-per-face draw. The face tables are fixed multisets; the repeated
//! faces shape the mission-sum odds.

use rand::Rng;
use serde::Serialize;

/// Color of an unrolled skill die. Fixed at player creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieColor {
    Blue,
    Red,
}

/// One entry of a skill-die face table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub value: i8,
    pub id: &'static str,
}

const fn face(value: i8, id: &'static str) -> Face {
    Face { value, id }
}

/// Blue die: two -2 faces, two -1 faces, one +2, one +4.
pub static BLUE_FACES: [Face; 6] = [
    face(-2, "blue_-2"),
    face(-2, "blue_-2"),
    face(-1, "blue_-1"),
    face(-1, "blue_-1"),
    face(2, "blue_+2"),
    face(4, "blue_+4"),
];

/// Red die: two -2 faces, two -1 faces, one +1, one +3.
pub static RED_FACES: [Face; 6] = [
    face(-2, "red_-2"),
    face(-2, "red_-2"),
    face(-1, "red_-1"),
    face(-1, "red_-1"),
    face(1, "red_+1"),
    face(3, "red_+3"),
];

pub fn faces_for(color: DieColor) -> &'static [Face; 6] {
    match color {
        DieColor::Blue => &BLUE_FACES,
        DieColor::Red => &RED_FACES,
    }
}

/// A skill die after it has been rolled. The color never changes; the shown
/// face is fixed until the die returns to the reserve and is rolled again.
///
/// On the wire only `{faceId, value}` is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolledDie {
    #[serde(skip)]
    pub color: DieColor,
    pub value: i8,
    pub face_id: &'static str,
}

/// Draw one face for a skill die, uniform over its color's table.
pub fn roll_skill_die(rng: &mut impl Rng, color: DieColor) -> RolledDie {
    let table = faces_for(color);
    let face = table[rng.random_range(0..table.len())];
    RolledDie {
        color,
        value: face.value,
        face_id: face.id,
    }
}

/// Crisis-die symbol tables, one per kind 1..=4. Symbols are 1..=3 and carry
/// no numeric value.
pub static CRISIS_FACES: [[u8; 6]; 4] = [
    [1, 1, 2, 2, 3, 3],
    [1, 1, 1, 2, 2, 3],
    [1, 2, 2, 2, 3, 3],
    [1, 1, 2, 3, 3, 3],
];

/// Symbol table for a 1-based crisis kind, if the kind exists.
pub fn crisis_faces(kind: u8) -> Option<&'static [u8; 6]> {
    usize::from(kind)
        .checked_sub(1)
        .and_then(|idx| CRISIS_FACES.get(idx))
}

/// Result of drawing one crisis die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisDraw {
    /// 1-based kind identifier.
    pub kind: u8,
    /// Shown symbol, 1..=3.
    pub face: u8,
}

impl CrisisDraw {
    /// Wire label for this draw.
    pub fn label(&self) -> String {
        format!("crisis_dice_{}_face_{}", self.kind, self.face)
    }
}

/// Draw two crisis dice of distinct kinds: first kind uniform over all four,
/// second uniform over the remaining three, then one face from each table.
pub fn roll_crisis_pair(rng: &mut impl Rng) -> [CrisisDraw; 2] {
    let mut pool: Vec<usize> = (0..CRISIS_FACES.len()).collect();
    let first = pool.remove(rng.random_range(0..pool.len()));
    let second = pool[rng.random_range(0..pool.len())];

    [first, second].map(|idx| CrisisDraw {
        kind: (idx + 1) as u8,
        face: CRISIS_FACES[idx][rng.random_range(0..6)],
    })
}
