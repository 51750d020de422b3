use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    None,
    Shulk,
    Reyn,
    Fiora,
    Dunban,
    Sharla,
    Riki,
    Melia,
    Fiora2,
    Dickson,
    Mumkhar,
    Alvis,
    Dunban2,
    Dunban3,
    Kino,
    Nene,
    Wunwun,
    Tutu,
    Drydry,
    Fofora,
    Faifa,
    Hekasa,
    Setset,
    Teitei,
    Nonona,
    Dekadeka,
    Evelen,
    Tentoo,
}

/// Party member array positions for the playable roster. Every other
/// identifier is stored at `id - 1`.
pub const MAIN_ROSTER: [(Character, i64); 8] = [
    (Character::Shulk, 0),
    (Character::Reyn, 1),
    (Character::Fiora, 2),
    (Character::Dunban, 3),
    (Character::Sharla, 4),
    (Character::Riki, 5),
    (Character::Melia, 6),
    (Character::Fiora2, 7),
];

impl Character {
    pub const ALL: [Character; 28] = [
        Self::None,
        Self::Shulk,
        Self::Reyn,
        Self::Fiora,
        Self::Dunban,
        Self::Sharla,
        Self::Riki,
        Self::Melia,
        Self::Fiora2,
        Self::Dickson,
        Self::Mumkhar,
        Self::Alvis,
        Self::Dunban2,
        Self::Dunban3,
        Self::Kino,
        Self::Nene,
        Self::Wunwun,
        Self::Tutu,
        Self::Drydry,
        Self::Fofora,
        Self::Faifa,
        Self::Hekasa,
        Self::Setset,
        Self::Teitei,
        Self::Nonona,
        Self::Dekadeka,
        Self::Evelen,
        Self::Tentoo,
    ];

    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn id(&self) -> i64 {
        *self as i64
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Self::None => "NONE",
            Self::Shulk => "SHULK",
            Self::Reyn => "REYN",
            Self::Fiora => "FIORA",
            Self::Dunban => "DUNBAN",
            Self::Sharla => "SHARLA",
            Self::Riki => "RIKI",
            Self::Melia => "MELIA",
            Self::Fiora2 => "FIORA_2",
            Self::Dickson => "DICKSON",
            Self::Mumkhar => "MUMKHAR",
            Self::Alvis => "ALVIS",
            Self::Dunban2 => "DUNBAN_2",
            Self::Dunban3 => "DUNBAN_3",
            Self::Kino => "KINO",
            Self::Nene => "NENE",
            Self::Wunwun => "WUNWUN",
            Self::Tutu => "TUTU",
            Self::Drydry => "DRYDRY",
            Self::Fofora => "FOFORA",
            Self::Faifa => "FAIFA",
            Self::Hekasa => "HEKASA",
            Self::Setset => "SETSET",
            Self::Teitei => "TEITEI",
            Self::Nonona => "NONONA",
            Self::Dekadeka => "DEKADEKA",
            Self::Evelen => "EVELEN",
            Self::Tentoo => "TENTOO",
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn character_name(id: i64) -> String {
    match Character::from_id(id) {
        Some(character) => character.name().to_string(),
        None => format!("Unknown Character ({id})"),
    }
}

/// Position of `id` in the party member array.
///
/// Identifiers outside [`MAIN_ROSTER`] fall back to `id - 1` without any
/// range check; the result may be negative or far past the end of the
/// array. Callers find out when the derived offset is bounds checked.
pub fn position_of(id: i64) -> i64 {
    MAIN_ROSTER
        .iter()
        .find(|(character, _)| character.id() == id)
        .map(|&(_, position)| position)
        .unwrap_or_else(|| id.wrapping_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_enumeration_order() {
        for (index, character) in Character::ALL.iter().enumerate() {
            assert_eq!(character.id(), index as i64);
            assert_eq!(Character::from_id(index as i64), Some(*character));
        }
        assert_eq!(Character::from_id(28), None);
        assert_eq!(Character::from_id(-1), None);
    }

    #[test]
    fn names_unknown_ids() {
        assert_eq!(character_name(8), "FIORA_2");
        assert_eq!(character_name(99), "Unknown Character (99)");
    }

    #[test]
    fn main_roster_uses_table_positions() {
        for (character, position) in MAIN_ROSTER {
            assert_eq!(position_of(character.id()), position);
        }
    }

    #[test]
    fn other_ids_fall_back_to_id_minus_one() {
        for id in [0, 9, 15, 27, 1000, -5] {
            assert_eq!(position_of(id), id - 1);
        }
        assert_eq!(position_of(i64::MIN), i64::MAX);
    }
}
