use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Elemental type tags as reported by the Pokedex data source.
///
/// The simulator never applies a type chart; the tag only decides which
/// starter moves a Pokemon without a move list is handed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl PokemonType {
    /// Parses a free-form type tag (`"Fire"`, `"fire"`, `" FIRE "`).
    pub fn from_tag(tag: &str) -> Option<PokemonType> {
        tag.trim().parse().ok()
    }
}
