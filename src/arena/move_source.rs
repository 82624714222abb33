use crate::errors::EngineResult;
use async_trait::async_trait;
use log::{debug, warn};
use schema::{MoveSnapshot, ParticipantSnapshot, PokemonSnapshot, PokemonType};
use std::collections::HashMap;

/// Where move lists for Pokemon without known moves come from.
#[async_trait]
pub trait MoveDataSource: Send + Sync {
    async fn moves_for(&self, pokemon: &PokemonSnapshot) -> EngineResult<Vec<MoveSnapshot>>;
}

/// Built-in starter moves keyed by primary type.
///
/// Types without their own list, and Pokemon without any type tag, get the
/// normal-type list.
#[derive(Debug, Clone)]
pub struct StarterMoveCatalog {
    by_type: HashMap<PokemonType, Vec<MoveSnapshot>>,
}

impl Default for StarterMoveCatalog {
    fn default() -> Self {
        let entry = |name: &str, move_type: &str, power: u32, accuracy: u8, pp: u8| {
            MoveSnapshot::new(name, Some(power), move_type).with_accuracy_and_pp(accuracy, pp)
        };

        let mut by_type = HashMap::new();
        by_type.insert(
            PokemonType::Fire,
            vec![
                entry("Flamethrower", "fire", 90, 100, 15),
                entry("Fire Blast", "fire", 110, 85, 5),
                entry("Ember", "fire", 40, 100, 25),
                entry("Tackle", "normal", 40, 100, 35),
            ],
        );
        by_type.insert(
            PokemonType::Water,
            vec![
                entry("Surf", "water", 90, 100, 15),
                entry("Hydro Pump", "water", 110, 80, 5),
                entry("Water Gun", "water", 40, 100, 25),
                entry("Tackle", "normal", 40, 100, 35),
            ],
        );
        by_type.insert(
            PokemonType::Electric,
            vec![
                entry("Thunderbolt", "electric", 90, 100, 15),
                entry("Thunder", "electric", 110, 70, 10),
                entry("Thunder Shock", "electric", 40, 100, 30),
                entry("Quick Attack", "normal", 40, 100, 30),
            ],
        );
        by_type.insert(
            PokemonType::Grass,
            vec![
                entry("Solar Beam", "grass", 120, 100, 10),
                entry("Petal Dance", "grass", 90, 100, 10),
                entry("Vine Whip", "grass", 45, 100, 25),
                entry("Tackle", "normal", 40, 100, 35),
            ],
        );
        by_type.insert(
            PokemonType::Psychic,
            vec![
                entry("Psychic", "psychic", 90, 100, 10),
                entry("Psybeam", "psychic", 65, 100, 20),
                entry("Confusion", "psychic", 50, 100, 25),
                entry("Swift", "normal", 60, 100, 20),
            ],
        );
        by_type.insert(
            PokemonType::Normal,
            vec![
                entry("Body Slam", "normal", 85, 100, 15),
                entry("Hyper Beam", "normal", 150, 90, 5),
                entry("Tackle", "normal", 40, 100, 35),
                entry("Scratch", "normal", 40, 100, 35),
            ],
        );

        Self { by_type }
    }
}

impl StarterMoveCatalog {
    pub fn moves_for_type(&self, tag: Option<&str>) -> Vec<MoveSnapshot> {
        let pokemon_type = tag.and_then(PokemonType::from_tag).unwrap_or(PokemonType::Normal);
        self.by_type
            .get(&pokemon_type)
            .or_else(|| self.by_type.get(&PokemonType::Normal))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MoveDataSource for StarterMoveCatalog {
    async fn moves_for(&self, pokemon: &PokemonSnapshot) -> EngineResult<Vec<MoveSnapshot>> {
        Ok(self.moves_for_type(pokemon.primary_type()))
    }
}

/// Fills in the move list of a participant that has none, before the
/// engine runs.
///
/// A failing or empty source leaves the list empty; the engine then uses
/// Tackle.
pub async fn prefetch_moves(
    source: &dyn MoveDataSource,
    mut participant: ParticipantSnapshot,
) -> ParticipantSnapshot {
    if !participant.pokemon.moves.is_empty() {
        return participant;
    }

    match source.moves_for(&participant.pokemon).await {
        Ok(moves) if !moves.is_empty() => {
            debug!(
                "loaded {} move(s) for {}",
                moves.len(),
                participant.pokemon.name
            );
            participant.pokemon.moves = moves;
        }
        Ok(_) => warn!(
            "no moves known for {}, it will fall back to Tackle",
            participant.pokemon.name
        ),
        Err(err) => warn!(
            "could not load moves for {} ({err}), it will fall back to Tackle",
            participant.pokemon.name
        ),
    }
    participant
}
