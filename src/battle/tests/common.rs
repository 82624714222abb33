use schema::{MoveSnapshot, ParticipantSnapshot, PokemonSnapshot, TrainerIdentity};

/// A builder for test Pokemon snapshots with middle-of-the-road defaults.
///
/// # Example
/// ```ignore
/// let pikachu = pokemon("Pikachu").level(25).hp(60).speed(90).build();
/// ```
pub struct PokemonBuilder {
    snapshot: PokemonSnapshot,
}

/// Starts a level 10 normal-type Pokemon with 50 in every stat and no moves.
pub fn pokemon(name: &str) -> PokemonBuilder {
    PokemonBuilder {
        snapshot: PokemonSnapshot {
            species_id: 0,
            name: name.to_string(),
            level: 10,
            current_hp: 50,
            max_hp: 50,
            attack: 50,
            defense: 50,
            speed: 50,
            types: vec!["normal".to_string()],
            moves: Vec::new(),
        },
    }
}

impl PokemonBuilder {
    pub fn level(mut self, level: u32) -> Self {
        self.snapshot.level = level;
        self
    }

    /// Sets both current and max HP.
    pub fn hp(mut self, hp: u32) -> Self {
        self.snapshot.current_hp = hp;
        self.snapshot.max_hp = hp;
        self
    }

    pub fn max_hp(mut self, max_hp: u32) -> Self {
        self.snapshot.max_hp = max_hp;
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.snapshot.attack = attack;
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.snapshot.defense = defense;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.snapshot.speed = speed;
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.snapshot.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn moves(mut self, moves: Vec<MoveSnapshot>) -> Self {
        self.snapshot.moves = moves;
        self
    }

    pub fn build(self) -> PokemonSnapshot {
        self.snapshot
    }
}

/// Wraps a built Pokemon with a trainer called "Trainer {id}".
pub fn participant(id: &str, pokemon: PokemonBuilder) -> ParticipantSnapshot {
    ParticipantSnapshot::new(
        TrainerIdentity::new(id, format!("Trainer {id}")),
        pokemon.build(),
    )
}
