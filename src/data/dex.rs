//! Pokédex data: the flat record set behind every query.
//! Loaded once at startup from data/pokemon.json (override with POKESTATS_DATA).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POKEDEX_PATH: &str = "data/pokemon.json";

/// Resolve the pokédex path: POKESTATS_DATA when set, default otherwise.
pub fn pokedex_path() -> String {
    std::env::var("POKESTATS_DATA").unwrap_or_else(|_| DEFAULT_POKEDEX_PATH.to_string())
}

/// One pokédex entry. Unknown upstream fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    /// Per-stat EV yield in {HP, Atk, Def, SpAtk, SpDef, Spd} order.
    /// Upstream dumps may use null for a slot; treated the same as zero.
    pub ev_yield: [Option<u16>; 6],
    /// [primary, secondary, hidden]. When a pokémon has no secondary or
    /// hidden ability, upstream repeats an earlier slot's value.
    pub abilities: [String; 3],
}

/// Read-only record store, loaded once per run.
#[derive(Debug, Clone)]
pub struct Pokedex {
    records: Vec<PokemonRecord>,
}

impl Pokedex {
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Pokedex { records }
    }

    /// First record whose name matches case-insensitively, in store order.
    /// Linear scan: the dex holds a few hundred records and each run issues
    /// a single query, so no name index is built.
    pub fn find_by_name(&self, name: &str) -> Option<&PokemonRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == wanted)
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug)]
pub enum DexError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read pokédex file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse pokédex JSON: {err}"),
        }
    }
}

/// Load the full record set in one shot. No partial loads: any read or parse
/// failure fails the whole dex.
pub fn load_pokedex(path: &Path) -> Result<Pokedex, DexError> {
    let raw = fs::read_to_string(path).map_err(DexError::Read)?;
    let records: Vec<PokemonRecord> = serde_json::from_str(&raw).map_err(DexError::Parse)?;
    Ok(Pokedex::new(records))
}
