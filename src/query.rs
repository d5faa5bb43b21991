//! Query resolution: the two projections over a matched record, and the
//! string-returning operations the CLI dispatches to.

use std::fmt;

use crate::data::dex::{Pokedex, PokemonRecord};
use crate::format;

/// The six EV stats in pokédex order. `ev_yield` entries align positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpAtk,
    SpDef,
    Spd,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Atk => "Atk",
            Self::Def => "Def",
            Self::SpAtk => "SpAtk",
            Self::SpDef => "SpDef",
            Self::Spd => "Spd",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stats with a strictly positive yield, in stat order. An empty result is a
/// valid outcome for pokémon that grant no EVs, distinct from a lookup miss.
pub fn ev_yield_of(record: &PokemonRecord) -> Vec<(Stat, u16)> {
    Stat::ALL
        .iter()
        .zip(record.ev_yield.iter())
        .filter_map(|(stat, ev)| match ev {
            Some(value) if *value > 0 => Some((*stat, *value)),
            _ => None,
        })
        .collect()
}

/// Hidden ability slot, or "None" when the slot repeats the primary or
/// secondary ability (the upstream encoding for "no distinct hidden
/// ability"). Exact string equality, never case-folded.
pub fn hidden_ability_of(record: &PokemonRecord) -> &str {
    let [primary, secondary, hidden] = &record.abilities;
    if hidden == primary || hidden == secondary {
        "None"
    } else {
        hidden
    }
}

/// Supported query operations. Keyword dispatch resolves to this enum once,
/// at argument-parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOp {
    EvYield,
    HiddenAbility,
}

/// One required positional parameter of a query operation.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: &'static str,
    pub help: &'static str,
}

impl QueryOp {
    pub const ALL: [QueryOp; 2] = [QueryOp::EvYield, QueryOp::HiddenAbility];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::EvYield => "ev",
            Self::HiddenAbility => "ha",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Self::EvYield => "Get the ev yield of a pokémon",
            Self::HiddenAbility => "Get the hidden ability of a pokémon",
        }
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            Self::EvYield => &[ParamSpec {
                name: "pokemon",
                ty: "str",
                help: "The pokémon to display ev yield for",
            }],
            Self::HiddenAbility => &[ParamSpec {
                name: "pokemon",
                ty: "str",
                help: "The pokémon to display hidden ability for",
            }],
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<QueryOp> {
        Self::ALL.iter().copied().find(|op| op.keyword() == keyword)
    }
}

/// EV yield of the named pokémon, rendered. A miss renders as not-found.
pub fn ev_yield(dex: &Pokedex, name: &str) -> String {
    match dex.find_by_name(name) {
        Some(record) => format::ev_yield_line(&ev_yield_of(record)),
        None => format::not_found_line(name),
    }
}

/// Hidden ability of the named pokémon, rendered. A miss renders as not-found.
pub fn hidden_ability(dex: &Pokedex, name: &str) -> String {
    match dex.find_by_name(name) {
        Some(record) => format::hidden_ability_line(hidden_ability_of(record)),
        None => format::not_found_line(name),
    }
}

pub fn run_query(dex: &Pokedex, op: QueryOp, name: &str) -> String {
    match op {
        QueryOp::EvYield => ev_yield(dex, name),
        QueryOp::HiddenAbility => hidden_ability(dex, name),
    }
}
