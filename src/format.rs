//! Rendering of query results into the single lines the CLI prints.

use crate::query::Stat;

/// "<label>: <value>" pairs joined with ", ", in input order. An empty input
/// renders the empty string; callers distinguish "no yield" from "not found"
/// by record presence, not by inspecting this string.
pub fn ev_yield_line(pairs: &[(Stat, u16)]) -> String {
    pairs
        .iter()
        .map(|(stat, value)| format!("{stat}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn hidden_ability_line(ability: &str) -> String {
    format!("Hidden ability: {ability}")
}

pub fn not_found_line(name: &str) -> String {
    format!("Pokémon {name} not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_renders_without_separator() {
        assert_eq!(ev_yield_line(&[(Stat::SpAtk, 2)]), "SpAtk: 2");
    }

    #[test]
    fn pairs_join_with_comma_space_in_input_order() {
        let pairs = [(Stat::Hp, 1), (Stat::Atk, 2), (Stat::Spd, 3)];
        assert_eq!(ev_yield_line(&pairs), "HP: 1, Atk: 2, Spd: 3");
    }

    #[test]
    fn empty_pairs_render_as_empty_string() {
        assert_eq!(ev_yield_line(&[]), "");
    }

    #[test]
    fn hidden_ability_line_prefixes_the_value() {
        assert_eq!(
            hidden_ability_line("Lightning Rod"),
            "Hidden ability: Lightning Rod"
        );
        assert_eq!(hidden_ability_line("None"), "Hidden ability: None");
    }

    #[test]
    fn not_found_line_names_the_query() {
        let line = not_found_line("missingno");
        assert!(line.contains("missingno"));
        assert!(line.contains("not found"));
    }
}
