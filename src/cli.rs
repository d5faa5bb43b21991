use std::fmt::Write as _;
use std::path::Path;

use crate::data::dex::{load_pokedex, pokedex_path};
use crate::query::{run_query, QueryOp};

const HELP_COLUMN: usize = 30;

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(keyword) = args.get(1) else {
        println!("{}", help_text());
        return 0;
    };

    match QueryOp::from_keyword(&keyword.to_lowercase()) {
        Some(op) => handle_query(op, &args[2..]),
        None => {
            let keywords: Vec<&str> = QueryOp::ALL.iter().map(QueryOp::keyword).collect();
            eprintln!(
                "unknown option '{keyword}'. Available options: {}",
                keywords.join(", ")
            );
            2
        }
    }
}

fn handle_query(op: QueryOp, params: &[String]) -> i32 {
    if params.len() != op.params().len() {
        eprintln!("{}", option_help(op));
        return 2;
    }

    let path = pokedex_path();
    let dex = match load_pokedex(Path::new(&path)) {
        Ok(dex) => dex,
        Err(err) => {
            eprintln!("pokédex unavailable at '{path}': {err}");
            return 1;
        }
    };

    // Lookup misses are rendered answers, not failures.
    println!("{}", run_query(&dex, op, &params[0]));
    0
}

/// Help block for one operation: keyword, description, and a line per
/// positional parameter.
pub fn option_help(op: QueryOp) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        "  {:<width$}{}",
        op.keyword(),
        op.about(),
        width = HELP_COLUMN - 2
    );
    for param in op.params() {
        let cell = format!("[{}: {}]", param.name, param.ty);
        let _ = write!(
            &mut out,
            "\n    {:<width$}{}",
            cell,
            param.help,
            width = HELP_COLUMN - 4
        );
    }
    out
}

/// Full help text, built from the operation metadata.
pub fn help_text() -> String {
    let mut out = String::from("Get pokémon data. Available options:\n");
    for op in QueryOp::ALL {
        out.push('\n');
        out.push_str(&option_help(op));
    }
    out
}
