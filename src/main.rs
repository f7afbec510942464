//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use name_battle::{
    cli::{Commands, NameBattle},
    commands::{
        catalog::handle_catalog,
        characters::handle_characters,
        fight::{handle_fight, FightParams},
        history::handle_history,
        matching::handle_match,
        tiers::handle_tiers,
    },
    Result,
};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = NameBattle::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Fight {
            args,
            win_rate,
            no_portraits,
            json,
        } => handle_fight(FightParams {
            name: args.name,
            seed: args.seed,
            catalog: args.catalog,
            db: args.store.db,
            win_rate,
            no_portraits,
            as_json: json,
        })?,

        Commands::Match { args, json } => handle_match(args, json)?,

        Commands::History { store, limit, json } => handle_history(store.db, limit, json)?,

        Commands::Characters { store, json } => handle_characters(store.db, json)?,

        Commands::Tiers { store } => handle_tiers(store.db)?,

        Commands::Catalog { catalog, json } => handle_catalog(catalog, json)?,
    }

    Ok(())
}
