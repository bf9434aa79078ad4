use clap::Parser;
use directories::ProjectDirs;
use eventdeck::api::{CmdResult, ConfigAction, DeckPaths, EventDeckApi};
use eventdeck::config::DeckConfig;
use eventdeck::error::{DeckError, Result};
use eventdeck::logging;
use eventdeck::store::fs::FsBackend;
use std::path::PathBuf;
use tracing::warn;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{
    eprint_messages, print_config, print_full_records, print_json, print_messages, print_paths,
    print_records,
};

const DATA_DIR_ENV: &str = "EVENTDECK_DATA";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: EventDeckApi<FsBackend>,
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::List { kind } => {
            let result = ctx.api.list(kind)?;
            show_records(&ctx, &result, false)
        }
        Commands::Get { kind, ids } => {
            let result = ctx.api.get(kind, &ids)?;
            show_records(&ctx, &result, true)
        }
        Commands::Add { kind, fields } => {
            let result = ctx.api.add(kind, &fields)?;
            show_changes(&ctx, &result)
        }
        Commands::Update { kind, id, fields } => {
            let result = ctx.api.update(kind, &id, &fields)?;
            show_changes(&ctx, &result)
        }
        Commands::Delete { kind, ids } => {
            let result = ctx.api.delete(kind, &ids)?;
            show_changes(&ctx, &result)
        }
        Commands::Reset { kind } => {
            let result = ctx.api.reset(kind)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Init => {
            let result = ctx.api.init()?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Path { kinds } => {
            let result = ctx.api.collection_paths(&kinds)?;
            print_paths(&result.paths);
            Ok(())
        }
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    let config = DeckConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        DeckConfig::default()
    });

    let backend = FsBackend::new(&data_dir);
    let api = EventDeckApi::new(backend, DeckPaths::new(data_dir), config);

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "eventdeck", "eventdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckError::Store("Could not determine data directory".to_string()))
}

fn show_records(ctx: &AppContext, result: &CmdResult, full: bool) -> Result<()> {
    if ctx.json {
        print_json(&result.records)?;
        eprint_messages(&result.messages);
        return Ok(());
    }
    if full {
        print_full_records(&result.records)?;
    } else {
        print_records(&result.records, result.kind);
    }
    print_messages(&result.messages);
    Ok(())
}

fn show_changes(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        print_json(&result.records)?;
        eprint_messages(&result.messages);
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
