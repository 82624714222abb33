use clap::{Args, Parser, Subcommand};
use log::error;
use pokemon_arena::arena::{
    BattleArena, BattleStore, FixedSettings, JsonFileStore, MemoryBattleStore, RonSettingsFile,
    SettingsSource, StarterMoveCatalog,
};
use pokemon_arena::{ArenaSettings, BattleReplay, BattleSetup, EngineResult};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pokemon-arena", about = "Simulate and replay one-on-one Pokemon battles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a battle and print its log
    Simulate(SimulateArgs),

    /// Print the log of a stored battle
    Replay(ReplayArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// RON file with the two participants
    #[arg(long)]
    battle: PathBuf,

    /// RON settings file; re-read for the turn cap on every battle
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "battle-1")]
    battle_id: String,

    /// Directory to store the result in; overrides the settings file
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print the full result as JSON instead of the log
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReplayArgs {
    #[arg(long)]
    store: PathBuf,

    #[arg(long)]
    battle_id: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Simulate(args) => simulate(args).await,
        Commands::Replay(args) => replay(args).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn simulate(args: SimulateArgs) -> EngineResult<()> {
    let setup = BattleSetup::load(&args.battle)?;
    let settings = match &args.settings {
        Some(path) => ArenaSettings::load(path)?,
        None => ArenaSettings::default(),
    };
    let settings_source: Arc<dyn SettingsSource> = match &args.settings {
        Some(path) => Arc::new(RonSettingsFile::new(path)),
        None => Arc::new(FixedSettings::new(i64::from(
            settings.engine.fallback_max_turns,
        ))),
    };

    let store: Arc<dyn BattleStore> = match args.store.or(settings.store_dir) {
        Some(dir) => Arc::new(JsonFileStore::new(dir)),
        None => Arc::new(MemoryBattleStore::new()),
    };
    let arena = BattleArena::new(
        settings.engine,
        settings_source,
        Arc::new(StarterMoveCatalog::default()),
        store,
    );

    let result = arena
        .run_battle(&args.battle_id, setup.a, setup.b, args.seed)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", BattleReplay::new(result).render_log());
    }
    Ok(())
}

async fn replay(args: ReplayArgs) -> EngineResult<()> {
    let store = JsonFileStore::new(args.store);
    match store.load(&args.battle_id).await? {
        Some(result) => println!("{}", BattleReplay::new(result).render_log()),
        None => println!("Battle {} has no stored result yet.", args.battle_id),
    }
    Ok(())
}
