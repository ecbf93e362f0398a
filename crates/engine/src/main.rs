//! Onepager - Pathbuilder 2e export to one-page sheet data.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onepager_domain::ProfileOverride;
use onepager_engine::{SheetOps, SheetSettings};

#[derive(Parser, Debug)]
#[command(name = "onepager")]
#[command(about = "Derive a one-page character sheet from a Pathbuilder 2e JSON export")]
#[command(version)]
struct Args {
    /// Pathbuilder JSON export
    json_file: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Layout profile: auto, caster, martial, or hybrid
    #[arg(long, value_parser = parse_profile)]
    profile: Option<ProfileOverride>,

    /// Number of skills to show
    #[arg(long)]
    skills: Option<usize>,

    /// Feats shown per group
    #[arg(long)]
    max_feats: Option<usize>,

    /// Spells shown per rank
    #[arg(long)]
    max_spells_per_rank: Option<usize>,

    /// Leave prepared spell lists off the sheet
    #[arg(long)]
    no_include_prepared: bool,

    /// Include known/spellbook spell lists
    #[arg(long)]
    include_known: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_profile(raw: &str) -> Result<ProfileOverride, String> {
    raw.parse().map_err(|e| format!("{}", e))
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `.env` works from any crate directory.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onepager_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = apply_args(SheetSettings::from_env(), &args)?;

    tracing::info!(path = %args.json_file.display(), profile = %settings.profile, "Reading export");

    let sheet = SheetOps::new(settings)
        .build_from_file(&args.json_file)
        .with_context(|| format!("Failed to build sheet from {}", args.json_file.display()))?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&sheet)?
    } else {
        serde_json::to_string(&sheet)?
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote sheet");
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Command-line flags override whatever the environment set.
fn apply_args(settings: SheetSettings, args: &Args) -> anyhow::Result<SheetSettings> {
    let mut settings = settings;
    if let Some(profile) = args.profile {
        settings = settings.with_profile(profile);
    }

    let limits = settings.limits;
    settings = settings
        .with_limits(
            args.skills.unwrap_or(limits.max_skills),
            args.max_feats.or(limits.max_feats),
            args.max_spells_per_rank.unwrap_or(limits.max_spells_per_rank),
        )
        .context("Invalid display limits")?;

    let include_prepared = settings.include_prepared && !args.no_include_prepared;
    let include_known = settings.include_known || args.include_known;
    Ok(settings.with_spell_lists(include_prepared, include_known))
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
