//! Command-line front end for the resolution engine.
//!
//! Usage:
//!   dexview show data/species/clefairy.json --version-group red-blue --version blue
//!   dexview show data/species/vulpix.json --version-group sun-moon --json
//!   dexview groups --generation 2

use clap::{Args, Parser, Subcommand};
use dexview::catalog::version_groups_in;
use dexview::page::DEFAULT_LANGUAGE;
use dexview::resolve::ChainNode;
use dexview::LevelGate;
use dexview::{
    resolve_page, DexError, DexResult, EngineConfig, Generation, PageView, SpeciesBundle,
    ViewContext,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dexview", about = "Version-accurate species pages")]
struct Cli {
    /// Directory holding replacement RON tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one species bundle for a game version
    Show(ShowArgs),

    /// List known version groups
    Groups {
        /// Only list groups of this generation
        #[arg(long)]
        generation: Option<u8>,
    },
}

#[derive(Args)]
struct ShowArgs {
    /// Species bundle (JSON)
    bundle: PathBuf,

    #[arg(long, default_value = "scarlet-violet")]
    version_group: String,

    /// Single release inside the version group
    #[arg(long)]
    version: Option<String>,

    /// Override the region used for regional forms
    #[arg(long)]
    region: Option<String>,

    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Print the page as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> DexResult<()> {
    let config = match &cli.config {
        Some(dir) => EngineConfig::load(dir)?,
        None => EngineConfig::embedded()?,
    };

    match cli.command {
        Commands::Show(args) => show(&config, args),
        Commands::Groups { generation } => {
            let generations: Vec<Generation> = match generation {
                Some(ordinal) => vec![config.generations.clamp(i64::from(ordinal))],
                None => config.generations.rows().iter().map(|row| row.generation).collect(),
            };
            for generation in generations {
                println!("{}", generation);
                let mut groups: Vec<_> = version_groups_in(generation).collect();
                groups.sort_by_key(|info| info.name);
                for info in groups {
                    println!("  {:<28} {}", info.name, info.versions.join(", "));
                }
            }
            Ok(())
        }
    }
}

fn show(config: &EngineConfig, args: ShowArgs) -> DexResult<()> {
    let bundle = SpeciesBundle::from_file(&args.bundle)?;
    let mut context = ViewContext::for_version_group(
        &args.version_group,
        args.version.as_deref(),
        &config.generations,
    )?;
    if let Some(region) = &args.region {
        context = context.with_region(region);
    }

    let page = resolve_page(&bundle, &context, config, &args.language)?;

    if args.json {
        let json = serde_json::to_string_pretty(&page).map_err(DexError::Output)?;
        println!("{}", json);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn print_page(page: &PageView) {
    println!(
        "#{:04} {} ({})",
        page.species.dex_number.get(),
        page.species.name,
        page.variety
    );
    println!("{} / {}", page.context.generation, page.context.version_group);
    if let Some(number) = page.regional_dex_number {
        println!("Regional dex: #{:03}", number);
    }

    let types: Vec<&'static str> = page.types.pokemon_types().into_iter().map(Into::into).collect();
    println!("Types: {}", types.join("/"));

    if let Some(text) = &page.flavor_text {
        println!();
        println!("{}", text.replace(['\n', '\u{c}'], " "));
    }

    println!();
    println!("Damage taken:");
    for (attacking, factor) in page.efficacy.weaknesses() {
        println!("  {:<10} x{}", attacking, factor / 100.0);
    }
    for (attacking, factor) in page.efficacy.resistances() {
        println!("  {:<10} x{}", attacking, factor / 100.0);
    }
    for attacking in page.efficacy.immunities() {
        println!("  {:<10} x0", attacking);
    }

    println!();
    println!("Moves ({}):", page.moves.len());
    for group in &page.moves.groups {
        println!("  [{}]", group.method.as_str());
        for row in &group.entries {
            let name = &row.entry.move_name;
            match (&row.entry.machine, row.gate) {
                (Some(machine), _) => println!("    {:<6} {}", machine.to_string(), name),
                (None, LevelGate::Level(level)) => println!("    Lv.{:<3} {}", level, name),
                (None, LevelGate::Ungated) => println!("    {:<6} {}", "-", name),
            }
        }
    }

    println!();
    println!("Evolution:");
    for root in &page.evolution.roots {
        print_chain_node(root, 1);
    }

    println!();
    println!("Sprite: {}", page.sprite);
}

fn print_chain_node(node: &ChainNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, node.species.name);
    if node.detail.is_some() {
        for line in node.trigger.to_string().lines() {
            println!("{}  > {}", indent, line);
        }
    }
    for child in &node.evolves_to {
        print_chain_node(child, depth + 1);
    }
}
