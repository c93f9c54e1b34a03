//! tlref — TL schema reference builder.
//!
//!   tlref build api.tl -e docs.json -o model.json
//!   tlref render model.json -o public
//!
//! Logging follows `RUST_LOG`; without it, `-v` switches from info to debug.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tlref_gen::{Config, Enrichment, Error, ExampleRegistry, Model};

/// Build and render a reference for a Telegram TL schema.
#[derive(Parser)]
#[command(name = "tlref", version, about)]
struct Cli {
    /// Log debug details (skipped lines, enrichment mismatches)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a schema and write the documentation model as JSON
    Build {
        /// TL schema file
        schema: PathBuf,

        /// Enrichment JSON produced by the page fetcher
        #[arg(short, long)]
        enrichment: Option<PathBuf>,

        /// Example registry JSON replacing the built-in table
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "model.json")]
        output: PathBuf,

        /// Synthesize examples on one thread
        #[arg(long)]
        sequential: bool,
    },
    /// Render a model JSON file into a static HTML tree
    Render {
        /// Model JSON written by `tlref build`
        model: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "tlref=debug,tlref_parser=debug,tlref_gen=debug,tlref_render=debug"
    } else {
        "tlref=info,tlref_parser=info,tlref_gen=info,tlref_render=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Build { schema, enrichment, registry, output, sequential } => {
            let config = Config { parallel: !sequential, ..Config::default() };
            build(&schema, enrichment.as_deref(), registry.as_deref(), &output, &config)?;
        }
        Command::Render { model, output } => {
            let started = Instant::now();
            let model = Model::load(&model)?;
            tlref_render::render(&model, &output)?;
            println!("✓ Rendered {} in {:.2?}", output.display(), started.elapsed());
        }
    }
    Ok(())
}

fn build(
    schema_path: &Path,
    enrichment: Option<&Path>,
    registry: Option<&Path>,
    output: &Path,
    config: &Config,
) -> Result<(), Error> {
    let started = Instant::now();

    let text = fs::read_to_string(schema_path).map_err(|e| Error::io(schema_path, e))?;
    let schema = tlref_parser::load_schema(&text);
    log::info!(
        "[tlref] {}: {} constructors, {} methods, layer {:?}",
        schema_path.display(),
        schema.constructors.len(),
        schema.methods.len(),
        schema.layer
    );

    let enrichment = enrichment.map(Enrichment::load).transpose()?;
    let registry = match registry {
        Some(path) => ExampleRegistry::load(path)?,
        None => ExampleRegistry::curated(),
    };

    let model = Model::build(&schema, enrichment.as_ref(), &registry, config);
    model.save(output)?;

    println!(
        "✓ {} constructors, {} methods, {} types → {} in {:.2?}",
        model.metadata.total_constructors,
        model.metadata.total_methods,
        model.metadata.total_types,
        output.display(),
        started.elapsed()
    );
    Ok(())
}
