//! Commedia command line
//!
//! Usage:
//!   commedia batch --pdf commedia.pdf --outdir out
//!   commedia extract --pdf commedia.pdf --cantica Inferno --canto 5 \
//!       --start-page 40 --end-page 47 --output inf_05.json
//!   commedia query --input out --citation "Inferno V vv. 121-123" --output passage.ssml
//!
//! Logging follows `RUST_LOG`; each `-v` raises the default level.

use clap::{Parser, Subcommand};
use commedia::pipeline::write_json;
use commedia::source::open_source;
use commedia::{Cantica, Corpus, Pipeline, PipelineConfig, Result};
use std::path::{Path, PathBuf};

/// Divine Comedy PDF to structured JSON and SSML
#[derive(Parser, Debug)]
#[command(name = "commedia", version)]
#[command(about = "Extract the Commedia from a PDF into canto JSON, and render cited passages as SSML")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by the extraction commands
#[derive(clap::Args, Debug)]
struct ExtractionArgs {
    /// Input PDF (or form-feed separated text with --text)
    #[arg(long, value_name = "PATH")]
    pdf: PathBuf,

    /// Read the input as form-feed separated text instead of PDF
    #[arg(long)]
    text: bool,

    /// Verses per recitation block (0 disables blocks)
    #[arg(long, value_name = "N")]
    block_size: Option<usize>,

    /// Verses shared by consecutive recitation blocks
    #[arg(long, value_name = "N")]
    block_overlap: Option<usize>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", env = "COMMEDIA_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Segment the whole work into one JSON file per canto plus a manifest
    Batch {
        #[command(flatten)]
        input: ExtractionArgs,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        outdir: PathBuf,
    },

    /// Extract a single canto from an explicit page range
    Extract {
        #[command(flatten)]
        input: ExtractionArgs,

        /// Cantica name (Inferno, Purgatorio, Paradiso or an abbreviation)
        #[arg(long)]
        cantica: Cantica,

        /// Canto number
        #[arg(long)]
        canto: u32,

        /// First page, 1-based
        #[arg(long)]
        start_page: usize,

        /// Last page, inclusive
        #[arg(long)]
        end_page: usize,

        /// Output JSON file
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Resolve a citation against a batch output directory and write SSML
    Query {
        /// Directory written by `batch`
        #[arg(long, value_name = "DIR")]
        input: PathBuf,

        /// Citation, e.g. "Inferno V vv. 61-72"
        #[arg(long)]
        citation: String,

        /// Output SSML file
        #[arg(long, value_name = "FILE")]
        output: PathBuf,

        /// TOML configuration file (pause durations)
        #[arg(long, value_name = "FILE", env = "COMMEDIA_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path),
        None => Ok(PipelineConfig::default()),
    }
}

fn build_pipeline(args: &ExtractionArgs) -> Result<Pipeline> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(size) = args.block_size {
        config.blocks.size = size;
    }
    if let Some(overlap) = args.block_overlap {
        config.blocks.overlap = overlap;
    }
    Pipeline::new(config)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Batch { input, outdir } => {
            let pipeline = build_pipeline(&input)?;
            let mut source = open_source(&input.pdf, input.text)?;
            let summary = pipeline.run_batch(source.as_mut(), &outdir)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        },
        Command::Extract {
            input,
            cantica,
            canto,
            start_page,
            end_page,
            output,
        } => {
            let pipeline = build_pipeline(&input)?;
            let mut source = open_source(&input.pdf, input.text)?;
            let doc = pipeline.extract_canto(source.as_mut(), cantica, canto, start_page, end_page)?;
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            write_json(&output, &doc)?;
            println!("Saved {} {} to {}", cantica, canto, output.display());
            println!("{}", serde_json::to_string_pretty(&doc.counts)?);
        },
        Command::Query {
            input,
            citation,
            output,
            config,
        } => {
            let pipeline = Pipeline::new(load_config(config.as_deref())?)?;
            let corpus = Corpus::open(&input)?;
            let passage = corpus.lookup(&citation)?;
            std::fs::write(&output, passage.to_ssml(pipeline.renderer()))?;
            println!(
                "{} ({} verses) written to {}",
                passage.citation,
                passage.verses.len(),
                output.display()
            );
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
