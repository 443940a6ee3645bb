use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::{Color, Stylize};
use keyword_core::clipboard::copy_all;
use keyword_core::config::{clamp_count, Config, VERSION};
use keyword_core::export::{to_csv, to_json};
use keyword_core::{logging, view, KeywordClass, ScoredKeyword, Session, SortOrder};
use std::path::PathBuf;

/// Keyword Finder - long-tail keyword ideas for shop listings
#[derive(Parser)]
#[command(name = "keyword_finder")]
#[command(version = VERSION)]
#[command(about = "Generate and score keyword ideas from a seed term", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate scored keyword suggestions for a seed
    Generate {
        /// Seed keyword, e.g. "soy candle"
        seed: String,

        /// Optional category combined with the seed
        #[arg(short, long)]
        category: Option<String>,

        /// Number of suggestions (10-500)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// score-desc, score-asc, length-asc, length-desc or none
        #[arg(short, long)]
        sort: Option<SortOrder>,

        /// Only show phrases containing this text
        #[arg(short, long, default_value = "")]
        filter: String,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Write every result to a file (CSV, or JSON with --format json);
        /// --sort and --filter only affect what is printed
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy all phrases to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print stats, title ideas and suggested tags after the table
        #[arg(long)]
        summary: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Print the active word lists as TOML
    Wordlists,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    logging::init(&config.logging.level);

    match cli.command {
        Commands::Generate {
            seed,
            category,
            count,
            sort,
            filter,
            format,
            output,
            copy,
            summary,
        } => {
            let mut session = Session::from_config(&config).context("Failed to load word lists")?;
            if let Some(sort) = sort {
                session.sort = sort;
            }
            session.filter = filter;

            let category = category.unwrap_or_else(|| config.default_category.clone());
            let count = clamp_count(count.unwrap_or(config.default_count));
            session.generate(&seed, &category, count)?;
            let visible = session.visible();

            match (format, output) {
                (Format::Table, None) => print_table(&visible),
                (Format::Table | Format::Csv, Some(path)) => {
                    session.save_csv(&path)?;
                    eprintln!("CSV exported to {}", path.display());
                }
                (Format::Json, Some(path)) => {
                    session.save_json(&path)?;
                    eprintln!("JSON exported to {}", path.display());
                }
                (Format::Csv, None) => println!("{}", to_csv(&visible)),
                (Format::Json, None) => println!("{}", to_json(&visible)?),
            }

            if summary {
                print_summary(&session);
            }

            if copy {
                match copy_all(session.results()) {
                    Ok(()) => eprintln!("All keywords copied"),
                    Err(e) => {
                        tracing::warn!("Clipboard copy failed: {}", e);
                        eprintln!("Could not copy to clipboard: {}", e);
                    }
                }
            }
        }
        Commands::Config { show, path, init } => {
            if path {
                match Config::config_path() {
                    Some(p) => println!("{}", p.display()),
                    None => anyhow::bail!("Could not determine config path"),
                }
            } else if init {
                match Config::ensure_config_exists()? {
                    Some(p) => println!("Created {}", p.display()),
                    None => println!("Config file already exists"),
                }
            } else if show {
                println!("# Effective configuration (env > file > defaults)");
                println!();
                print!("{}", config.to_toml());
            } else {
                println!("Usage: keyword_finder config [--show|--path|--init]");
            }
        }
        Commands::Wordlists => {
            let lists = config.word_lists().context("Failed to load word lists")?;
            print!("{}", lists.to_toml()?);
        }
    }
    Ok(())
}

fn class_color(class: KeywordClass) -> Color {
    match class {
        KeywordClass::High => Color::Green,
        KeywordClass::Medium => Color::Yellow,
        KeywordClass::Low => Color::Red,
    }
}

fn print_table(items: &[ScoredKeyword]) {
    let width = items
        .iter()
        .map(|kw| kw.phrase.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);
    println!("{:<width$}  {:>5}  {:>7}  {:>5}", "keyword", "score", "est.vol", "words");
    for kw in items {
        let score = format!("{:>5}", kw.opportunity).with(class_color(kw.class));
        println!(
            "{:<width$}  {}  {:>7}  {:>5}",
            kw.phrase, score, kw.estimated_volume, kw.word_count
        );
    }
}

fn print_summary(session: &Session) {
    println!();
    println!("{} suggestions generated", session.results().len());
    if let Some(top) = session.top_suggestion() {
        println!("Top suggestion: {}", top.phrase.as_str().bold());
    }
    println!("\nTitle ideas:");
    for idea in session.title_ideas() {
        println!("  • {}", idea);
    }
    println!("\nSuggested tags:");
    println!("  {}", session.tags().join(", "));
    let shown = view::apply(session.results(), session.sort, &session.filter).len();
    if shown != session.results().len() {
        println!("\n{} of {} shown after filtering", shown, session.results().len());
    }
}
