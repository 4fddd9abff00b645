//! Command-line front end for the SEO generator.
//!
//! Generates, patches and scores SEO bundles without going through the
//! dashboard, and runs the content date diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Generate a bundle from flags
//! cargo run --bin seo -- generate --title "Night Flying" --category Blog --path /blog/night
//!
//! # Generate from a content file, printing JSON
//! cargo run --bin seo -- generate --input content.json --json
//!
//! # Prompt for every field
//! cargo run --bin seo -- generate --interactive
//!
//! # Patch a stored bundle
//! cargo run --bin seo -- optimize --existing seo.json --input content.json
//!
//! # Section presets
//! cargo run --bin seo -- section blog --title "Crosswind Landings"
//!
//! # Score a stored bundle
//! cargo run --bin seo -- score seo.json
//!
//! # Check raw date values
//! cargo run --bin seo -- dates 2024-01-05 "31/12/2024" ""
//! ```
//!
//! # Environment Variables
//!
//! See [`seo_generator::config`]: `SEO_SITE_URL`, `SEO_DEFAULT_PATH`,
//! `RUST_LOG`, `LOG_FORMAT`.

use seo_generator::application::generators::score_breakdown;
use seo_generator::application::services::SeoService;
use seo_generator::config::{self, Config};
use seo_generator::diagnostics::{DateStatus, diagnose_dates};
use seo_generator::domain::entities::{
    ContentInput, ExistingSeo, OptimizedSeo, ScoreBreakdown, SectionContent, SectionKind,
};
use seo_generator::dto::{GenerateRequest, OptimizeRequest, SectionRequest, validate_request};
use seo_generator::error::AppError;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Input;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// SEO metadata generator for Personal Wings content.
#[derive(Parser)]
#[command(name = "seo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Log the loaded configuration before running
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bundle from scratch
    Generate {
        #[command(flatten)]
        content: ContentArgs,

        /// Content JSON file; flags override its fields
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Canonical path, e.g. "/about"
        #[arg(short, long)]
        path: Option<String>,

        /// Prompt for every field
        #[arg(long)]
        interactive: bool,

        /// Overrides SEO_SITE_URL
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Patch an existing bundle, regenerating invalid fields
    Optimize {
        /// Existing bundle JSON file
        #[arg(short, long)]
        existing: PathBuf,

        /// Content JSON file used for regenerated fields
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Overrides SEO_SITE_URL
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Generate a bundle with a section preset
    Section {
        kind: SectionArg,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        subtitle: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Overrides SEO_SITE_URL
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Show the score breakdown of a stored bundle
    Score {
        /// Bundle JSON file
        file: PathBuf,
    },

    /// Diagnose raw content date values
    Dates {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

/// Content fields accepted as flags.
#[derive(Args)]
struct ContentArgs {
    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    subtitle: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    /// Keyword tag, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionArg {
    Banner,
    About,
    Blog,
    Events,
    Testimonials,
}

impl From<SectionArg> for SectionKind {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Banner => SectionKind::Banner,
            SectionArg::About => SectionKind::About,
            SectionArg::Blog => SectionKind::Blog,
            SectionArg::Events => SectionKind::Events,
            SectionArg::Testimonials => SectionKind::Testimonials,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    if cli.verbose {
        config.print_summary();
    }

    let json = cli.json;
    if let Err(err) = run(cli.command, &config, json) {
        if json {
            println!("{}", serde_json::to_string_pretty(&err.to_body())?);
        } else {
            eprintln!("{} {}", "Error:".red().bold(), err);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Installs the `tracing` subscriber on stderr so stdout stays parseable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Commands, config: &Config, json: bool) -> Result<(), AppError> {
    match command {
        Commands::Generate {
            content,
            input,
            path,
            interactive,
            site_url,
        } => {
            let mut base = match input {
                Some(file) => read_json::<ContentInput>(&file)?,
                None => ContentInput::default(),
            };
            content.apply_to(&mut base);
            if interactive {
                prompt_content(&mut base)?;
            }

            let request = GenerateRequest {
                site_url: site_url.unwrap_or_else(|| config.site_url.clone()),
                path: path.or_else(|| config.default_path.clone()),
                content: base,
            };
            validate_request(&request)?;

            let seo = SeoService::new(request.site_url)
                .generate(&request.content, request.path.as_deref());
            print_bundle(&seo, json)
        }
        Commands::Optimize {
            existing,
            input,
            site_url,
        } => {
            let request = OptimizeRequest {
                site_url: site_url.unwrap_or_else(|| config.site_url.clone()),
                existing: read_json::<ExistingSeo>(&existing)?,
                content: match input {
                    Some(file) => read_json::<ContentInput>(&file)?,
                    None => ContentInput::default(),
                },
            };
            validate_request(&request)?;

            let seo =
                SeoService::new(request.site_url).optimize(&request.existing, &request.content);
            print_bundle(&seo, json)
        }
        Commands::Section {
            kind,
            title,
            subtitle,
            description,
            site_url,
        } => {
            let request = SectionRequest {
                site_url: site_url.unwrap_or_else(|| config.site_url.clone()),
                kind: kind.into(),
                content: SectionContent {
                    title,
                    subtitle,
                    description,
                },
            };
            validate_request(&request)?;

            let seo = SeoService::new(request.site_url).section(request.kind, request.content);
            print_bundle(&seo, json)
        }
        Commands::Score { file } => {
            let seo = read_json::<OptimizedSeo>(&file)?;
            let breakdown = score_breakdown(&seo);
            if json {
                return print_json(&breakdown);
            }
            print_breakdown(&breakdown);
            Ok(())
        }
        Commands::Dates { values } => {
            let diagnoses = diagnose_dates(&values);
            if json {
                return print_json(&diagnoses);
            }

            println!("{}", "Date diagnostics".bright_blue().bold());
            println!();
            for d in &diagnoses {
                let status = match d.status {
                    DateStatus::Valid => "valid".green(),
                    DateStatus::Invalid => "invalid".red(),
                    DateStatus::Missing => "missing".yellow(),
                };
                println!(
                    "  {:<30} {:<8} {}",
                    format!("{:?}", d.input),
                    status,
                    d.formatted.as_deref().unwrap_or("-").cyan()
                );
            }
            Ok(())
        }
    }
}

impl ContentArgs {
    fn apply_to(self, content: &mut ContentInput) {
        if self.title.is_some() {
            content.title = self.title;
        }
        if self.subtitle.is_some() {
            content.subtitle = self.subtitle;
        }
        if self.description.is_some() {
            content.description = self.description;
        }
        if self.category.is_some() {
            content.category = self.category;
        }
        if !self.tags.is_empty() {
            content.tags = Some(self.tags);
        }
    }
}

/// Prompts for each content field, using current values as initial text.
fn prompt_content(content: &mut ContentInput) -> Result<(), AppError> {
    println!("{}", "Content details".bright_blue().bold());
    println!();

    content.title = prompt("Title", content.title.take())?;
    content.subtitle = prompt("Subtitle", content.subtitle.take())?;
    content.description = prompt("Description", content.description.take())?;
    content.category = prompt("Category", content.category.take())?;

    let tags = prompt("Tags (comma separated)", content.tags.take().map(|t| t.join(", ")))?;
    content.tags = tags.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    });

    println!();
    Ok(())
}

fn prompt(label: &str, initial: Option<String>) -> Result<Option<String>, AppError> {
    let value: String = Input::new()
        .with_prompt(label)
        .with_initial_text(initial.unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::Io(std::io::Error::other(e)))?;

    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_bundle(seo: &OptimizedSeo, json: bool) -> Result<(), AppError> {
    if json {
        return print_json(seo);
    }

    let score = match seo.score {
        100 => seo.score.to_string().green().bold(),
        90..=99 => seo.score.to_string().yellow().bold(),
        _ => seo.score.to_string().red().bold(),
    };

    println!("{}", "SEO bundle".bright_blue().bold());
    println!();
    print_field("Title", &seo.title);
    print_field("Description", &seo.description);
    print_field("Keywords", &seo.keywords);
    print_field("OG title", &seo.og_title);
    print_field("OG description", &seo.og_description);
    print_field("Canonical URL", &seo.canonical_url);
    println!("  {:<16} {}", "Score".bright_white(), score);
    Ok(())
}

fn print_field(label: &str, value: &str) {
    println!(
        "  {:<16} {} {}",
        label.bright_white(),
        value.cyan(),
        format!("({} chars)", value.chars().count()).dimmed()
    );
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!("{}", "Score breakdown".bright_blue().bold());
    println!();
    for (label, value) in [
        ("Title", breakdown.title),
        ("Description", breakdown.description),
        ("Keywords", breakdown.keywords),
        ("Canonical URL", breakdown.canonical),
        ("OG title", breakdown.og_title),
        ("OG description", breakdown.og_description),
        ("OG image", breakdown.og_image),
    ] {
        let value = if value == 100 {
            value.to_string().green()
        } else {
            value.to_string().yellow()
        };
        println!("  {:<16} {}", label.bright_white(), value);
    }
    println!();
    println!(
        "  {:<16} {}",
        "Total".bright_white().bold(),
        breakdown.total.to_string().bold()
    );
}
