use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use genius_artists::config::{AppConfig, CliConfig, FileConfig, OutputFormat};
use genius_artists::genius::DEFAULT_TIMEOUT_SEC;
use genius_artists::{resolve_many, ArtistRecord, ArtistResolver, ArtistTable};

mod cli_style;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[command(name = "genius-artists", version, styles = cli_style::get_styles())]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Genius API access token.
    #[clap(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Base URL of the Genius API.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Timeout in seconds for each API request.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SEC)]
    pub timeout_sec: u64,

    /// How to print results.
    #[clap(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the artist best matching a search term.
    Artist {
        /// Free-text search term, e.g. an artist name.
        term: String,
    },

    /// Look up many search terms and print one row per term.
    Batch {
        /// Search terms, resolved in the given order.
        terms: Vec<String>,

        /// File with one search term per line, appended after TERMS.
        #[clap(long, value_parser = parse_path)]
        terms_file: Option<PathBuf>,
    },

    /// Fetch an artist by Genius artist id.
    ArtistId {
        /// Numeric Genius artist id.
        id: i64,
    },
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            access_token: self.access_token.clone(),
            base_url: self.base_url.clone(),
            timeout_sec: self.timeout_sec,
            output: self.output,
        }
    }
}

fn read_terms_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read terms file: {:?}", path))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn print_single(output: OutputFormat, subject: &str, artist: Option<&ArtistRecord>) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = match artist {
                Some(artist) => serde_json::to_string_pretty(artist)?,
                None => "null".to_string(),
            };
            println!("{}", json);
        }
        OutputFormat::Table => match artist {
            Some(artist) => cli_style::print_artist(artist),
            None => cli_style::print_not_found(subject),
        },
    }
    Ok(())
}

fn print_rows(output: OutputFormat, table: &ArtistTable) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", table.to_json()?),
        OutputFormat::Table => cli_style::print_table(table),
    }
    Ok(())
}

fn main() -> Result<()> {
    // A missing .env file is fine, the token may come from the real environment
    let dotenv_path = dotenvy::dotenv().ok();
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {:?}", path);
    }

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let resolver = ArtistResolver::from_settings(&config.api)?;
    debug!("Using Genius API at {}", config.api.base_url);

    match cli_args.command {
        Command::Artist { term } => {
            let artist = resolver.resolve(&term);
            print_single(config.output, &format!("{:?}", term), artist.as_ref())?;
        }
        Command::Batch { mut terms, terms_file } => {
            if let Some(path) = terms_file {
                terms.extend(read_terms_file(&path)?);
            }
            if terms.is_empty() {
                bail!("No search terms given, pass them as arguments or via --terms-file");
            }
            let table = resolve_many(&resolver, &terms);
            print_rows(config.output, &table)?;
        }
        Command::ArtistId { id } => {
            let artist = resolver.fetch_artist(id);
            print_single(config.output, &format!("artist id {}", id), artist.as_ref())?;
        }
    }

    Ok(())
}
