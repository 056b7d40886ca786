use anyhow::{Context, Result};
use awb_domain::lang::LangCode;
use awb_engine::TitleTools;
use awb_storage::TomlConfigStore;
use awb_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "awb-titles")]
#[command(version, about = "AutoWikiBrowser title tools - namespaces, sanitizing and category sort keys", long_about = None)]
struct Cli {
    /// Configuration file (TOML) with site definitions
    #[arg(long, global = true, default_value = "awb-titles.toml")]
    config: PathBuf,

    /// Site ID from the configuration file (default: preferences.default_site)
    #[arg(long, global = true)]
    site: Option<String>,

    /// Override the site's language code (e.g. en, ru, uk)
    #[arg(long, global = true)]
    lang: Option<LangCode>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the human category sort key for each title
    Key {
        /// Titles, e.g. "David Smith"
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Classify titles: namespace, editability, validity and sort key
    Classify {
        #[arg(required = true)]
        titles: Vec<String>,

        /// Output format
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Expand %%title%%, %%key%%, %%titlename%% and %%namespace%% in a template
    Keywords {
        /// Title the keywords are taken from
        #[arg(long)]
        title: String,

        /// Text containing keywords
        template: String,
    },

    /// Classify every title in a file (one per line)
    Batch {
        /// Input file path
        #[arg(long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Write results here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = TomlConfigStore::new(&cli.config);
    let prefs = store
        .load_preferences()
        .with_context(|| format!("Failed to read {}", cli.config.display()))?;

    awb_telemetry::init_telemetry(&TelemetryConfig::with_level_name(
        &prefs.log_level,
        cli.json_logs,
    )?)?;

    let site_id = cli.site.unwrap_or(prefs.default_site);
    let mut site = store
        .load_site(&site_id)
        .with_context(|| format!("Failed to load site '{}'", site_id))?;
    if let Some(lang) = cli.lang {
        site.lang = lang;
    }
    tracing::debug!(site = %site_id, lang = %site.lang, "using site");

    let tools = TitleTools::new(site);

    match cli.command {
        Commands::Key { titles } => commands::key::run(&tools, &titles),
        Commands::Classify { titles, format } => commands::classify::run(&tools, &titles, format),
        Commands::Keywords { title, template } => commands::keywords::run(&tools, &title, &template),
        Commands::Batch {
            input,
            format,
            output,
        } => commands::batch::run(&tools, &site_id, input, format, output),
    }
}
