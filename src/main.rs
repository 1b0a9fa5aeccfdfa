//! FPL mini-league dashboard CLI
//!
//! Fetches league data from the public Fantasy Premier League API and renders
//! standings, gameweek history, positions over time and weekly awards.

use clap::{Parser, Subcommand};
use fpl::{Config, Result};

#[derive(Parser)]
#[command(name = "fpl")]
#[command(about = "Fantasy Premier League mini-league dashboard", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full dashboard: standings, history, positions and awards
    Dashboard {
        /// Comma-separated entry ids (overrides the configured league)
        #[arg(long)]
        teams: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Current league standings
    Standings {
        /// Comma-separated entry ids (overrides the configured league)
        #[arg(long)]
        teams: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Points-by-gameweek history table
    History {
        /// Comma-separated entry ids (overrides the configured league)
        #[arg(long)]
        teams: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// League positions over time
    Positions {
        /// Comma-separated entry ids (overrides the configured league)
        #[arg(long)]
        teams: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Manager of the week and the highest single gameweek score
    Awards {
        /// Comma-separated entry ids (overrides the configured league)
        #[arg(long)]
        teams: Option<String>,
        /// Output format (csv prints the weekly winners table)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Dashboard { teams, format } => commands::dashboard(&config, teams, format),
        Commands::Standings { teams, format } => commands::standings(&config, teams, format),
        Commands::History { teams, format } => commands::history(&config, teams, format),
        Commands::Positions { teams, format } => commands::positions(&config, teams, format),
        Commands::Awards { teams, format } => commands::awards(&config, teams, format),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use fpl::data::FplClient;
    use fpl::league::LeagueData;
    use fpl::report::{self, DashboardReport};
    use fpl::{EntryId, FplError};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!(
            "  1. Add your league's entry ids under [league] in {}",
            config_path
        );
        println!("  2. Run 'fpl dashboard' to render the full dashboard");
        println!("  3. Run 'fpl standings --format csv' to export a single table");

        Ok(())
    }

    pub fn dashboard(config: &Config, teams: Option<String>, format: OutputFormat) -> Result<()> {
        let data = fetch_data(config, &teams)?;
        let report = DashboardReport::from_data(&config.league.name, &data);

        match format {
            OutputFormat::Table => print!("{}", report.render()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Csv => {
                return Err(FplError::Config(
                    "CSV covers a single table. Use standings, history, positions or awards."
                        .to_string(),
                ))
            }
        }

        Ok(())
    }

    pub fn standings(config: &Config, teams: Option<String>, format: OutputFormat) -> Result<()> {
        let data = fetch_data(config, &teams)?;
        let standings = data.standings();

        match format {
            OutputFormat::Table => print!("{}", report::standings_table(&standings)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&standings)?),
            OutputFormat::Csv => print!("{}", report::standings_csv(&standings)),
        }

        Ok(())
    }

    pub fn history(config: &Config, teams: Option<String>, format: OutputFormat) -> Result<()> {
        let data = fetch_data(config, &teams)?;
        let matrix = data.history();

        match format {
            OutputFormat::Table => print!("{}", report::history_table(&matrix)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
            OutputFormat::Csv => print!("{}", report::history_csv(&matrix)),
        }

        Ok(())
    }

    pub fn positions(config: &Config, teams: Option<String>, format: OutputFormat) -> Result<()> {
        let data = fetch_data(config, &teams)?;
        let positions = data.positions();

        match format {
            OutputFormat::Table => print!("{}", report::positions_chart(&positions)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&positions)?),
            OutputFormat::Csv => print!("{}", report::positions_csv(&positions)),
        }

        Ok(())
    }

    pub fn awards(config: &Config, teams: Option<String>, format: OutputFormat) -> Result<()> {
        let data = fetch_data(config, &teams)?;
        let winners = data.weekly_managers();
        let peak = data.peak_score();

        match format {
            OutputFormat::Table => {
                print!("{}", report::weekly_managers_table(&winners));
                println!();
                print!("{}", report::peak_section(peak.as_ref()));
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "weekly_managers": winners,
                    "peak_score": peak,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Csv => print!("{}", report::weekly_managers_csv(&winners)),
        }

        Ok(())
    }

    /// Resolve which entries to fetch: the --teams override or the config
    fn entry_ids(config: &Config, override_list: &Option<String>) -> Result<Vec<EntryId>> {
        match override_list {
            Some(list) => list
                .split(',')
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(|t| {
                    t.parse::<u64>()
                        .map(EntryId)
                        .map_err(|_| FplError::Config(format!("Invalid entry id: {}", t)))
                })
                .collect(),
            None => Ok(config.league.team_ids.clone()),
        }
    }

    fn fetch_data(config: &Config, teams: &Option<String>) -> Result<LeagueData> {
        let ids = entry_ids(config, teams)?;
        if ids.is_empty() {
            log::warn!("No entry ids configured; nothing to fetch");
            return Ok(LeagueData::default());
        }

        let client = FplClient::new(&config.api);
        client.fetch_league(&ids)
    }
}
