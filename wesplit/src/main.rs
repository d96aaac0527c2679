use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wesplit::{Config, ContentView, ThemeMode};
use wesplit_ui::core::View;
use wesplit_ui::App;

#[derive(Parser, Debug)]
#[command(name = "wesplit")]
#[command(about = "WeSplit - tap counter, name field and student picker", long_about = None)]
struct Cli {
    /// Config file (default: ./wesplit.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour scheme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Print the widget tree of a fresh form and exit
    #[arg(long, conflicts_with = "json")]
    describe: bool,

    /// Print the widget tree as JSON and exit
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Command-line flags take precedence over the file
    fn apply(&self, mut config: Config) -> Config {
        if let Some(mode) = self.theme {
            config.theme.mode = mode;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log.filter).into_diagnostic()?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| miette::miette!("{err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::load(cli.config.as_deref())?);
    init_tracing(&config)?;

    let view = ContentView::new();
    if cli.describe || cli.json {
        let tree = view.body().describe();
        if cli.json {
            println!("{}", tree.to_json().into_diagnostic()?);
        } else {
            print!("{}", tree.outline());
        }
        return Ok(());
    }

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        theme = ?config.theme.mode,
        "starting"
    );
    App::new(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .theme(config.theme.mode.theme())
        .run(view)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from(["wesplit", "--theme", "light", "--width", "500"]);
        let config = cli.apply(Config::default());
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 844);
    }

    #[test]
    fn test_describe_and_json_conflict() {
        assert!(Cli::try_parse_from(["wesplit", "--describe", "--json"]).is_err());
        assert!(Cli::try_parse_from(["wesplit", "--describe"]).is_ok());
    }

    #[test]
    fn test_unknown_theme_flag_is_rejected() {
        assert!(Cli::try_parse_from(["wesplit", "--theme", "sepia"]).is_err());
    }
}
