use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use tip_ui::{config::AppConfig, headless::SplitRequest, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator and bill splitter.
///
/// Opens the calculator window. When `--bill` is given, computes the split
/// once, prints it, and exits without opening a window.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter; overrides the configured level (e.g. `debug`).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stdout.
    #[arg(long)]
    quiet: bool,

    /// Bill amount; switches to one-shot mode.
    #[arg(long, allow_hyphen_values = true)]
    bill: Option<String>,

    /// Tip percentage. A preset value (10, 15, 18, 20, 25) selects that preset.
    #[arg(long, requires = "bill", allow_hyphen_values = true)]
    tip: Option<String>,

    /// Number of people splitting the bill.
    #[arg(long, requires = "bill", allow_hyphen_values = true)]
    people: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.quiet {
            config.logging.stdout = false;
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    logging::init_logging(&config.logging)?;
    debug!("configuration:\n{}", config);

    if let Some(bill) = cli.bill {
        let request = SplitRequest {
            bill,
            tip: cli.tip,
            people: cli.people,
        };
        let form = request.to_form();
        info!(input = ?form.input(), "one-shot calculation");
        println!("{}", form.summary());
        return Ok(());
    }

    info!("launching window");
    tip_ui::run(config);
    Ok(())
}
