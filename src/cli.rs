use crate::chrome::ChromeSession;
use crate::config::SuiteConfig;
use crate::{Result, SuiteError, scenarios};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "swaglabs-suite")]
#[command(version, about = "Swag Labs login flow test suite")]
pub struct Cli {
    #[arg(
        long,
        default_value = "suite.toml",
        env = "SUITE_CONFIG",
        help = "Path to the suite configuration file"
    )]
    pub config: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Override the configured headless setting")]
    pub headless: Option<bool>,

    #[arg(long, help = "Run a single scenario by name")]
    pub scenario: Option<String>,

    #[arg(long, help = "List available scenarios and exit")]
    pub list: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for name in scenarios::ALL {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = SuiteConfig::load(&cli.config)?;
    if let Some(headless) = cli.headless {
        config.headless = headless;
    }

    let selected: Vec<&str> = match cli.scenario.as_deref() {
        Some(name) => vec![name],
        None => scenarios::ALL.to_vec(),
    };

    let mut failures = 0usize;
    for name in &selected {
        // Fresh browser per scenario: no state leaks between login attempts.
        let session = ChromeSession::launch(config.headless).await?;
        let outcome = scenarios::run(name, &session, &config).await;
        session.close().await?;

        match outcome {
            Ok(()) => println!("PASS {name}"),
            Err(e) => {
                failures += 1;
                println!("FAIL {name}: {e}");
                error!(scenario = name, error = %e, "scenario failed");
            }
        }
    }

    info!(
        total = selected.len(),
        failed = failures,
        "suite finished"
    );
    if failures > 0 {
        return Err(SuiteError::ScenarioFailed {
            name: format!("{failures} of {}", selected.len()),
            reason: "see output above".into(),
        });
    }
    Ok(())
}
