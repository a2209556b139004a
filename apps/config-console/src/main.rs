//! Operator console for the config manager
//!
//! Runs one command from the argument list, or reads commands line by line
//! from stdin when none is given:
//!
//! ```text
//! config-console config spawnRadius 12
//! config-console config check
//! ```

mod host;
mod settings;

use anyhow::Result;
use clap::Parser;
use config_manager::{AuthContext, ConfigManagerModule};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::host::ConsoleHost;
use crate::settings::ConsoleConfig;

#[derive(Parser)]
#[command(name = "config-console")]
#[command(about = "Inspect and change runtime settings", long_about = None)]
struct Cli {
    /// Console configuration file (YAML, optional)
    #[arg(short, long, default_value = "console.yaml")]
    config: PathBuf,

    /// Settings document to manage, overrides the configuration file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Run without operator rights
    #[arg(long)]
    guest: bool,

    /// Command tokens, e.g. `config world lobby`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut cfg = ConsoleConfig::load(&cli.config)?;
    if let Some(path) = cli.settings {
        cfg.manager.settings_file = path;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cfg.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let module = ConfigManagerModule::new(cfg.manager.clone(), Arc::new(ConsoleHost::new()));
    module.start();

    let auth = if cfg.operator && !cli.guest {
        AuthContext::operator(Some("console".to_string()))
    } else {
        AuthContext::non_operator()
    };

    if !cli.args.is_empty() {
        let response = module.handle_command(&auth, &cli.args);
        println!("{}", response.message);
        return Ok(if response.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    run_interactive(&module, &auth)?;
    Ok(ExitCode::SUCCESS)
}

fn run_interactive(module: &ConfigManagerModule, auth: &AuthContext) -> Result<()> {
    let label = module.config().command_label.as_str();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied() {
            None => continue,
            Some("exit" | "quit") => break,
            Some(first) if first.trim_start_matches('/').eq_ignore_ascii_case(label) => {
                tokens.remove(0);
            }
            Some(_) => {}
        }

        let response = module.handle_command(auth, &tokens);
        writeln!(stdout, "{}", response.message)?;
    }
    Ok(())
}
