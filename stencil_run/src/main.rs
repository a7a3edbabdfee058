// main.rs - Process entry point: configure, run one stencil evolution, report

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stencil::{RuleKind, StencilConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "stencil-run")]
#[command(about = "Evolve a boolean cellular automaton on a fixed toroidal grid", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file; flags below override its values
    #[arg(short, long, env = "STENCIL_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(short, long)]
    generations: Option<u32>,

    /// Seed pattern name (tee, tee-capped, blinker, glider)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Transition rule (always-dead, exactly-one, majority)
    #[arg(short, long)]
    rule: Option<RuleKind>,

    /// Per-generation debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<StencilConfig> {
        let mut config = match &self.config {
            Some(path) => StencilConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => StencilConfig::default(),
        };

        if let Some(rows) = self.rows { config.rows = rows; }
        if let Some(cols) = self.cols { config.cols = cols; }
        if let Some(generations) = self.generations { config.generations = generations; }
        if let Some(pattern) = self.pattern { config.pattern = pattern; }
        if let Some(rule) = self.rule { config.rule = rule; }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = cli.into_config()?;
    let report = stencil::run(&config).context("stencil run failed")?;

    println!(
        "{} generations on {}x{}: {} of {} cells alive",
        report.generations, config.rows, config.cols, report.alive, report.cells_per_sweep
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["stencil-run", "-g", "1", "--rule", "exactly-one", "--cols", "30"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.generations, 1);
        assert_eq!(config.rule, RuleKind::ExactlyOne);
        assert_eq!((config.rows, config.cols), (20, 30));
        assert_eq!(config.pattern, "tee");
    }

    #[test]
    fn unknown_rule_flag_is_rejected() {
        assert!(Cli::try_parse_from(["stencil-run", "--rule", "conway"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
