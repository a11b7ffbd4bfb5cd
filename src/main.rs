use anyhow::Context;
use clap::Parser;
use shoplist::cli::Cli;
use shoplist::logging::init_tracing;
use shoplist::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!(
            "warning: logging disabled, cannot open '{}': {err}",
            config.logging.resolved_file().display()
        );
    }

    runtime::run(&config).context("terminal UI failed")
}
