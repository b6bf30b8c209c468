use clap::Parser;
use fuel_di::utils::logger;
use fuel_di::{run_demo, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if !config.ignored.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {:?}", config.ignored);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_demo(&mut handle)?;

    Ok(())
}
