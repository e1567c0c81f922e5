use anyhow::{Context, Result};
use clap::Parser;
use icogen_lib::logging::init_logging;
use icogen_lib::{run, Cli, GenConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = std::env::current_dir().context("无法获取当前工作目录")?;
    let config = GenConfig::load(&config_dir);

    init_logging(&config.log);

    run(cli.output, &config, &mut std::io::stdout().lock())?;
    Ok(())
}
