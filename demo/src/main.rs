use anyhow::Context;
use env_logger::Env;

use linreg_demo::Config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("invalid configuration")?;
    let report = linreg_demo::run(&config)?;

    print!("{}", report);

    Ok(())
}
