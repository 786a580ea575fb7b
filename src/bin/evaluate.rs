// Offline evaluation of the spam transformer against a labeled test set.
//
// Writes every spam message the transformer got past the filter to the
// configured output file and logs the overall accuracy.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use dnasb::modules::transformer::use_cases::evaluate_transformer::inbound::cli::run;
use dnasb::shared::infrastructure::config::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("invalid configuration")?;
    run(&config).context("evaluation failed")?;
    Ok(())
}
