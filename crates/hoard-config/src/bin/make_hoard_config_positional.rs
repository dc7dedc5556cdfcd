use clap::Parser;
use hoard_config::cli::PositionalMakeConfigCmd;
use hoard_config::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();
    PositionalMakeConfigCmd::parse().run()
}
