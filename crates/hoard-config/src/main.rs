use clap::Parser;
use hoard_config::cli::MakeConfigCmd;
use hoard_config::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();
    MakeConfigCmd::parse().run()
}
