use crate::address::AddressSource;
use crate::config::{
    generate_config_file, HoardServiceConfig, DEFAULT_CLIENT_HOST, DEFAULT_CLIENT_PORT,
    DEFAULT_CONFIG_FILE_NAME, DEFAULT_CONTRACT_ADDRESS,
};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Make json configuration file for HoardSDK.
#[derive(Parser, Debug)]
#[command(name = "make-hoard-config", args_override_self = true)]
pub struct MakeConfigCmd {
    /// Deployed hoard game center contract address in hex format (0x1234abc).
    #[arg(long, default_value = DEFAULT_CONTRACT_ADDRESS)]
    pub addr: String,
    /// File with deployed hoard game center contract address. Its first line
    /// is used as-is and overrides --addr.
    #[arg(long = "addr_file")]
    pub addr_file: Option<PathBuf>,
    /// Url of a geth client.
    #[arg(long = "client-url", default_value = DEFAULT_CLIENT_HOST)]
    pub client_url: String,
    /// Port of a geth client.
    #[arg(long = "client-port", default_value = DEFAULT_CLIENT_PORT)]
    pub client_port: String,
    /// Output json configuration file.
    #[arg(long = "out", default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub out: PathBuf,
    /// Load the written file back as the SDK would and fail if it does not parse.
    #[arg(long)]
    pub check: bool,
}

impl MakeConfigCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let address = AddressSource::from_args(self.addr, self.addr_file);
        generate_config_file(&address, &self.client_url, &self.client_port, &self.out)?;
        if self.check {
            check_written_config(&self.out)?;
        }
        Ok(())
    }
}

/// Make json configuration file for HoardSDK from an address file.
#[derive(Parser, Debug)]
#[command(name = "make-hoard-config-positional")]
pub struct PositionalMakeConfigCmd {
    /// File with deployed hoard game center contract address.
    #[arg(allow_hyphen_values = true)]
    pub addr_file: PathBuf,
    /// Url of a geth client.
    #[arg(allow_hyphen_values = true)]
    pub client_url: String,
    /// Port of a geth client.
    #[arg(allow_hyphen_values = true)]
    pub client_port: String,
    /// Output json configuration file.
    #[arg(allow_hyphen_values = true)]
    pub out_file: PathBuf,
}

impl PositionalMakeConfigCmd {
    pub fn run(self) -> anyhow::Result<()> {
        generate_config_file(
            &AddressSource::File(self.addr_file),
            &self.client_url,
            &self.client_port,
            &self.out_file,
        )?;
        Ok(())
    }
}

fn check_written_config(path: &Path) -> anyhow::Result<()> {
    let config = HoardServiceConfig::load(Some(path))
        .with_context(|| format!("{} is not usable by the Hoard SDK", path.display()))?;
    println!(
        "{}: ClientUrl={} GameCenterContract={}",
        path.display(),
        config.client_url,
        config.game_center_contract
    );
    Ok(())
}
