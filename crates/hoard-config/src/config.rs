use crate::address::AddressSource;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "hoardConfig.json";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x0";
pub const DEFAULT_CLIENT_HOST: &str = "localhost";
pub const DEFAULT_CLIENT_PORT: &str = "8545";

/// Directory under the user config dir where the SDK looks for its config.
const SDK_CONFIG_DIR_NAME: &str = "Hoard";

/// The contents of `hoardConfig.json`, as read by the Hoard SDK on startup.
/// Field order matches the key order of the generated file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoardServiceConfig {
    #[serde(rename = "GameID", default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub game_backend_url: String,
    /// Endpoint of the client node, `http://<host>:<port>`.
    #[serde(default)]
    pub client_url: String,
    #[serde(default)]
    pub accounts_dir: Option<String>,
    /// Address of the deployed game center contract.
    #[serde(default)]
    pub game_center_contract: String,
}

pub fn client_url(host: &str, port: &str) -> String {
    format!("http://{host}:{port}")
}

impl HoardServiceConfig {
    /// A config as produced by the generator tools: no game, no backend and the
    /// SDK's default accounts directory.
    pub fn generated(game_center_contract: impl Into<String>, client_url: impl Into<String>) -> Self {
        Self {
            game_id: None,
            game_backend_url: String::new(),
            client_url: client_url.into(),
            accounts_dir: None,
            game_center_contract: game_center_contract.into(),
        }
    }

    /// Renders the tab-indented document the SDK expects.
    ///
    /// Values are inserted as-is. Quotes, backslashes or control characters in
    /// any of them produce a file that is not valid JSON; see
    /// [`Self::fields_needing_escape`].
    pub fn render(&self) -> String {
        format!(
            "{{\n\
             \t\"GameID\":{game_id},\n\
             \t\"GameBackendUrl\":\"{backend}\",\n\
             \t\"ClientUrl\":\"{client}\",\n\
             \t\"AccountsDir\":{accounts},\n\
             \t\"GameCenterContract\":\"{contract}\"\n\
             }}\n",
            game_id = raw_nullable(self.game_id.as_deref()),
            backend = self.game_backend_url,
            client = self.client_url,
            accounts = raw_nullable(self.accounts_dir.as_deref()),
            contract = self.game_center_contract,
        )
    }

    /// Keys whose raw value would need JSON escaping to survive [`Self::render`].
    pub fn fields_needing_escape(&self) -> Vec<&'static str> {
        [
            ("GameID", self.game_id.as_deref()),
            ("GameBackendUrl", Some(self.game_backend_url.as_str())),
            ("ClientUrl", Some(self.client_url.as_str())),
            ("AccountsDir", self.accounts_dir.as_deref()),
            ("GameCenterContract", Some(self.game_center_contract.as_str())),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some_and(needs_escape))
        .map(|(key, _)| key)
        .collect()
    }

    /// Creates or truncates `path` and writes the rendered document.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.render()).map_err(|source| ConfigError::WriteConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Loads the config the way the SDK finds it: the explicit path if one is
    /// given, else `hoardConfig.json` in the working directory, else the copy in
    /// the user's config directory.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::from_file(path),
            _ => load_first_existing(&default_search_paths()),
        }
    }
}

/// Fallback locations searched by [`HoardServiceConfig::load`], in order.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(
            config_dir
                .join(SDK_CONFIG_DIR_NAME)
                .join(DEFAULT_CONFIG_FILE_NAME),
        );
    }
    paths
}

pub fn load_first_existing(candidates: &[PathBuf]) -> Result<HoardServiceConfig, ConfigError> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading hoard config");
            HoardServiceConfig::from_file(path)
        }
        None => Err(ConfigError::NotFound {
            searched: candidates.to_vec(),
        }),
    }
}

/// Resolves the address, builds the config and writes it to `out`.
pub fn generate_config_file(
    address: &AddressSource,
    host: &str,
    port: &str,
    out: &Path,
) -> Result<HoardServiceConfig, ConfigError> {
    let config = HoardServiceConfig::generated(address.resolve()?, client_url(host, port));

    let unescaped = config.fields_needing_escape();
    if !unescaped.is_empty() {
        tracing::warn!(
            fields = ?unescaped,
            "values are written unescaped, {} will not be valid JSON",
            out.display()
        );
    }

    config.write_to(out)?;
    tracing::info!(
        path = %out.display(),
        client_url = %config.client_url,
        "wrote hoard config"
    );
    Ok(config)
}

fn raw_nullable(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => "null".to_owned(),
    }
}

fn needs_escape(value: &str) -> bool {
    value.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}
