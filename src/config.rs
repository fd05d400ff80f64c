use eyre::WrapErr;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Students listed by the top students entry unless configured otherwise.
pub const DEFAULT_TOP: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Decimals used when showing averages.
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { decimals: 2 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub top: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        RankingConfig { top: DEFAULT_TOP }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> eyre::Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        Config::parse(&content)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))
    }

    /// Load `file_name` if given, or the default configuration file if it
    /// exists, or fall back to default values.
    pub fn load_or_default(file_name: Option<&Path>) -> eyre::Result<Config> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn parse(content: &str) -> eyre::Result<Config> {
        Ok(toml::from_str(content)?)
    }
}
