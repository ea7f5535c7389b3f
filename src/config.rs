use crate::error::{MagicPathError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 解析サービスのURL
pub const DEFAULT_ENDPOINT: &str = "https://gcp-project-1092394872023.us-central1.run.app";

/// 環境変数でエンドポイントを上書きする（CLIのみ。ブラウザ版は固定URL）
pub const ENDPOINT_ENV: &str = "MAGIC_PATH_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let config = Self::load_from(&config_path)?;

        // 環境変数を優先
        Ok(config.with_env_endpoint(std::env::var(ENDPOINT_ENV).ok()))
    }

    /// 環境変数の値でエンドポイントを上書き（空白のみなら無視）
    pub fn with_env_endpoint(mut self, value: Option<String>) -> Self {
        if let Some(endpoint) = value {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.endpoint = endpoint.to_string();
            }
        }
        self
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MagicPathError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("magic-path").join("config.json"))
    }

    /// コマンドライン引数で上書き
    pub fn with_overrides(mut self, endpoint: Option<String>, timeout_seconds: Option<u64>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = timeout_seconds {
            self.timeout_seconds = timeout;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(MagicPathError::Config(format!(
                "エンドポイントはhttp(s)のURLを指定してください: {}",
                self.endpoint
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(MagicPathError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        Ok(())
    }
}
