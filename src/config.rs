use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 入力フォルダを上書きする環境変数
pub const INPUT_DIR_ENV: &str = "ESTIMATE_SCAN_INPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 見積ファイルのフォルダ
    pub input_dir: Option<PathBuf>,
    /// 成果物の出力先
    pub output_dir: Option<PathBuf>,
    /// お試し実行（--trial）で処理する件数
    pub trial_limit: usize,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
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
            .ok_or_else(|| ScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("estimate-scan").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            input_dir: None,
            output_dir: None,
            trial_limit: 5,
            show_progress: true,
        }
    }

    /// 入力フォルダ（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_input_dir(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = arg {
            return Ok(dir);
        }
        // 環境変数を優先
        if let Ok(dir) = std::env::var(INPUT_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        self.input_dir.clone().ok_or_else(|| {
            ScanError::Config(format!(
                "入力フォルダが未設定です（引数、{} または config --set-input-dir で指定）",
                INPUT_DIR_ENV
            ))
        })
    }

    /// 出力先（引数 > 設定ファイル > カレント）
    pub fn resolve_output_dir(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn set_input_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.input_dir = Some(dir);
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.trial_limit, 5);
        assert!(config.show_progress);
        assert_eq!(config.input_dir, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_dir": "/tmp/out"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.trial_limit, 5);
        assert!(config.show_progress);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            input_dir: Some(PathBuf::from("/data/estimates")),
            trial_limit: 3,
            show_progress: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_resolve_dirs() {
        let config = Config {
            input_dir: Some(PathBuf::from("/from/config")),
            output_dir: Some(PathBuf::from("/out")),
            ..Config::default()
        };
        // 引数は環境変数より優先
        assert_eq!(
            config.resolve_input_dir(Some(PathBuf::from("/from/arg"))).unwrap(),
            PathBuf::from("/from/arg")
        );
        assert_eq!(config.resolve_output_dir(None), PathBuf::from("/out"));
        assert_eq!(
            Config::default().resolve_output_dir(None),
            PathBuf::from(".")
        );
    }
}
