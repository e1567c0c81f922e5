//! 生成器配置模块

use crate::logging::LogConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件名（位于工作目录）
pub const CONFIG_FILE: &str = "icogen.json";
/// 覆盖输出路径的环境变量
pub const OUTPUT_ENV: &str = "ICOGEN_OUTPUT";

/// 生成器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfig {
    /// 图标输出路径
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src-tauri/icons/icon.ico")
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            log: LogConfig::default(),
        }
    }
}

impl GenConfig {
    /// 从配置文件加载，文件缺失或无法解析时使用默认值
    pub fn load(config_dir: &Path) -> Self {
        let config_file = config_dir.join(CONFIG_FILE);
        fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| serde_json::from_str::<GenConfig>(&content).ok())
            .unwrap_or_default()
    }

    /// 显式指定的路径（命令行参数或环境变量）优先于配置文件
    pub fn resolve_output(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ScratchDir;

    #[test]
    fn test_load_missing_file_uses_default() {
        let dir = ScratchDir::new();
        assert_eq!(GenConfig::load(dir.path()), GenConfig::default());
    }

    #[test]
    fn test_load_invalid_file_uses_default() {
        let dir = ScratchDir::new();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert_eq!(GenConfig::load(dir.path()), GenConfig::default());
    }

    #[test]
    fn test_load_reads_output_path() {
        let dir = ScratchDir::new();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"outputPath":"assets/app.ico","log":{"level":"debug"}}"#,
        )
        .unwrap();

        let config = GenConfig::load(dir.path());
        assert_eq!(config.output_path, PathBuf::from("assets/app.ico"));
        assert_eq!(config.log.level, "debug");
        assert!(config.log.enabled);
    }

    #[test]
    fn test_resolve_output() {
        let config = GenConfig::default();

        let path = config.resolve_output(Some(PathBuf::from("cli.ico")));
        assert_eq!(path, PathBuf::from("cli.ico"));

        let path = config.resolve_output(Some(PathBuf::new()));
        assert_eq!(path, config.output_path);

        let path = config.resolve_output(None);
        assert_eq!(path, PathBuf::from("src-tauri/icons/icon.ico"));
    }
}
