//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리에 JSON 파일로 설정을 저장/로드한다.

use crate::config::AppConfig;
use crate::error::CoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
use tracing::warn;

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 앱 디렉토리 이름
const APP_DIR_NAME: &str = "proxystat";

/// 설정 관리자
///
/// 설정 파일의 로드/저장을 담당한다. 단발성 CLI 실행 기준이라 잠금 없이 값으로 보관.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 경로에서 설정 로드 (읽기 전용)
    ///
    /// 설정 파일이 없으면 기본 설정을 쓰고 파일이나 디렉토리는 만들지 않는다.
    pub fn open_default() -> Result<Self, CoreError> {
        let config_path = Self::default_config_path()?;
        Self::open(config_path)
    }

    /// 지정된 경로에서 설정 로드 (읽기 전용)
    pub fn open(config_path: PathBuf) -> Result<Self, CoreError> {
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            debug!("설정 파일 없음, 기본값 사용: {}", config_path.display());
            AppConfig::default_config()
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 지정된 경로로 설정 관리자 생성
    ///
    /// 설정 파일이 없으면 기본 설정을 생성하고 저장한다.
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 기본 설정 파일 경로
    pub fn default_config_path() -> Result<PathBuf, CoreError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// 플랫폼별 설정 디렉토리 경로
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        #[cfg(target_os = "macos")]
        {
            // macOS: ~/Library/Application Support/proxystat/
            let home = std::env::var("HOME")
                .map_err(|_| CoreError::Config("HOME 환경 변수를 찾을 수 없습니다".to_string()))?;
            Ok(PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME))
        }

        #[cfg(target_os = "windows")]
        {
            // Windows: %APPDATA%\proxystat\
            let appdata = std::env::var("APPDATA").map_err(|_| {
                CoreError::Config("APPDATA 환경 변수를 찾을 수 없습니다".to_string())
            })?;
            Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
        }

        #[cfg(target_os = "linux")]
        {
            // Linux: $XDG_CONFIG_HOME/proxystat/ 또는 ~/.config/proxystat/
            if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
                return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
            }
            let home = std::env::var("HOME")
                .map_err(|_| CoreError::Config("HOME 환경 변수를 찾을 수 없습니다".to_string()))?;
            Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            warn!("지원되지 않는 플랫폼, 현재 디렉토리 사용");
            Ok(PathBuf::from(".").join(APP_DIR_NAME))
        }
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &Path) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;
        config.validate()?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 파일에 설정 저장
    fn save_to_file(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)?;

        fs::write(path, content).map_err(|e| {
            CoreError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        // 기본 설정 파일 생성됨
        let manager = ConfigManager::with_path(config_path.clone()).unwrap();
        assert!(config_path.exists());

        let config = manager.get();
        assert_eq!(config.grpc.endpoint, "127.0.0.1:10085");
        assert_eq!(config.grpc.deadline_secs, 3);
    }

    #[test]
    fn creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.json");

        let manager = ConfigManager::with_path(config_path.clone()).unwrap();
        assert!(config_path.exists());
        assert_eq!(manager.config_path(), config_path.as_path());
    }

    #[test]
    fn open_missing_file_uses_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let manager = ConfigManager::open(config_path.clone()).unwrap();
        assert_eq!(manager.get().grpc.endpoint, "127.0.0.1:10085");
        assert!(!config_path.exists());
        assert!(!temp_dir.path().join("nested").exists());
    }

    #[test]
    fn open_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"grpc":{"deadline_secs":7}}"#).unwrap();

        let manager = ConfigManager::open(config_path.clone()).unwrap();
        assert_eq!(manager.get().grpc.deadline_secs, 7);
        assert_eq!(manager.config_path(), config_path.as_path());
        // 기존 파일은 다시 쓰지 않는다
        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            r#"{"grpc":{"deadline_secs":7}}"#
        );
    }

    #[test]
    fn saved_defaults_are_reloaded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        ConfigManager::with_path(config_path.clone()).unwrap();
        let manager = ConfigManager::with_path(config_path).unwrap();
        assert_eq!(manager.get().grpc.deadline_secs, 3);
    }

    #[test]
    fn out_of_range_file_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"grpc":{"deadline_secs":18446744073709551615}}"#).unwrap();

        let result = ConfigManager::open(config_path);
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let result = ConfigManager::with_path(config_path);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
