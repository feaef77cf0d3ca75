//! 앱 설정 (TOML)
//!
//! 리소스 경로, 로그, 응답 지연 같은 실행 환경만 담는다.
//! 선택한 테마/언어는 저장하지 않으며 재시작하면 기본값으로 돌아간다.

use crate::ui::IconMode;
use crate::utils::error::{NovaSeoError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 설정 파일 경로 override 환경변수
pub const CONFIG_FILE_ENV: &str = "NOVASEO_CONFIG_FILE";

/// 어시스턴트 응답 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// 고정 문장 목록에서 무작위 선택
    #[default]
    Canned,
    /// 현재 테마/언어를 알려주는 템플릿
    Echo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// themes/, locales/ 를 담은 디렉토리
    pub resources_dir: Option<PathBuf>,
    /// 로그 파일 경로
    pub log_file: Option<PathBuf>,
    /// 기본 로그 필터 (`NOVASEO_LOG`가 우선)
    pub log_level: String,
    /// 어시스턴트 응답 지연 (ms)
    pub reply_delay_ms: u64,
    pub reply_mode: ReplyMode,
    /// 이벤트 루프 poll 간격 (ms)
    pub tick_rate_ms: u64,
    /// 아이콘 표시 방식 (`unicode` / `ascii`)
    pub icon_mode: IconMode,
}

/// 설정 로드 결과
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// 읽었지만 버린 설정 파일과 그 이유
    pub rejected: Option<(PathBuf, NovaSeoError)>,
}

impl From<AppConfig> for LoadedConfig {
    fn from(config: AppConfig) -> Self {
        Self {
            config,
            rejected: None,
        }
    }
}

impl LoadedConfig {
    /// 버린 설정 파일이 있으면 경고 기록 (로거 설치 후 호출)
    pub fn log_warning(&self) {
        if let Some((path, err)) = &self.rejected {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resources_dir: None,
            log_file: None,
            log_level: "info".to_string(),
            reply_delay_ms: 1000,
            reply_mode: ReplyMode::Canned,
            tick_rate_ms: 100,
            icon_mode: IconMode::Unicode,
        }
    }
}

impl AppConfig {
    /// 설정 파일 위치: 환경변수 → `<config_dir>/novaseo/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_FILE_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("novaseo").join("config.toml"))
    }

    /// 파일에서 설정 로드
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 로드. 파일이 없으면 기본값, 잘못된 파일이면 기본값과 에러.
    ///
    /// 로거는 설정을 읽은 뒤에 설치되므로 경고는 `LoadedConfig::log_warning`으로 나중에 남긴다.
    pub fn load() -> LoadedConfig {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => LoadedConfig::from(Self::default()),
        }
    }

    pub fn load_or_default(path: &Path) -> LoadedConfig {
        if !path.exists() {
            return LoadedConfig::from(Self::default());
        }
        match Self::from_file(path) {
            Ok(config) => LoadedConfig::from(config),
            Err(err) => LoadedConfig {
                config: Self::default(),
                rejected: Some((path.to_path_buf(), err)),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(NovaSeoError::Config(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// 로그 파일 경로 (미지정 시 데이터 디렉토리 아래)
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(env::temp_dir)
            .join("novaseo")
            .join("novaseo.log")
    }

    /// 리소스 디렉토리 후보 (우선순위 순)
    pub fn resource_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(dir) = &self.resources_dir {
            candidates.push(dir.clone());
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("resources"));
            }
        }
        if let Ok(cwd) = env::current_dir() {
            candidates.push(cwd.join("resources"));
        }
        candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"));
        candidates
    }
}
