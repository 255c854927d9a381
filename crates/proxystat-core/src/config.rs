//! 애플리케이션 설정 구조체.
//!
//! stats 서비스 주소, 연결/조회 데드라인, 출력 형식을 정의한다.
//! [`crate::config_manager::ConfigManager`]를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;

/// `grpc.deadline_secs` 상한 (1시간)
pub const MAX_DEADLINE_SECS: u64 = 60 * 60;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// gRPC 설정
    #[serde(default)]
    pub grpc: GrpcConfig,
    /// 출력 설정
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self {
            grpc: GrpcConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.grpc.endpoint.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "grpc.endpoint".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.grpc.deadline_secs == 0 {
            return Err(CoreError::Validation {
                field: "grpc.deadline_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.grpc.deadline_secs > MAX_DEADLINE_SECS {
            return Err(CoreError::Validation {
                field: "grpc.deadline_secs".to_string(),
                message: format!("must not exceed {MAX_DEADLINE_SECS}"),
            });
        }
        if self.grpc.connect_timeout_secs == 0 {
            return Err(CoreError::Validation {
                field: "grpc.connect_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// gRPC 설정
// ============================================================

/// gRPC 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// stats 서비스 주소 (`host:port` 또는 `http://host:port`)
    #[serde(default = "default_grpc_endpoint")]
    pub endpoint: String,
    /// 연결 타임아웃 (초). 데드라인보다 길면 데드라인이 우선한다.
    #[serde(default = "default_grpc_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// 연결 + 두 조회 전체 데드라인 (초)
    #[serde(default = "default_grpc_deadline")]
    pub deadline_secs: u64,
    /// TCP_NODELAY 사용 여부
    #[serde(default = "default_tcp_nodelay")]
    pub tcp_nodelay: bool,
}

impl GrpcConfig {
    /// 호출 한 번에 허용되는 전체 시간
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_grpc_endpoint(),
            connect_timeout_secs: default_grpc_connect_timeout(),
            deadline_secs: default_grpc_deadline(),
            tcp_nodelay: default_tcp_nodelay(),
        }
    }
}

/// 프록시 API inbound 관례 포트
fn default_grpc_endpoint() -> String {
    "127.0.0.1:10085".to_string()
}

fn default_grpc_connect_timeout() -> u64 {
    3
}

fn default_grpc_deadline() -> u64 {
    3
}

fn default_tcp_nodelay() -> bool {
    true
}

// ============================================================
// 출력 설정
// ============================================================

/// 출력 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// envelope를 들여쓰기해서 출력 (CLI 전용, 라이브러리 반환값은 항상 한 줄)
    #[serde(default)]
    pub pretty: bool,
}
