//! gRPC 클라이언트 설정
//!
//! stats 서비스 연결용 전송 설정. 로컬 제어 채널 전용이라 TLS 없이 평문 HTTP/2만 사용한다.
//! `proxystat-core`의 `GrpcConfig`에서 변환된다.

use std::time::Duration;

use proxystat_core::config::{GrpcConfig as CoreGrpcConfig, MAX_DEADLINE_SECS};
use tonic::transport::Endpoint;

use crate::error::StatsQueryError;

/// 호출 한 번의 기본 데드라인 (연결 + 두 조회)
pub const QUERY_DEADLINE: Duration = Duration::from_secs(3);

/// 데드라인 상한. 이보다 긴 값은 상한으로 잘린다.
pub const MAX_DEADLINE: Duration = Duration::from_secs(MAX_DEADLINE_SECS);

/// gRPC 클라이언트 설정
#[derive(Debug, Clone)]
pub struct GrpcConfig {
    /// 연결 타임아웃. 데드라인보다 길면 데드라인이 우선한다.
    pub connect_timeout: Duration,
    /// 연결 + 두 조회 전체 데드라인
    pub deadline: Duration,
    /// TCP_NODELAY 사용 여부
    pub tcp_nodelay: bool,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            connect_timeout: QUERY_DEADLINE,
            deadline: QUERY_DEADLINE,
            tcp_nodelay: true,
        }
    }
}

impl From<&CoreGrpcConfig> for GrpcConfig {
    fn from(core: &CoreGrpcConfig) -> Self {
        Self {
            connect_timeout: core.connect_timeout(),
            deadline: core.deadline(),
            tcp_nodelay: core.tcp_nodelay,
        }
    }
}

impl GrpcConfig {
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// 실제 적용되는 데드라인 ([`MAX_DEADLINE`] 이하)
    pub fn effective_deadline(&self) -> Duration {
        self.deadline.min(MAX_DEADLINE)
    }

    /// 실제 적용되는 연결 타임아웃
    pub fn effective_connect_timeout(&self) -> Duration {
        self.connect_timeout.min(self.effective_deadline())
    }

    pub fn build_endpoint(&self, endpoint_url: &str) -> Result<Endpoint, StatsQueryError> {
        let endpoint = Endpoint::from_shared(endpoint_url.to_string())
            .map_err(|e| StatsQueryError::InvalidEndpoint {
                endpoint: endpoint_url.to_string(),
                reason: e.to_string(),
            })?
            .connect_timeout(self.effective_connect_timeout())
            .timeout(self.effective_deadline())
            .tcp_nodelay(self.tcp_nodelay);

        Ok(endpoint)
    }
}

/// 호출자 주소를 평문 gRPC URI로 정규화
///
/// - `127.0.0.1:10085` → `http://127.0.0.1:10085`
/// - `http://...`는 그대로 사용
/// - `https://` 등 다른 스킴은 거부 (이 채널은 항상 평문)
pub fn normalize_endpoint(endpoint: &str) -> Result<String, StatsQueryError> {
    let trimmed = endpoint.trim();
    let invalid = |reason: &str| StatsQueryError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("address is empty"));
    }

    match trimmed.split_once("://") {
        None => Ok(format!("http://{trimmed}")),
        Some(("http", rest)) if !rest.is_empty() => Ok(trimmed.to_string()),
        Some(("http", _)) => Err(invalid("missing host")),
        Some((scheme, _)) => Err(invalid(&format!(
            "unsupported scheme {scheme:?}, only plaintext http is allowed"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrpcConfig::default();
        assert_eq!(config.deadline, Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(config.tcp_nodelay);
    }

    #[test]
    fn test_from_core_config() {
        let core = CoreGrpcConfig {
            endpoint: "127.0.0.1:9000".to_string(),
            connect_timeout_secs: 10,
            deadline_secs: 2,
            tcp_nodelay: false,
        };
        let config = GrpcConfig::from(&core);
        assert_eq!(config.deadline, Duration::from_secs(2));
        assert!(!config.tcp_nodelay);
        // 연결 타임아웃은 데드라인을 넘지 않는다
        assert_eq!(config.effective_connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_oversized_deadline_is_capped() {
        let config = GrpcConfig::default().with_deadline(Duration::MAX);
        assert_eq!(config.effective_deadline(), MAX_DEADLINE);
        assert_eq!(config.effective_connect_timeout(), QUERY_DEADLINE);
        assert!(config.build_endpoint("http://127.0.0.1:10085").is_ok());
    }

    #[test]
    fn test_normalize_bare_address() {
        assert_eq!(
            normalize_endpoint("127.0.0.1:10085").unwrap(),
            "http://127.0.0.1:10085"
        );
        assert_eq!(
            normalize_endpoint("  localhost:8080 ").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(
            normalize_endpoint("http://[::1]:10085").unwrap(),
            "http://[::1]:10085"
        );
    }

    #[test]
    fn test_normalize_rejects_tls_and_empty() {
        assert!(matches!(
            normalize_endpoint("https://example.com:443"),
            Err(StatsQueryError::InvalidEndpoint { .. })
        ));
        assert!(normalize_endpoint("").is_err());
        assert!(normalize_endpoint("http://").is_err());
    }

    #[test]
    fn test_build_endpoint_rejects_garbage() {
        let config = GrpcConfig::default();
        let result = config.build_endpoint("http://bad host:80");
        assert!(matches!(
            result,
            Err(StatsQueryError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_build_endpoint_accepts_loopback() {
        let config = GrpcConfig::default();
        let endpoint = config.build_endpoint("http://127.0.0.1:10085").unwrap();
        assert_eq!(endpoint.uri().host(), Some("127.0.0.1"));
        assert_eq!(endpoint.uri().port_u16(), Some(10085));
    }
}
