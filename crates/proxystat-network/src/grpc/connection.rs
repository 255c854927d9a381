//! 호출 범위 연결 가드
//!
//! 연결 핸들과 데드라인을 한 값으로 묶는다. 가드가 drop되면 어떤 경로로 빠져나가든
//! (조기 반환, panic unwind 포함) 연결이 해제되고 데드라인도 함께 사라진다.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tonic::transport::Channel;
use tracing::{debug, info};

use super::config::{normalize_endpoint, GrpcConfig, MAX_DEADLINE};
use super::error_mapping::describe_error_chain;
use crate::error::StatsQueryError;

pub struct ConnectionGuard {
    endpoint: String,
    deadline: Duration,
    expires_at: Instant,
    channel: Option<Channel>,
}

impl ConnectionGuard {
    /// 데드라인 타이머 시작. 연결은 아직 없다.
    ///
    /// 데드라인은 [`MAX_DEADLINE`]에서 잘린다.
    pub fn new(endpoint: impl Into<String>, deadline: Duration) -> Self {
        let deadline = deadline.min(MAX_DEADLINE);
        let now = Instant::now();
        Self {
            endpoint: endpoint.into(),
            deadline,
            expires_at: now.checked_add(deadline).unwrap_or(now),
            channel: None,
        }
    }

    /// 데드라인 안에서 평문 채널 연결 (연결될 때까지 대기)
    ///
    /// 반환된 채널 복제본은 가드보다 먼저 drop되는 범위에서만 사용한다.
    pub async fn connect(&mut self, config: &GrpcConfig) -> Result<Channel, StatsQueryError> {
        let url = normalize_endpoint(&self.endpoint)?;
        let endpoint = config.build_endpoint(&url)?;

        debug!(endpoint = %url, "stats 서비스 연결 시도");
        let channel = self
            .within_deadline("connect", endpoint.connect())
            .await?
            .map_err(|e| StatsQueryError::Dial {
                endpoint: url.clone(),
                message: describe_error_chain(&e),
            })?;
        info!(endpoint = %url, "stats 서비스 연결 완료");

        self.channel = Some(channel.clone());
        Ok(channel)
    }

    /// 연결이 한 번이라도 할당되었고 아직 해제되지 않았는지
    pub fn is_present(&self) -> bool {
        self.channel.is_some()
    }

    /// 데드라인까지 남은 시간
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// 데드라인 안에서 `fut` 실행
    pub async fn within_deadline<F>(
        &self,
        stage: &'static str,
        fut: F,
    ) -> Result<F::Output, StatsQueryError>
    where
        F: Future,
    {
        tokio::time::timeout_at(self.expires_at, fut)
            .await
            .map_err(|_| StatsQueryError::DeadlineExceeded {
                stage,
                deadline: self.deadline,
            })
    }

    /// 연결 해제. 해제할 연결이 있었으면 true.
    pub fn release(&mut self) -> bool {
        self.channel.take().is_some()
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        if self.release() {
            debug!(endpoint = %self.endpoint, "stats 서비스 연결 해제");
        }
    }
}
