//! stats 조회 클라이언트
//!
//! 프록시의 StatsService에 연결해 시스템 통계와 카운터 통계를 한 번씩 조회하고
//! 두 응답을 하나의 JSON envelope로 합친다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use proxystat_network::grpc::query_stats;
//!
//! let json = query_stats("127.0.0.1:10085").await;
//! // {"code":0,"data":{"sysStats":{...},"stats":{...}}}
//! // {"code":-1,"message":"..."}
//! ```

use proxystat_core::models::envelope::{ResultEnvelope, StatsData};
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::{debug, info, warn};

use super::config::GrpcConfig;
use super::connection::ConnectionGuard;
use super::error_mapping::map_grpc_status_error;
use crate::error::StatsQueryError;
use crate::proto::command::stats_service_client::StatsServiceClient;
use crate::proto::command::{QueryStatsRequest, SysStatsRequest};

/// 카운터 이름 필터. 빈 문자열은 전체.
pub const STATS_PATTERN: &str = "";

/// 읽은 뒤 카운터 초기화 여부. 조회가 원격 상태를 바꾸지 않도록 항상 false.
pub const STATS_RESET: bool = false;

/// stats 조회 클라이언트
///
/// 상태를 갖지 않는다. 호출마다 연결을 새로 열고 반환 전에 닫는다.
#[derive(Debug, Clone, Default)]
pub struct StatsQueryClient {
    config: GrpcConfig,
}

impl StatsQueryClient {
    pub fn new(config: GrpcConfig) -> Self {
        Self { config }
    }

    /// 조회 결과를 envelope로 반환. 실패도 envelope로 표현되므로 이 함수는 실패하지 않는다.
    pub async fn query(&self, endpoint: &str) -> ResultEnvelope {
        match self.fetch(endpoint).await {
            Ok(data) => {
                info!(endpoint = %endpoint, "stats 조회 완료");
                ResultEnvelope::success(data)
            }
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "stats 조회 실패");
                ResultEnvelope::failure(e.to_string())
            }
        }
    }

    /// 조회 결과를 한 줄 JSON 문자열로 반환
    pub async fn query_json(&self, endpoint: &str) -> String {
        self.query(endpoint).await.to_json()
    }

    /// 연결 → GetSysStats → QueryStats. 첫 실패에서 중단한다.
    pub async fn fetch(&self, endpoint: &str) -> Result<StatsData, StatsQueryError> {
        let mut guard = ConnectionGuard::new(endpoint, self.config.effective_deadline());
        let channel = guard.connect(&self.config).await?;
        // client는 guard보다 나중에 선언되어 먼저 drop된다
        let mut client = StatsServiceClient::new(channel);

        let mut request = tonic::Request::new(SysStatsRequest {});
        request.set_timeout(guard.remaining());
        let sys_stats = guard
            .within_deadline("GetSysStats", client.get_sys_stats(request))
            .await?
            .map_err(|status| map_grpc_status_error("GetSysStats", status))?
            .into_inner();
        debug!(uptime = sys_stats.uptime, "GetSysStats 응답 수신");
        let sys_stats = to_raw_json("sysStats", &sys_stats)?;

        let mut request = tonic::Request::new(QueryStatsRequest {
            pattern: STATS_PATTERN.to_string(),
            reset: STATS_RESET,
        });
        request.set_timeout(guard.remaining());
        let stats = guard
            .within_deadline("QueryStats", client.query_stats(request))
            .await?
            .map_err(|status| map_grpc_status_error("QueryStats", status))?
            .into_inner();
        debug!(counters = stats.stat.len(), "QueryStats 응답 수신");
        let stats = to_raw_json("stats", &stats)?;

        Ok(StatsData { sys_stats, stats })
    }
}

fn to_raw_json<T: Serialize>(what: &'static str, reply: &T) -> Result<Box<RawValue>, StatsQueryError> {
    serde_json::value::to_raw_value(reply)
        .map_err(|source| StatsQueryError::Serialization { what, source })
}

/// 기본 설정(3초 데드라인)으로 조회해 JSON envelope 문자열 반환
pub async fn query_stats(endpoint: &str) -> String {
    StatsQueryClient::default().query_json(endpoint).await
}

/// 동기 호출자용 진입점
///
/// 전용 current-thread 런타임에서 [`query_stats`]를 실행한다.
/// 이미 tokio 런타임 안이라면 블로킹하지 않고 실패 envelope를 반환한다.
pub fn query_stats_blocking(endpoint: &str) -> String {
    if tokio::runtime::Handle::try_current().is_ok() {
        return ResultEnvelope::failure(StatsQueryError::NestedRuntime.to_string()).to_json();
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            return ResultEnvelope::failure(StatsQueryError::Runtime(e).to_string()).to_json();
        }
    };

    runtime.block_on(query_stats(endpoint))
}
