//! gRPC 클라이언트 모듈
//!
//! 프록시 stats 서비스와의 gRPC 통신을 담당합니다.
//!
//! ## 호출 흐름
//!
//! 1. [`ConnectionGuard`]가 데드라인(기본 3초)을 시작하고 평문 채널로 연결
//! 2. `GetSysStats` 조회 후 JSON 변환
//! 3. `QueryStats`(pattern="", reset=false) 조회 후 JSON 변환
//! 4. 두 조각을 envelope로 합쳐 반환, 가드 drop으로 연결 해제
//!
//! 어느 단계든 실패하면 `{"code":-1,"message":"..."}`를 반환합니다.

mod config;
mod connection;
mod error_mapping;
mod stats_client;

pub use config::{normalize_endpoint, GrpcConfig, MAX_DEADLINE, QUERY_DEADLINE};
pub use connection::ConnectionGuard;
pub use error_mapping::{describe_error_chain, map_grpc_status_error};
pub use stats_client::{
    query_stats, query_stats_blocking, StatsQueryClient, STATS_PATTERN, STATS_RESET,
};
