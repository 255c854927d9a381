//! # proxystat-network
//!
//! 프록시 stats 서비스 gRPC 어댑터.
//! 시스템 통계와 카운터 통계를 한 번씩 조회해 하나의 JSON envelope로 반환한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! // 비동기 호출자
//! use proxystat_network::grpc::query_stats;
//! let json = query_stats("127.0.0.1:10085").await;
//!
//! // 동기 호출자 (런타임 밖)
//! use proxystat_network::grpc::query_stats_blocking;
//! let json = query_stats_blocking("127.0.0.1:10085");
//! ```

pub mod error;
pub mod grpc;
pub mod proto;

pub use error::StatsQueryError;
pub use grpc::{query_stats, query_stats_blocking, StatsQueryClient};
