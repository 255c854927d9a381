//! stats 조회 파이프라인 에러.
//!
//! 종류별로 구분하지만 호출자에게는 `Display` 문자열 하나로만 전달된다
//! (`{"code":-1,"message":"..."}`).

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsQueryError {
    /// 주소를 URI로 해석할 수 없음. 호출자에게는 연결 실패와 같은 형태로 보인다.
    #[error("invalid endpoint address {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// 연결 수립 실패 (거부, DNS, 핸드셰이크)
    #[error("failed to connect to {endpoint}: {message}")]
    Dial { endpoint: String, message: String },

    /// 호출 데드라인 초과
    #[error("context deadline exceeded: {stage} did not complete within {}ms", .deadline.as_millis())]
    DeadlineExceeded {
        stage: &'static str,
        deadline: Duration,
    },

    /// 원격 호출 실패
    #[error("{operation}: rpc error: code = {code:?} desc = {message}")]
    Rpc {
        operation: &'static str,
        code: tonic::Code,
        message: String,
    },

    /// 응답을 JSON으로 변환하지 못함
    #[error("failed to encode {what} as json: {source}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// 동기 진입점용 런타임 생성 실패
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// 동기 진입점이 이미 실행 중인 런타임 안에서 호출됨
    #[error("blocking stats query called from within an async runtime; use query_stats instead")]
    NestedRuntime,
}
