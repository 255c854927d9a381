//! 결과 envelope 모델.
//!
//! 성공: `{"code":0,"data":{"sysStats":{...},"stats":{...}}}`
//! 실패: `{"code":-1,"message":"..."}`
//!
//! 두 응답 조각은 [`RawValue`]로 보관해 재파싱/재이스케이프 없이 그대로 삽입한다.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::error;

/// 성공 코드
pub const CODE_SUCCESS: i32 = 0;

/// 실패 코드
pub const CODE_FAILURE: i32 = -1;

/// envelope 직렬화 자체가 실패했을 때 반환하는 고정 문자열
const ENVELOPE_FALLBACK: &str = r#"{"code":-1,"message":"failed to encode result envelope"}"#;

/// 성공 시 `data` 객체
#[derive(Debug, Serialize)]
pub struct StatsData {
    /// 시스템 통계 응답 JSON
    #[serde(rename = "sysStats")]
    pub sys_stats: Box<RawValue>,
    /// 카운터 통계 응답 JSON
    pub stats: Box<RawValue>,
}

/// 호출 결과 envelope
///
/// `data`와 `message`는 배타적이다. enum으로 표현해 둘 다 있거나 둘 다 없는 상태를 만들 수 없다.
#[derive(Debug)]
pub enum ResultEnvelope {
    Success(StatsData),
    Failure(String),
}

impl ResultEnvelope {
    pub fn success(data: StatsData) -> Self {
        Self::Success(data)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Success(_) => CODE_SUCCESS,
            Self::Failure(_) => CODE_FAILURE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// 한 줄 JSON 문자열로 변환
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            error!(error = %e, "envelope 직렬화 실패");
            ENVELOPE_FALLBACK.to_string()
        })
    }

    /// 들여쓰기된 JSON 문자열로 변환 (응답 조각 내부는 원문 유지)
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            error!(error = %e, "envelope 직렬화 실패");
            ENVELOPE_FALLBACK.to_string()
        })
    }
}

impl Serialize for ResultEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultEnvelope", 2)?;
        state.serialize_field("code", &self.code())?;
        match self {
            Self::Success(data) => state.serialize_field("data", data)?,
            Self::Failure(message) => state.serialize_field("message", message)?,
        }
        state.end()
    }
}
