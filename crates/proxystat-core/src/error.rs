//! PROXYSTAT 핵심 에러 타입.

use thiserror::Error;

/// 코어 레이어 에러.
/// 설정 파일 처리 중 발생하는 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패: {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field() {
        let err = CoreError::Validation {
            field: "grpc.deadline_secs".to_string(),
            message: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "유효성 검증 실패: grpc.deadline_secs: must be greater than 0"
        );
    }

    #[test]
    fn serde_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = source.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}
