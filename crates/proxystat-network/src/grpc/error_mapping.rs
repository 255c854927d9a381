use std::error::Error as StdError;

use tonic::Status;

use crate::error::StatsQueryError;

pub fn map_grpc_status_error(operation: &'static str, status: Status) -> StatsQueryError {
    StatsQueryError::Rpc {
        operation,
        code: status.code(),
        message: status.message().to_string(),
    }
}

/// 에러와 source 체인을 `": "`로 이어 붙인다.
///
/// tonic transport 에러의 `Display`는 "transport error"뿐이라 원인이 source에 있다.
pub fn describe_error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use tonic::{Code, Status};

    use super::*;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        inner: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn maps_status_code_and_message() {
        let err = map_grpc_status_error("QueryStats", Status::unavailable("down"));
        match err {
            StatsQueryError::Rpc {
                operation,
                code,
                message,
            } => {
                assert_eq!(operation, "QueryStats");
                assert_eq!(code, Code::Unavailable);
                assert_eq!(message, "down");
            }
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[test]
    fn maps_unimplemented() {
        let err = map_grpc_status_error("GetSysStats", Status::unimplemented(""));
        assert!(err.to_string().contains("code = Unimplemented"));
    }

    #[test]
    fn chain_joins_sources() {
        let err = Layer {
            text: "transport error",
            inner: Some(Box::new(Layer {
                text: "tcp connect error",
                inner: Some(Box::new(Layer {
                    text: "Connection refused (os error 111)",
                    inner: None,
                })),
            })),
        };
        assert_eq!(
            describe_error_chain(&err),
            "transport error: tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn chain_skips_repeated_text() {
        let err = Layer {
            text: "dns error: no such host",
            inner: Some(Box::new(Layer {
                text: "no such host",
                inner: None,
            })),
        };
        assert_eq!(describe_error_chain(&err), "dns error: no such host");
    }
}
