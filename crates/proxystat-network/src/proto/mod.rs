//! Proto 메시지 및 gRPC 클라이언트 정의
//!
//! `proto/stats.proto`에서 생성된 Protobuf 메시지와 gRPC 클라이언트/서버를 포함합니다.
//! 응답 메시지는 protojson 매핑 규칙(필드 선언 이름, 기본값 생략, 64비트 정수는 문자열)에
//! 맞춰 `serde::Serialize`를 구현합니다.

/// stats 서비스 (GetSysStats, QueryStats)
pub mod command {
    #![allow(clippy::all)]
    #![allow(warnings)]
    include!("generated/xray.app.stats.command.rs");
}

/// protojson 직렬화 헬퍼 (생성 코드의 serde 속성에서 참조)
pub(crate) mod protojson {
    use std::fmt::Display;

    use serde::Serializer;

    /// proto3 기본값(0, 빈 문자열, 빈 repeated)이면 출력에서 생략
    pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
        *value == T::default()
    }

    /// int64/uint64는 JSON 문자열로 출력
    pub fn as_string<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }
}
