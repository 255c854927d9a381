//! PROXYSTAT 결과 모델.
//!
//! 호출자에게 돌려주는 JSON envelope를 정의한다.

pub mod envelope;
