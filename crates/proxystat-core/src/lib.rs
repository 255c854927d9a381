//! # proxystat-core
//!
//! PROXYSTAT 공용 타입.
//! 결과 envelope 모델, 설정 구조체, 에러 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 호출자에게 반환하는 JSON envelope
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
