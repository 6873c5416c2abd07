//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체들입니다.
//! 엔티티를 그대로 노출하지 않고, 비밀번호 해시처럼 민감한 필드는
//! 응답 DTO로 변환하는 과정에서 제외됩니다.

pub mod users;

pub use users::*;
