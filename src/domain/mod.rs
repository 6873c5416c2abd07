//! # Domain Module
//!
//! 엔티티와 HTTP 요청/응답 DTO를 담는 도메인 계층입니다.

pub mod entities;
pub mod dto;
