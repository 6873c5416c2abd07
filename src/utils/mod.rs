//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 필드 존재 여부, 숫자 문자열 검사 등 문자열 유틸리티

pub mod string_utils;
