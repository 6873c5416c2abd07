//! 에러 처리 모듈
//!
//! [`errors::AppError`]와 [`errors::ErrorContext`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
