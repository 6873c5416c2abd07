//! # 사용자 관련 요청 DTO 모듈

pub mod register_request;
pub mod login_request;

pub use register_request::{RegisterRequest, Registration};
pub use login_request::LoginRequest;
