//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 추천 관계 조회에 관한 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일/휴대폰 번호 중복 방지
//! - 로그인 실패 사유를 구분하지 않는 응답
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::RegisterRequest;
//!
//! let response = user_service.register(request).await?;
//! println!("추천인 코드: {}", response.referral_code);
//! ```

pub mod user_service;
pub mod referral_code;

pub use user_service::UserService;
