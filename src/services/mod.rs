//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 프로세스 시작 시 명시적으로 생성되어 `web::Data`로 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 회원가입 (입력 검증, 중복 검사, 추천인 연결)
//! - 이메일/비밀번호 로그인
//! - 추천 목록 및 전체 사용자 조회
//! - bcrypt 비밀번호 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::PasswordHasher, users::UserService};
//!
//! let service = UserService::new(UserRepository::new(pool), PasswordHasher::from_env());
//! let response = service.register(request).await?;
//! ```

pub mod users;
pub mod auth;
