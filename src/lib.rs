//! 추천인 기반 회원가입 서비스 백엔드
//!
//! 사용자 등록, 이메일/비밀번호 로그인, 추천인 코드를 통한
//! 한 단계 추천 관계 조회를 제공하는 Rust 기반 REST 서비스입니다.
//!
//! # Features
//!
//! - **회원가입**: 필수 필드/형식 검증, 이메일·휴대폰 번호 중복 방지
//! - **추천인 코드**: 가입 시 10자리 코드 발급, 다른 사용자의 코드로 추천인 연결
//! - **로그인**: bcrypt 해시 검증 (토큰/세션 없음)
//! - **조회**: 추천한 사용자 목록, 전체 사용자 공개 정보
//! - **SQLite**: sqlx 기반 영구 저장과 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 비즈니스 로직 (web::Data로 공유)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ UserRepository  │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use referral_service_backend::db::Database;
//! use referral_service_backend::repositories::users::UserRepository;
//! use referral_service_backend::services::{auth::PasswordHasher, users::UserService};
//!
//! let database = Database::connect("sqlite://data.sqlite?mode=rwc", 5).await?;
//! let service = UserService::new(
//!     UserRepository::new(database.pool().clone()),
//!     PasswordHasher::from_env(),
//! );
//!
//! let response = service.register(request).await?;
//! println!("내 추천인 코드: {}", response.referral_code);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
