//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 `users` 테이블의 한 행과 1:1로 대응되며,
//! `sqlx::FromRow`를 통해 조회 결과에서 바로 매핑됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (테이블 행과 매핑되는 엔티티)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod users;

pub use users::*;
