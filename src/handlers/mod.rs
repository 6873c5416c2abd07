//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 비즈니스 로직                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRepository - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   User / NewUser - 도메인 엔티티                   ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 전달받고, 결과를
//! `Result<HttpResponse, AppError>`로 반환합니다. 에러의 HTTP 변환은
//! `AppError`의 `ResponseError` 구현이 담당합니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입, 추천 목록, 전체 사용자 목록
//! - **`auth`**: 이메일/비밀번호 로그인

pub mod users;
pub mod auth;
