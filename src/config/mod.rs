//! # Configuration Module
//!
//! 추천 서비스 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 데이터베이스 관련 설정
//! - [`security_config`] - 비밀번호 해싱, CORS 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, DatabaseConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let url = DatabaseConfig::url();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 데이터베이스
//! export DATABASE_URL="sqlite://data.sqlite?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//!
//! # 환경 / 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//! ```

pub mod data_config;
pub mod security_config;

pub use data_config::*;
pub use security_config::*;
