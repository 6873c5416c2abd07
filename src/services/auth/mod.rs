//! 인증 관련 서비스 모듈
//!
//! 토큰이나 세션 없이, 로그인 시점의 비밀번호 검증만 담당합니다.

pub mod password_hasher;

pub use password_hasher::PasswordHasher;
