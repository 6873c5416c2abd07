//! bcrypt 기반 비밀번호 해싱
//!
//! 솔트는 bcrypt가 해시마다 자동으로 생성하며, 평문 비밀번호는 저장하거나 로그에 남기지 않습니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// 비밀번호 해시 생성 및 검증기
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost(`PasswordConfig::bcrypt_cost`)를 사용하는 해셔
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(password, self.cost).context("Password hashing failed")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우는 불일치가 아니라 내부 오류로 취급합니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let start = std::time::Instant::now();
        let valid = bcrypt::verify(password, password_hash).context("Password verification failed")?;
        log::debug!("Password verification took: {:?}", start.elapsed());
        Ok(valid)
    }
}
