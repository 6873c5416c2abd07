//! 추천인 코드 생성

use uuid::Uuid;

pub const REFERRAL_CODE_LENGTH: usize = 10;

/// 랜덤 UUIDv4 문자열의 앞 10자 (예: `"3f2a9c1e-b"`)
pub fn generate_referral_code() -> String {
    Uuid::new_v4()
        .to_string()
        .chars()
        .take(REFERRAL_CODE_LENGTH)
        .collect()
}
