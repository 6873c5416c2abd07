//! User Entity Implementation
//!
//! `users` 테이블의 한 행을 표현하는 사용자 엔티티입니다.
//! 추천인 관계는 같은 테이블의 `id`를 가리키는 `referrer_id`로 표현되며,
//! 한 사용자는 최대 한 명의 추천인을 가지고 여러 명의 피추천인을 가질 수 있습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// 저장된 사용자 계정
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub referral_code: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
    pub referrer_id: Option<i64>,
}

impl User {
    /// 가입 날짜 (`YYYY-MM-DD`, UTC)
    pub fn registration_date(&self) -> String {
        self.registered_at.format("%Y-%m-%d").to_string()
    }

    /// 가입 시각 (`HH:MM:SS`, UTC)
    pub fn registration_time(&self) -> String {
        self.registered_at.format("%H:%M:%S").to_string()
    }

    pub fn was_referred(&self) -> bool {
        self.referrer_id.is_some()
    }
}

/// 아직 저장되지 않은 사용자
///
/// `id`는 저장 시 데이터베이스가 할당합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub referral_code: String,
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
    pub referrer_id: Option<i64>,
}

impl NewUser {
    pub fn new(
        email: String,
        name: String,
        mobile: String,
        city: String,
        referral_code: String,
        password_hash: String,
        referrer_id: Option<i64>,
    ) -> Self {
        Self {
            email,
            name,
            mobile,
            city,
            referral_code,
            password_hash,
            registered_at: Utc::now(),
            referrer_id,
        }
    }

    /// 할당된 ID와 합쳐 저장된 엔티티로 변환합니다.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            mobile: self.mobile,
            city: self.city,
            referral_code: self.referral_code,
            password_hash: self.password_hash,
            registered_at: self.registered_at,
            referrer_id: self.referrer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            mobile: "1234567890".to_string(),
            city: "X".to_string(),
            referral_code: "abcdef12-3".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            registered_at: Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap(),
            referrer_id: None,
        }
    }

    #[test]
    fn test_registration_date_and_time_formatting() {
        let user = sample_user();

        assert_eq!(user.registration_date(), "2024-03-09");
        assert_eq!(user.registration_time(), "07:05:03");
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn test_new_user_into_user_keeps_fields() {
        let new_user = NewUser::new(
            "b@x.com".to_string(),
            "B".to_string(),
            "0987654321".to_string(),
            "Y".to_string(),
            "0123456789".to_string(),
            "hash".to_string(),
            Some(7),
        );
        let registered_at = new_user.registered_at;

        let user = new_user.into_user(8);

        assert_eq!(user.id, 8);
        assert_eq!(user.referrer_id, Some(7));
        assert!(user.was_referred());
        assert_eq!(user.registered_at, registered_at);
    }
}
