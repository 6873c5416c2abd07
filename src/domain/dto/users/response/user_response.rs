use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 회원가입 응답 DTO (`201 Created`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub referral_code: String,
    pub user_id: i64,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            referral_code: user.referral_code.clone(),
            user_id: user.id,
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub email: String,
    pub message: String,
}

impl From<User> for LoginResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            message: "Login successful".to_string(),
        }
    }
}

/// 피추천인 한 명의 공개 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralResponse {
    pub name: String,
    pub email: String,
    pub registration_date: String,
    pub registration_time: String,
}

impl From<User> for ReferralResponse {
    fn from(user: User) -> Self {
        let registration_date = user.registration_date();
        let registration_time = user.registration_time();

        Self {
            name: user.name,
            email: user.email,
            registration_date,
            registration_time,
        }
    }
}

/// 추천 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralListResponse {
    pub referrals: Vec<ReferralResponse>,
    pub total_referrals: usize,
    pub message: String,
}

impl ReferralListResponse {
    pub fn new(user_id: i64, referees: Vec<User>) -> Self {
        let referrals: Vec<ReferralResponse> =
            referees.into_iter().map(ReferralResponse::from).collect();

        Self {
            total_referrals: referrals.len(),
            referrals,
            message: format!("Referral details for user ID {}", user_id),
        }
    }
}

/// 사용자 목록의 한 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
}

impl From<User> for UserSummaryResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            referral_code,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            referral_code,
        }
    }
}

/// 전체 사용자 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummaryResponse>,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserSummaryResponse::from).collect(),
        }
    }
}
