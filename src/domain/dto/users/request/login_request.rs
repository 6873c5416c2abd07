use serde::{Deserialize, Serialize};
use crate::errors::AppError;
use crate::utils::string_utils::is_present;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// 이메일과 비밀번호가 모두 비어 있지 않으면 `(email, password)`를 반환합니다.
    pub fn into_credentials(self) -> Result<(String, String), AppError> {
        match (self.email, self.password) {
            (Some(email), Some(password))
                if is_present(Some(email.as_str())) && is_present(Some(password.as_str())) =>
            {
                Ok((email, password))
            }
            _ => Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            )),
        }
    }
}
