//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인 엔드포인트입니다. 토큰이나 세션은 발급하지 않으며,
//! 성공 시 사용자 ID와 이메일만 반환합니다.
use actix_web::{post, web, HttpResponse};
use crate::domain::dto::users::request::LoginRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 로컬 로그인 핸들러
///
/// 등록되지 않은 이메일과 틀린 비밀번호는 모두 401 `"Invalid credentials"`로 응답합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
