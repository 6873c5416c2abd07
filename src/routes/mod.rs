//! API 라우트 설정 모듈
//!
//! 회원가입/로그인/추천 조회 엔드포인트와 헬스체크를 등록합니다.
//!
//! # Routes
//!
//! - `POST /register` - 회원가입
//! - `POST /login` - 로그인
//! - `GET /referrals/{user_id}` - 추천 목록
//! - `GET /users` - 전체 사용자 목록
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .app_data(web::Data::new(database))
//!     .configure(configure_all_routes);
//! ```

use crate::db::Database;
use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트와 추출기 설정을 등록합니다
///
/// 잘못된 JSON 본문은 400 `"Invalid request body: ..."`, 정수가 아닌 경로
/// 파라미터는 404 `"User not found"`로 응답하도록 추출기 에러 핸들러를 설정합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::register)
        .service(handlers::users::list_referrals)
        .service(handlers::users::list_users);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("경로 파라미터 파싱 실패: {}", err);
        AppError::NotFound("User not found".to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스에 `SELECT 1`을 실행해 연결 상태를 함께 보고합니다.
/// DB가 응답하지 않아도 엔드포인트 자체는 200을 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "referral_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "features": {
///     "database": "SQLite",
///     "password_hashing": "bcrypt"
///   },
///   "database": "up"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(database: web::Data<Database>) -> actix_web::HttpResponse {
    let database_status = match database.health_check().await {
        Ok(()) => "up",
        Err(e) => {
            log::error!("DB 헬스체크 실패: {}", e);
            "down"
        }
    };

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "referral_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "SQLite",
            "password_hashing": "bcrypt"
        },
        "database": database_status
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::repositories::users::UserRepository;
    use crate::services::{auth::PasswordHasher, users::UserService};

    #[actix_web::test]
    async fn test_health_reports_database_up() {
        let database = Database::in_memory().await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(database))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "up");
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let database = Database::in_memory().await.unwrap();
        let service = UserService::new(
            UserRepository::new(database.pool().clone()),
            PasswordHasher::new(4),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(database))
                .configure(configure_all_routes),
        )
        .await;

        for payload in [r#""just a string""#, r#"{"email": 42}"#, "{"] {
            let req = test::TestRequest::post()
                .uri("/register")
                .insert_header(("Content-Type", "application/json"))
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body: "));
        }
    }
}
