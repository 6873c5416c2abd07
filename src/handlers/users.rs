//! # User & Referral HTTP Handlers
//!
//! 회원가입과 추천 관계 조회를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/register` | 새 사용자 등록 | 201 Created |
//! | `GET` | `/referrals/{user_id}` | 추천한 사용자 목록 | 200 OK |
//! | `GET` | `/users` | 전체 사용자 목록 | 200 OK |
//!
//! ## 에러 응답
//!
//! 모든 실패는 `AppError`를 통해 `{"error": "..."}` 형태로 반환됩니다.
//!
//! ```json
//! { "error": "Email already exists" }
//! ```

use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::users::request::RegisterRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "a@x.com",
///   "name": "A",
///   "mobile": "1234567890",
///   "city": "X",
///   "password": "longpass1",
///   "referral_code": "3f2a9c1e-b"
/// }
/// ```
///
/// `referral_code`는 선택이며, 빈 문자열은 생략한 것으로 취급합니다.
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "message": "User registered successfully",
///   "referral_code": "9b1d04aa-7",
///   "user_id": 1
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400: 필수 필드 누락, 형식 오류, 중복 이메일/휴대폰 번호, 잘못된 추천인 코드
/// - 500: `"Registration failed: ..."`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"a@x.com","name":"A","mobile":"1234567890","city":"X","password":"longpass1"}'
/// ```
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 추천 목록 조회 핸들러
///
/// 주어진 사용자의 추천인 코드로 가입한 사용자들(한 단계)을 반환합니다.
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "referrals": [
///     {
///       "name": "B",
///       "email": "b@x.com",
///       "registration_date": "2024-01-01",
///       "registration_time": "09:30:00"
///     }
///   ],
///   "total_referrals": 1,
///   "message": "Referral details for user ID 1"
/// }
/// ```
///
/// 존재하지 않는 ID는 404 `"User not found"`입니다.
#[get("/referrals/{user_id}")]
pub async fn list_referrals(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = service.list_referrals(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 사용자 목록 (id, name, email, referral_code)
#[get("/users")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let response = service.list_users().await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use crate::db::Database;
    use crate::repositories::users::UserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::{auth::PasswordHasher, users::UserService};

    async fn app_data() -> (web::Data<UserService>, web::Data<Database>) {
        let database = Database::in_memory().await.unwrap();
        let service = UserService::new(
            UserRepository::new(database.pool().clone()),
            PasswordHasher::new(4),
        );
        (web::Data::new(service), web::Data::new(database))
    }

    fn registration(email: &str, mobile: &str) -> Value {
        json!({
            "email": email,
            "name": "A",
            "mobile": mobile,
            "city": "X",
            "password": "longpass1"
        })
    }

    #[actix_web::test]
    async fn test_register_then_duplicate_email() {
        let (service, database) = app_data().await;
        let app = test::init_service(
            App::new()
                .app_data(service)
                .app_data(database)
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(registration("a@x.com", "1234567890"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["referral_code"].as_str().unwrap().len(), 10);
        assert!(body["user_id"].as_i64().unwrap() > 0);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(registration("a@x.com", "1234567890"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email already exists");
    }

    #[actix_web::test]
    async fn test_register_validation_messages() {
        let (service, database) = app_data().await;
        let app = test::init_service(
            App::new()
                .app_data(service)
                .app_data(database)
                .configure(configure_all_routes),
        )
        .await;

        let cases = [
            (json!({"email": "a@x.com"}), "Missing fields: name, mobile, city, password are required"),
            (registration("ax.com", "1234567890"), "Invalid email format"),
            (registration("a@x.com", "12345"), "Invalid mobile number: Must be 10 digits"),
        ];

        for (payload, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/register")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], expected);
        }
    }

    #[actix_web::test]
    async fn test_referral_flow_and_user_listing() {
        let (service, database) = app_data().await;
        let app = test::init_service(
            App::new()
                .app_data(service)
                .app_data(database)
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(registration("a@x.com", "1111111111"))
            .to_request();
        let referrer: Value = test::call_and_read_body_json(&app, req).await;

        let mut referred = registration("b@x.com", "2222222222");
        referred["referral_code"] = referrer["referral_code"].clone();
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(referred)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let referrer_id = referrer["user_id"].as_i64().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/referrals/{}", referrer_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_referrals"], 1);
        assert_eq!(body["referrals"][0]["email"], "b@x.com");
        assert_eq!(
            body["message"],
            format!("Referral details for user ID {}", referrer_id)
        );

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["referral_code"], referrer["referral_code"]);
        assert!(users[0].get("password_hash").is_none());
        assert!(users[0].get("mobile").is_none());
    }

    #[actix_web::test]
    async fn test_referrals_unknown_or_malformed_id_is_not_found() {
        let (service, database) = app_data().await;
        let app = test::init_service(
            App::new()
                .app_data(service)
                .app_data(database)
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/referrals/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "User not found");

        let req = test::TestRequest::get().uri("/referrals/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
