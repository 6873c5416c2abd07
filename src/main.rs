//! 추천인 기반 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. SQLite 연결과 마이그레이션을
//! 수행한 뒤 `UserService`를 한 번 생성해 모든 워커에 공유합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use referral_service_backend::config::{CorsConfig, DatabaseConfig, Environment, ServerConfig};
use referral_service_backend::db::Database;
use referral_service_backend::repositories::users::UserRepository;
use referral_service_backend::routes::configure_all_routes;
use referral_service_backend::services::{auth::PasswordHasher, users::UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 추천인 회원가입 서비스 시작중... (환경: {:?})", Environment::current());

    let database = initialize_database().await?;

    let password_hasher = PasswordHasher::from_env();
    info!("🔐 bcrypt cost: {}", password_hasher.cost());

    let user_service = UserService::new(
        UserRepository::new(database.pool().clone()),
        password_hasher,
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(database, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다. 바인딩 주소와 워커 수는
/// `HOST`, `PORT`, `WORKERS` 환경변수에서 읽습니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(database: Database, user_service: UserService) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    let database = web::Data::new(database);
    let user_service = web::Data::new(user_service);
    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(database.clone())
            .app_data(user_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if filename == ".env" {
        dotenv().map(|_| ())
    } else {
        dotenv::from_filename(filename).map(|_| ())
    };

    match loaded {
        Ok(()) => eprintln!("[profile: {}] {} 파일 로드 됨", profile, filename),
        Err(e) => eprintln!("[profile: {}] {} 파일 로드 실패: {}", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=referral_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// SQLite 연결 풀을 만들고 마이그레이션을 적용합니다
///
/// 연결 실패는 `std::io::Error`로 변환되어 프로세스가 종료됩니다.
async fn initialize_database() -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let url = DatabaseConfig::url();
    let database = Database::connect(&url, DatabaseConfig::max_connections())
        .await
        .map_err(|e| {
            error!("❌ 데이터베이스 연결 실패: {}", e);
            std::io::Error::other(format!("데이터베이스 연결 실패: {}", e))
        })?;

    Ok(database)
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`(쉼표 구분)로 허용 Origin을 지정하며, 없으면
/// localhost/127.0.0.1의 3000, 8080 포트를 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
