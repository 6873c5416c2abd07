//! Database Connection Management Module
//!
//! SQLite 커넥션 풀과 스키마 마이그레이션을 관리하는 모듈입니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # sqlx 형식의 SQLite URL
//! export DATABASE_URL="sqlite://data.sqlite?mode=rwc"
//!
//! # 풀 크기
//! export DATABASE_MAX_CONNECTIONS="5"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::url(), DatabaseConfig::max_connections()).await?;
//! let repo = UserRepository::new(database.pool().clone());
//! ```

use std::str::FromStr;
use std::time::Duration;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// `migrations/` 디렉토리의 스키마 마이그레이션
///
/// 적용 이력은 sqlx가 `_sqlx_migrations` 테이블로 추적합니다.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// SQLite 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 커넥션 풀을 생성하고 마이그레이션을 적용합니다.
    ///
    /// 외래 키 제약은 연결마다 활성화됩니다.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;

        info!("✅ SQLite 연결 성공: {}", database_url);

        Ok(database)
    }

    /// 테스트용 인메모리 데이터베이스
    ///
    /// 인메모리 SQLite는 연결마다 별도 DB가 생기므로 풀 크기를 1로 고정합니다.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        Self::connect("sqlite::memory:", 1).await
    }

    /// 미적용 마이그레이션을 실행합니다.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// 커넥션 풀 참조
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 연결 상태 확인
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
