//! # 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **단일 테이블**: 사용자와 추천 관계를 한 테이블에 저장
//! - **두 방향의 추천 조회**: 추천인은 `find_by_id`, 피추천인은 `find_referees`(인덱스 조회)
//! - **원자적 저장**: 사용자 생성은 하나의 트랜잭션으로 커밋 또는 롤백
//! - **데이터 무결성**: email, mobile, referral_code 유니크 제약과 referrer_id 외래 키

use sqlx::sqlite::SqlitePool;
use crate::domain::entities::users::user::{NewUser, User};
use crate::errors::AppResult;

macro_rules! user_columns {
    () => {
        "id, email, name, mobile, city, referral_code, password_hash, registered_at, referrer_id"
    };
}

/// 사용자 데이터 액세스 리포지토리
///
/// 모든 메서드는 `AppResult<T>`를 반환하며, sqlx 에러는
/// `AppError::DatabaseError`로 변환됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.pool().clone());
///
/// let created = repo.create(new_user).await?;
/// let referees = repo.find_referees(created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// ID로 사용자 조회
    ///
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(concat!(
            "SELECT ", user_columns!(), " FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(concat!(
            "SELECT ", user_columns!(), " FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 추천인 코드로 사용자 조회 (정확히 일치)
    pub async fn find_by_referral_code(&self, referral_code: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(concat!(
            "SELECT ", user_columns!(), " FROM users WHERE referral_code = ?"
        ))
        .bind(referral_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists("SELECT 1 FROM users WHERE email = ? LIMIT 1", email).await
    }

    pub async fn exists_by_mobile(&self, mobile: &str) -> AppResult<bool> {
        self.exists("SELECT 1 FROM users WHERE mobile = ? LIMIT 1", mobile).await
    }

    pub async fn exists_by_referral_code(&self, referral_code: &str) -> AppResult<bool> {
        self.exists("SELECT 1 FROM users WHERE referral_code = ? LIMIT 1", referral_code).await
    }

    async fn exists(&self, sql: &'static str, value: &str) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// 주어진 사용자를 추천인으로 가입한 사용자 목록 (한 단계만, ID 오름차순)
    pub async fn find_referees(&self, referrer_id: i64) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(concat!(
            "SELECT ", user_columns!(), " FROM users WHERE referrer_id = ? ORDER BY id"
        ))
        .bind(referrer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// 전체 사용자 목록 (ID 오름차순)
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(concat!(
            "SELECT ", user_columns!(), " FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// 새 사용자 저장
    ///
    /// 삽입은 트랜잭션 안에서 수행되며, 커밋 전에 실패하면 트랜잭션이
    /// drop 되면서 롤백됩니다. 유니크 제약이나 외래 키 위반은
    /// `AppError::DatabaseError`로 반환됩니다.
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"INSERT INTO users
                   (email, name, mobile, city, referral_code, password_hash, registered_at, referrer_id)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(&new_user.mobile)
        .bind(&new_user.city)
        .bind(&new_user.referral_code)
        .bind(&new_user.password_hash)
        .bind(new_user.registered_at)
        .bind(new_user.referrer_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(new_user.into_user(result.last_insert_rowid()))
    }
}
