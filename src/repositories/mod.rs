//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 커넥션 풀(`SqlitePool`)을 소유하며, 서비스 계층에 명시적으로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.pool().clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
