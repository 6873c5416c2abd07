//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 추천 목록 조회, 전체 사용자 조회를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UserService                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────┐  │
//! │  │  Registration  │  │ Authentication │  │    Referrals   │  │
//! │  │                │  │                │  │                │  │
//! │  │ • Input Valid  │  │ • Email Lookup │  │ • User Lookup  │  │
//! │  │ • Duplicate Chk│  │ • bcrypt Verify│  │ • Referee Query│  │
//! │  │ • Referrer Res │  │ • Generic Fail │  │ • Date/Time Fmt│  │
//! │  │ • Hash + Insert│  │                │  │                │  │
//! │  └────────────────┘  └────────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       UserRepository                         │
//! │ • users 테이블 조회/저장 (SQLite)                               │
//! │ • 트랜잭션 단위 삽입                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! - 입력/중복/추천인 코드 오류 → `ValidationError` (400)
//! - 잘못된 자격 증명 → `AuthenticationError` (401)
//! - 존재하지 않는 사용자 → `NotFound` (404)
//! - 그 외 DB/내부 오류 → 작업 이름이 붙은 `InternalError` (500)

use crate::{
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest, Registration},
            response::{LoginResponse, ReferralListResponse, RegisterResponse, UserListResponse},
        },
        entities::users::user::{NewUser, User},
    },
    errors::{AppError, AppResult},
    repositories::users::UserRepository,
    services::auth::PasswordHasher,
};
use super::referral_code::generate_referral_code;

/// 추천인 코드 충돌 시 재생성 최대 횟수
const MAX_REFERRAL_CODE_ATTEMPTS: usize = 5;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 프로세스 시작 시 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(UserRepository::new(pool), PasswordHasher::from_env());
/// let response = service.register(request).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    password_hasher: PasswordHasher,
    referral_code_generator: fn() -> String,
}

impl UserService {
    pub fn new(user_repo: UserRepository, password_hasher: PasswordHasher) -> Self {
        Self {
            user_repo,
            password_hasher,
            referral_code_generator: generate_referral_code,
        }
    }

    /// 추천인 코드 생성기를 교체합니다. 기본값은 `generate_referral_code`입니다.
    pub fn with_referral_code_generator(mut self, generator: fn() -> String) -> Self {
        self.referral_code_generator = generator;
        self
    }

    /// 새 사용자 등록
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 필수 필드 → 이메일 형식 → 휴대폰 번호 → 비밀번호 길이
    /// 2. **중복 검사**: 이메일을 먼저, 그 다음 휴대폰 번호
    /// 3. **추천인 확인**: 코드가 주어진 경우 정확히 일치하는 사용자를 추천인으로 지정
    /// 4. **저장**: 새 추천인 코드 생성, 비밀번호 해싱, 트랜잭션 삽입
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterResponse)` - 새 사용자 ID와 본인의 추천인 코드
    /// * `Err(AppError::ValidationError)` - 입력 오류, 중복, 잘못된 추천인 코드
    /// * `Err(AppError::InternalError)` - `"Registration failed: ..."`
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let start_time = std::time::Instant::now();

        let registration = request.into_registration()?;

        let user = self
            .register_validated(registration)
            .await
            .map_err(|e| e.during("Registration failed"))?;

        log::info!(
            "회원가입 완료 - ID: {}, 추천 가입: {}, 소요 시간: {:?}",
            user.id,
            user.was_referred(),
            start_time.elapsed()
        );

        Ok(RegisterResponse::from(&user))
    }

    async fn register_validated(&self, registration: Registration) -> AppResult<User> {
        if self.user_repo.exists_by_email(&registration.email).await? {
            return Err(AppError::ValidationError("Email already exists".to_string()));
        }

        if self.user_repo.exists_by_mobile(&registration.mobile).await? {
            return Err(AppError::ValidationError(
                "Mobile number already exists".to_string(),
            ));
        }

        let referrer_id = match registration.referral_code.as_deref() {
            Some(code) => Some(self.resolve_referrer(code).await?.id),
            None => None,
        };

        let referral_code = self.unique_referral_code().await?;
        let password_hash = self.password_hasher.hash(&registration.password)?;

        let new_user = NewUser::new(
            registration.email,
            registration.name,
            registration.mobile,
            registration.city,
            referral_code,
            password_hash,
            referrer_id,
        );

        self.user_repo.create(new_user).await
    }

    async fn resolve_referrer(&self, referral_code: &str) -> AppResult<User> {
        self.user_repo
            .find_by_referral_code(referral_code)
            .await?
            .ok_or_else(|| AppError::ValidationError("Invalid referral code".to_string()))
    }

    async fn unique_referral_code(&self) -> AppResult<String> {
        for _ in 0..MAX_REFERRAL_CODE_ATTEMPTS {
            let code = (self.referral_code_generator)();
            if !self.user_repo.exists_by_referral_code(&code).await? {
                return Ok(code);
            }
            log::warn!("추천인 코드 충돌, 재생성: {}", code);
        }

        Err(AppError::InternalError(format!(
            "could not generate a unique referral code after {} attempts",
            MAX_REFERRAL_CODE_ATTEMPTS
        )))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 구분하지 않고
    /// 같은 `"Invalid credentials"` 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let (email, password) = request.into_credentials()?;

        let user = self
            .verify_password(&email, &password)
            .await
            .map_err(|e| e.during("Login failed"))?;

        log::info!("로그인 성공 - ID: {}", user.id);

        Ok(LoginResponse::from(user))
    }

    /// 로컬 계정 비밀번호 검증
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::AuthenticationError)` - 이메일 없음 또는 비밀번호 불일치
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            log::warn!("로그인 실패 - 등록되지 않은 이메일");
            return Err(invalid_credentials());
        };

        if !self.password_hasher.verify(password, &user.password_hash)? {
            log::warn!("로그인 실패 - 비밀번호 불일치, ID: {}", user.id);
            return Err(invalid_credentials());
        }

        Ok(user)
    }

    /// 주어진 사용자가 추천한 사용자 목록 (한 단계)
    ///
    /// * `Err(AppError::NotFound)` - `"User not found"`
    /// * `Err(AppError::InternalError)` - `"Error fetching referrals: ..."`
    pub async fn list_referrals(&self, user_id: i64) -> AppResult<ReferralListResponse> {
        self.fetch_referrals(user_id)
            .await
            .map_err(|e| e.during("Error fetching referrals"))
    }

    async fn fetch_referrals(&self, user_id: i64) -> AppResult<ReferralListResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let referees = self.user_repo.find_referees(user.id).await?;

        log::debug!("추천 목록 조회 - ID: {}, {}명", user.id, referees.len());

        Ok(ReferralListResponse::new(user.id, referees))
    }

    /// 전체 사용자 공개 정보 목록
    pub async fn list_users(&self) -> AppResult<UserListResponse> {
        let users = self
            .user_repo
            .find_all()
            .await
            .map_err(|e| e.during("Error fetching users"))?;

        Ok(UserListResponse::from(users))
    }
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError("Invalid credentials".to_string())
}
