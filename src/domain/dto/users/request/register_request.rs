use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::errors::AppError;
use crate::utils::string_utils::{deserialize_non_empty_string, is_ascii_digits_of_len, is_present};

/// 회원가입 시 반드시 채워져야 하는 필드 (검사 및 에러 메시지 순서)
const REQUIRED_FIELDS: [&str; 5] = ["email", "name", "mobile", "city", "password"];

/// 형식 검증 실패를 보고하는 필드 순서
const FORMAT_CHECK_ORDER: [&str; 3] = ["email", "mobile", "password"];

pub const MOBILE_NUMBER_LENGTH: usize = 10;

/// 회원가입 요청 DTO
///
/// 모든 필드를 `Option`으로 받아, 필드 누락을 역직렬화 에러가 아닌
/// `Missing fields: ...` 검증 에러로 보고합니다.
///
/// # JSON 예제
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
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// "@"와 "."를 포함해야 함
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    pub name: Option<String>,

    /// 정확히 10자리 숫자
    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile: Option<String>,

    pub city: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,

    /// 추천인 코드 (빈 문자열은 없는 것으로 취급)
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub referral_code: Option<String>,
}

/// 입력 검증을 통과한 회원가입 데이터
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub mobile: String,
    pub city: String,
    pub password: String,
    pub referral_code: Option<String>,
}

impl RegisterRequest {
    /// 비어 있거나 누락된 필수 필드 이름 목록
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            self.email.as_deref(),
            self.name.as_deref(),
            self.mobile.as_deref(),
            self.city.as_deref(),
            self.password.as_deref(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| !is_present(*value))
            .map(|(field, _)| *field)
            .collect()
    }

    /// 필수 필드 확인 후 이메일 → 휴대폰 번호 → 비밀번호 순서로 형식을 검증합니다.
    ///
    /// 처음 실패한 검사의 메시지를 담은 `ValidationError`를 반환합니다.
    pub fn into_registration(self) -> Result<Registration, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing fields: {} are required",
                missing.join(", ")
            )));
        }

        if let Err(errors) = self.validate() {
            return Err(AppError::ValidationError(first_error_message(&errors)));
        }

        match self {
            RegisterRequest {
                email: Some(email),
                name: Some(name),
                mobile: Some(mobile),
                city: Some(city),
                password: Some(password),
                referral_code,
            } => Ok(Registration {
                email,
                name,
                mobile,
                city,
                password,
                referral_code,
            }),
            _ => Err(AppError::InternalError(
                "required fields vanished after validation".to_string(),
            )),
        }
    }
}

/// 고정된 필드 순서에 따라 첫 번째 검증 메시지를 고릅니다.
fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FORMAT_CHECK_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .chain(field_errors.values().flat_map(|errs| errs.iter()))
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::new("invalid_email")
            .with_message("Invalid email format".into()));
    }
    Ok(())
}

fn validate_mobile_number(mobile: &str) -> Result<(), ValidationError> {
    if !is_ascii_digits_of_len(mobile, MOBILE_NUMBER_LENGTH) {
        return Err(ValidationError::new("invalid_mobile")
            .with_message("Invalid mobile number: Must be 10 digits".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            email: Some("a@x.com".to_string()),
            name: Some("A".to_string()),
            mobile: Some("1234567890".to_string()),
            city: Some("X".to_string()),
            password: Some("longpass1".to_string()),
            referral_code: None,
        }
    }

    fn validation_message(request: RegisterRequest) -> String {
        match request.into_registration() {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let registration = valid_request().into_registration().unwrap();

        assert_eq!(registration.email, "a@x.com");
        assert_eq!(registration.mobile, "1234567890");
        assert!(registration.referral_code.is_none());
    }

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let request = RegisterRequest {
            email: None,
            city: Some(String::new()),
            ..valid_request()
        };

        assert_eq!(request.missing_fields(), vec!["email", "city"]);
        assert_eq!(
            validation_message(request),
            "Missing fields: email, city are required"
        );
    }

    #[test]
    fn test_all_fields_missing() {
        assert_eq!(
            validation_message(RegisterRequest::default()),
            "Missing fields: email, name, mobile, city, password are required"
        );
    }

    #[test]
    fn test_email_without_at_or_dot_is_rejected() {
        for email in ["ax.com", "a@xcom", "plain"] {
            let request = RegisterRequest {
                email: Some(email.to_string()),
                ..valid_request()
            };
            assert_eq!(validation_message(request), "Invalid email format");
        }
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        for mobile in ["123456789", "12345678901", "12345abcde", "+123456789"] {
            let request = RegisterRequest {
                mobile: Some(mobile.to_string()),
                ..valid_request()
            };
            assert_eq!(
                validation_message(request),
                "Invalid mobile number: Must be 10 digits"
            );
        }
    }

    #[test]
    fn test_short_password_is_rejected() {
        let request = RegisterRequest {
            password: Some("short12".to_string()),
            ..valid_request()
        };

        assert_eq!(
            validation_message(request),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_email_error_reported_before_mobile_and_password() {
        let request = RegisterRequest {
            email: Some("bad".to_string()),
            mobile: Some("1".to_string()),
            password: Some("x".to_string()),
            ..valid_request()
        };

        assert_eq!(validation_message(request), "Invalid email format");
    }

    #[test]
    fn test_mobile_error_reported_before_password() {
        let request = RegisterRequest {
            mobile: Some("1".to_string()),
            password: Some("x".to_string()),
            ..valid_request()
        };

        assert_eq!(
            validation_message(request),
            "Invalid mobile number: Must be 10 digits"
        );
    }

    #[test]
    fn test_empty_referral_code_deserializes_as_absent() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","name":"A","mobile":"1234567890","city":"X","password":"longpass1","referral_code":""}"#,
        )
        .unwrap();

        assert!(request.referral_code.is_none());
    }
}
