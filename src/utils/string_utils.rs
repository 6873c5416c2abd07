//! # 문자열 유틸리티
//!
//! 요청 필드 검사에 쓰이는 공통 문자열 함수들입니다.
//! 빈 문자열(`""`)은 값이 없는 것으로 취급하고, 공백 문자열은 그대로 유지합니다.

use serde::Deserialize;

/// 값이 존재하고 빈 문자열이 아닌지 확인
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_present;
///
/// assert!(is_present(Some("a")));
/// assert!(!is_present(Some("")));
/// assert!(!is_present(None));
/// ```
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// 빈 문자열을 `None`으로 바꿉니다.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 문자열이 ASCII 숫자로만 이루어져 있고 길이가 정확히 `len`인지 확인
pub fn is_ascii_digits_of_len(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `null`, 필드 누락, 빈 문자열을 모두 `None`으로 역직렬화합니다.
/// `#[serde(default, deserialize_with = "deserialize_non_empty_string")]`와 함께 사용됩니다.
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(opt))
}
