//! # 문자열 유틸리티
//!
//! 요청 필드 정리와 로그 출력용 마스킹 함수들입니다.

use serde::Deserialize;

/// 빈 문자열을 `None`으로 취급합니다.
///
/// 공백은 값으로 인정하며 잘라내지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(non_empty(Some("doge".to_string())), Some("doge".to_string()));
/// assert_eq!(non_empty(Some("".to_string())), None);
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 누락, `null`, 빈 문자열을 모두 `None`으로 역직렬화합니다.
///
/// `#[serde(default, deserialize_with = "deserialize_non_empty_string")]`와 함께 사용합니다.
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(opt))
}

/// 로그에 남길 이메일을 마스킹합니다.
///
/// 로컬 파트의 첫 글자만 남깁니다. `@`가 없으면 전체를 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_email("doge@wow.com"), "d***@wow.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), Some("  ".to_string()));
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_deserialize_non_empty_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_non_empty_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "doge"}"#).unwrap();
        assert_eq!(result.optional_field, Some("doge".to_string()));

        // 빈 문자열 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드 없음 - default
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 문자열이 아닌 값은 거부
        assert!(serde_json::from_str::<TestStruct>(r#"{"optional_field": 0}"#).is_err());
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("doge@wow.com"), "d***@wow.com");
        assert_eq!(mask_email("@wow.com"), "***@wow.com");
        assert_eq!(mask_email("wow.com"), "***");
    }
}
