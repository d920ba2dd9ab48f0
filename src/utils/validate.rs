use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 允许注册的学术邮箱域名后缀
const ALLOWED_EMAIL_DOMAINS: &[&str] = &[".edu"];

pub const TITLE_MAX_LEN: usize = 200;
pub const QUESTION_CONTENT_MAX_LEN: usize = 2000;
pub const RESPONSE_CONTENT_MAX_LEN: usize = 1500;
pub const NOTIFICATION_MESSAGE_MAX_LEN: usize = 500;
pub const NAME_MAX_LEN: usize = 50;
pub const MAJOR_MAX_LEN: usize = 100;
pub const MIN_AGE: i32 = 17;
pub const MAX_AGE: i32 = 25;

/// 实体 ID 必须为正整数，非法 ID 直接拒绝，不查询存储层
pub fn validate_entity_id(id: i64, what: &'static str) -> Result<(), String> {
    if id <= 0 {
        return Err(format!("{what} id must be a positive integer, got {id}"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    // 邮箱格式校验
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid".to_string());
    }
    // 域名校验：仅接受学术邮箱
    let lowered = email.to_lowercase();
    if !ALLOWED_EMAIL_DOMAINS
        .iter()
        .any(|domain| lowered.ends_with(domain))
    {
        return Err(format!(
            "Email domain is not accepted, expected one of: {}",
            ALLOWED_EMAIL_DOMAINS.join(", ")
        ));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), String> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(format!("Age must be between {MIN_AGE} and {MAX_AGE}"));
    }
    Ok(())
}

/// 必填字符串字段校验：非空且不超过长度上限
pub fn validate_required_text(value: &str, field: &'static str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(format!("{field} must not exceed {max_len} characters"));
    }
    Ok(())
}

pub fn validate_question_title(title: &str) -> Result<(), String> {
    validate_required_text(title, "title", TITLE_MAX_LEN)
}

pub fn validate_question_content(content: &str) -> Result<(), String> {
    validate_required_text(content, "content", QUESTION_CONTENT_MAX_LEN)
}

pub fn validate_response_content(content: &str) -> Result<(), String> {
    validate_required_text(content, "content", RESPONSE_CONTENT_MAX_LEN)
}

pub fn validate_notification_message(message: &str) -> Result<(), String> {
    validate_required_text(message, "message", NOTIFICATION_MESSAGE_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("jane.doe@university.edu").is_ok());
        assert!(validate_email("JANE.DOE@University.EDU").is_ok());
    }

    #[test]
    fn test_malformed_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("@university.edu").is_err());
    }

    #[test]
    fn test_rejected_email_domain() {
        let err = validate_email("jane.doe@gmail.com").unwrap_err();
        assert!(err.contains("domain"));
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(17).is_ok());
        assert!(validate_age(25).is_ok());
        assert!(validate_age(16).is_err());
        assert!(validate_age(26).is_err());
    }

    #[test]
    fn test_entity_id() {
        assert!(validate_entity_id(1, "question").is_ok());
        assert!(validate_entity_id(0, "question").is_err());
        assert!(validate_entity_id(-7, "student").is_err());
    }

    #[test]
    fn test_title_caps() {
        assert!(validate_question_title("How do I use lifetimes?").is_ok());
        assert!(validate_question_title("").is_err());
        assert!(validate_question_title("   ").is_err());
        assert!(validate_question_title(&"x".repeat(TITLE_MAX_LEN + 1)).is_err());
        assert!(validate_question_title(&"x".repeat(TITLE_MAX_LEN)).is_ok());
    }

    #[test]
    fn test_content_caps() {
        assert!(validate_question_content(&"y".repeat(QUESTION_CONTENT_MAX_LEN)).is_ok());
        assert!(validate_question_content(&"y".repeat(QUESTION_CONTENT_MAX_LEN + 1)).is_err());
        assert!(validate_response_content(&"y".repeat(RESPONSE_CONTENT_MAX_LEN)).is_ok());
        assert!(validate_response_content(&"y".repeat(RESPONSE_CONTENT_MAX_LEN + 1)).is_err());
    }
}
