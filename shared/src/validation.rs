//! Boundary validation.
//!
//! Every check runs before a request constructs any query input; a
//! failure surfaces as a 400 without touching the store.

/// Usernames: 1-64 chars from a deliberately narrow charset.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.len() > 64 {
        return Err("Username must be at most 64 characters".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err("Username may only contain letters, digits, '_', '-' and '.'".to_string());
    }
    Ok(())
}

/// Passwords: length bounds only; content is the user's business.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters".to_string());
    }
    Ok(())
}

pub fn validate_product_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Product name must be at most 255 characters".to_string());
    }
    Ok(())
}

pub fn validate_update_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > 255 {
        return Err("Title must be at most 255 characters".to_string());
    }
    Ok(())
}

pub fn validate_update_body(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Body cannot be empty".to_string());
    }
    Ok(())
}

pub fn validate_version(version: &str) -> Result<(), String> {
    if version.len() > 64 {
        return Err("Version label must be at most 64 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("alice", true)]
    #[case::full_charset("release-bot_2.0", true)]
    #[case::empty("", false)]
    #[case::space("has space", false)]
    #[case::punctuation("semi;colon", false)]
    fn username_charset_is_enforced(#[case] username: &str, #[case] ok: bool) {
        assert_eq!(validate_username(username).is_ok(), ok);
    }

    #[test]
    fn username_length_is_capped() {
        assert!(validate_username(&"a".repeat(64)).is_ok());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password(&"a".repeat(128)).is_ok());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[rstest]
    #[case::named("Widget", true)]
    #[case::empty("", false)]
    #[case::whitespace_only("   ", false)]
    fn product_name_must_have_content(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(validate_product_name(name).is_ok(), ok);
    }

    #[test]
    fn update_text_fields_must_have_content() {
        assert!(validate_update_title("v1.2.0 release").is_ok());
        assert!(validate_update_title(" \t ").is_err());
        assert!(validate_update_body("Fixed a crash on startup").is_ok());
        assert!(validate_update_body("  ").is_err());
    }

    #[test]
    fn version_label_is_capped() {
        assert!(validate_version("1.2.3-rc.1").is_ok());
        assert!(validate_version(&"9".repeat(65)).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_alphanumeric_usernames_pass(name in "[a-zA-Z0-9]{1,64}") {
            prop_assert!(validate_username(&name).is_ok());
        }

        #[test]
        fn prop_password_length_decides(len in 0usize..=160) {
            let password = "a".repeat(len);
            prop_assert_eq!(validate_password(&password).is_ok(), (8..=128).contains(&len));
        }

        #[test]
        fn prop_names_with_content_pass(name in "[a-zA-Z0-9 ]{0,254}[a-zA-Z0-9]") {
            prop_assert!(validate_product_name(&name).is_ok());
        }
    }
}
