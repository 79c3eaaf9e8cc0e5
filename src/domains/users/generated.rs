//! Parsing of model-generated text into new records.
//!
//! Generated replies often arrive wrapped in a Markdown code fence, with or
//! without a language tag. The fence is stripped before the remainder is
//! parsed as a JSON object of the [`NewUser`] shape and validated. Every
//! failure mode is a variant of [`GenerationParseError`]; nothing here panics
//! on untrusted input.

use super::error::GenerationParseError;
use super::record::NewUser;

/// Parse free-form generated text into a validated [`NewUser`].
pub fn parse_generated_user(text: &str) -> Result<NewUser, GenerationParseError> {
    let body = strip_code_fences(text);

    let user: NewUser =
        serde_json::from_str(body).map_err(GenerationParseError::InvalidJson)?;
    user.validate()?;

    Ok(user)
}

/// Strip a surrounding Markdown code fence, if present.
///
/// Handles ```` ```json ... ``` ```` as well as a bare ```` ``` ... ``` ````
/// wrapper. Text without a fence is returned trimmed and otherwise untouched.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line, if any.
    let body = match rest.split_once('\n') {
        Some((first_line, remainder)) if !first_line.trim().contains(['{', '[']) => remainder,
        _ => rest,
    };

    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_JSON: &str =
        r#"{"name":"Bo","email":"bo@x.com","address":"2 Rd","phone":"555"}"#;

    #[test]
    fn test_parse_bare_json() {
        let user = parse_generated_user(RAW_JSON).unwrap();
        assert_eq!(user.name, "Bo");
        assert_eq!(user.email, "bo@x.com");
    }

    #[test]
    fn test_parse_json_fence() {
        let text = format!("```json\n{RAW_JSON}\n```");
        let user = parse_generated_user(&text).unwrap();
        assert_eq!(user.name, "Bo");
        assert_eq!(user.address, "2 Rd");
    }

    #[test]
    fn test_parse_bare_fence() {
        let text = format!("```\n{RAW_JSON}\n```");
        assert!(parse_generated_user(&text).is_ok());
    }

    #[test]
    fn test_parse_fence_with_surrounding_prose_fails() {
        let text = format!("Here is your user:\n```json\n{RAW_JSON}\n```");
        assert!(matches!(
            parse_generated_user(&text),
            Err(GenerationParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_non_json_fails() {
        assert!(matches!(
            parse_generated_user("I could not generate a user, sorry."),
            Err(GenerationParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_invalid_shape_fails() {
        let text = r#"{"name":"Bo","email":"bo@x.com"}"#;
        assert!(matches!(
            parse_generated_user(text),
            Err(GenerationParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_bad_email_fails_validation() {
        let text = r#"{"name":"Bo","email":"nope","address":"2 Rd","phone":"555"}"#;
        assert!(matches!(
            parse_generated_user(text),
            Err(GenerationParseError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_strip_fences_keeps_unfenced_text() {
        assert_eq!(strip_code_fences("  plain text  "), "plain text");
    }

    #[test]
    fn test_strip_fences_single_line() {
        let text = format!("```{RAW_JSON}```");
        assert_eq!(strip_code_fences(&text), RAW_JSON);
    }
}
