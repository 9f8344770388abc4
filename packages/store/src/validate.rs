//! Field validators shared by the form and the server functions.

use std::sync::LazyLock;

use regex::Regex;

/// Local part: dotted atoms or a quoted string. Domain: bracketed IPv4 literal or
/// dotted labels ending in a TLD of two or more letters.
///
/// Atoms exclude the ECMAScript whitespace set rather than `\s`: it adds U+FEFF
/// and leaves out U+0085.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check an email address against [`EMAIL_PATTERN`], case-insensitively.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Initials must be 2 or 3 characters long.
pub fn validate_initials(initials: &str) -> bool {
    let len = initials.chars().count();
    len > 1 && len < 4
}

/// Initials are stored upper-case, whatever was typed.
pub fn normalize_initials(initials: &str) -> String {
    initials.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.co",
            "first.last@example.com",
            "x-y+tag@sub.domain-name.io",
            "ARV@EXAMPLE.COM",
            "\"john doe\"@example.org",
            "user@[192.168.0.1]",
        ] {
            assert!(validate_email(email), "expected {email:?} to be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "a@b",
            "a@b.c",
            "@b.co",
            "a..b@c.com",
            "a b@c.com",
            "a@b_c.com",
            "a@@b.co",
            "a@b.co ",
            "(a)@b.co",
        ] {
            assert!(!validate_email(email), "expected {email:?} to be invalid");
        }
    }

    #[test]
    fn test_whitespace_matches_ecmascript() {
        assert!(!validate_email("a\u{feff}@b.co"));
        assert!(!validate_email("a\u{a0}b@c.com"));
        assert!(!validate_email("a\u{3000}@b.co"));
        assert!(validate_email("a\u{85}@b.co"));
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        for email in ["ab.co", "rick.roll.haha", "\"quoted\"example.org", "[1.2.3.4]"] {
            assert!(!email.contains('@'));
            assert!(!validate_email(email));
        }
    }

    #[test]
    fn test_initials_length() {
        assert!(!validate_initials(""));
        assert!(!validate_initials("A"));
        assert!(validate_initials("AB"));
        assert!(validate_initials("ARV"));
        assert!(!validate_initials("ABCD"));
        assert!(!validate_initials("ABCDE"));
        // Counted in characters, not bytes
        assert!(validate_initials("ÉÀ"));
    }

    #[test]
    fn test_normalize_initials() {
        assert_eq!(normalize_initials("arv"), "ARV");
        assert_eq!(normalize_initials("Ab"), "AB");
    }
}
