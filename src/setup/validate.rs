//! Input Validation
//!
//! Pure validators for the setup wizard. Each takes one raw line of
//! operator input and either returns the normalized value or a
//! [`Rejection`] carrying the message shown to the operator. Validators
//! never panic and never touch the env file.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// The reason a raw input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Rejection(pub String);

impl Rejection {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of running a validator: the normalized value, or the rejection
/// message to print before re-prompting.
pub type Validated<T> = Result<T, Rejection>;

static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[a-z]+)?$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Language-subtag to full-text-search profile name. Lookups miss to
/// "simple".
static LANGUAGE_SEARCH_CONFIGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("en", "english"),
            ("nl", "dutch"),
            ("fi", "finnish"),
            ("fr", "french"),
            ("de", "german"),
            ("hu", "hungarian"),
            ("it", "italian"),
            ("no", "norwegian"),
            ("nb", "norwegian"),
            ("nn", "norwegian"),
            ("pt", "portuguese"),
            ("ro", "romanian"),
            ("ru", "russian"),
            ("es", "spanish"),
            ("sv", "swedish"),
            ("tt", "turkish"),
        ])
    });

/// Map a normalized language code to its search profile name via the first
/// two characters, falling back to "simple" for unlisted languages.
pub fn search_config_for(language: &str) -> &'static str {
    language
        .get(..2)
        .and_then(|subtag| LANGUAGE_SEARCH_CONFIGS.get(subtag).copied())
        .unwrap_or("simple")
}

/// One dot-separated hostname label: 1-63 chars, alphanumeric or hyphen,
/// no leading or trailing hyphen.
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Validate a site hostname: trimmed, lowercased, protocol-free, every
/// label matching the hostname grammar. Returns the normalized hostname.
pub fn validate_hostname(raw: &str) -> Validated<String> {
    let hostname = raw.trim().to_lowercase();

    if hostname.is_empty() {
        return Err(Rejection::new("You have to enter a hostname."));
    }
    if hostname.chars().count() > 255 {
        return Err(Rejection::new(
            "Hostname can't be longer than 255 characters.",
        ));
    }
    if hostname.starts_with("http") {
        return Err(Rejection::new(
            "Hostname can't include the protocol name. \
             Please don't include the http:// or https://.",
        ));
    }
    if !hostname.split('.').all(is_valid_label) {
        return Err(Rejection::new(
            "Entered hostname contains disallowed characters.",
        ));
    }

    Ok(hostname)
}

/// Validate a language code like "pl" or "en-us". Underscores are folded
/// to hyphens before the grammar check.
pub fn validate_language(raw: &str) -> Validated<String> {
    let language = raw.trim().to_lowercase().replace('_', "-");

    if language.is_empty() {
        return Err(Rejection::new("You have to enter a language."));
    }
    if !LANGUAGE_CODE_REGEX.is_match(&language) {
        return Err(Rejection::new("This is not a valid language code."));
    }

    Ok(language)
}

/// Validate a TZ database timezone name. Backslashes are folded to forward
/// slashes to tolerate Windows-style paste; any non-empty result passes.
pub fn validate_timezone(raw: &str) -> Validated<String> {
    let timezone = raw.trim().replace('\\', "/");

    if timezone.is_empty() {
        return Err(Rejection::new("You have to enter a timezone name."));
    }

    Ok(timezone)
}

/// Validate a sender e-mail address.
pub fn validate_email(raw: &str) -> Validated<String> {
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err(Rejection::new("You have to enter an e-mail address."));
    }
    if !EMAIL_REGEX.is_match(&email) {
        return Err(Rejection::new("This is not a valid e-mail address."));
    }

    Ok(email)
}

/// Validate a TCP port number.
pub fn validate_port(raw: &str) -> Validated<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(Rejection::new("This is not a valid port number.")),
    }
}

/// Validate a yes/no answer. Accepts y/yes/n/no, case-insensitive.
pub fn validate_yes_no(raw: &str) -> Validated<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(Rejection::new("Enter either 'yes' or 'no'.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_accepted_and_normalized() {
        assert_eq!(validate_hostname("misago.com").unwrap(), "misago.com");
        assert_eq!(validate_hostname("  MySite.COM \n").unwrap(), "mysite.com");
    }

    #[test]
    fn test_hostname_all_digit_labels_accepted() {
        assert_eq!(validate_hostname("123.456").unwrap(), "123.456");
    }

    #[test]
    fn test_hostname_empty_rejected() {
        let err = validate_hostname("   ").unwrap_err();
        assert_eq!(err.0, "You have to enter a hostname.");
    }

    #[test]
    fn test_hostname_too_long_rejected() {
        // Valid grammar, 259 chars total.
        let long = vec!["abc"; 65].join(".");
        assert!(long.len() > 255);
        let err = validate_hostname(&long).unwrap_err();
        assert_eq!(err.0, "Hostname can't be longer than 255 characters.");
    }

    #[test]
    fn test_hostname_protocol_rejected() {
        for input in ["http://misago.com", "https://misago.com", "HTTP://x.com"] {
            let err = validate_hostname(input).unwrap_err();
            assert!(err.0.starts_with("Hostname can't include the protocol name."));
        }
    }

    #[test]
    fn test_hostname_bad_labels_rejected() {
        for input in ["-bad-.com", "my_site.com", "a..b", "my site.com"] {
            let err = validate_hostname(input).unwrap_err();
            assert_eq!(err.0, "Entered hostname contains disallowed characters.");
        }
    }

    #[test]
    fn test_hostname_label_longer_than_63_rejected() {
        let input = format!("{}.com", "a".repeat(64));
        assert!(validate_hostname(&input).is_err());
    }

    #[test]
    fn test_language_normalized() {
        assert_eq!(validate_language("PL").unwrap(), "pl");
        assert_eq!(validate_language("en_US").unwrap(), "en-us");
    }

    #[test]
    fn test_language_two_letters_no_region_valid() {
        assert_eq!(validate_language("de").unwrap(), "de");
    }

    #[test]
    fn test_language_rejected() {
        assert_eq!(
            validate_language("").unwrap_err().0,
            "You have to enter a language."
        );
        assert_eq!(
            validate_language("1a").unwrap_err().0,
            "This is not a valid language code."
        );
        assert!(validate_language("english").is_err());
    }

    #[test]
    fn test_search_config_lookup() {
        assert_eq!(search_config_for("en-us"), "english");
        assert_eq!(search_config_for("nb"), "norwegian");
        assert_eq!(search_config_for("pl"), "simple");
        assert_eq!(search_config_for(""), "simple");
    }

    #[test]
    fn test_timezone_backslash_folded() {
        assert_eq!(
            validate_timezone("Europe\\Warsaw").unwrap(),
            "Europe/Warsaw"
        );
    }

    #[test]
    fn test_timezone_forward_slashes_untouched() {
        assert_eq!(
            validate_timezone("America/Argentina/Ushuaia").unwrap(),
            "America/Argentina/Ushuaia"
        );
    }

    #[test]
    fn test_timezone_empty_rejected() {
        assert_eq!(
            validate_timezone(" \n").unwrap_err().0,
            "You have to enter a timezone name."
        );
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(
            validate_email(" NoReply@MySite.com ").unwrap(),
            "noreply@mysite.com"
        );
        assert_eq!(
            validate_email("").unwrap_err().0,
            "You have to enter an e-mail address."
        );
        assert_eq!(
            validate_email("not-an-address").unwrap_err().0,
            "This is not a valid e-mail address."
        );
    }

    #[test]
    fn test_port_validation() {
        assert_eq!(validate_port("587").unwrap(), 587);
        assert_eq!(validate_port(" 25\n").unwrap(), 25);
        for input in ["", "0", "65536", "smtp"] {
            assert_eq!(
                validate_port(input).unwrap_err().0,
                "This is not a valid port number."
            );
        }
    }

    #[test]
    fn test_yes_no_validation() {
        assert!(validate_yes_no("YES").unwrap());
        assert!(validate_yes_no("y").unwrap());
        assert!(!validate_yes_no("no\n").unwrap());
        assert!(validate_yes_no("maybe").is_err());
    }
}
