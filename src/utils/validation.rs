// src/utils/validation.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is valid");
}

const POLICY_SYMBOLS: &str = "@$!%*?&";

/// Loose shape check: something@something.tld, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least 8 characters from `[A-Za-z0-9@$!%*?&]`, with one lowercase,
/// one uppercase, one digit and one of `@$!%*?&`.
pub fn meets_password_policy(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || POLICY_SYMBOLS.contains(c);

    password.chars().count() >= 8
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| POLICY_SYMBOLS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ana@example.com", true)]
    #[case("a.b+c@sub.dominio.es", true)]
    #[case("sin-arroba.com", false)]
    #[case("ana@dominio", false)]
    #[case("ana @example.com", false)]
    #[case("ana@@example.com", false)]
    #[case("", false)]
    fn email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[rstest]
    #[case("Segura1!", true)]
    #[case("Aa1@Aa1@Aa1@", true)]
    #[case("Corta1!", false)]
    #[case("sinmayus1!", false)]
    #[case("SINMINUS1!", false)]
    #[case("SinNumero!", false)]
    #[case("SinSimbolo1", false)]
    #[case("Otro#simb1!", false)]
    fn policy(#[case] password: &str, #[case] ok: bool) {
        assert_eq!(meets_password_policy(password), ok);
    }
}
