use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Characters stripped from every piece of user-supplied text before
/// it reaches a store. A denylist, not an escape: encoded variants
/// pass through untouched, so nothing downstream may treat cleaned
/// text as safe markup.
const DENYLIST: &[char] = &['<', '>', '\'', '"', '`', ';'];

/// Deliberately lax: one `@`, at least one dot after it, no spaces.
/// Addresses accepted under this pattern are already in the user
/// store, so tightening it would lock existing accounts out.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile email regex")
});

/// Strips the denylisted characters and trims surrounding whitespace.
/// Always returns a string; an input of nothing but stripped
/// characters cleans to the empty string.
pub fn clean_string(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| !DENYLIST.contains(c)).collect();
    cleaned.trim().to_string()
}

#[derive(Debug, Error)]
#[error("Invalid email format")]
pub struct InvalidEmail;

/// Normalizes an email address: cleaned, lower-cased, then shape
/// checked. The result is the form emails are stored and compared in.
pub fn clean_email(input: &str) -> Result<String, InvalidEmail> {
    let email = clean_string(input).to_lowercase();

    if !EMAIL_REGEX.is_match(&email) {
        return Err(InvalidEmail);
    }

    Ok(email)
}
