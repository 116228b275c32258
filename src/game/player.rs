use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
    static ref PLAYER_NAME_REGEX: Regex = Regex::new("^[A-Za-z]+$").unwrap();
}

/// Players are identified by a non-empty, letters-only name. Accented
/// characters are folded to ASCII before validation.
pub fn sanitize_name(raw: &str) -> Result<String> {
    let name = unidecode(raw);
    if !PLAYER_NAME_REGEX.is_match(&name) {
        return Err(anyhow!("Player names must be non-empty and use letters only"));
    }
    Ok(name)
}
