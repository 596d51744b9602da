use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref REGEX_WORD: Regex = Regex::new(r"\S+").unwrap();

    // Field: a bare name (no dash, no colon) up to the first colon.
    pub static ref REGEX_FIELD: Regex = Regex::new(r"(?x)
    ^[^\-:]+ # Field name
    : # Separator
    ").unwrap();
}
