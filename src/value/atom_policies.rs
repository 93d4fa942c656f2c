use lazy_static::lazy_static;
use regex::Regex;

use super::atom::AtomError;


/// Any non-empty token that cannot be confused with pair structure.
pub fn policy_base(s: &str) -> Result<(), AtomError> {
    if s.is_empty() {
        Err(AtomError::Empty)
    } else if s.chars().any(char::is_whitespace) {
        Err(AtomError::Whitespace(s.to_string()))
    } else if s.chars().any(|c| c == '(' || c == ')' || c == '.') {
        Err(AtomError::Delimiter(s.to_string()))
    } else {
        Ok(())
    }
}

/// Atomic symbols as the 1960 paper writes them: capital letters and digits,
/// starting with a letter.
pub fn policy_paper(s: &str) -> Result<(), AtomError> {
    lazy_static! {
        static ref PAPER_ATOM: Regex = Regex::new(r"^[A-Z][A-Z0-9]*$").unwrap();
    }

    policy_base(s)?;
    if PAPER_ATOM.is_match(s) {
        Ok(())
    } else {
        Err(AtomError::NonConforming(s.to_string()))
    }
}
