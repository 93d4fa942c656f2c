//! Pair splitting: one level of dotted-pair decomposition.
//!
//! Only paren depth is tracked here; nothing is evaluated and substrings keep
//! their own parens.

use crate::error::MalformedExpression;


pub const DEFAULT_SEPARATOR: char = '.';

/// Splits "(left<sep>right)" into ("left", "right").
///
/// The split point is the first separator found exactly one level inside the
/// outer parens. The whole input must be a single balanced group: the outer
/// close paren has to be the final character.
pub fn split(input: &str, separator: char) -> Result<(&str, &str), MalformedExpression> {
    if input.is_empty() {
        return malformed!(input, Empty);
    }
    if !input.starts_with('(') {
        return malformed!(input, MissingSeparator);
    }

    let mut depth: usize = 0;
    let mut split_at: Option<usize> = None;
    for (i, c) in input.char_indices() {
        if c == '(' {
            depth += 1;
        } else if c == ')' {
            // Opening char is '(' so depth is at least 1 here.
            depth -= 1;
            if depth == 0 {
                if i + c.len_utf8() != input.len() {
                    return malformed!(input, TrailingInput);
                }
                return match split_at {
                    Some(at) => Ok((&input[1..at], &input[at + separator.len_utf8()..i])),
                    None => malformed!(input, MissingSeparator),
                };
            }
        } else if c == separator && depth == 1 && split_at.is_none() {
            split_at = Some(i);
        }
    }

    malformed!(input, UnmatchedOpen)
}


#[cfg(test)]
#[path = "./splitter_test.rs"]
mod splitter_test;
