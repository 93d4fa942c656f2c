//! Evaluation settings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MalformedExpression;
use crate::splitter::DEFAULT_SEPARATOR;
use crate::value::atom_policies::{policy_base, policy_paper};
use crate::value::AtomPolicy;


#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EvalOptions {
    pub separator: char,
    pub atoms: AtomPolicyKind,
}

/// Serializable stand-in for an AtomPolicy.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AtomPolicyKind {
    Base,
    Paper,
}

impl EvalOptions {
    pub fn with_separator(mut self, separator: char) -> Result<Self, MalformedExpression> {
        if separator == '(' || separator == ')' || separator.is_whitespace() {
            return malformed!(separator.to_string(), InvalidSeparator(separator));
        }
        self.separator = separator;
        Ok(self)
    }

    pub fn with_atoms(mut self, atoms: AtomPolicyKind) -> Self {
        self.atoms = atoms;
        self
    }
}

impl AtomPolicyKind {
    pub fn policy(&self) -> AtomPolicy {
        match self {
            AtomPolicyKind::Base => policy_base,
            AtomPolicyKind::Paper => policy_paper,
        }
    }
}


impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            atoms: AtomPolicyKind::Base,
        }
    }
}

impl FromStr for AtomPolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(AtomPolicyKind::Base),
            "paper" => Ok(AtomPolicyKind::Paper),
            _ => Err(format!("Unknown atom policy \"{}\", expected base or paper", s)),
        }
    }
}
