use std::collections::HashMap;

use regex::Regex;

use crate::{Error, Result};

/// Pattern used for dynamic segments declared without a constraint.
pub const ANY: &str = ".";

/// Compiled constraints of one declaration, keyed by segment name.
pub type Constraints = HashMap<String, Regex>;

/// A dynamic edge entry: the name a segment binds to and the regex it must satisfy.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub regex: Regex,
}

impl Constraint {
    pub fn new<S: Into<String>>(name: S, regex: Regex) -> Self {
        Self {
            name: name.into(),
            regex,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

pub fn any() -> Result<Regex> {
    Regex::new(ANY).map_err(|err| Error::invalid_constraint(ANY, err))
}

pub fn compile<'a, I>(sources: I) -> Result<Constraints>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    sources
        .into_iter()
        .map(|(name, source)| {
            Regex::new(source)
                .map(|regex| (name.clone(), regex))
                .map_err(|err| Error::invalid_constraint(name, err))
        })
        .collect()
}

/// Every constrained name must be bound and its value must match.
pub fn satisfied(constraints: &Constraints, params: &HashMap<String, String>) -> bool {
    constraints.iter().all(|(name, regex)| {
        params
            .get(name)
            .is_some_and(|value| regex.is_match(value))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sources(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn search_is_unanchored() {
        let constraint = Constraint::new("id", Regex::new(r"\d+").unwrap());
        assert!(constraint.matches("42"));
        assert!(constraint.matches("v42"));
        assert!(!constraint.matches("abc"));
    }

    #[test]
    fn default_constraint_compiles() {
        assert_eq!(any().unwrap().as_str(), ANY);
    }

    #[test]
    fn any_matches_non_empty() {
        let any = Constraint::new("id", any().unwrap());
        assert!(any.matches("x"));
        assert!(!any.matches(""));
    }

    #[test]
    fn compile_reports_name() {
        let err = compile(&sources(&[("id", "(")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConstraint { ref name, .. } if name == "id"));
    }

    #[test]
    fn satisfied_requires_every_key() {
        let constraints = compile(&sources(&[("id", r"^\d+$"), ("name", "^[a-z]+$")])).unwrap();
        let mut params = HashMap::new();
        params.insert("id".to_string(), "1".to_string());
        assert_eq!(satisfied(&constraints, &params), false);
        params.insert("name".to_string(), "bob".to_string());
        assert_eq!(satisfied(&constraints, &params), true);
        params.insert("name".to_string(), "Bob".to_string());
        assert_eq!(satisfied(&constraints, &params), false);
        assert_eq!(satisfied(&Constraints::new(), &params), true);
    }
}
