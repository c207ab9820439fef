//! Route declarations loaded from JSON.
//!
//! ```json
//! [
//!   { "path": "/users/:id", "constraints": { "id": "^\\d+$" }, "handler": "users.show" },
//!   { "path": "/users", "method": "POST", "handler": "users.create", "middlewares": ["auth"] }
//! ]
//! ```
//!
//! Fields other than `path`, `constraints`, `method` and `handler` are kept as
//! route metadata and returned with every match.
use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use http::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Match, Route, TrieRouter, TrieRouterBuilder};

pub type Metadata = Map<String, Value>;
pub type JsonRoute = Route<Value, Metadata>;
pub type JsonRouter = TrieRouter<Value, Metadata>;
pub type JsonMatch<'r> = Match<'r, Value, Metadata>;

#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    #[serde(default)]
    pub constraints: HashMap<String, String>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub handler: Value,
    #[serde(flatten)]
    pub extra: Metadata,
}

fn default_method() -> String {
    Method::GET.to_string()
}

impl TryFrom<RouteConfig> for JsonRoute {
    type Error = Error;

    fn try_from(config: RouteConfig) -> std::result::Result<Self, Self::Error> {
        let method = Method::from_bytes(config.method.as_bytes())
            .map_err(|_| Error::invalid_method(&config.method))?;
        Ok(Route {
            path: config.path,
            method,
            handler: config.handler,
            constraints: config.constraints,
            metadata: config.extra,
        })
    }
}

pub fn from_json(json: &str) -> Result<JsonRouter> {
    let routes: Vec<RouteConfig> =
        serde_json::from_str(json).context("Failed to parse route declarations")?;
    let router = routes
        .into_iter()
        .map(JsonRoute::try_from)
        .collect::<std::result::Result<TrieRouterBuilder<_, _>, _>>()?
        .build()?;
    Ok(router)
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JsonRouter> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read routes from {}", path.display()))?;
    from_json(&json).with_context(|| format!("Invalid routes file {}", path.display()))
}

impl JsonMatch<'_> {
    /// Renders the match as the declaration's fields plus a `params` object.
    pub fn to_json(&self) -> Value {
        let mut result = self.metadata().clone();
        result.insert("method".to_string(), Value::from(self.method().as_str()));
        result.insert("handler".to_string(), self.handler().clone());
        let constraints = self
            .endpoint()
            .constraints()
            .iter()
            .map(|(name, regex)| (name.clone(), Value::from(regex.as_str())))
            .collect::<Metadata>();
        result.insert("constraints".to_string(), Value::Object(constraints));
        let params = self
            .params()
            .iter()
            .map(|(name, value)| (name.clone(), Value::from(value.as_str())))
            .collect::<Metadata>();
        result.insert("params".to_string(), Value::Object(params));
        Value::Object(result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::Request;

    #[test]
    fn defaults_method_and_collects_extra_fields() {
        let config: RouteConfig = serde_json::from_value(json!({
            "path": "/users",
            "handler": { "body": "list" },
            "middlewares": ["auth"],
        }))
        .unwrap();
        assert_eq!(config.method, "GET");
        assert!(config.constraints.is_empty());
        assert_eq!(config.extra.get("middlewares"), Some(&json!(["auth"])));
        assert_eq!(config.extra.get("path"), None);
    }

    #[test]
    fn rejects_invalid_method() {
        let config: RouteConfig =
            serde_json::from_value(json!({ "path": "/", "method": "GE T" })).unwrap();
        let err = JsonRoute::try_from(config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid method 'GE T'");
    }

    #[test]
    fn renders_match() {
        let router = from_json(
            r#"[{"path": "/users/:id", "constraints": {"id": "^\\d+$"}, "handler": "show", "params": "shadowed", "tag": 1}]"#,
        )
        .unwrap();
        let matched = router.resolve(&Request::get("/users/42")).unwrap();
        assert_eq!(
            matched.to_json(),
            json!({
                "method": "GET",
                "handler": "show",
                "constraints": { "id": "^\\d+$" },
                "tag": 1,
                "params": { "id": "42" },
            })
        );
    }

    #[test]
    fn reports_bad_json() {
        let err = from_json("{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse route declarations"));
    }

    #[test]
    fn reports_bad_constraint() {
        let err = from_json(r#"[{"path": "/:id", "constraints": {"id": "("}}]"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid constraint for 'id'"));
    }
}
