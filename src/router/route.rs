use std::collections::HashMap;

use http::Method;

use super::constraint::{self, Constraints};
use crate::Result;

/// A route declaration as supplied to the builder.
///
/// `H` is the handler reference and is never inspected. `M` carries whatever
/// else the caller wants attached to the route, e.g. a middleware list.
#[derive(Debug, Clone)]
pub struct Route<H, M = ()> {
    pub path: String,
    pub method: Method,
    pub handler: H,
    pub constraints: HashMap<String, String>,
    pub metadata: M,
}

impl<H, M: Default> Route<H, M> {
    pub fn new<S: Into<String>>(path: S, handler: H) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            handler,
            constraints: HashMap::new(),
            metadata: M::default(),
        }
    }
}

impl<H, M> Route<H, M> {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Restricts the dynamic segment `name` to values matching `source`.
    pub fn with_constraint<N: Into<String>, S: Into<String>>(mut self, name: N, source: S) -> Self {
        self.constraints.insert(name.into(), source.into());
        self
    }

    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = metadata;
        self
    }

    pub(crate) fn into_endpoint(self) -> Result<Endpoint<H, M>> {
        Ok(Endpoint {
            constraints: constraint::compile(&self.constraints)?,
            path: self.path,
            method: self.method,
            handler: self.handler,
            metadata: self.metadata,
        })
    }
}

/// A declaration stored at the node its path terminates in.
#[derive(Debug)]
pub struct Endpoint<H, M = ()> {
    path: String,
    method: Method,
    handler: H,
    constraints: Constraints,
    metadata: M,
}

impl<H, M> Endpoint<H, M> {
    /// The pattern the route was declared with.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub(crate) fn accepts(&self, method: &Method, params: &HashMap<String, String>) -> bool {
        &self.method == method && constraint::satisfied(&self.constraints, params)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let route: Route<&str> = Route::new("/users", "list");
        assert_eq!(route.method, Method::GET);
        assert!(route.constraints.is_empty());
        assert_eq!(route.metadata, ());
    }

    #[test]
    fn endpoint_compiles_constraints() {
        let endpoint = Route::<_, Vec<&str>>::new("/users/:id", "show")
            .with_method(Method::DELETE)
            .with_constraint("id", r"^\d+$")
            .with_metadata(vec!["auth"])
            .into_endpoint()
            .unwrap();
        assert_eq!(endpoint.path(), "/users/:id");
        assert_eq!(endpoint.method(), &Method::DELETE);
        assert_eq!(endpoint.metadata(), &vec!["auth"]);
        assert_eq!(endpoint.constraints()["id"].as_str(), r"^\d+$");
    }

    #[test]
    fn endpoint_rejects_bad_constraint() {
        let result = Route::<_, ()>::new("/users/:id", "show")
            .with_constraint("id", "[")
            .into_endpoint();
        assert!(result.is_err());
    }

    #[test]
    fn accepts_checks_method_and_constraints() {
        let endpoint = Route::<_, ()>::new("/users/:id", "show")
            .with_constraint("id", r"^\d+$")
            .into_endpoint()
            .unwrap();
        let mut params = HashMap::new();
        params.insert("id".to_string(), "7".to_string());
        assert!(endpoint.accepts(&Method::GET, &params));
        assert!(!endpoint.accepts(&Method::POST, &params));
        params.insert("id".to_string(), "x".to_string());
        assert!(!endpoint.accepts(&Method::GET, &params));
    }
}
