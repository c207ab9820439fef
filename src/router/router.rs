use essentials::debug;
use http::Method;

use super::{node::Node, path, route::Endpoint, Params};
use crate::{http::Request, Error, Result};

/// An immutable route table.
///
/// Lookups take `&self` only, so a built router can be shared across threads
/// without locking.
#[derive(Debug)]
pub struct TrieRouter<H, M = ()> {
    root: Node<H, M>,
    len: usize,
}

/// A resolved request: the matched declaration and the captured segments.
#[derive(Debug)]
pub struct Match<'r, H, M = ()> {
    endpoint: &'r Endpoint<H, M>,
    params: Params,
}

impl<H, M> TrieRouter<H, M> {
    pub(crate) fn new(root: Node<H, M>, len: usize) -> Self {
        Self { root, len }
    }

    /// Number of declarations in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves `request` to the first declaration, in insertion order, whose
    /// method and constraints accept it.
    ///
    /// Literal edges are taken before the dynamic edge at every node and the
    /// walk never backtracks, so a literal branch that dead-ends is a miss even
    /// when the dynamic branch would have matched.
    pub fn resolve(&self, request: &Request) -> Result<Match<'_, H, M>> {
        let mut segments = path::segments(&request.path).peekable();
        if segments.peek().is_none() && request.path != "/" {
            debug!("Rejecting empty path {:?}", request.path);
            return Err(Error::bad_path(&request.path));
        }
        let mut params = Params::new();
        let mut node = &self.root;
        for segment in segments {
            node = match node.child(segment, &mut params) {
                Some(child) => child,
                None => {
                    debug!("No edge for segment {:?} in {}", segment, request.path);
                    return Err(Error::not_found(&request.path));
                }
            };
        }
        node.endpoints()
            .iter()
            .find(|endpoint| endpoint.accepts(&request.method, &params))
            .map(|endpoint| Match { endpoint, params })
            .ok_or_else(|| {
                debug!("No route accepts {} {}", request.method, request.path);
                Error::not_found(&request.path)
            })
    }
}

impl<'r, H, M> Match<'r, H, M> {
    pub fn endpoint(&self) -> &'r Endpoint<H, M> {
        self.endpoint
    }

    pub fn handler(&self) -> &'r H {
        self.endpoint.handler()
    }

    pub fn method(&self) -> &'r Method {
        self.endpoint.method()
    }

    pub fn metadata(&self) -> &'r M {
        self.endpoint.metadata()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}
