use essentials::debug;

use super::{constraint, node::Node, path, route::Route, TrieRouter};
use crate::Result;

/// Collects route declarations and folds them into a [`TrieRouter`].
#[derive(Debug)]
pub struct TrieRouterBuilder<H, M = ()> {
    routes: Vec<Route<H, M>>,
}

impl<H, M> Default for TrieRouterBuilder<H, M> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H, M> TrieRouterBuilder<H, M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_route(mut self, route: Route<H, M>) -> Self {
        self.routes.push(route);
        self
    }

    /// Builds the table in declaration order.
    /// Fails on the first constraint that does not compile.
    pub fn build(self) -> Result<TrieRouter<H, M>> {
        let any = constraint::any()?;
        let mut root = Node::default();
        let len = self.routes.len();
        for route in self.routes {
            debug!("Registering route {} {}", route.method, route.path);
            let pattern = route.path.clone();
            let endpoint = route.into_endpoint()?;
            root.insert(&path::parse(&pattern), endpoint, &any);
        }
        debug!("Route table built with {} routes", len);
        Ok(TrieRouter::new(root, len))
    }
}

impl<H, M> From<Vec<Route<H, M>>> for TrieRouterBuilder<H, M> {
    fn from(routes: Vec<Route<H, M>>) -> Self {
        Self { routes }
    }
}

impl<H, M> FromIterator<Route<H, M>> for TrieRouterBuilder<H, M> {
    fn from_iter<T: IntoIterator<Item = Route<H, M>>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
