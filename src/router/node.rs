use std::collections::HashMap;

use regex::Regex;

use super::{constraint::Constraint, path::Segment, route::Endpoint, Params};

/// A trie node keyed by path segments.
///
/// Each node has at most one dynamic edge. Every declaration with a dynamic
/// segment at this depth shares it and appends its own entry to
/// `dynamic_constraints`, in insertion order.
#[derive(Debug)]
pub(crate) struct Node<H, M> {
    literals: HashMap<String, Node<H, M>>,
    dynamic: Option<Box<Node<H, M>>>,
    dynamic_constraints: Vec<Constraint>,
    endpoints: Vec<Endpoint<H, M>>,
}

impl<H, M> Default for Node<H, M> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            dynamic: None,
            dynamic_constraints: Vec::new(),
            endpoints: Vec::new(),
        }
    }
}

impl<H, M> Node<H, M> {
    /// Walks `segments` from this node, creating missing nodes, and appends
    /// `endpoint` to the node the walk ends in.
    pub(crate) fn insert(
        &mut self,
        segments: &[Segment<'_>],
        endpoint: Endpoint<H, M>,
        any: &Regex,
    ) {
        let mut node = self;
        for segment in segments {
            node = match *segment {
                Segment::Literal(literal) => {
                    node.literals.entry(literal.to_string()).or_default()
                }
                Segment::Dynamic(name) => {
                    let regex = endpoint
                        .constraints()
                        .get(name)
                        .unwrap_or(any)
                        .clone();
                    node.dynamic_constraints.push(Constraint::new(name, regex));
                    &mut **node.dynamic.get_or_insert_with(Box::default)
                }
            };
        }
        node.endpoints.push(endpoint);
    }

    /// Follows the edge for one request segment.
    ///
    /// A literal edge always wins over the dynamic one. On the dynamic edge the
    /// first constraint matching the segment binds its name in `params`.
    pub(crate) fn child(&self, segment: &str, params: &mut Params) -> Option<&Node<H, M>> {
        if let Some(child) = self.literals.get(segment) {
            return Some(child);
        }
        let child = self.dynamic.as_deref()?;
        let constraint = self
            .dynamic_constraints
            .iter()
            .find(|constraint| constraint.matches(segment))?;
        params.insert(constraint.name.clone(), segment.to_string());
        Some(child)
    }

    pub(crate) fn endpoints(&self) -> &[Endpoint<H, M>] {
        &self.endpoints
    }
}
