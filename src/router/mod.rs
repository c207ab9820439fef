use std::collections::HashMap;

pub use builder::TrieRouterBuilder;
pub use constraint::{Constraint, Constraints};
pub use route::{Endpoint, Route};
pub use router::{Match, TrieRouter};

pub mod constraint;
pub mod path;

mod builder;
mod node;
mod route;
#[allow(clippy::module_inception)]
mod router;

/// Values captured by dynamic segments, keyed by segment name.
pub type Params = HashMap<String, String>;
