//! A build-once, query-many route table.
//!
//! Route declarations are folded into a segment trie once, at startup. The
//! finished [`TrieRouter`] is read-only and resolves `(path, method)` pairs to
//! the matching declaration plus the values captured by its dynamic segments.
//!
//! # Example usage
//!
//! ```
//! use http::Method;
//! use trie_router::{Request, Route, TrieRouterBuilder};
//!
//! let router = TrieRouterBuilder::new()
//!     .add_route(Route::new("/users", "users.list"))
//!     .add_route(Route::new("/users", "users.create").with_method(Method::POST))
//!     .add_route(
//!         Route::new("/users/:id", "users.show")
//!             .with_constraint("id", r"^\d+$")
//!             .with_metadata(vec!["auth"]),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let matched = router.resolve(&Request::get("/users/42")).unwrap();
//! assert_eq!(*matched.handler(), "users.show");
//! assert_eq!(matched.param("id"), Some("42"));
//! assert_eq!(matched.metadata(), &vec!["auth"]);
//!
//! let err = router.resolve(&Request::get("/users/abc")).unwrap_err();
//! assert_eq!(err.to_string(), "No such path -- /users/abc");
//! ```
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod http;
pub mod router;

pub use error::{Error, Result};
pub use self::http::Request;
pub use router::{Endpoint, Match, Params, Route, TrieRouter, TrieRouterBuilder};
