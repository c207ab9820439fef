use http::Method;

/// The part of an incoming request the router dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
}

impl Request {
    pub fn new<S: Into<String>>(path: S, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    pub fn get<S: Into<String>>(path: S) -> Self {
        Self::new(path, Method::GET)
    }
}

impl From<&str> for Request {
    fn from(path: &str) -> Self {
        Self::get(path)
    }
}

impl From<(Method, &str)> for Request {
    fn from((method, path): (Method, &str)) -> Self {
        Self::new(path, method)
    }
}
