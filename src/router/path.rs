/// Prefix marking a dynamic segment in a route pattern, as in `/users/:id`.
pub const DYNAMIC_PREFIX: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Name bound to the segment, without the prefix.
    Dynamic(&'a str),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(segment: &'a str) -> Self {
        match segment.strip_prefix(DYNAMIC_PREFIX) {
            Some(name) => Segment::Dynamic(name),
            None => Segment::Literal(segment),
        }
    }
}

/// Splits a path on `/`, dropping empty pieces.
/// Leading, trailing and repeated slashes collapse, so `/` yields nothing.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Parses a route pattern into literal and dynamic segments.
pub fn parse(pattern: &str) -> Vec<Segment<'_>> {
    segments(pattern).map(Segment::from).collect()
}
