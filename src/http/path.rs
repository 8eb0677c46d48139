//! Path normalization.

/// Normalize a request target or route path.
///
/// Drops the query string and fragment, collapses repeated separators, drops
/// `.` segments and the trailing separator. The result always starts with `/`
/// and only the root itself ends with one.
///
/// ```
/// use microroute::http::normalize;
///
/// assert_eq!(normalize("/users//42/?page=2"), "/users/42");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// The parent of a normalized path, or `None` for the root.
pub(crate) fn parent(path: &str) -> Option<&str> {
    match path.rfind('/') {
        _ if path == "/" => None,
        Some(0) => Some("/"),
        Some(index) => Some(&path[..index]),
        None => None,
    }
}
