//! Literal path matching helpers.
//!
//! Route paths and navigation targets are compared after normalisation:
//! leading and trailing slashes are dropped and repeated separators are
//! collapsed, so `"/customers/"`, `"customers"` and `"//customers"` all name
//! the same route. The empty string names the fallback route.
//!
//! Only literal segments are matched. `:param` and `*` segments are detected
//! here so the route table can reject them at build time.

/// Normalise a path for exact comparison.
///
/// # Examples
///
/// ```
/// use gpui_lazy_router::matching::normalize_path;
///
/// assert_eq!(normalize_path("/customers/"), "customers");
/// assert_eq!(normalize_path("/"), "");
/// assert_eq!(normalize_path("a//b"), "a/b");
/// ```
pub fn normalize_path(path: &str) -> String {
    split_path(path).join("/")
}

/// Split a path into segments, filtering empty segments
///
/// ```ignore
/// assert_eq!(split_path("/orders/open"), vec!["orders", "open"]);
/// assert_eq!(split_path("/"), Vec::<String>::new());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Check if a route segment is a parameter
pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':')
}

/// Check if a route segment is a wildcard
pub fn is_wildcard_segment(segment: &str) -> bool {
    segment.starts_with('*')
}

/// Return the first segment of `path` that is not a plain literal.
pub fn first_pattern_segment(path: &str) -> Option<String> {
    split_path(path)
        .into_iter()
        .find(|seg| is_param_segment(seg) || is_wildcard_segment(seg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/customers"), vec!["customers"]);
        assert_eq!(split_path("/orders/open/"), vec!["orders", "open"]);
        assert_eq!(split_path("/"), Vec::<String>::new());
        assert_eq!(split_path(""), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("orders"), "orders");
        assert_eq!(normalize_path("/orders/"), "orders");
        assert_eq!(normalize_path("//orders//open"), "orders/open");
    }

    #[test]
    fn test_pattern_segments() {
        assert!(is_param_segment(":id"));
        assert!(!is_param_segment("id"));
        assert!(is_wildcard_segment("*"));
        assert!(is_wildcard_segment("*rest"));
        assert!(!is_wildcard_segment("orders"));
    }

    #[test]
    fn test_first_pattern_segment() {
        assert_eq!(first_pattern_segment("customers"), None);
        assert_eq!(first_pattern_segment("/customers/:id"), Some(":id".to_string()));
        assert_eq!(first_pattern_segment("/files/*"), Some("*".to_string()));
    }
}
