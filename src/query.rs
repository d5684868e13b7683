//! Query-string parameter rewriting
//!
//! Used by the navigation-URL accessors to set the `page` parameter on the
//! current request URL, but generic over any key.

/// Set a query-string parameter on a URI, returning the rewritten URI.
///
/// The key match is case-insensitive and applies to the first matching
/// parameter; its value is replaced in place and the parameter is rewritten
/// with the caller's key spelling. When the key is absent the parameter is
/// appended, with `?` or `&` depending on whether the URI already carries a
/// query string. All other parameters are preserved untouched, in order.
///
/// # Examples
///
/// ```
/// use page_envelope::query::set_query_param;
///
/// assert_eq!(
///     set_query_param("/visitors?per_page=10&page=2", "page", "3"),
///     "/visitors?per_page=10&page=3"
/// );
/// assert_eq!(
///     set_query_param("/visitors?per_page=10", "page", "1"),
///     "/visitors?per_page=10&page=1"
/// );
/// assert_eq!(set_query_param("/visitors", "page", "1"), "/visitors?page=1");
/// ```
pub fn set_query_param(uri: &str, key: &str, value: &str) -> String {
    let Some((path, query)) = uri.split_once('?') else {
        return format!("{}?{}={}", uri, key, value);
    };

    let mut replaced = false;
    let mut pairs: Vec<String> = Vec::new();
    for pair in query.split('&') {
        let name = pair.split('=').next().unwrap_or("");
        if !replaced && name.eq_ignore_ascii_case(key) {
            pairs.push(format!("{}={}", key, value));
            replaced = true;
        } else {
            pairs.push(pair.to_string());
        }
    }
    if !replaced {
        pairs.push(format!("{}={}", key, value));
    }

    format!("{}?{}", path, pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_existing_param() {
        assert_eq!(
            set_query_param("/visitors?per_page=10&page=2", "page", "3"),
            "/visitors?per_page=10&page=3"
        );
    }

    #[test]
    fn test_append_to_existing_query() {
        assert_eq!(
            set_query_param("/visitors?per_page=10", "page", "1"),
            "/visitors?per_page=10&page=1"
        );
    }

    #[test]
    fn test_append_without_query() {
        assert_eq!(set_query_param("/visitors", "page", "1"), "/visitors?page=1");
    }

    #[test]
    fn test_case_insensitive_key_match() {
        assert_eq!(
            set_query_param("/visitors?PAGE=2", "page", "3"),
            "/visitors?page=3"
        );
    }

    #[test]
    fn test_key_must_match_whole_parameter_name() {
        // "page" must not match inside "per_page"
        assert_eq!(
            set_query_param("/visitors?per_page=10", "page", "2"),
            "/visitors?per_page=10&page=2"
        );
    }

    #[test]
    fn test_other_params_preserved_in_order() {
        assert_eq!(
            set_query_param("/visitors?a=1&page=2&b=3", "page", "5"),
            "/visitors?a=1&page=5&b=3"
        );
    }

    #[test]
    fn test_valueless_param_replaced() {
        assert_eq!(
            set_query_param("/visitors?page", "page", "2"),
            "/visitors?page=2"
        );
    }
}
