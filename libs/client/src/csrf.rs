/// Header the backend reads the CSRF token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Value of cookie `name` in a `Cookie` header string, percent-decoded.
///
/// Returns an empty string when the cookie is missing.
pub fn csrf_token(cookies: &str, name: &str) -> String {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_cookie_is_empty() {
        assert_eq!(csrf_token("", "csrftoken"), "");
        assert_eq!(csrf_token("sessionid=xyz", "csrftoken"), "");
    }

    #[test]
    fn test_decodes_value() {
        assert_eq!(csrf_token("csrftoken=abc%3Ddef", "csrftoken"), "abc=def");
    }

    #[test]
    fn test_picks_named_cookie() {
        // Arrange
        let cookies = "sessionid=s1; csrfToken=upper; csrftoken=lower";

        // Act + Assert
        assert_eq!(csrf_token(cookies, "csrftoken"), "lower");
        assert_eq!(csrf_token(cookies, "csrfToken"), "upper");
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(csrf_token("csrftoken=a=b", "csrftoken"), "a=b");
    }

    #[test]
    fn test_name_prefix_does_not_match() {
        assert_eq!(csrf_token("xcsrftoken=nope", "csrftoken"), "");
    }
}
