//! Password-reset helpers.
//!
//! After the user follows the reset link, the identity provider redirects back with
//! the credentials in the URL fragment: `#access_token=...&type=recovery`.

use reqwest::Url;

/// Extract `access_token` from a URL fragment, with or without the leading `#`.
pub fn access_token_from_fragment(fragment: &str) -> Option<String> {
    let query = fragment.strip_prefix('#').unwrap_or(fragment);
    // The fragment is form-encoded; borrow Url's decoder for it.
    let url = Url::parse(&format!("http://fragment.invalid/?{query}")).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_provider_redirect() {
        let fragment = "#access_token=eyJhbGciOi.abc&expires_in=3600&type=recovery";
        assert_eq!(
            access_token_from_fragment(fragment).as_deref(),
            Some("eyJhbGciOi.abc")
        );
    }

    #[test]
    fn test_token_is_percent_decoded() {
        assert_eq!(
            access_token_from_fragment("type=recovery&access_token=a%2Bb").as_deref(),
            Some("a+b")
        );
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(access_token_from_fragment(""), None);
        assert_eq!(access_token_from_fragment("#type=recovery"), None);
        assert_eq!(access_token_from_fragment("#access_token="), None);
    }
}
