//! Link validation for the input stage

use crate::utils::VidtikError;

/// Substrings that mark a link as a TikTok URL
pub const RECOGNIZED_HOSTS: [&str; 2] = ["tiktok.com", "vm.tiktok"];

/// Whether `input` (after trimming) looks like a TikTok link
pub fn is_supported_url(input: &str) -> bool {
    let url = input.trim();
    !url.is_empty() && RECOGNIZED_HOSTS.iter().any(|host| url.contains(host))
}

/// Trim and validate a pasted link, returning the cleaned URL
pub fn validate_url(input: &str) -> Result<String, VidtikError> {
    let url = input.trim();
    if is_supported_url(url) {
        Ok(url.to_string())
    } else {
        Err(VidtikError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::INVALID_URL_MESSAGE;
    use proptest::prelude::*;

    #[test]
    fn accepts_tiktok_links_and_trims() {
        assert_eq!(
            validate_url("  https://vm.tiktok.com/xyz \n").unwrap(),
            "https://vm.tiktok.com/xyz"
        );
        assert!(validate_url("https://www.tiktok.com/@user/video/123").is_ok());
    }

    #[test]
    fn rejects_empty_and_foreign_links() {
        for input in ["", "   ", "https://youtube.com/watch?v=1", "tiktok"] {
            let err = validate_url(input).unwrap_err();
            assert!(matches!(err, VidtikError::InvalidUrl(_)), "input {:?}", input);
            assert_eq!(err.to_string(), INVALID_URL_MESSAGE);
        }
    }

    proptest! {
        #[test]
        fn inputs_without_recognized_hosts_are_rejected(s in "[a-z0-9:/._-]{0,40}") {
            prop_assume!(!s.contains("tiktok.com") && !s.contains("vm.tiktok"));
            prop_assert!(validate_url(&s).is_err());
        }

        #[test]
        fn any_text_around_a_host_is_accepted(prefix in "[a-z:/.]{0,10}", suffix in "[a-z0-9/?=]{0,20}") {
            let url = format!("{}tiktok.com{}", prefix, suffix);
            prop_assert!(validate_url(&url).is_ok());
        }
    }
}
