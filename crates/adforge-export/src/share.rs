//! Social share deep links.
//!
//! Pure string construction: the generated text and destination link are
//! percent-encoded into the standard share targets. No network call is
//! made here.

use serde::{Deserialize, Serialize};

/// The three share targets the tool offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub x: String,
    pub linkedin: String,
}

/// Build share deep links for a piece of generated copy.
pub fn share_links(text: &str, link: &str) -> ShareLinks {
    let quote = urlencoding::encode(text);
    let url = urlencoding::encode(link);

    ShareLinks {
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            url, quote
        ),
        x: format!("https://twitter.com/intent/tweet?text={}", quote),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            url
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_percent_encoded() {
        let links = share_links("Buy now & save 50%!", "https://example.com/x");
        assert!(links.x.contains("Buy%20now%20%26%20save%2050%25%21"));
        assert!(!links.x.contains(' '));
    }

    #[test]
    fn test_link_lands_in_facebook_and_linkedin() {
        let links = share_links("copy", "https://example.com/offer?id=1");
        let encoded = "https%3A%2F%2Fexample.com%2Foffer%3Fid%3D1";
        assert!(links.facebook.contains(&format!("u={}", encoded)));
        assert!(links.linkedin.ends_with(&format!("url={}", encoded)));
    }

    #[test]
    fn test_empty_text_still_builds_links() {
        let links = share_links("", "");
        assert!(links.x.ends_with("text="));
        assert!(links.facebook.contains("quote="));
    }
}
