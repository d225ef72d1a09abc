//! Search URL construction.
//!
//! One query token (a driver or module name) is percent-encoded and
//! substituted into three fixed templates: kernel code search on the
//! torvalds/linux mirror, the lore.kernel.org LKML archive, and the
//! patchew patch tracker scoped to the linux project.

const GITHUB_CODE_SEARCH: &str =
    "https://github.com/search?q=repo%3Atorvalds%2Flinux+{query}&type=code";
const LKML_SEARCH: &str = "https://lore.kernel.org/lkml/?q={query}";
const PATCHEW_SEARCH: &str = "https://patchew.org/search?q=project%3Alinux+{query}";

/// The three lookup URLs built for one driver or module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrls {
    pub patchwork: String,
    pub github: String,
    pub lkml: String,
}

impl SearchUrls {
    /// Build all three URLs for `name`.
    pub fn for_name(name: &str) -> Self {
        let query = urlencoding::encode(name);
        Self {
            patchwork: PATCHEW_SEARCH.replace("{query}", &query),
            github: GITHUB_CODE_SEARCH.replace("{query}", &query),
            lkml: LKML_SEARCH.replace("{query}", &query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_lands_verbatim_in_all_templates() {
        let urls = SearchUrls::for_name("i915");
        assert_eq!(
            urls.github,
            "https://github.com/search?q=repo%3Atorvalds%2Flinux+i915&type=code"
        );
        assert_eq!(urls.lkml, "https://lore.kernel.org/lkml/?q=i915");
        assert_eq!(
            urls.patchwork,
            "https://patchew.org/search?q=project%3Alinux+i915"
        );
    }

    #[test]
    fn underscore_and_hyphen_survive_encoding() {
        // Both are RFC 3986 unreserved; the query must keep them readable.
        let urls = SearchUrls::for_name("snd_hda_intel");
        assert!(urls.lkml.ends_with("?q=snd_hda_intel"));

        let urls = SearchUrls::for_name("hid-generic");
        assert!(urls.github.contains("+hid-generic&type=code"));
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let urls = SearchUrls::for_name("odd/name+1");
        assert!(urls.lkml.ends_with("?q=odd%2Fname%2B1"));
        assert!(!urls.lkml.contains("odd/name"));
    }
}
