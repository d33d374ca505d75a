//! Deep links into the repository host.
//!
//! The host is assumed to follow the `/blob/HEAD/<path>#L<start>-L<end>`
//! convention. Nothing checks that it does.

use serde::Serialize;

/// Browsing context a link opens in.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// The opened context gets neither the referrer nor a handle to the opener.
pub const ISOLATED_REL: &str = "noopener noreferrer";

/// Remove one trailing `.git` (case-sensitive).
pub fn strip_git_suffix(repo_url: &str) -> &str {
    repo_url.strip_suffix(".git").unwrap_or(repo_url)
}

/// Build `<repo>/blob/HEAD/<path>#L<start>-L<end>`.
pub fn blob_link(repo_url: &str, path: &str, start_line: i64, end_line: i64) -> String {
    format!(
        "{}/blob/HEAD/{}#L{}-L{}",
        strip_git_suffix(repo_url),
        path,
        start_line,
        end_line
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl DeepLink {
    pub fn new(repo_url: &str, path: &str, start_line: i64, end_line: i64) -> Self {
        Self {
            href: blob_link(repo_url, path, start_line, end_line),
            target: NEW_CONTEXT_TARGET,
            rel: ISOLATED_REL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_link() {
        assert_eq!(
            blob_link("https://github.com/acme/widget.git", "pkg/foo.go", 10, 25),
            "https://github.com/acme/widget/blob/HEAD/pkg/foo.go#L10-L25"
        );
    }

    #[test]
    fn test_strip_is_noop_without_suffix() {
        assert_eq!(strip_git_suffix("https://github.com/o/r"), "https://github.com/o/r");
        assert_eq!(
            blob_link("https://github.com/o/r.git", "a.go", 1, 2),
            blob_link("https://github.com/o/r", "a.go", 1, 2)
        );
    }

    #[test]
    fn test_strip_only_at_end_and_once() {
        assert_eq!(strip_git_suffix("https://git.example/o/r.git.git"), "https://git.example/o/r.git");
        assert_eq!(strip_git_suffix("https://host/.git/r"), "https://host/.git/r");
        assert_eq!(strip_git_suffix("https://github.com/o/r.GIT"), "https://github.com/o/r.GIT");
    }

    #[test]
    fn test_deep_link_isolation_attributes() {
        let link = DeepLink::new("https://github.com/o/r", "main.go", 3, 9);
        assert_eq!(link.target, "_blank");
        assert_eq!(link.rel, "noopener noreferrer");
        assert_eq!(link.href, "https://github.com/o/r/blob/HEAD/main.go#L3-L9");
    }
}
