//! Policy governing what a verdict's `source` field may contain.
//!
//! The assessor never synthesizes a URL itself. Whatever the oracle returns
//! is passed through literally under [`SourcePolicy::PassThrough`]; under
//! [`SourcePolicy::AllowDomains`] any URL outside the allow-list is replaced
//! with a reasoning-basis description.

use serde::{Deserialize, Serialize};
use url::Url;

/// Replacement text for a source whose citation is not on the allow-list.
pub const OMITTED_CITATION_SOURCE: &str = "Unverified citation omitted";

/// Punctuation that commonly wraps a URL in prose
const URL_DELIMITERS: &[char] = &['(', ')', '<', '>', '"', '\'', ',', ';', '.'];

/// Source handling policy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePolicy {
    /// Keep the oracle's source text unchanged
    #[default]
    PassThrough,
    /// Only URLs on these domains (or their subdomains) may appear
    AllowDomains(Vec<String>),
}

impl SourcePolicy {
    /// Build a policy from a configured domain list (empty = pass-through)
    pub fn from_allowed_domains(domains: Vec<String>) -> Self {
        let domains: Vec<String> = domains
            .into_iter()
            .map(|d| d.trim().trim_start_matches("www.").to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        if domains.is_empty() {
            SourcePolicy::PassThrough
        } else {
            SourcePolicy::AllowDomains(domains)
        }
    }

    /// Apply the policy to a source string
    pub fn apply(&self, source: String) -> String {
        match self {
            SourcePolicy::PassThrough => source,
            SourcePolicy::AllowDomains(allowed) => {
                let disallowed = url_hosts(&source)
                    .iter()
                    .any(|host| !is_allowed(host, allowed));
                if disallowed {
                    OMITTED_CITATION_SOURCE.to_string()
                } else {
                    source
                }
            }
        }
    }
}

/// Whether the text contains anything that reads as a URL or bare web host
pub fn contains_url(text: &str) -> bool {
    !url_hosts(text).is_empty()
}

/// Top-level domains that mark a bare `name.tld` token as a citation even
/// without a path
const COMMON_TLDS: &[&str] = &[
    "com", "org", "net", "gov", "edu", "mil", "int", "io", "co", "info", "news", "uk", "us",
    "ca", "au", "de", "fr", "eu", "jp", "in",
];

/// Hosts of every URL-looking token in `text`
///
/// Recognized forms: `http(s)://...`, `www....`, and bare hosts such as
/// `example.com` or `example.xyz/some/path`.
fn url_hosts(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(URL_DELIMITERS))
        .filter_map(url_host)
        .collect()
}

fn url_host(token: &str) -> Option<String> {
    let lower = token.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return host_of(token);
    }
    // Other schemes and email addresses are not web citations
    if lower.contains("://") || lower.contains('@') {
        return None;
    }

    let host = host_of(&format!("http://{}", token))?;
    let (_, tld) = host.rsplit_once('.')?;
    let domain_shaped = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let cited = lower.starts_with("www.") || lower.contains('/') || COMMON_TLDS.contains(&tld);
    (domain_shaped && cited).then_some(host)
}

fn host_of(candidate: &str) -> Option<String> {
    Url::parse(candidate)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

fn is_allowed(host: &str, allowed: &[String]) -> bool {
    let host = host.trim_start_matches("www.");
    allowed
        .iter()
        .any(|domain| host == domain || host.ends_with(&format!(".{}", domain)))
}
