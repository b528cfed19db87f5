use envbadge_core::{EnvironmentEntry, MatchStrategy};
use envbadge_ports::IdentifierMatcher;
use url::Url;

/// Matches the host of a page URL against hostname identifiers
///
/// Accepts full URLs (`https://dr.mypurecloud.com/directory/#/`) as well as
/// bare hosts. Hosts compare whole and case-insensitively, so a parent
/// domain never claims its subdomains.
pub struct HostMatcher;

impl HostMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Host component of a URL or bare `host[:port][/path]` signal
    pub fn host_of(signal: &str) -> Option<String> {
        let trimmed = signal.trim();
        if trimmed.is_empty() {
            return None;
        }
        let host = |url: Url| url.host_str().map(str::to_ascii_lowercase);
        Url::parse(trimmed)
            .ok()
            .and_then(host)
            .or_else(|| Url::parse(&format!("https://{}", trimmed)).ok().and_then(host))
    }
}

impl Default for HostMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierMatcher for HostMatcher {
    fn find<'a>(
        &self,
        signal: &str,
        entries: &'a [EnvironmentEntry],
    ) -> Option<&'a EnvironmentEntry> {
        let Some(host) = Self::host_of(signal) else {
            log::trace!("No host in signal {:?}", signal);
            return None;
        };
        entries
            .iter()
            .find(|entry| entry.identifier.trim().eq_ignore_ascii_case(&host))
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Host
    }

    fn name(&self) -> &str {
        "Host"
    }
}
