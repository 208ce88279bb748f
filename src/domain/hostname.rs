//! Hostname extraction from git repository references.
//!
//! Accepts URL syntax (`ssh://git@host:22/org/repo.git`), SCP-like syntax
//! (`git@host:org/repo.git`) and bare `host/path`. The reference is never
//! parsed as a URL; four fixed separators are stripped in order, so every
//! input yields some (possibly empty) string.

/// Result of each stripping stage, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostnameStages<'a> {
    pub without_scheme: &'a str,
    pub without_path: &'a str,
    pub without_user: &'a str,
    pub host: &'a str,
}

impl<'a> HostnameStages<'a> {
    pub fn of(repository: &'a str) -> Self {
        let without_scheme = after_first(repository, "://");
        let without_path = before_first(without_scheme, "/");
        let without_user = after_first(without_path, "@");
        let host = before_first(without_user, ":");

        Self {
            without_scheme,
            without_path,
            without_user,
            host,
        }
    }

    pub fn as_array(&self) -> [&'a str; 4] {
        [
            self.without_scheme,
            self.without_path,
            self.without_user,
            self.host,
        ]
    }
}

/// Bare hostname of `repository`, used as the argument of the keyscan helper.
pub fn extract_hostname(repository: &str) -> &str {
    HostnameStages::of(repository).host
}

fn after_first<'a>(value: &'a str, separator: &str) -> &'a str {
    value
        .split_once(separator)
        .map_or(value, |(_, rest)| rest)
}

fn before_first<'a>(value: &'a str, separator: &str) -> &'a str {
    value
        .split_once(separator)
        .map_or(value, |(head, _)| head)
}
