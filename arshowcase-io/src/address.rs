//! Syntactic validation of typed model addresses
//!
//! Only the shape of the address is checked. Whether anything answers at
//! the address is discovered later by the viewer.

use arshowcase_core::{Error, Result};

/// Schemes that require an authority (`//host`)
const HIERARCHICAL_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp"];

/// A syntactically valid absolute address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    raw: String,
    scheme_len: usize,
}

impl Address {
    /// Validate `input` as an absolute address
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(Error::InvalidAddress("empty address".to_string()));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Error::InvalidAddress(format!("'{}' contains whitespace", raw)));
        }

        let scheme_len = raw
            .find(':')
            .ok_or_else(|| Error::InvalidAddress(format!("'{}' has no scheme", raw)))?;
        let scheme = &raw[..scheme_len];
        if !is_valid_scheme(scheme) {
            return Err(Error::InvalidAddress(format!("'{}' has an invalid scheme", raw)));
        }

        let rest = &raw[scheme_len + 1..];
        let scheme_lower = scheme.to_ascii_lowercase();
        if HIERARCHICAL_SCHEMES.contains(&scheme_lower.as_str()) {
            let authority = rest
                .strip_prefix("//")
                .ok_or_else(|| Error::InvalidAddress(format!("'{}' is missing '//'", raw)))?;
            let host = authority
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default();
            let host = host.rsplit('@').next().unwrap_or_default();
            if host.is_empty() || host.starts_with(':') {
                return Err(Error::InvalidAddress(format!("'{}' has no host", raw)));
            }
        } else if rest.is_empty() {
            return Err(Error::InvalidAddress(format!("'{}' is empty after the scheme", raw)));
        }

        Ok(Self {
            raw: raw.to_string(),
            scheme_len,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme in lower case
    pub fn scheme(&self) -> String {
        self.raw[..self.scheme_len].to_ascii_lowercase()
    }

    /// Last non-empty path segment, without query or fragment
    pub fn file_name(&self) -> Option<&str> {
        let without_suffix = self.raw.split(['?', '#']).next()?;
        let path = &without_suffix[self.scheme_len + 1..];
        let path = match path.strip_prefix("//") {
            Some(authority_and_path) => authority_and_path.find('/').map(|i| &authority_and_path[i..])?,
            None => path,
        };
        path.rsplit('/').find(|segment| !segment.is_empty())
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
