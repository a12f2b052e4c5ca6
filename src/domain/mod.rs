//! Hostname parsing and validation.
//!
//! This module splits raw hostnames into their trailing
//! subdomain/domain/TLD labels and classifies them against the
//! [`SuffixTable`]:
//!
//! - `DomainParts` - the syntactic split of a hostname
//! - `DomainValidator::validate()` - classification and canonicalization
//!
//! The canonical unit of dedup is `domain.tld`; only hostnames whose domain
//! label is a registrable SLD (e.g. "example.com.br") keep their subdomain in
//! the canonical name. Validation is pure: the result depends only on the
//! input string and the static table.

use std::sync::Arc;

use regex::Regex;

use crate::config::HOSTNAME_CHARSET;
use crate::suffix::SuffixTable;

/// The trailing labels of a hostname, assigned right to left.
///
/// Derived from at most the last three dot-separated labels; deeper
/// subdomains are discarded. Label case is preserved from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Third-to-last label, or empty when the hostname has only two labels
    pub subdomain: String,
    /// Second-to-last label
    pub domain: String,
    /// Last label
    pub tld: String,
}

/// Result of validating a single hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Canonical normalized name (best-effort even when invalid, for
    /// diagnostics and triage)
    pub name: String,
    /// Whether the name should be emitted
    pub valid: bool,
}

/// Stateless hostname validator backed by the shared suffix table.
///
/// Construct once and reuse; `validate` is deterministic and safe to call
/// from multiple threads.
pub struct DomainValidator {
    table: Arc<SuffixTable>,
    charset: Option<Regex>,
}

impl DomainValidator {
    /// Creates a validator.
    ///
    /// When `validate_special_chars` is true, hostnames containing
    /// characters outside `[A-Za-z0-9._-]` fail parsing.
    pub fn new(table: Arc<SuffixTable>, validate_special_chars: bool) -> Self {
        let charset = validate_special_chars
            .then(|| Regex::new(HOSTNAME_CHARSET).expect("hostname charset pattern is valid"));

        DomainValidator { table, charset }
    }

    /// Splits a trimmed hostname into its trailing labels.
    ///
    /// This is a syntactic split only; it does not check the labels against
    /// the suffix table. Returns `None` when fewer than two labels are
    /// present or when strict mode rejects the character set.
    fn extract_parts(&self, hostname: &str) -> Option<DomainParts> {
        if let Some(charset) = &self.charset {
            if !charset.is_match(hostname) {
                return None;
            }
        }

        // Only the trailing subdomain/domain/tld triple matters
        let labels: Vec<&str> = hostname.split('.').collect();
        let tail = &labels[labels.len().saturating_sub(3)..];

        match *tail {
            [subdomain, domain, tld] => Some(DomainParts {
                subdomain: subdomain.to_string(),
                domain: domain.to_string(),
                tld: tld.to_string(),
            }),
            [domain, tld] => Some(DomainParts {
                subdomain: String::new(),
                domain: domain.to_string(),
                tld: tld.to_string(),
            }),
            _ => None,
        }
    }

    /// Validates a single hostname and returns its canonical name.
    ///
    /// Decision points, first match wins:
    ///
    /// 1. Parse failure: the trimmed hostname is reported as-is, invalid.
    /// 2. Unknown TLD: reported at `domain.tld` granularity, invalid.
    /// 3. Registrable SLD as domain label: valid only with an explicit
    ///    subdomain, and the subdomain is kept in the canonical name.
    /// 4. Otherwise: valid, canonical name `domain.tld` (subdomain dropped).
    pub fn validate(&self, hostname: &str) -> Validation {
        let hostname = hostname.trim();

        let Some(parts) = self.extract_parts(hostname) else {
            return Validation {
                name: hostname.to_string(),
                valid: false,
            };
        };

        if !self.table.is_tld(&parts.tld) {
            return Validation {
                name: format!("{}.{}", parts.domain, parts.tld),
                valid: false,
            };
        }

        if self.table.is_registrable_sld(&parts.domain) {
            if parts.subdomain.is_empty() {
                // e.g. "com.br" alone is not a registrable name
                return Validation {
                    name: format!("{}.{}", parts.domain, parts.tld),
                    valid: false,
                };
            }
            return Validation {
                name: format!("{}.{}.{}", parts.subdomain, parts.domain, parts.tld),
                valid: true,
            };
        }

        Validation {
            name: format!("{}.{}", parts.domain, parts.tld),
            valid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
