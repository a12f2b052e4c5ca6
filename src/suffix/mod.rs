//! Static public-suffix reference data.
//!
//! The TLD catalog is a compiled-in asset (`data/tlds.txt`, one uppercase
//! label per line, IANA root zone snapshot). The registrable-SLD catalog is a
//! small fixed list of second-level labels that cannot stand alone under
//! certain ccTLDs (e.g. "com" in "example.com.br").

use std::collections::HashSet;

/// Second-level labels that require an explicit subdomain to form a complete
/// registrable name under certain ccTLDs.
const REGISTRABLE_SLDS: [&str; 9] = ["AC", "CO", "COM", "EDU", "GOV", "ID", "ME", "NET", "ORG"];

/// Immutable lookup table of valid TLDs and registrable SLDs.
///
/// Built once at startup and shared read-only for the process lifetime; safe
/// for concurrent readers.
pub struct SuffixTable {
    valid_tlds: HashSet<&'static str>,
    registrable_slds: HashSet<&'static str>,
}

impl SuffixTable {
    /// Builds the table from the compiled-in catalog data.
    pub fn new() -> Self {
        let valid_tlds: HashSet<&'static str> = include_str!("../../data/tlds.txt")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let registrable_slds: HashSet<&'static str> = REGISTRABLE_SLDS.iter().copied().collect();

        SuffixTable {
            valid_tlds,
            registrable_slds,
        }
    }

    /// Checks whether `candidate` is a recognized top-level domain.
    ///
    /// Case-insensitive; the catalog stores uppercase labels.
    pub fn is_tld(&self, candidate: &str) -> bool {
        self.valid_tlds
            .contains(candidate.to_ascii_uppercase().as_str())
    }

    /// Checks whether `candidate` is a registrable second-level domain label.
    ///
    /// Case-insensitive. A hostname whose second-to-last label matches needs
    /// an explicit subdomain to count as a complete registrable name.
    pub fn is_registrable_sld(&self, candidate: &str) -> bool {
        self.registrable_slds
            .contains(candidate.to_ascii_uppercase().as_str())
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
