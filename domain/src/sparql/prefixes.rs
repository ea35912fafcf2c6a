//! Namespaces used by the SmartHealth dataset.
//!
//! These IRIs must stay byte-for-byte identical to the ones loaded in Fuseki.

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const SH: &str = "http://www.smarthealth-tracker.com/ontologie#";
pub const EX: &str = "http://example.org/";

pub const PREFIX_RDF: &str = "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>";
pub const PREFIX_SH: &str = "PREFIX sh: <http://www.smarthealth-tracker.com/ontologie#>";
pub const PREFIX_EX: &str = "PREFIX ex: <http://example.org/>";

/// Service classes offered by the platform, as `sh:` local names.
pub const SERVICE_CLASSES: [&str; 3] = ["Consultation", "Analyse", "Telemedecine"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lines_match_namespaces() {
        assert!(PREFIX_RDF.contains(RDF));
        assert!(PREFIX_SH.contains(SH));
        assert!(PREFIX_EX.contains(EX));
    }
}
