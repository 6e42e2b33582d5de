//! Fuzzy term equivalence
//!
//! Every keyword and skill comparison in the engine goes through the single
//! [`similar`] predicate, so matching behaves identically everywhere.

use strsim::sorensen_dice;

/// Two terms are equivalent when their similarity exceeds this cutoff.
///
/// Tolerates pluralization and minor spelling variance ("react" vs "reacts")
/// while rejecting unrelated terms.
pub const SIMILARITY_THRESHOLD: f64 = 0.70;

/// Whether two terms denote the same concept, by normalized Dice coefficient
pub fn similar(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    // Equality short-circuits so single-character terms don't fall through
    // the bigram window of the Dice metric.
    if a == b {
        return true;
    }
    sorensen_dice(&a, &b) > SIMILARITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_terms_match() {
        assert!(similar("react", "react"));
        assert!(similar("React", "react"));
        assert!(similar("C", "c"));
    }

    #[test]
    fn test_plural_variants_match() {
        assert!(similar("react", "reacts"));
        assert!(similar("microservice", "microservices"));
    }

    #[test]
    fn test_unrelated_terms_do_not_match() {
        assert!(!similar("python", "java"));
        assert!(!similar("docker", "leadership"));
    }

    #[test]
    fn test_empty_terms_never_match() {
        assert!(!similar("", ""));
        assert!(!similar("react", ""));
        assert!(!similar("  ", "react"));
    }
}
