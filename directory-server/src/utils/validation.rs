//! Input validation helpers
//!
//! Centralized limits and helpers for payload validation. Validation errors
//! carry the wire-facing (camelCase) field names so they speak the caller's
//! language.

// ── Limits ──────────────────────────────────────────────────────────

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Validation helpers (repositories) ───────────────────────────────

/// Collect the names of required fields whose submitted value is empty
/// or whitespace-only.
pub fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let missing = missing_fields(&[
            ("fullName", "Ivan Petrov"),
            ("position", ""),
            ("phone", "   "),
        ]);
        assert_eq!(missing, vec!["position", "phone"]);
    }

    #[test]
    fn test_missing_fields_none_missing() {
        assert!(missing_fields(&[("fullName", "x"), ("email", "y")]).is_empty());
    }
}
