/// Canonical form used on both sides of a name comparison.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds_case() {
        assert_eq!(normalize_name("  Jane Smith\t"), "jane smith");
    }

    #[test]
    fn folds_non_ascii() {
        assert_eq!(normalize_name("ÉMILE Zola"), "émile zola");
    }
}
