//! Strict-mode line filter.
//!
//! A line is matched on its left-trimmed text. `ignore` prefixes are checked
//! first and always keep the line; `remove` prefixes drop it. Matching is
//! case-sensitive.

use super::rules::RuleSet;

/// Returns true if `line` must be dropped in strict mode.
///
/// # Example
/// ```ignore
/// let rules = RuleSet::new(vec![], vec!["import renpy".into()], vec![]);
/// assert!(is_forbidden("    import renpy.exports as renpy\n", &rules));
/// ```
pub fn is_forbidden(line: &str, rules: &RuleSet) -> bool {
    let trimmed = line.trim_start();

    if rules.ignore.iter().any(|prefix| trimmed.starts_with(prefix.as_str())) {
        return false;
    }

    rules.remove.iter().any(|prefix| trimmed.starts_with(prefix.as_str()))
}

/// Keep/drop decision used by the transpiler.
///
/// Non-strict filters keep every line without consulting the rules.
#[derive(Debug, Clone, Copy)]
pub struct LineFilter<'a> {
    rules: &'a RuleSet,
    strict: bool,
}

impl<'a> LineFilter<'a> {
    pub fn new(rules: &'a RuleSet, strict: bool) -> Self {
        Self { rules, strict }
    }

    /// Filter that keeps everything.
    pub fn keep_all(rules: &'a RuleSet) -> Self {
        Self::new(rules, false)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn keeps(&self, line: &str) -> bool {
        !(self.strict && is_forbidden(line, self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renpy_rules() -> RuleSet {
        RuleSet::new(
            vec![],
            vec!["import renpy.exports as renpy".to_string()],
            vec![],
        )
    }

    #[test]
    fn test_allowed_line() {
        assert!(!is_forbidden("Hello world", &renpy_rules()));
    }

    #[test]
    fn test_forbidden_line() {
        assert!(is_forbidden("import renpy.exports as renpy", &renpy_rules()));
    }

    #[test]
    fn test_forbidden_after_leading_whitespace() {
        assert!(is_forbidden(
            "                   import renpy.exports as renpy",
            &renpy_rules()
        ));
        assert!(is_forbidden("\timport renpy.exports as renpy\n", &renpy_rules()));
    }

    #[test]
    fn test_prefix_is_anchored_to_start() {
        assert!(!is_forbidden("x = 1  # import renpy.exports as renpy", &renpy_rules()));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_forbidden("IMPORT RENPY.EXPORTS AS RENPY", &renpy_rules()));
    }

    #[test]
    fn test_ignore_wins_over_remove() {
        let rules = RuleSet::new(
            vec!["import renpy.store".to_string()],
            vec!["import renpy".to_string()],
            vec![],
        );

        assert!(!is_forbidden("import renpy.store as store", &rules));
        assert!(is_forbidden("import renpy.exports", &rules));
    }

    #[test]
    fn test_ignore_and_remove_identical() {
        let prefixes = ["", "import", "from x import y", " "];
        for prefix in prefixes {
            let rules = RuleSet::new(
                vec![prefix.to_string()],
                vec![prefix.to_string()],
                vec![],
            );
            for line in ["import os", "from x import y", "", "   pass"] {
                assert!(!is_forbidden(line, &rules), "prefix {:?} line {:?}", prefix, line);
            }
        }
    }

    #[test]
    fn test_empty_rules_never_forbid() {
        let rules = RuleSet::default();
        for line in ["", "\n", "import renpy", "   anything"] {
            assert!(!is_forbidden(line, &rules));
        }
    }

    #[test]
    fn test_line_filter_non_strict_keeps_everything() {
        let rules = renpy_rules();
        let filter = LineFilter::keep_all(&rules);

        assert!(!filter.is_strict());
        assert!(filter.keeps("import renpy.exports as renpy\n"));
    }

    #[test]
    fn test_line_filter_strict() {
        let rules = renpy_rules();
        let filter = LineFilter::new(&rules, true);

        assert!(!filter.keeps("import renpy.exports as renpy\n"));
        assert!(filter.keeps("print('hi')\n"));
    }
}
