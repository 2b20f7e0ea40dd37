//! Placeholder substitution for model templates.
//!
//! ## Placeholder Syntax
//!
//! | Form       | Meaning                                   |
//! |------------|-------------------------------------------|
//! | `$name`    | identifier `[_A-Za-z][_A-Za-z0-9]*`, greedy |
//! | `${name}`  | same identifier, explicitly delimited     |
//! | `$$`       | a literal `$`                             |
//!
//! Known keys are replaced; unknown identifiers are copied through untouched.
//! Any other `$` is a malformed placeholder and fails the whole render.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::{Captures, Regex};

use super::DomainError;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .expect("Invalid placeholder regex")
});

/// Values substituted into a model template.
///
/// A **Value Object** built fresh for every write. It always holds exactly
/// four keys:
///
/// | Key     | Example        | Source            |
/// |---------|----------------|-------------------|
/// | `mod`   | "WidgetModel"  | Model name as given |
/// | `modlc` | "widgetmodel"  | Lowercased         |
/// | `date`  | "2026-10-19"   | Local calendar date |
/// | `year`  | "2026"         | Year of `date`     |
#[derive(Debug, Clone)]
pub struct SubstitutionContext {
    variables: HashMap<&'static str, String>,
}

impl SubstitutionContext {
    pub const KEYS: [&'static str; 4] = ["mod", "modlc", "date", "year"];

    /// Create a context for `model_name` dated `date`.
    pub fn new(model_name: &str, date: NaiveDate) -> Self {
        let mut variables = HashMap::with_capacity(Self::KEYS.len());
        variables.insert("mod", model_name.to_string());
        variables.insert("modlc", model_name.to_lowercase());
        variables.insert("date", date.format("%Y-%m-%d").to_string());
        variables.insert("year", date.year().to_string());

        Self { variables }
    }

    /// Create a context dated with today's local date.
    pub fn today(model_name: &str) -> Self {
        Self::new(model_name, Local::now().date_naive())
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every placeholder in `template`.
    ///
    /// # Edge Cases
    ///
    /// - `$modlc` is the `modlc` key, never `$mod` followed by `lc`
    /// - `$Mod`, `$other` → left as written (keys are case-sensitive)
    /// - `$`, `$1`, `${mod` → `MalformedPlaceholder`
    ///
    /// # Errors
    /// `MalformedPlaceholder` with the 1-based line and column of the first
    /// offending `$`.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            output.push_str(&template[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                output.push('$');
                continue;
            }
            if caps.name("invalid").is_some() {
                return Err(malformed_at(template, whole.start()));
            }

            match self.lookup(&caps) {
                Some(value) => output.push_str(value),
                None => output.push_str(whole.as_str()),
            }
        }

        output.push_str(&template[last..]);
        Ok(output)
    }

    fn lookup(&self, caps: &Captures<'_>) -> Option<&str> {
        let key = caps.name("named").or_else(|| caps.name("braced"))?;
        self.get(key.as_str())
    }
}

fn malformed_at(template: &str, offset: usize) -> DomainError {
    let before = &template[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;

    DomainError::MalformedPlaceholder { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SubstitutionContext {
        SubstitutionContext::new("Widget", NaiveDate::from_ymd_opt(2026, 3, 7).unwrap())
    }

    #[test]
    fn holds_exactly_four_keys() {
        let ctx = ctx();
        assert_eq!(ctx.get("mod"), Some("Widget"));
        assert_eq!(ctx.get("modlc"), Some("widget"));
        assert_eq!(ctx.get("date"), Some("2026-03-07"));
        assert_eq!(ctx.get("year"), Some("2026"));
        assert_eq!(ctx.get("MOD"), None);
    }

    #[test]
    fn substitutes_all_known_keys() {
        assert_eq!(
            ctx().render("$mod/$modlc/$year").unwrap(),
            "Widget/widget/2026"
        );
        assert_eq!(ctx().render("created $date").unwrap(), "created 2026-03-07");
    }

    #[test]
    fn braced_form_delimits_identifier() {
        assert_eq!(ctx().render("${mod}Schema").unwrap(), "WidgetSchema");
        assert_eq!(ctx().render("${modlc}_table").unwrap(), "widget_table");
    }

    #[test]
    fn identifier_match_is_greedy() {
        // `$modx` is an unknown key, not `$mod` + "x".
        assert_eq!(ctx().render("$modx").unwrap(), "$modx");
        assert_eq!(ctx().render("$modlc").unwrap(), "widget");
    }

    #[test]
    fn unknown_placeholders_are_left_unchanged() {
        assert_eq!(
            ctx().render("$Mod ${author} $mod").unwrap(),
            "$Mod ${author} Widget"
        );
    }

    #[test]
    fn double_dollar_is_literal() {
        assert_eq!(ctx().render("cost: $$5 for $mod").unwrap(), "cost: $5 for Widget");
        assert_eq!(ctx().render("$$mod").unwrap(), "$mod");
    }

    #[test]
    fn text_without_placeholders_is_copied() {
        let body = "class Model:\n    pass\n";
        assert_eq!(ctx().render(body).unwrap(), body);
    }

    #[test]
    fn trailing_dollar_is_malformed() {
        assert_eq!(
            ctx().render("abc $").unwrap_err(),
            DomainError::MalformedPlaceholder { line: 1, column: 5 }
        );
    }

    #[test]
    fn malformed_position_is_reported_per_line() {
        let err = ctx().render("ok $mod\nprice $5\n").unwrap_err();
        assert_eq!(err, DomainError::MalformedPlaceholder { line: 2, column: 7 });
    }

    #[test]
    fn unclosed_brace_is_malformed() {
        assert!(matches!(
            ctx().render("${mod").unwrap_err(),
            DomainError::MalformedPlaceholder { line: 1, column: 1 }
        ));
        assert!(ctx().render("${1}").is_err());
    }

    #[test]
    fn lowercase_applies_only_to_modlc() {
        let ctx = SubstitutionContext::new("HTTPServer", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(ctx.render("$mod $modlc").unwrap(), "HTTPServer httpserver");
    }

    #[test]
    fn today_uses_current_year() {
        let year = Local::now().year().to_string();
        assert_eq!(SubstitutionContext::today("X").get("year"), Some(year.as_str()));
    }
}
