//! Model name → output file name.

use modelgen_core::application::ports::NameFormatter;

/// Formats `WidgetModel` as `widget_model.<extension>`.
///
/// Any character that is not alphanumeric separates words, so the result
/// never contains a path separator. A name without a single alphanumeric
/// character yields `""`, which the writer treats as "skip".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeCaseFormatter {
    extension: String,
}

impl SnakeCaseFormatter {
    pub const DEFAULT_EXTENSION: &'static str = "py";

    /// Create a formatter producing `<snake_name>.<extension>`.
    ///
    /// A leading `.` on `extension` is ignored; an empty extension produces
    /// bare names.
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for SnakeCaseFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXTENSION)
    }
}

impl NameFormatter for SnakeCaseFormatter {
    fn format_name(&self, model_name: &str) -> String {
        let stem = split_words(model_name).join("_");
        if stem.is_empty() {
            return String::new();
        }
        if self.extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }
}

/// Split a string into lowercase words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Separators:** anything not alphanumeric → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
///    (detected by `Upper Upper Lower` pattern)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // "myApp" → "my" + "App"
            if (c.is_lowercase() || c.is_numeric()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
