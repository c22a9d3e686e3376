/// Case conventions for turning Rust variant names into declared names, and
/// variant names into accessor names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameRule {
    /// `int_value` -> `IntValue`
    PascalCase,
    /// `IntValue` -> `intValue`
    CamelCase,
    /// `IntValue` -> `int_value`
    SnakeCase,
    /// `IntValue` -> `INT_VALUE`
    ScreamingSnakeCase,
    /// `IntValue` -> `int-value`
    KebabCase,
    /// `IntValue` -> `INT-VALUE`
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parses the value of a `rename_all = ".."` attribute
    pub fn parse(rule: &str) -> Option<Self> {
        Some(match rule {
            "PascalCase" => RenameRule::PascalCase,
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebabCase,
            _ => return None,
        })
    }

    /// Applies the rule to an identifier in any of the supported cases
    pub fn apply(self, input: &str) -> String {
        let words = split_into_words(input);
        match self {
            RenameRule::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            RenameRule::CamelCase => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            RenameRule::SnakeCase => join(&words, "_", str::to_lowercase),
            RenameRule::ScreamingSnakeCase => join(&words, "_", str::to_uppercase),
            RenameRule::KebabCase => join(&words, "-", str::to_lowercase),
            RenameRule::ScreamingKebabCase => join(&words, "-", str::to_uppercase),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join(words: &[String], sep: &str, case: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|w| case(w))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Splits on `_`, `-`, whitespace and case boundaries. An uppercase run ends
/// where the next word starts: `HTTPServer` is `HTTP` + `Server`.
fn split_into_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() {
            if let Some(prev) = current.chars().last() {
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    words.push(core::mem::take(&mut current));
                }
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
