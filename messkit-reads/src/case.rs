use std::fmt;

/// A way of writing the letters of a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `sa001-flu-wphl`
    Lowercase,
    /// `SA001-FLU-WPHL`
    Caps,
    /// `Sa001-Flu-Wphl`: first letter of each `-`/`_` segment upper-cased.
    CamelCase,
    /// `sa-001-flu-wphl`: lowercase, with a dash at each letter-to-digit step.
    DashCase,
}

impl CaseStyle {
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseStyle::Lowercase => text.to_lowercase(),
            CaseStyle::Caps => text.to_uppercase(),
            CaseStyle::CamelCase => camel_case(text),
            CaseStyle::DashCase => dash_case(text),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Lowercase => "lowercase",
            CaseStyle::Caps => "caps",
            CaseStyle::CamelCase => "camelcase",
            CaseStyle::DashCase => "dashcase",
        };
        write!(f, "{name}")
    }
}

fn camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if c == '-' || c == '_' {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

fn dash_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    let mut prev_was_letter = false;
    for c in text.chars() {
        if c.is_numeric() && prev_was_letter {
            result.push('-');
            prev_was_letter = false;
        } else {
            prev_was_letter = c.is_alphabetic();
        }
        result.extend(c.to_lowercase());
    }
    result
}
