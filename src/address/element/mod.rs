use std::fmt::{self, Display};

/// One element of a runtime sequence or tuple address.
/// The token is kept exactly as given, the variant only records its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Number(String),
    Text(String),
}

/// The type of an [`Element`]. All elements of one container must share a kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Number,
    Text,
}

// Optional sign followed by decimal digits, of any width
fn is_number(token: &str) -> bool {
    let digits = token
        .strip_prefix(['+', '-'])
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Element {
    /// A token made of decimal digits (with an optional sign) becomes an [`Element::Number`],
    /// anything else is [`Element::Text`]. Surrounding whitespace is ignored for classification only.
    pub fn parse(token: &str) -> Element {
        if is_number(token.trim()) {
            Element::Number(token.to_owned())
        } else {
            Element::Text(token.to_owned())
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Number(_) => ElementKind::Number,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Element::Number(t) | Element::Text(t) => t,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Number => write!(f, "a number"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}
