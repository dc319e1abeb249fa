/// Successful outcome of a completion call.
///
/// Failures are carried by the surrounding `Result`, so the three outcomes a chat turn can
/// have (text, no text, error) are distinct at the type level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Generated text, already trimmed and non-empty.
    Generated(String),
    /// The model answered without any usable text.
    Empty,
}

impl Completion {
    pub fn from_text(text: Option<String>) -> Self {
        match text.as_deref().map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Self::Generated(trimmed.to_string()),
            _ => Self::Empty,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_trims() {
        assert_eq!(
            Completion::from_text(Some("  Namaste!\n".to_string())),
            Completion::Generated("Namaste!".to_string())
        );
    }

    #[test]
    fn test_missing_or_blank_text_is_empty() {
        assert_eq!(Completion::from_text(None), Completion::Empty);
        assert_eq!(Completion::from_text(Some(String::new())), Completion::Empty);
        assert_eq!(Completion::from_text(Some(" \n\t".to_string())), Completion::Empty);
        assert_eq!(Completion::Empty.text(), None);
    }
}
