use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 256;
const FORBIDDEN_CHARS: [char; 9] = ['/', '{', '}', '"', '>', '<', '\\', '(', ')'];

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubscriberName(String);

impl SubscriberName {
    pub fn parse(name: String) -> Result<SubscriberName, String> {
        let is_empty_or_whitespace = name.trim().is_empty();
        let is_too_long = name.graphemes(true).count() > MAX_GRAPHEMES;
        let contains_forbidden_chars = name.chars().any(|char| FORBIDDEN_CHARS.contains(&char));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_chars {
            return Err(format!("{} is not a valid subscriber name", name));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
