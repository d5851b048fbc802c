use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 128;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlanName(String);

impl PlanName {
    pub fn parse(name: String) -> Result<PlanName, String> {
        let is_empty_or_whitespace = name.trim().is_empty();
        let is_too_long = name.graphemes(true).count() > MAX_GRAPHEMES;

        if is_empty_or_whitespace || is_too_long {
            return Err(format!("{} is not a valid plan name", name));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for PlanName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
