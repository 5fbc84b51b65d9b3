use crate::domain::{ReplyStyle, StyleInfo};

#[derive(Debug, Default, Clone, Copy)]
pub struct ListStylesUseCase;

impl ListStylesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Vec<StyleInfo> {
        ReplyStyle::ALL.iter().map(ReplyStyle::info).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_six_styles_in_order() {
        let styles = ListStylesUseCase::new().execute();
        let values: Vec<&str> = styles.iter().map(|s| s.value.as_str()).collect();

        assert_eq!(
            values,
            vec!["formal", "friendly", "humorous", "caring", "professional", "casual"]
        );
        assert!(styles
            .iter()
            .all(|s| !s.name.is_empty() && !s.description.is_empty()));
    }
}
