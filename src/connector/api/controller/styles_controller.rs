use anyhow::Result;

use crate::cli::OutputFormat;
use crate::StyleInfo;

use super::super::Container;

pub struct StylesController<'a> {
    container: &'a Container,
}

impl<'a> StylesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn styles(&self, format: OutputFormat) -> Result<String> {
        let styles = self.container.list_styles_use_case().execute();
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&styles)?,
            OutputFormat::Text => self.format_styles(&styles),
        })
    }

    fn format_styles(&self, styles: &[StyleInfo]) -> String {
        let mut output = "Reply styles:\n\n".to_string();
        for style in styles {
            output.push_str(&format!(
                "  {:<13} {} - {}\n",
                style.value.as_str(),
                style.name,
                style.description
            ));
        }
        output
    }
}
