use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AnalyzeController, StylesController};

pub struct Router<'a> {
    analyze_controller: AnalyzeController<'a>,
    styles_controller: StylesController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analyze_controller: AnalyzeController::new(container),
            styles_controller: StylesController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Analyze {
                input,
                style,
                context,
                format,
            } => {
                self.analyze_controller
                    .analyze(input, style, context, format)
                    .await
            }
            Commands::Styles { format } => self.styles_controller.styles(format),
            Commands::Serve { .. } => {
                anyhow::bail!("the serve command is handled by the HTTP server, not the router")
            }
        }
    }
}
