pub mod analyze_controller;
pub mod styles_controller;

pub use analyze_controller::AnalyzeController;
pub use styles_controller::StylesController;
