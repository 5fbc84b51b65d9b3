mod analyze_chat;
mod list_styles;

pub use analyze_chat::*;
pub use list_styles::*;
