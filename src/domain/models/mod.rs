mod analysis;
mod chat_message;
mod reply_style;

pub use analysis::*;
pub use chat_message::*;
pub use reply_style::*;
