use clap::{Subcommand, ValueEnum};

use crate::domain::ReplyStyle;

/// Origins allowed by default to call the API from a browser front end.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 8000)]
        port: u16,

        /// Browser origins allowed by CORS (comma separated, `*` for any)
        #[arg(
            long = "cors-origin",
            env = "CORS_ORIGINS",
            value_delimiter = ',',
            default_values = DEFAULT_CORS_ORIGINS
        )]
        cors_origins: Vec<String>,
    },

    /// Analyze a chat transcript and suggest replies
    Analyze {
        /// JSON file holding an array of messages or a full request (`-` for stdin)
        input: String,

        /// Reply style, overriding the one in the input file
        #[arg(short, long)]
        style: Option<ReplyStyle>,

        /// Extra free-text context about the conversation
        #[arg(short, long)]
        context: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the available reply styles
    Styles {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
