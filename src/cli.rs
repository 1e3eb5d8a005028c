use clap::{Parser, Subcommand};

/// Default port for the relay server
pub const DEFAULT_PORT: u16 = 9123;

#[derive(Parser, Debug)]
#[command(name = "clipbridge")]
#[command(about = "HTTP relay that pushes text into the system clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the relay server only
    Serve {
        /// Port to bind on 127.0.0.1
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the clipboard poller only
    Poll {
        /// Endpoint to poll for clipboard text
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Send text to the relay (reads stdin when TEXT is omitted)
    Copy {
        text: Option<String>,

        /// Endpoint to post the text to
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}
