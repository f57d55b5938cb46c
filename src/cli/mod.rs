use clap::Parser;
use error_stack::Result;

use painel::http::StartServerError;

mod server;

/// Command line options for the dashboard.
#[derive(Debug, Parser)]
#[command(about = "Internal reporting dashboard for the community platform", version, author)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    pub fn run(self) -> Result<(), StartServerError> {
        match self.subcommand {
            Subcommand::Server(args) => self::server::run(args),
        }
    }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Server(self::server::ServerCommand),
}
