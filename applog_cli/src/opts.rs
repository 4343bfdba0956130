use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "applog", about = "Leveled logger demo application")]
pub struct Opt {
    /// JSON logger config; replaces the environment defaults
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, StructOpt, PartialEq, Eq)]
pub enum Command {
    ///Log startup parameters
    #[structopt(name = "start")]
    Start,
    ///Render a greeting
    #[structopt(name = "greet")]
    Greet {
        #[structopt(long, default_value = "World")]
        name: String,
    },
    ///Drive the counter
    #[structopt(name = "count")]
    Count {
        #[structopt(long, default_value = "3")]
        increments: u32,
        #[structopt(long)]
        reset: bool,
    },
}

impl Opt {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Start)
    }
}
