#![forbid(unsafe_code)]
use applog_cli::opts::Opt;
use applog_core::Logger;
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = applog_cli::run(&opt) {
        applog_core::logger().error(&err.to_string(), None);
        std::process::exit(1);
    }
}
