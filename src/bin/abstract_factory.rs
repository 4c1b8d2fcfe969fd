use std::io::{self, Write};
use std::process;

use abstract_factory::logging::init_logging;
use abstract_factory::{run_demo, DemoConfig};
use colored::Colorize;

fn main() {
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_demo(&DemoConfig::default(), &mut out)
        .and_then(|()| out.flush().map_err(Into::into));
    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
