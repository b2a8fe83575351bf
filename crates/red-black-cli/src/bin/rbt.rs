//! `rbt` — interactive red-black tree shell.
//!
//! Usage:
//!   rbt [--preload <KEY>...] [--no-menu] [--validate] [--log-level <LEVEL>]
//!
//! Commands are read from stdin; results go to stdout, logs to stderr.

use clap::Parser;
use red_black_cli::{logging, Options, Session};

fn main() {
    let opts = Options::parse();
    if let Err(e) = logging::init(&opts) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &opts);
    if let Err(e) = session.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
