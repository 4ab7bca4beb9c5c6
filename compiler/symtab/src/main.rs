//! The executable replaying declaration scripts against the symbol table.

use std::process::ExitCode;

use clap::Parser;
use symtab_driver::Arguments;

fn main() -> ExitCode {
    env_logger::init();
    symtab_driver::run(Arguments::parse())
}
