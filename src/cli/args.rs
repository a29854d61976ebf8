use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the calculator. It takes no arguments of its
/// own; everything happens at the interactive prompt.
pub struct Options {}
