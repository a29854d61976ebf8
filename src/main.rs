use clap::Parser;
use claudia_calc::cli::args::Options;
use claudia_calc::cli::logging;
use claudia_calc::cli::session::Session;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    Options::parse();
    logging::init();

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());
    session.run()?;

    Ok(())
}
