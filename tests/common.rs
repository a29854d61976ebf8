use claudia_calc::calculator::Registers;
use claudia_calc::cli::session::Session;
use std::io::Cursor;

/// Runs a session over the given input lines, returning the final register
/// contents and everything written to the output
pub fn run_session(lines: &[&str]) -> (Registers, String) {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut session = Session::new(Cursor::new(input.into_bytes()), Vec::new());
    session.run().expect("session failed");

    let output = String::from_utf8(session.output().clone()).expect("output is not UTF-8");
    (session.registers().clone(), output)
}
