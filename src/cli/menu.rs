use crate::calculator::Registers;
use std::io::{Result, Write};

pub const MENU_WIDTH: usize = 60;
pub const TITLE: &str = "ClaudiaCalc";

/// The commands listed by the menu
const COMMANDS: [(&str, &str); 9] = [
    ("+", "Add"),
    ("-", "Subtract"),
    ("*", "Multiply"),
    ("/", "Divide"),
    ("a-d", "Enter a number or string for A,B,C,D"),
    ("1-4", "Clear register A,B,C,D"),
    ("m", "Prints the menu"),
    ("p", "Prints the registers"),
    ("q", "Quits the app"),
];

fn print_line(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "-".repeat(MENU_WIDTH))
}

/// Outputs the current contents of every register
pub fn print_registers(out: &mut impl Write, registers: &Registers) -> Result<()> {
    writeln!(out, "\t\t{}", registers.format_all())
}

/// Outputs the menu, including the current register contents
pub fn print_menu(out: &mut impl Write, registers: &Registers) -> Result<()> {
    writeln!(out, "{:^w$}", TITLE, w = MENU_WIDTH)?;
    print_line(out)?;
    print_registers(out, registers)?;
    print_line(out)?;

    for (key, description) in COMMANDS {
        writeln!(out, "{}\t{}", key, description)?;
    }

    print_line(out)
}
