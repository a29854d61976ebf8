use super::value::Value;
use crate::errors::{Error, Result};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// One of the four named registers
pub enum RegisterName {
    A,
    B,
    C,
    D,
}

impl RegisterName {
    /// All registers, in display order
    pub const ALL: [RegisterName; 4] = [
        RegisterName::A,
        RegisterName::B,
        RegisterName::C,
        RegisterName::D,
    ];

    /// Returns the register selected by a clear command digit, '1' through '4'
    pub fn from_clear_digit(c: char) -> Option<RegisterName> {
        match c {
            '1' => Some(RegisterName::A),
            '2' => Some(RegisterName::B),
            '3' => Some(RegisterName::C),
            '4' => Some(RegisterName::D),
            _ => None,
        }
    }

    /// Returns the uppercase label used in the register display
    pub fn label(&self) -> char {
        match self {
            RegisterName::A => 'A',
            RegisterName::B => 'B',
            RegisterName::C => 'C',
            RegisterName::D => 'D',
        }
    }

    fn index(&self) -> usize {
        match self {
            RegisterName::A => 0,
            RegisterName::B => 1,
            RegisterName::C => 2,
            RegisterName::D => 3,
        }
    }
}

impl TryFrom<char> for RegisterName {
    type Error = Error;

    /// Selects a register from its letter, ignoring case
    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'a' => Ok(RegisterName::A),
            'b' => Ok(RegisterName::B),
            'c' => Ok(RegisterName::C),
            'd' => Ok(RegisterName::D),
            _ => Err(Error::InvalidRegisterSelector(c.to_string())),
        }
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label().to_ascii_lowercase())
    }
}

/// The register store. Every register always holds a value, and all of
/// them start out as the number zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registers {
    values: [Value; 4],
}

impl Registers {
    /// Returns a new store with every register set to zero
    pub fn new() -> Registers {
        Registers::default()
    }

    /// Returns the value held by a register
    pub fn get(&self, name: RegisterName) -> &Value {
        &self.values[name.index()]
    }

    /// Overwrites a register
    pub fn set(&mut self, name: RegisterName, value: Value) {
        self.values[name.index()] = value;
    }

    /// Resets a register to zero, or to the empty string if as_text is true
    pub fn clear(&mut self, name: RegisterName, as_text: bool) {
        let value = if as_text {
            Value::Text(String::new())
        } else {
            Value::Number(0.0)
        };
        self.set(name, value);
    }

    /// Writes the result of an operation, which always lands in register A
    pub fn store_result(&mut self, value: Value) {
        self.set(RegisterName::A, value);
    }

    /// Formats the value of a single register
    pub fn format(&self, name: RegisterName) -> String {
        self.get(name).to_string()
    }

    /// Formats every register on a single tab-separated line
    pub fn format_all(&self) -> String {
        RegisterName::ALL
            .iter()
            .map(|r| format!("{} = {}", r.label(), self.format(*r)))
            .collect::<Vec<_>>()
            .join("\t\t")
    }
}
