use crate::calculator::Operator;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    DivideByZero,
    EmptyCommand,
    InvalidRegisterSelector(String),
    InvalidSplit,
    NegativeRepeat,
    RepeatTooLong(usize),
    TypeMismatch {
        op: Operator,
        lhs: &'static str,
        rhs: &'static str,
    },
    UnknownCommand(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DivideByZero => write!(f, "cannot divide by zero"),
            Error::EmptyCommand => write!(f, "empty command"),
            Error::InvalidRegisterSelector(s) => {
                write!(f, "'{}' is not a register, expected one of a, b, c or d", s)
            }
            Error::InvalidSplit => {
                write!(f, "cannot divide string by zero or negative integer")
            }
            Error::NegativeRepeat => write!(f, "cannot multiply string by a negative number"),
            Error::RepeatTooLong(n) => {
                write!(f, "repeated string would be longer than {} bytes", n)
            }
            Error::TypeMismatch { op, lhs, rhs } => {
                write!(f, "cannot perform '{}' on types {} and {}", op, lhs, rhs)
            }
            Error::UnknownCommand(s) => write!(f, "'{}' is an unknown command", s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::DivideByZero.to_string(), "cannot divide by zero");
        assert_eq!(Error::EmptyCommand.to_string(), "empty command");
        assert_eq!(
            Error::RepeatTooLong(16).to_string(),
            "repeated string would be longer than 16 bytes"
        );
        assert_eq!(
            Error::TypeMismatch {
                op: Operator::Add,
                lhs: "number",
                rhs: "string"
            }
            .to_string(),
            "cannot perform '+' on types number and string"
        );
        assert_eq!(
            Error::UnknownCommand(String::from("x")).to_string(),
            "'x' is an unknown command"
        );
        assert_eq!(
            Error::InvalidRegisterSelector(String::from("z")).to_string(),
            "'z' is not a register, expected one of a, b, c or d"
        );
    }
}
