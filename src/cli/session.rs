//! The interactive command loop. A session reads one line at a time and is
//! either idle, waiting for a command, or waiting for the value of a register
//! that was just selected.

use super::menu;
use crate::calculator::{engine, Operator, RegisterName, Registers, Value};
use crate::errors::Error;
use log::{debug, error};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq, Clone, Copy)]
/// What the session expects from the next input line
pub enum State {
    Idle,
    AwaitingValue(RegisterName),
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// A calculator session over an input and an output stream
pub struct Session<R, W> {
    input: R,
    output: W,
    registers: Registers,
    state: State,
    pending: VecDeque<char>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Returns a new session with every register set to zero
    pub fn new(input: R, output: W) -> Session<R, W> {
        Session {
            input,
            output,
            registers: Registers::new(),
            state: State::Idle,
            pending: VecDeque::new(),
        }
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the session until the user quits or the input runs out
    pub fn run(&mut self) -> io::Result<()> {
        menu::print_menu(&mut self.output, &self.registers)?;

        loop {
            let Some(line) = self.prompt("Enter a command or value: ")? else {
                break;
            };

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match self.state {
            State::AwaitingValue(r) => {
                let value = Value::from_input(line);
                debug!("register {} set to {:?}", r, value);

                self.registers.set(r, value);
                self.state = State::Idle;
                menu::print_registers(&mut self.output, &self.registers)?;

                Ok(Flow::Continue)
            }
            State::Idle => self.execute(line),
        }
    }

    /// Dispatches a command on its first character. Only a line holding
    /// exactly "q" ends the session.
    fn execute(&mut self, cmd: &str) -> io::Result<Flow> {
        if cmd == "q" {
            return Ok(Flow::Quit);
        }

        let Some(c) = cmd.chars().next() else {
            error!("{}", Error::EmptyCommand);
            return Ok(Flow::Continue);
        };
        let c = c.to_ascii_lowercase();

        if let Ok(r) = RegisterName::try_from(c) {
            write!(self.output, "Enter value for register {}: ", r)?;
            self.output.flush()?;
            self.state = State::AwaitingValue(r);
            return Ok(Flow::Continue);
        }

        if let Ok(op) = Operator::try_from(c) {
            return self.arithmetic(op);
        }

        if let Some(r) = RegisterName::from_clear_digit(c) {
            return self.clear(r);
        }

        match c {
            'm' => menu::print_menu(&mut self.output, &self.registers)?,
            'p' => menu::print_registers(&mut self.output, &self.registers)?,
            'q' => (),
            _ => error!("{}", Error::UnknownCommand(cmd.to_string())),
        }

        Ok(Flow::Continue)
    }

    /// Asks for two registers, combines them and stores the result in A
    fn arithmetic(&mut self, op: Operator) -> io::Result<Flow> {
        let Some(lhs) = self.read_token("Enter a lhs register: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(rhs) = self.read_token("Enter a rhs register: ")? else {
            return Ok(Flow::Quit);
        };
        self.pending.clear();

        let operands = RegisterName::try_from(lhs)
            .and_then(|l| RegisterName::try_from(rhs).map(|r| (l, r)));
        let (lhs, rhs) = match operands {
            Ok(operands) => operands,
            Err(e) => {
                error!("{}", e);
                return Ok(Flow::Continue);
            }
        };

        match engine::apply(op, lhs, rhs, &self.registers) {
            Ok(value) => {
                debug!("{} {} {} = {:?}", lhs, op, rhs, value);
                self.registers.store_result(value);
                menu::print_registers(&mut self.output, &self.registers)?;
            }
            Err(e) => error!("{} {} {} is invalid: {}", lhs, op, rhs, e),
        }

        Ok(Flow::Continue)
    }

    /// Asks whether to clear a register to a number or a string
    fn clear(&mut self, r: RegisterName) -> io::Result<Flow> {
        let question = format!("Clear register {} to [0] number or [s] empty string? ", r);
        let Some(answer) = self.read_token(&question)? else {
            return Ok(Flow::Quit);
        };
        self.pending.clear();

        let as_text = matches!(answer, 's' | 'S');
        self.registers.clear(r, as_text);
        menu::print_registers(&mut self.output, &self.registers)?;

        Ok(Flow::Continue)
    }

    /// Writes a prompt and returns the next input line without its line
    /// terminator, or None at the end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(line.as_str());
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);

        Ok(Some(trimmed.to_string()))
    }

    /// Writes a prompt and returns the next non-blank character, reading
    /// further lines as needed. Whatever follows it on the same line stays
    /// pending for the next call.
    fn read_token(&mut self, text: &str) -> io::Result<Option<char>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        loop {
            while let Some(c) = self.pending.pop_front() {
                if !c.is_whitespace() {
                    return Ok(Some(c));
                }
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.chars());
        }
    }
}
