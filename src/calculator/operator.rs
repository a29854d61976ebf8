use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A binary operator that combines two registers
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Returns the character the user types to select the operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(Operator::try_from('+'), Ok(Operator::Add));
        assert_eq!(Operator::try_from('-'), Ok(Operator::Sub));
        assert_eq!(Operator::try_from('*'), Ok(Operator::Mul));
        assert_eq!(Operator::try_from('/'), Ok(Operator::Div));
        assert_eq!(Operator::try_from('%'), Err('%'));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::Div), "/");
        assert_eq!(Operator::Mul.to_string(), "*");
    }
}
