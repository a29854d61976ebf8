use std::fmt;

/// The contents of a register: either a single-precision number or a
/// string. There is no unset state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f32),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl fmt::Display for Value {
    /// Formats numbers with exactly two decimal places and text as-is
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:.2}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Value {
    /// Builds a value from a line of user input. Input that starts with a
    /// number becomes that number, ignoring whatever follows it; anything
    /// else is kept verbatim as text.
    pub fn from_input(input: &str) -> Value {
        match leading_number(input) {
            Some(n) => Value::Number(n),
            None => Value::Text(input.to_string()),
        }
    }

    /// Returns the name of the value's type as shown in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "string",
        }
    }
}

/// Parses the longest number at the start of the input, after any leading
/// whitespace: an optional sign, then either "inf", "infinity" or "nan" in
/// any case, or decimal digits with an optional fraction and exponent
fn leading_number(input: &str) -> Option<f32> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = s[end..].to_ascii_lowercase();
    for word in ["infinity", "inf", "nan"] {
        if rest.starts_with(word) {
            return s[..end + word.len()].parse().ok();
        }
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // The exponent only counts if it has at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Value::default(), Value::Number(0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::Number(3.0)), "3.00");
        assert_eq!(format!("{}", Value::Number(-2.5)), "-2.50");
        assert_eq!(format!("{}", Value::Number(1234.5678)), "1234.57");
        assert_eq!(format!("{}", Value::Text(String::from("hello"))), "hello");
        assert_eq!(format!("{}", Value::Text(String::from("\"q\""))), "\"q\"");
        assert_eq!(format!("{}", Value::Text(String::new())), "");
    }

    #[test]
    fn test_from_input() {
        assert_eq!(Value::from_input("10"), Value::Number(10.0));
        assert_eq!(Value::from_input("-4.25"), Value::Number(-4.25));
        assert_eq!(Value::from_input(" 7 "), Value::Number(7.0));
        assert_eq!(Value::from_input("1e3"), Value::Number(1000.0));
        assert_eq!(
            Value::from_input("hello world"),
            Value::Text(String::from("hello world"))
        );
        assert_eq!(Value::from_input(""), Value::Text(String::new()));
        assert_eq!(Value::from_input("   "), Value::Text(String::from("   ")));
        assert_eq!(Value::from_input("abc12"), Value::Text(String::from("abc12")));
        assert_eq!(Value::from_input("-"), Value::Text(String::from("-")));
        assert_eq!(Value::from_input("."), Value::Text(String::from(".")));
        assert_eq!(Value::from_input("e5"), Value::Text(String::from("e5")));
    }

    #[test]
    fn test_from_input_leading_number() {
        assert_eq!(Value::from_input("12abc"), Value::Number(12.0));
        assert_eq!(Value::from_input("3abc"), Value::Number(3.0));
        assert_eq!(Value::from_input("  -2.5 apples"), Value::Number(-2.5));
        assert_eq!(Value::from_input("+.5"), Value::Number(0.5));
        assert_eq!(Value::from_input("7."), Value::Number(7.0));
        assert_eq!(Value::from_input("1.5.3"), Value::Number(1.5));
        assert_eq!(Value::from_input("2e3x"), Value::Number(2000.0));
        assert_eq!(Value::from_input("2E-1"), Value::Number(0.2));
        assert_eq!(Value::from_input("4e"), Value::Number(4.0));
        assert_eq!(Value::from_input("4e+"), Value::Number(4.0));
        assert_eq!(Value::from_input("Infinity"), Value::Number(f32::INFINITY));
        assert_eq!(Value::from_input("-infinite"), Value::Number(f32::NEG_INFINITY));
        assert!(matches!(Value::from_input("NaN!"), Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Number(1.0).type_name(), "number");
        assert_eq!(Value::Text(String::from("x")).type_name(), "string");
    }
}
