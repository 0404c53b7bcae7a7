use crate::{
    planner::{error::PrepareError, statement::Statement},
    types::row::Row,
};

/// Turns one input line into a `Statement`.
///
/// Grammar:
/// - `insert <stb> <title> <provider> <date> <rev> <time>` (any line that
///   starts with `insert`; the first token is skipped, extra tokens ignored)
/// - `select`
pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Statement, PrepareError> {
        if line.starts_with("insert") {
            return self.parse_insert(line);
        }
        if line == "select" {
            return Ok(Statement::Select);
        }
        Err(PrepareError::UnrecognizedStatement(line.to_string()))
    }

    fn parse_insert(&self, line: &str) -> Result<Statement, PrepareError> {
        let mut tokens = line.split(' ').filter(|token| !token.is_empty()).skip(1);
        let (Some(stb), Some(title), Some(provider), Some(date), Some(rev), Some(time)) = (
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
            tokens.next(),
        ) else {
            return Err(PrepareError::SyntaxError);
        };

        let row = Row::new(stb, title, provider, date, parse_float_prefix(rev), time)?;
        Ok(Statement::Insert(row))
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the longest numeric prefix of `input`, falling back to 0 when there
/// is none. `"8.00"` is 8, `"3abc"` is 3, `"abc"` is 0. A `0x` prefix reads
/// a hexadecimal mantissa with an optional binary exponent, so `"0x10"` is 16
/// and `"0x1.8p1"` is 3.
pub fn parse_float_prefix(input: &str) -> f32 {
    let input = input.trim_start();
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if let Some(value) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .and_then(parse_hex_prefix)
    {
        let value = value as f32;
        return if negative { -value } else { value };
    }

    let mut ends: Vec<usize> = input.char_indices().map(|(i, _)| i).skip(1).collect();
    ends.push(input.len());
    ends.iter()
        .rev()
        .find_map(|&end| input[..end].parse::<f32>().ok())
        .unwrap_or(0.0)
}

// `None` when no hex digit follows the `0x`; the caller then reads the
// leading `0` as a decimal.
fn parse_hex_prefix(body: &str) -> Option<f64> {
    let bytes = body.as_bytes();
    let hex_digit = |i: usize| bytes.get(i).and_then(|&b| (b as char).to_digit(16));

    let mut i = 0;
    let mut digits = 0;
    let mut value = 0.0f64;
    while let Some(d) = hex_digit(i) {
        value = value * 16.0 + d as f64;
        digits += 1;
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let mut scale = 1.0 / 16.0;
        while let Some(d) = hex_digit(i) {
            value += d as f64 * scale;
            scale /= 16.0;
            digits += 1;
            i += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'p' | b'P')) {
        let exponent = &body[i + 1..];
        let (sign, exponent) = match exponent.as_bytes().first() {
            Some(b'-') => (-1, &exponent[1..]),
            Some(b'+') => (1, &exponent[1..]),
            _ => (1, exponent),
        };
        let len = exponent.bytes().take_while(u8::is_ascii_digit).count();
        if let Ok(exp) = exponent[..len].parse::<i32>() {
            value *= 2f64.powi(sign * exp);
        }
    }
    Some(value)
}
