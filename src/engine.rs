use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::digits::Digits;

/// Matches expressions of the form "operand1 operator operand2", with
/// optional whitespace around each component. Anchored so trailing garbage
/// is rejected.
static EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*([+-])\s*(\d+)\s*$").unwrap());

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("invalid expression format, expected format: 'operand1 + or - operand2'")]
    InvalidFormat,

    /// An operator other than `+`/`-` reached dispatch. The expression
    /// grammar only captures those two, so this signals a logic defect
    /// rather than bad user input.
    #[error("unexpected operator: {0}")]
    UnexpectedOperator(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    fn from_token(token: &str) -> Result<Self> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            other => Err(EvalError::UnexpectedOperator(other.to_owned())),
        }
    }
}

/// Evaluates an expression of two non-negative integers joined by `+` or
/// `-`, entirely digit-wise, and returns the exact result as a string.
/// Operands may be arbitrarily long; no fixed-width integer type is
/// involved anywhere in the computation.
pub fn evaluate(expression: &str) -> Result<String> {
    let captures = EXPRESSION
        .captures(expression.trim())
        .ok_or(EvalError::InvalidFormat)?;

    let operand1 = &captures[1];
    let operator = Operator::from_token(&captures[2])?;
    let operand2 = &captures[3];
    debug!("parsed expression: {} {:?} {}", operand1, operator, operand2);

    match operator {
        Operator::Add => Ok(add(operand1, operand2)),
        Operator::Subtract => Ok(subtract(operand1, operand2)),
    }
}

/// Adds two decimal literals digit-by-digit, propagating the carry.
fn add(operand1: &str, operand2: &str) -> String {
    let mut digits1 = Digits::from_literal(operand1);
    let mut digits2 = Digits::from_literal(operand2);
    let mut result = Digits::new();

    let mut carry = 0;
    while !digits1.is_empty() || !digits2.is_empty() || carry != 0 {
        let sum = digits1.pop_or_zero() + digits2.pop_or_zero() + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }

    // The loop itself never manufactures a leading zero, but the grammar
    // admits operands like "007", so normalize anyway.
    result.strip_leading_zeros();
    result.into_literal()
}

/// Subtracts operand2 from operand1 digit-by-digit, propagating the borrow.
/// The magnitudes are subtracted larger-minus-smaller and the sign applied
/// afterwards; an exactly-zero result never carries a sign.
fn subtract(operand1: &str, operand2: &str) -> String {
    let (minuend, subtrahend, negative) = if is_smaller(operand1, operand2) {
        debug!("minuend smaller than subtrahend, swapping operands");
        (operand2, operand1, true)
    } else {
        (operand1, operand2, false)
    };

    let mut digits1 = Digits::from_literal(minuend);
    let mut digits2 = Digits::from_literal(subtrahend);
    let mut result = Digits::new();

    let mut borrow = 0i8;
    while let Some(digit1) = digits1.pop() {
        let mut diff = digit1 as i8 - digits2.pop_or_zero() as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }

    result.strip_leading_zeros();
    let negative = negative && !result.is_zero();
    let magnitude = result.into_literal();
    if negative {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Numeric-magnitude comparison of two unsigned decimal literals.
///
/// Leading zeros are ignored before comparing, so "007" orders below "6"'s
/// successor as expected. On equal trimmed lengths, lexicographic order
/// equals numeric order because every character is a digit.
fn is_smaller(operand1: &str, operand2: &str) -> bool {
    let operand1 = operand1.trim_start_matches('0');
    let operand2 = operand2.trim_start_matches('0');
    if operand1.len() != operand2.len() {
        return operand1.len() < operand2.len();
    }
    operand1 < operand2
}
