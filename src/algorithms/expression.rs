use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::data_structure::stack::{ArrayStack, Stack};
use crate::error::{DsaError, Result};

lazy_static! {
    static ref BRACKET_PAIRS: HashMap<char, char> =
        HashMap::from([(')', '('), (']', '['), ('}', '{')]);
    static ref INTEGER_TOKEN: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
}

fn invalid(message: impl Into<String>) -> DsaError {
    DsaError::InvalidExpression(message.into())
}

/// Checks that `()`, `[]` and `{}` nest correctly. Other characters are
/// ignored.
pub fn check_balanced(expression: &str) -> Result<()> {
    let mut stack: ArrayStack<char> = ArrayStack::new();
    for (position, c) in expression.chars().enumerate() {
        if BRACKET_PAIRS.values().any(|&open| open == c) {
            stack.push(c)?;
        } else if let Some(&expected) = BRACKET_PAIRS.get(&c) {
            let top = stack
                .pop()
                .map_err(|_| invalid(format!("extra closing bracket '{}' at {}", c, position)))?;
            if top != expected {
                return Err(invalid(format!(
                    "mismatched brackets: found '{}' at {} but '{}' is open",
                    c, position, top
                )));
            }
        }
    }

    if !stack.is_empty() {
        let open: String = stack.iter().collect();
        return Err(invalid(format!("unclosed brackets: {}", open)));
    }
    Ok(())
}

pub fn is_balanced(expression: &str) -> bool {
    check_balanced(expression).is_ok()
}

fn precedence(operator: char) -> Option<u8> {
    match operator {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        '^' => Some(3),
        _ => None,
    }
}

/// Shunting-yard conversion over single-character operands. All operators
/// are treated as left-associative.
pub fn infix_to_postfix(infix: &str) -> Result<String> {
    let mut postfix = String::new();
    let mut stack: ArrayStack<char> = ArrayStack::new();

    for c in infix.chars().filter(|c| !c.is_whitespace()) {
        if c.is_alphanumeric() {
            postfix.push(c);
        } else if c == '(' {
            stack.push(c)?;
        } else if c == ')' {
            loop {
                match stack.pop() {
                    Ok('(') => break,
                    Ok(operator) => postfix.push(operator),
                    Err(_) => return Err(invalid("unmatched ')'")),
                }
            }
        } else if let Some(current) = precedence(c) {
            while let Ok(&top) = stack.peek() {
                match precedence(top) {
                    Some(top_precedence) if current <= top_precedence => {
                        postfix.push(stack.pop()?);
                    }
                    _ => break,
                }
            }
            stack.push(c)?;
        } else {
            return Err(invalid(format!("unexpected character '{}'", c)));
        }
        trace!("{}: stack [{}] output {}", c, stack.iter().collect::<String>(), postfix);
    }

    while let Ok(operator) = stack.pop() {
        if operator == '(' {
            return Err(invalid("unmatched '('"));
        }
        postfix.push(operator);
    }
    Ok(postfix)
}

fn apply(operator: &str, left: i32, right: i32) -> Result<i32> {
    let result = match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        "/" => {
            if right == 0 {
                return Err(invalid("division by zero"));
            }
            left.checked_div(right)
        }
        _ => return Err(invalid(format!("unknown operator '{}'", operator))),
    };
    result.ok_or_else(|| invalid(format!("overflow in {} {} {}", left, operator, right)))
}

fn reduce(stack: &mut ArrayStack<i32>, operator: &str) -> Result<()> {
    if stack.size() < 2 {
        return Err(invalid(format!("not enough operands for '{}'", operator)));
    }
    let right = stack.pop()?;
    let left = stack.pop()?;
    stack.push(apply(operator, left, right)?)
}

fn finish(mut stack: ArrayStack<i32>) -> Result<i32> {
    if stack.size() != 1 {
        return Err(invalid(format!("{} values left on the stack", stack.size())));
    }
    stack.pop()
}

/// Evaluates a postfix expression of single-digit operands.
pub fn evaluate_postfix(postfix: &str) -> Result<i32> {
    let mut stack: ArrayStack<i32> = ArrayStack::new();
    for c in postfix.chars().filter(|c| !c.is_whitespace()) {
        match c.to_digit(10) {
            Some(digit) => stack.push(digit as i32)?,
            None => reduce(&mut stack, c.encode_utf8(&mut [0; 4]))?,
        }
        trace!("{}: stack {}", c, stack.display());
    }
    finish(stack)
}

/// Evaluates Reverse Polish Notation tokens (signed integers and
/// `+ - * /`). Division truncates toward zero.
pub fn eval_rpn(tokens: &[&str]) -> Result<i32> {
    let mut stack: ArrayStack<i32> = ArrayStack::new();
    for token in tokens {
        if INTEGER_TOKEN.is_match(token) {
            let value = token
                .parse::<i32>()
                .map_err(|_| invalid(format!("operand out of range: {}", token)))?;
            stack.push(value)?;
        } else {
            reduce(&mut stack, token)?;
        }
    }
    finish(stack)
}
