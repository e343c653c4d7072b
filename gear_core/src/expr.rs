//! Restricted arithmetic evaluator for accessory cost formulas
//!
//! Formulas reference exactly one free variable (`cost_int`), the four
//! arithmetic operators, parentheses, and the unary functions `round`,
//! `ceil`, `floor`. Evaluation is in f64; the end result is truncated to an
//! integer, so rounding only ever happens through the explicit functions.
//!
//! Callers fail closed: any [`EvalError`] means "use the flat cost instead",
//! never a propagated failure. A broken formula must not block a roster.

use thiserror::Error;

/// Error tokenizing, parsing, or evaluating a cost formula
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("unexpected character '{0}' in formula")]
    UnexpectedChar(char),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("formula ended unexpectedly")]
    UnexpectedEnd,
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("formula produced a non-finite value")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Unary functions allowed in formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Func {
    Round,
    Ceil,
    Floor,
}

impl Func {
    fn from_name(name: &str) -> Option<Func> {
        match name {
            "round" => Some(Func::Round),
            "ceil" => Some(Func::Ceil),
            "floor" => Some(Func::Floor),
            _ => None,
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Func::Round => value.round(),
            Func::Ceil => value.ceil(),
            Func::Floor => value.floor(),
        }
    }
}

fn tokenize(formula: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = formula.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal
                    .parse()
                    .map_err(|_| EvalError::UnexpectedToken(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        ident.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    cost_int: f64,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EvalError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(EvalError::UnexpectedToken(format!("{:?}", token))),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.next();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.next();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.next();
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // factor := number | 'cost_int' | func '(' expr ')' | '(' expr ')' | '-' factor
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.next().cloned() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(value)
            }
            Some(Token::Ident(name)) => {
                if name == "cost_int" {
                    return Ok(self.cost_int);
                }
                let func =
                    Func::from_name(&name).ok_or(EvalError::UnknownIdentifier(name))?;
                self.expect(&Token::LParen)?;
                let inner = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(func.apply(inner))
            }
            Some(token) => Err(EvalError::UnexpectedToken(format!("{:?}", token))),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate a cost formula with `cost_int` bound to the given value
pub fn evaluate(formula: &str, cost_int: i32) -> Result<i32, EvalError> {
    let tokens = tokenize(formula)?;
    if tokens.is_empty() {
        return Err(EvalError::UnexpectedEnd);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        cost_int: cost_int as f64,
    };
    let value = parser.expr()?;

    if parser.pos != tokens.len() {
        return Err(EvalError::UnexpectedToken(format!(
            "{:?}",
            tokens[parser.pos]
        )));
    }
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(value.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_cost_rounded_to_five() {
        // The canonical telescopic-sight formula
        let formula = "round(cost_int * 0.25 / 5) * 5";
        assert_eq!(evaluate(formula, 100), Ok(25));
        assert_eq!(evaluate(formula, 60), Ok(15));
        assert_eq!(evaluate(formula, 0), Ok(0));
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(evaluate("2 + 3 * 4", 0), Ok(14));
        assert_eq!(evaluate("(2 + 3) * 4", 0), Ok(20));
        assert_eq!(evaluate("20 - 10 - 5", 0), Ok(5));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5 + cost_int", 20), Ok(15));
        assert_eq!(evaluate("cost_int * -1", 20), Ok(-20));
    }

    #[test]
    fn test_explicit_rounding_functions() {
        assert_eq!(evaluate("ceil(cost_int / 4)", 10), Ok(3));
        assert_eq!(evaluate("floor(cost_int / 4)", 10), Ok(2));
        assert_eq!(evaluate("round(cost_int / 4)", 10), Ok(3));
        assert_eq!(evaluate("round(ceil(cost_int / 4) / 2)", 10), Ok(2));
    }

    #[test]
    fn test_result_is_truncated_without_rounding() {
        // 10 / 4 = 2.5, no explicit rounding, truncated
        assert_eq!(evaluate("cost_int / 4", 10), Ok(2));
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            evaluate("price * 2", 10),
            Err(EvalError::UnknownIdentifier("price".to_string()))
        );
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(evaluate("cost_int % 2", 10), Err(EvalError::UnexpectedChar('%')));
    }

    #[test]
    fn test_truncated_formula() {
        assert_eq!(evaluate("cost_int +", 10), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("round(cost_int", 10), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("", 10), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        assert!(matches!(
            evaluate("cost_int 5", 10),
            Err(EvalError::UnexpectedToken(_))
        ));
    }

    #[test]
    fn test_division_by_zero_fails_closed() {
        assert_eq!(evaluate("cost_int / 0", 10), Err(EvalError::NonFinite));
    }
}
