use std::fmt::{self, Display};

use crate::expr::{Expression, Identifier};
use crate::node::Node;
use crate::token::Token;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Expression(ExpressionStatement),
    String(StringStatement),
    Return(ReturnStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Expression(stmt) => stmt.token_literal(),
            Self::String(stmt) => stmt.token_literal(),
            Self::Return(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(stmt) => write!(f, "{stmt}"),
            Self::String(stmt) => write!(f, "{stmt}"),
            Self::Return(stmt) => write!(f, "{stmt}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expr) => write!(f, "{expr}"),
            None => Ok(()),
        }
    }
}

/// `string $name = value;`
#[derive(Debug, PartialEq, Clone)]
pub struct StringStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for StringStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for StringStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.return_value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}
