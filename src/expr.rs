use std::{
    fmt::{self, Display},
    rc::Rc,
};

use crate::node::Node;
use crate::token::Token;

pub type ExprRef = Box<Expression>;

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    String(StringLiteral),
    Infix(InfixExpression),
    Prefix(PrefixExpression),
    Postfix(PostfixExpression),
    Ternary(TernaryExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(x) => x.token_literal(),
            Self::Integer(x) => x.token_literal(),
            Self::String(x) => x.token_literal(),
            Self::Infix(x) => x.token_literal(),
            Self::Prefix(x) => x.token_literal(),
            Self::Postfix(x) => x.token_literal(),
            Self::Ternary(x) => x.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(x) => write!(f, "{x}"),
            Self::Integer(x) => write!(f, "{x}"),
            Self::String(x) => write!(f, "{x}"),
            Self::Infix(x) => write!(f, "{x}"),
            Self::Prefix(x) => write!(f, "{x}"),
            Self::Postfix(x) => write!(f, "{x}"),
            Self::Ternary(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: Rc<str>,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct StringLiteral {
    pub token: Token,
    /// Body with escapes decoded, see `literal::unescape`.
    pub value: Rc<str>,
}

impl Node for StringLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct InfixExpression {
    /// The operator token, e.g. `+` or `<<`.
    pub token: Token,
    pub left: ExprRef,
    pub operator: Rc<str>,
    pub right: ExprRef,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct PrefixExpression {
    /// `-` or `!`
    pub token: Token,
    pub operator: Rc<str>,
    pub right: ExprRef,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct PostfixExpression {
    /// `++` or `--`
    pub token: Token,
    pub operator: Rc<str>,
    pub left: ExprRef,
}

impl Node for PostfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PostfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.left, self.operator)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TernaryExpression {
    pub condition: ExprRef,
    /// The `?` token; it is what `token_literal` reports.
    pub question: Token,
    pub consequence: ExprRef,
    pub colon: Token,
    pub alternative: ExprRef,
}

impl Node for TernaryExpression {
    fn token_literal(&self) -> &str {
        &self.question.literal
    }
}

impl Display for TernaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {} {} {})",
            self.condition, self.question.literal, self.consequence, self.colon.literal, self.alternative
        )
    }
}
