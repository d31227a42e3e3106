use std::fmt::{self, Display};

use crate::statement::Statement;

/// Shared surface of every tree node.
///
/// The canonical text of a node is its `Display` output: expressions come
/// out fully parenthesized, so it is meant for diagnostics and comparisons
/// rather than for reproducing the source.
pub trait Node: Display {
    /// Literal of the token that introduced the node.
    fn token_literal(&self) -> &str;
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.statements.iter() {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
