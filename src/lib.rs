pub mod expr;
pub mod literal;
pub mod node;
pub mod scanner;
pub mod statement;
pub mod token;
