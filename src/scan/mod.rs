mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{lookup_ident, Lexeme, Token, TokenKind};
