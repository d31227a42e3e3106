use crate::token::*;

/// Pull-based scanner over one source text.
///
/// The cursor works on chars rather than bytes so non-ASCII text in strings
/// survives intact. `ch` is `None` once the input is exhausted, and
/// `read_position` is always `position + 1`.
pub struct Scanner {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl Scanner {
    pub fn new(code: &str) -> Self {
        let mut scanner = Scanner {
            chars: code.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        scanner.advance();
        scanner
    }

    fn advance(&mut self) {
        self.ch = self.chars.get(self.read_position).copied();
        // Pin at the end so repeated EOFs don't walk off.
        self.position = self.read_position.min(self.chars.len());
        self.read_position = self.position + 1;
    }

    /// The character after the current one, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }

    fn slice_from(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        self.advance();
        Token::new(kind, String::from(c))
    }

    // "==", "!=", "<<" and ">>" fall back to their one-char form.
    fn pair_or_single(&mut self, second: char, pair: TokenKind, single: TokenKind) -> Token {
        let start = self.position;
        let first_is_pair = self.peek() == Some(second);
        self.advance();
        if first_is_pair {
            self.advance();
            Token::new(pair, self.slice_from(start))
        } else {
            Token::new(single, self.slice_from(start))
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.ch else {
            return Token::eof();
        };

        match c {
            '=' => self.pair_or_single('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.pair_or_single('=', TokenKind::NotEq, TokenKind::Bang),
            '<' => self.pair_or_single('<', TokenKind::LTensor, TokenKind::Lt),
            '>' => self.pair_or_single('>', TokenKind::RTensor, TokenKind::Gt),
            ';' => self.single(TokenKind::Semicolon, c),
            '(' => self.single(TokenKind::LParen, c),
            ')' => self.single(TokenKind::RParen, c),
            '{' => self.single(TokenKind::LBrace, c),
            '}' => self.single(TokenKind::RBrace, c),
            '[' => self.single(TokenKind::LBracket, c),
            ']' => self.single(TokenKind::RBracket, c),
            ',' => self.single(TokenKind::Comma, c),
            '+' => self.single(TokenKind::Plus, c),
            '-' => self.single(TokenKind::Minus, c),
            '/' => self.single(TokenKind::Slash, c),
            '*' => self.single(TokenKind::Asterisk, c),
            // Sigil variables are never keywords.
            '$' => Token::new(TokenKind::Ident, self.identifier()),
            '"' => Token::new(TokenKind::StringData, self.string()),
            c if is_letter(c) => {
                let ident = self.identifier();
                Token::new(lookup_ident(&ident), ident)
            }
            '0' if self.peek() == Some('x') => Token::new(TokenKind::Int16Data, self.hexadecimal()),
            c if c.is_ascii_digit() => self.number(),
            '.' if self.peek().is_some_and(|d| d.is_ascii_digit()) => self.number(),
            c => self.single(TokenKind::Illegal, c),
        }
    }

    // The first char ('$' or a letter) is taken unconditionally.
    fn identifier(&mut self) -> String {
        let start = self.position;
        self.advance();
        while self.ch.is_some_and(is_identifier) {
            self.advance();
        }
        self.slice_from(start)
    }

    // Escapes stay undecoded; an unterminated string runs to the end of input.
    fn string(&mut self) -> String {
        let start = self.position;
        self.advance();
        while let Some(c) = self.ch {
            if c == '"' {
                self.advance();
                break;
            }
            if c == '\\' {
                self.advance();
            }
            self.advance();
        }
        self.slice_from(start)
    }

    fn hexadecimal(&mut self) -> String {
        let start = self.position;
        // "0x"
        self.advance();
        self.advance();
        while self.ch.is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        self.slice_from(start)
    }

    fn number(&mut self) -> Token {
        let start = self.position;
        let mut kind = TokenKind::IntData;
        self.eat_digits();

        if self.ch == Some('.') {
            kind = TokenKind::FloatData;
            self.advance();
            self.eat_digits();
        }

        // Only a signed exponent belongs to the numeral; "1e5" scans as "1" then "e5".
        if matches!(self.ch, Some('e' | 'E')) && matches!(self.peek(), Some('+' | '-')) {
            kind = TokenKind::FloatData;
            self.advance();
            self.advance();
            self.eat_digits();
        }

        Token::new(kind, self.slice_from(start))
    }

    fn eat_digits(&mut self) {
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner {}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit()
}

/// Scans the whole of `code`. The result always ends with exactly one EOF token.
pub fn scan(code: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(code);
    let mut result = vec![];
    loop {
        let tok = scanner.next_token();
        let done = tok.is_eof();
        result.push(tok);
        if done {
            return result;
        }
    }
}
