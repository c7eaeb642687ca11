//! Single-pass tokenizer for binding keys.
//!
//! The scanner classifies each token from the delimiter under the cursor and
//! the token it emitted last, with a small frame stack for `<…>` and `(…)`
//! nesting. It never backtracks; malformed input yields [`Token::Error`]
//! and every later call returns it again.

use tracing::trace;

/// Token classes of the key grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Nothing scanned yet.
    Start,
    /// A whole package key, `java/util`.
    Package,
    /// A whole module key after `"`, `java.base`.
    Module,
    /// One of `B C D F I J S Z V`.
    BaseType,
    /// A run of `[`; the text length is the dimension count.
    Array,
    /// `L` plus the top-level binary name, `java/util/Map`.
    Type,
    /// A member segment after `$`, or after `.` following `>`.
    MemberType,
    TypeArgsStart,
    TypeArgsEnd,
    /// The `;` closing a class type.
    TypeEnd,
    /// `T` name `;` in a signature.
    TypeVariable,
    /// `*`, `+` or `-`.
    Wildcard,
    /// `.` name `)`.
    Field,
    /// `.` name, followed by `(` or `<`.
    Method,
    TypeParamsStart,
    /// A type parameter name with its `:`.
    TypeParameter,
    /// `:` introducing an interface bound.
    Bound,
    TypeParamsEnd,
    ParamsStart,
    ParamsEnd,
    /// `^` before a thrown type.
    Thrown,
    /// `{` ordinal `}`.
    Initializer,
    /// `#` name or ordinal.
    LocalVariable,
    /// `#` ordinal after a local variable.
    Occurrence,
    /// `:` before a type variable of a declaration.
    TypeVariableOf,
    /// `@` before an annotation type.
    Annotation,
    End,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    TypeArgs,
    TypeParams,
    Params,
}

const DELIMITERS: &[char] = &[
    ';', '$', '.', '[', '<', '>', '(', ')', ':', '#', '{', '}', '^', '@', '*', '+', '-', '"',
];

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

fn is_base_type(c: char) -> bool {
    matches!(c, 'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' | 'V')
}

/// Whether `key` scans as a package key rather than a signature.
pub(super) fn reads_as_package(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (None, _) | (Some('L' | '[' | '"'), _) => false,
        (Some(c), None) if is_base_type(c) => false,
        _ => key.split('/').all(|s| !s.is_empty() && !s.contains(is_delimiter)),
    }
}

/// Cursor over one key string.
#[derive(Debug, Clone)]
pub struct KeyScanner<'a> {
    source: &'a str,
    pos: usize,
    start: usize,
    end: usize,
    token: Token,
    frames: Vec<Frame>,
}

impl<'a> KeyScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            end: 0,
            token: Token::Start,
            frames: Vec::new(),
        }
    }

    /// The last emitted token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Payload text of the last emitted token, without its delimiters.
    pub fn text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Payload of the last token read as a decimal number.
    pub fn ordinal(&self) -> Option<u32> {
        self.text().parse().ok()
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Token {
        if matches!(self.token, Token::End | Token::Error) {
            return self.token;
        }
        let token = self.scan();
        if token == Token::Error {
            trace!(
                "[KEY] malformed key `{}` at offset {} after {:?}",
                self.source, self.pos, self.token
            );
        }
        self.token = token;
        token
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one delimiter character.
    fn skip(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume up to the next delimiter and mark it as the token text.
    fn take_name(&mut self) -> &'a str {
        self.start = self.pos;
        let len = self.rest().find(is_delimiter).unwrap_or(self.rest().len());
        self.pos += len;
        self.end = self.pos;
        self.text()
    }

    fn take_digits(&mut self) -> bool {
        let name = self.take_name();
        !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
    }

    /// Consume one character as the whole token text.
    fn take_char(&mut self) {
        self.start = self.pos;
        self.skip();
        self.end = self.pos;
    }

    fn mark_empty(&mut self) {
        self.start = self.pos;
        self.end = self.pos;
    }

    fn scan(&mut self) -> Token {
        match self.token {
            Token::Start => self.scan_start(),
            Token::Package | Token::Module | Token::Occurrence => self.scan_end(),
            Token::Array
            | Token::Bound
            | Token::ParamsEnd
            | Token::Thrown
            | Token::Field
            | Token::Annotation
            | Token::TypeVariableOf => self.scan_signature(),
            Token::Wildcard if self.text() != "*" => self.scan_signature(),
            Token::Type | Token::MemberType => self.scan_in_class_type(false),
            Token::TypeArgsEnd => self.scan_in_class_type(true),
            Token::Wildcard
            | Token::TypeEnd
            | Token::TypeVariable
            | Token::BaseType
            | Token::TypeArgsStart
            | Token::ParamsStart
            | Token::TypeParamsStart => self.scan_after_signature(),
            Token::TypeParameter => self.scan_after_type_parameter(),
            Token::TypeParamsEnd => match self.peek() {
                Some('(') => self.open(Frame::Params, Token::ParamsStart),
                _ => Token::Error,
            },
            Token::Method => match self.peek() {
                Some('(') => self.open(Frame::Params, Token::ParamsStart),
                Some('<') => self.open(Frame::TypeParams, Token::TypeParamsStart),
                _ => Token::Error,
            },
            Token::Initializer => match self.peek() {
                None => self.scan_end(),
                Some('#') => self.scan_local_variable(),
                _ => Token::Error,
            },
            Token::LocalVariable => match self.peek() {
                None => self.scan_end(),
                Some('#') => {
                    self.skip();
                    if self.take_digits() {
                        Token::Occurrence
                    } else {
                        Token::Error
                    }
                }
                _ => Token::Error,
            },
            Token::End | Token::Error => self.token,
        }
    }

    fn scan_end(&mut self) -> Token {
        self.mark_empty();
        if self.pos == self.source.len() && self.frames.is_empty() {
            Token::End
        } else {
            Token::Error
        }
    }

    fn open(&mut self, frame: Frame, token: Token) -> Token {
        self.take_char();
        self.frames.push(frame);
        token
    }

    fn close(&mut self, frame: Frame, token: Token) -> Token {
        if self.frames.pop() != Some(frame) {
            return Token::Error;
        }
        self.take_char();
        token
    }

    fn scan_start(&mut self) -> Token {
        let Some(first) = self.peek() else {
            return Token::Error;
        };
        match first {
            'L' | '[' => self.scan_signature(),
            c if is_base_type(c) && self.source.len() == 1 => self.scan_signature(),
            '"' => {
                self.skip();
                self.start = self.pos;
                self.pos = self.source.len();
                self.end = self.pos;
                let valid = self
                    .text()
                    .split('.')
                    .all(|s| !s.is_empty() && !s.contains(is_delimiter));
                if valid { Token::Module } else { Token::Error }
            }
            _ => {
                self.start = 0;
                self.pos = self.source.len();
                self.end = self.pos;
                let valid = self
                    .text()
                    .split('/')
                    .all(|s| !s.is_empty() && !s.contains(is_delimiter));
                if valid { Token::Package } else { Token::Error }
            }
        }
    }

    /// A type signature starts under the cursor.
    fn scan_signature(&mut self) -> Token {
        let Some(c) = self.peek() else {
            return Token::Error;
        };
        match c {
            'L' => {
                self.skip();
                let name = self.take_name();
                if name.is_empty() || name.split('/').any(str::is_empty) {
                    Token::Error
                } else {
                    Token::Type
                }
            }
            'T' => {
                self.skip();
                let name = self.take_name();
                if name.is_empty() || self.peek() != Some(';') {
                    return Token::Error;
                }
                self.skip();
                Token::TypeVariable
            }
            '[' => {
                self.start = self.pos;
                while self.peek() == Some('[') {
                    self.skip();
                }
                self.end = self.pos;
                Token::Array
            }
            '*' | '+' | '-' => {
                self.take_char();
                Token::Wildcard
            }
            c if is_base_type(c) => {
                self.take_char();
                Token::BaseType
            }
            _ => Token::Error,
        }
    }

    /// Inside a class type, after its name, a member name or `>`.
    fn scan_in_class_type(&mut self, after_arguments: bool) -> Token {
        match self.peek() {
            Some('$') if !after_arguments => self.scan_member_type(),
            Some('.') if after_arguments => self.scan_member_type(),
            Some('<') if !after_arguments => self.open(Frame::TypeArgs, Token::TypeArgsStart),
            Some(';') => {
                self.take_char();
                Token::TypeEnd
            }
            _ => Token::Error,
        }
    }

    fn scan_member_type(&mut self) -> Token {
        self.skip();
        if self.take_name().is_empty() {
            Token::Error
        } else {
            Token::MemberType
        }
    }

    /// After a complete signature: what follows depends on the open frame.
    fn scan_after_signature(&mut self) -> Token {
        match self.frames.last() {
            Some(Frame::TypeArgs) => match self.peek() {
                Some('>') => self.close(Frame::TypeArgs, Token::TypeArgsEnd),
                _ => self.scan_signature(),
            },
            Some(Frame::Params) => match self.peek() {
                Some(')') => self.close(Frame::Params, Token::ParamsEnd),
                _ => self.scan_signature(),
            },
            Some(Frame::TypeParams) => match self.peek() {
                Some(':') => {
                    self.take_char();
                    Token::Bound
                }
                Some('>') => self.close(Frame::TypeParams, Token::TypeParamsEnd),
                _ if self.at_type_parameter() => self.scan_type_parameter(),
                _ => Token::Error,
            },
            None => self.scan_declaration_suffix(),
        }
    }

    /// Top level, after a class type or a member signature.
    fn scan_declaration_suffix(&mut self) -> Token {
        let Some(c) = self.peek() else {
            return self.scan_end();
        };
        match c {
            '.' => {
                self.skip();
                let name = self.take_name();
                match self.peek() {
                    Some(')') if !name.is_empty() => {
                        self.skip();
                        Token::Field
                    }
                    Some('(' | '<') => Token::Method,
                    _ => Token::Error,
                }
            }
            ':' => {
                self.take_char();
                Token::TypeVariableOf
            }
            '{' => {
                self.skip();
                if self.take_digits() && self.peek() == Some('}') {
                    self.skip();
                    Token::Initializer
                } else {
                    Token::Error
                }
            }
            '@' => {
                self.take_char();
                Token::Annotation
            }
            '^' => {
                self.take_char();
                Token::Thrown
            }
            '#' => self.scan_local_variable(),
            _ => Token::Error,
        }
    }

    fn scan_local_variable(&mut self) -> Token {
        self.skip();
        if self.take_name().is_empty() {
            Token::Error
        } else {
            Token::LocalVariable
        }
    }

    fn scan_after_type_parameter(&mut self) -> Token {
        match self.peek() {
            Some(':') => {
                self.take_char();
                Token::Bound
            }
            Some('>') => self.close(Frame::TypeParams, Token::TypeParamsEnd),
            _ if self.at_type_parameter() => self.scan_type_parameter(),
            _ => self.scan_signature(),
        }
    }

    /// Whether the cursor is on `Name:` rather than a signature.
    fn at_type_parameter(&self) -> bool {
        let rest = self.rest();
        match rest.find(is_delimiter) {
            Some(i) => i > 0 && rest[i..].starts_with(':') && !rest[..i].contains('/'),
            None => false,
        }
    }

    fn scan_type_parameter(&mut self) -> Token {
        self.take_name();
        if self.peek() != Some(':') {
            return Token::Error;
        }
        self.skip();
        Token::TypeParameter
    }
}
