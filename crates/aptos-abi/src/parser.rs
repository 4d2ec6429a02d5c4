// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the textual forms of type tags (`vector<0x1::string::String>`) and function ids
//! (`0x1::coin::transfer`), as typed by users and printed by `Display`.

use crate::{
    account_address::AccountAddress,
    errors::ParseError,
    identifier::Identifier,
    language_storage::{MAX_TYPE_TAG_DEPTH, ModuleId, StructTag, TypeTag},
};
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Name(String),
    Lt,
    Gt,
    Comma,
    ColonColon,
}

impl Token {
    fn text(&self) -> &str {
        match self {
            Token::Name(name) => name,
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Comma => ",",
            Token::ColonColon => "::",
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = vec![];
    let mut chars = input.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        let token = match c {
            '<' => Token::Lt,
            '>' => Token::Gt,
            ',' => Token::Comma,
            ':' => match chars.next() {
                Some((_, ':')) => Token::ColonColon,
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        token: ":".to_string(),
                        offset,
                    })
                },
            },
            c if c.is_whitespace() => continue,
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut name = c.to_string();
                while let Some((_, next)) =
                    chars.next_if(|(_, next)| next.is_ascii_alphanumeric() || *next == '_')
                {
                    name.push(next);
                }
                Token::Name(name)
            },
            c => {
                return Err(ParseError::UnexpectedToken {
                    token: c.to_string(),
                    offset,
                })
            },
        };
        tokens.push((token, offset));
    }
    Ok(tokens)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<(Token, usize)>,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        Ok(Self {
            input,
            tokens: tokenize(input)?,
            position: 0,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    fn next(&mut self) -> Result<(Token, usize), ParseError> {
        let next = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEnd(self.input.to_string()))?;
        self.position += 1;
        Ok(next)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        let (token, offset) = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(unexpected(&token, offset))
        }
    }

    fn expect_name(&mut self) -> Result<(String, usize), ParseError> {
        match self.next()? {
            (Token::Name(name), offset) => Ok((name, offset)),
            (token, offset) => Err(unexpected(&token, offset)),
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        let (name, _) = self.expect_name()?;
        Ok(Identifier::new(name)?)
    }

    fn finish(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.position) {
            None => Ok(()),
            Some((token, offset)) => Err(unexpected(token, *offset)),
        }
    }

    fn parse_address(&mut self) -> Result<AccountAddress, ParseError> {
        let (literal, _) = self.expect_name()?;
        AccountAddress::from_hex_literal(&literal).map_err(|error| ParseError::InvalidAddress {
            literal,
            reason: error.to_string(),
        })
    }

    fn parse_type_tag(&mut self, depth: usize) -> Result<TypeTag, ParseError> {
        if depth > MAX_TYPE_TAG_DEPTH {
            return Err(ParseError::MaxDepthExceeded(MAX_TYPE_TAG_DEPTH));
        }

        let (token, offset) = self.next()?;
        let name = match token {
            Token::Name(name) => name,
            token => return Err(unexpected(&token, offset)),
        };
        Ok(match name.as_str() {
            "bool" => TypeTag::Bool,
            "u8" => TypeTag::U8,
            "u64" => TypeTag::U64,
            "u128" => TypeTag::U128,
            "address" => TypeTag::Address,
            "signer" => TypeTag::Signer,
            "vector" => {
                self.expect(Token::Lt)?;
                let element = self.parse_type_tag(depth + 1)?;
                self.expect(Token::Gt)?;
                TypeTag::Vector(Box::new(element))
            },
            literal if literal.starts_with("0x") => {
                // Put the address back so the struct parser sees the full path.
                self.position -= 1;
                TypeTag::Struct(Box::new(self.parse_struct_tag(depth)?))
            },
            _ => {
                return Err(ParseError::UnexpectedToken {
                    token: name.clone(),
                    offset,
                })
            },
        })
    }

    fn parse_struct_tag(&mut self, depth: usize) -> Result<StructTag, ParseError> {
        let address = self.parse_address()?;
        self.expect(Token::ColonColon)?;
        let module = self.expect_identifier()?;
        self.expect(Token::ColonColon)?;
        let name = self.expect_identifier()?;

        let mut type_params = vec![];
        if self.peek() == Some(&Token::Lt) {
            self.position += 1;
            loop {
                type_params.push(self.parse_type_tag(depth + 1)?);
                let (token, offset) = self.next()?;
                match token {
                    Token::Comma => continue,
                    Token::Gt => break,
                    token => return Err(unexpected(&token, offset)),
                }
            }
        }

        Ok(StructTag {
            address,
            module,
            name,
            type_params,
        })
    }
}

fn unexpected(token: &Token, offset: usize) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.text().to_string(),
        offset,
    }
}

/// Parses a type tag such as `u64`, `vector<u8>` or `0x1::coin::Coin<0x1::aptos_coin::AptosCoin>`.
pub fn parse_type_tag(s: &str) -> Result<TypeTag, ParseError> {
    let mut parser = Parser::new(s)?;
    let type_tag = parser.parse_type_tag(1)?;
    parser.finish()?;
    Ok(type_tag)
}

/// Parses a fully qualified function id such as `0x1::coin::transfer`.
pub fn parse_function_id(s: &str) -> Result<(ModuleId, Identifier), ParseError> {
    let invalid = || ParseError::InvalidFunctionId(s.to_string());
    let mut parser = Parser::new(s)?;
    let address = parser.parse_address().map_err(|_| invalid())?;
    parser.expect(Token::ColonColon).map_err(|_| invalid())?;
    let module = parser.expect_identifier()?;
    parser.expect(Token::ColonColon).map_err(|_| invalid())?;
    let function = parser.expect_identifier()?;
    parser.finish().map_err(|_| invalid())?;
    Ok((ModuleId::new(address, module), function))
}

impl FromStr for TypeTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s)
    }
}

impl FromStr for StructTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_type_tag(s)? {
            TypeTag::Struct(struct_tag) => Ok(*struct_tag),
            other => Err(ParseError::UnexpectedToken {
                token: other.to_string(),
                offset: 0,
            }),
        }
    }
}
