//! Selector parser
//!
//! Hand-written recursive descent over the selector text. Supports type,
//! universal, id, class and attribute selectors, the pseudo-classes in
//! [`PseudoClass`], and the four combinators. Pseudo-elements and
//! namespaces are rejected.

use crate::SelectorError;
use crate::selector::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NthExpression, PseudoClass, SelectorComponent, SelectorList,
};

type Result<T> = std::result::Result<T, SelectorError>;

/// Parse a full selector list
pub fn parse_selector_list(input: &str) -> Result<SelectorList> {
    if input.trim().is_empty() {
        return Err(SelectorError::Empty);
    }
    let mut parser = SelectorParser::new(input);
    let list = parser.parse_list()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(list),
        Some(found) => Err(parser.unexpected(found)),
    }
}

struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(SelectorError::UnexpectedEnd),
        }
    }

    /// Skip whitespace, reporting whether any was skipped
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            offset: self.pos,
            found,
        }
    }

    fn parse_list(&mut self) -> Result<SelectorList> {
        let mut selectors = Vec::new();
        loop {
            self.skip_ws();
            selectors.push(self.parse_complex()?);
            self.skip_ws();
            if !self.eat(',') {
                break;
            }
        }
        Ok(SelectorList { selectors })
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_ws = self.skip_ws();
            let combinator = match self.peek() {
                None | Some(',') | Some(')') => break,
                Some('>') => Combinator::Child,
                Some('+') => Combinator::NextSibling,
                Some('~') => Combinator::SubsequentSibling,
                Some(_) if had_ws => Combinator::Descendant,
                Some(c) => return Err(self.unexpected(c)),
            };
            if combinator != Combinator::Descendant {
                self.bump();
                self.skip_ws();
            }
            compounds.push(self.parse_compound()?);
            combinators.push(combinator);
        }

        // Subject first
        compounds.reverse();
        combinators.reverse();
        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector> {
        let mut components = Vec::new();

        match self.peek() {
            Some('*') => {
                self.bump();
                components.push(SelectorComponent::Universal);
            }
            Some(c) if is_ident_start(c) => {
                let name = self.parse_ident()?;
                components.push(SelectorComponent::Type(name.to_ascii_lowercase()));
            }
            _ => {}
        }
        if self.peek() == Some('|') {
            return Err(SelectorError::Unsupported("namespace prefixes".into()));
        }

        loop {
            let component = match self.peek() {
                Some('#') => {
                    self.bump();
                    SelectorComponent::Id(self.parse_ident()?)
                }
                Some('.') => {
                    self.bump();
                    SelectorComponent::Class(self.parse_ident()?)
                }
                Some('[') => {
                    self.bump();
                    SelectorComponent::Attribute(self.parse_attribute()?)
                }
                Some(':') => {
                    self.bump();
                    SelectorComponent::PseudoClass(self.parse_pseudo()?)
                }
                _ => break,
            };
            components.push(component);
        }

        if components.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(CompoundSelector { components })
    }

    fn parse_ident(&mut self) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('\\') => {
                    self.bump();
                    out.push(self.parse_escape()?);
                }
                Some(c) if is_name_char(c) => {
                    self.bump();
                    out.push(c);
                }
                _ => break,
            }
        }
        if out.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(out)
    }

    /// Escape body after a backslash: up to six hex digits or one literal char
    fn parse_escape(&mut self) -> Result<char> {
        let start = self.pos;
        while self.pos - start < 6 && matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return self.bump().ok_or(SelectorError::UnexpectedEnd);
        }
        let code = u32::from_str_radix(&self.input[start..self.pos], 16).unwrap_or(0);
        // one whitespace terminates a hex escape
        if matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        Ok(match code {
            0 => char::REPLACEMENT_CHARACTER,
            _ => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
        })
    }

    fn parse_string(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(SelectorError::UnexpectedEnd),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.peek() {
                    // escaped newline is a line continuation
                    Some('\n') => {
                        self.bump();
                    }
                    Some(_) => out.push(self.parse_escape()?),
                    None => return Err(SelectorError::UnexpectedEnd),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_attribute(&mut self) -> Result<AttributeSelector> {
        self.skip_ws();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_ws();

        let op = match self.peek() {
            Some(']') => {
                self.bump();
                return Ok(AttributeSelector {
                    name,
                    matcher: None,
                    case_insensitive: false,
                });
            }
            Some('=') => {
                self.bump();
                '='
            }
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.bump();
                self.expect('=')?;
                c
            }
            Some(c) => return Err(self.unexpected(c)),
            None => return Err(SelectorError::UnexpectedEnd),
        };

        self.skip_ws();
        let value = match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.bump();
                self.parse_string(q)?
            }
            _ => self.parse_ident()?,
        };
        self.skip_ws();

        let mut case_insensitive = false;
        if matches!(self.peek(), Some(c) if is_ident_start(c)) {
            let flag = self.parse_ident()?;
            case_insensitive = match flag.to_ascii_lowercase().as_str() {
                "i" => true,
                "s" => false,
                _ => return Err(SelectorError::Unsupported(format!("attribute flag {flag}"))),
            };
            self.skip_ws();
        }
        self.expect(']')?;

        let matcher = match op {
            '=' => AttributeMatcher::Exact(value),
            '~' => AttributeMatcher::Contains(value),
            '|' => AttributeMatcher::DashMatch(value),
            '^' => AttributeMatcher::Prefix(value),
            '$' => AttributeMatcher::Suffix(value),
            _ => AttributeMatcher::Substring(value),
        };
        Ok(AttributeSelector {
            name,
            matcher: Some(matcher),
            case_insensitive,
        })
    }

    fn parse_pseudo(&mut self) -> Result<PseudoClass> {
        if self.peek() == Some(':') {
            return Err(SelectorError::Unsupported("pseudo-elements".into()));
        }
        let name = self.parse_ident()?.to_ascii_lowercase();

        if !self.eat('(') {
            return match name.as_str() {
                "before" | "after" | "first-line" | "first-letter" => {
                    Err(SelectorError::Unsupported("pseudo-elements".into()))
                }
                _ => PseudoClass::from_name(&name)
                    .ok_or_else(|| SelectorError::Unsupported(format!(":{name}"))),
            };
        }

        let pseudo = match name.as_str() {
            "not" | "is" | "where" | "matches" => {
                let list = self.parse_list()?;
                self.skip_ws();
                match name.as_str() {
                    "not" => PseudoClass::Not(list),
                    "where" => PseudoClass::Where(list),
                    _ => PseudoClass::Is(list),
                }
            }
            "nth-child" | "nth-last-child" | "nth-of-type" | "nth-last-of-type" => {
                let raw = self.take_until_paren();
                if raw.to_ascii_lowercase().contains(" of ") {
                    return Err(SelectorError::Unsupported(format!(":{name}(... of S)")));
                }
                let expr = NthExpression::parse(raw)
                    .ok_or_else(|| SelectorError::InvalidNth(raw.trim().to_string()))?;
                match name.as_str() {
                    "nth-child" => PseudoClass::NthChild(expr),
                    "nth-last-child" => PseudoClass::NthLastChild(expr),
                    "nth-of-type" => PseudoClass::NthOfType(expr),
                    _ => PseudoClass::NthLastOfType(expr),
                }
            }
            "lang" => {
                let raw = self.take_until_paren().trim();
                let lang = raw.trim_matches(|c| c == '"' || c == '\'');
                if lang.is_empty() {
                    return Err(SelectorError::UnexpectedEnd);
                }
                PseudoClass::Lang(lang.to_ascii_lowercase())
            }
            _ => return Err(SelectorError::Unsupported(format!(":{name}()"))),
        };
        self.expect(')')?;
        Ok(pseudo)
    }

    /// Raw text up to (not including) the next `)`
    fn take_until_paren(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        let len = rest.find(')').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || c == '\\' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}
