use std::str::FromStr;

use crate::{
    db::{NodeKey, Registry},
    formula::Formula,
    misc::log::targets::{self},
    types::err::{self},
};

/// A binary connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Connective {
    And,
    Or,
    Imply,
}

/// An element of a group, between a pair of brackets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Item {
    Negation,
    Connective(Connective),
    Node(NodeKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Item(Item),
}

/// Wraps the text in a pair of brackets, with each bracket and connective padded by whitespace and every bracket written as '(' or ')'.
fn spaced(text: &str) -> String {
    let mut spaced = String::with_capacity(2 * text.len() + 6);
    spaced.push_str(" ( ");

    let mut characters = text.chars().peekable();
    while let Some(character) = characters.next() {
        match character {
            '(' | '[' | '{' => spaced.push_str(" ( "),

            ')' | ']' | '}' => spaced.push_str(" ) "),

            '~' | '&' | '|' => {
                spaced.push(' ');
                spaced.push(character);
                spaced.push(' ');
            }

            '-' if characters.peek() == Some(&'>') => {
                characters.next();
                spaced.push_str(" -> ");
            }

            _ => spaced.push(character),
        }
    }

    spaced.push_str(" ) ");
    spaced
}

/// Tokens of the text, with the sign of each atom stored in the registry, in order of appearance.
fn tokenize(text: &str, registry: &mut Registry) -> Vec<Token> {
    spaced(text)
        .split_whitespace()
        .map(|word| match word {
            "(" => Token::Open,
            ")" => Token::Close,
            "~" => Token::Item(Item::Negation),
            "&" => Token::Item(Item::Connective(Connective::And)),
            "|" => Token::Item(Item::Connective(Connective::Or)),
            "->" => Token::Item(Item::Connective(Connective::Imply)),
            _ => match word.to_lowercase().as_str() {
                "neg" => Token::Item(Item::Negation),
                "and" => Token::Item(Item::Connective(Connective::And)),
                "or" => Token::Item(Item::Connective(Connective::Or)),
                "implies" => Token::Item(Item::Connective(Connective::Imply)),
                _ => Token::Item(Item::Node(registry.var(word))),
            },
        })
        .collect()
}

/// Reduces a group to a single node.
///
/// Negations are applied first, from right to left.
/// Connectives are then applied from left to right, without precedence.
fn reduce(group: Vec<Item>, registry: &mut Registry) -> Result<NodeKey, err::ParseError> {
    if group.is_empty() {
        return Err(err::ParseError::EmptyGroup);
    }

    let mut negated: Vec<Item> = Vec::with_capacity(group.len());
    for item in group.into_iter().rev() {
        match item {
            Item::Negation => match negated.pop() {
                Some(Item::Node(atom)) => negated.push(Item::Node(registry.neg(atom))),
                _ => return Err(err::ParseError::Negation),
            },

            _ => negated.push(item),
        }
    }
    negated.reverse();

    let mut items = negated.into_iter();

    let mut expression = match items.next() {
        Some(Item::Node(key)) => key,
        _ => return Err(err::ParseError::MissingOperand),
    };

    while let Some(item) = items.next() {
        let Item::Connective(connective) = item else {
            return Err(err::ParseError::MissingConnective);
        };

        let Some(Item::Node(right)) = items.next() else {
            return Err(err::ParseError::MissingOperand);
        };

        expression = match connective {
            Connective::And => registry.and(expression, right),
            Connective::Or => registry.or(expression, right),
            Connective::Imply => registry.imply(expression, right),
        };
    }

    Ok(expression)
}

impl Formula {
    /// Parses a formula from text.
    ///
    /// See [builder](crate::builder) for details on the vocabulary of a formula.
    ///
    /// ```rust
    /// # use horn_sat::formula::Formula;
    /// # use horn_sat::types::err::ParseError;
    /// assert!(Formula::parse("p -> (q | r)").is_ok());
    ///
    /// assert_eq!(Formula::parse("  ").unwrap_err(), ParseError::Empty);
    /// assert_eq!(Formula::parse("(p & q").unwrap_err(), ParseError::UnmatchedOpen);
    /// assert_eq!(Formula::parse("p ~").unwrap_err(), ParseError::Negation);
    /// ```
    pub fn parse(text: &str) -> Result<Self, err::ParseError> {
        if text.trim().is_empty() {
            return Err(err::ParseError::Empty);
        }

        log::trace!(target: targets::PARSE, "Parsing \"{text}\"");

        let mut registry = Registry::default();
        let mut tokens = tokenize(text, &mut registry).into_iter();

        let mut stack: Vec<Vec<Item>> = Vec::default();

        while let Some(token) = tokens.next() {
            match token {
                Token::Open => stack.push(Vec::default()),

                Token::Close => {
                    let Some(group) = stack.pop() else {
                        return Err(err::ParseError::UnmatchedClose);
                    };

                    let node = reduce(group, &mut registry)?;

                    match stack.last_mut() {
                        Some(top) => top.push(Item::Node(node)),

                        None => {
                            // The outer group is closed, and any further token is without an open bracket.
                            if tokens.next().is_some() {
                                return Err(err::ParseError::UnmatchedClose);
                            }

                            let formula = Formula::from_parts(registry, node);
                            log::debug!(target: targets::PARSE, "Parsed {formula} with {} nodes", formula.len());
                            return Ok(formula);
                        }
                    }
                }

                Token::Item(item) => match stack.last_mut() {
                    Some(top) => top.push(item),
                    None => return Err(err::ParseError::UnmatchedClose),
                },
            }
        }

        Err(err::ParseError::UnmatchedOpen)
    }
}

impl FromStr for Formula {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}
