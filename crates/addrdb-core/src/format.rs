// crates/addrdb-core/src/format.rs

//! Template tokenization and address rendering.
//!
//! A format template is a flat string: `%n` breaks lines, `%A`/`%C`/… stand
//! for address fields, everything else is literal text (including `%`
//! followed by an unknown code, which renders as-is).

use crate::error::Result;
use crate::model::{Address, AddressField};
use crate::resolver::AddressDb;
use crate::store::Store;
use crate::text::upper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Literal(&'a str),
    Field(AddressField),
    NewLine,
}

pub(crate) fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        if pos > 0 {
            tokens.push(Token::Literal(&rest[..pos]));
        }
        match rest[pos + 1..].chars().next() {
            Some('n') => {
                tokens.push(Token::NewLine);
                rest = &rest[pos + 2..];
            }
            Some(code) => {
                let token_end = pos + 1 + code.len_utf8();
                match AddressField::from_code(code) {
                    Some(field) => tokens.push(Token::Field(field)),
                    None => tokens.push(Token::Literal(&rest[pos..token_end])),
                }
                rest = &rest[token_end..];
            }
            None => {
                tokens.push(Token::Literal(&rest[pos..]));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    tokens
}

/// Fields named by a template, in template order, line breaks ignored.
pub(crate) fn template_fields(template: &str) -> Vec<AddressField> {
    tokenize(template)
        .into_iter()
        .filter_map(|token| match token {
            Token::Field(field) => Some(field),
            _ => None,
        })
        .collect()
}

impl<S: Store> AddressDb<S> {
    /// Render an address into display lines.
    ///
    /// Substitutes the address's values into the region's format template
    /// (the Latin template when `latin` is set), uppercasing the fields the
    /// rules flag, and drops lines left empty; a missing company name
    /// silently removes its line. The final line is the caller's
    /// `country_name` override (uppercased) when given, otherwise the
    /// resolved country display name. Lines are joined with `\n`, no
    /// trailing newline.
    ///
    /// Assumes, but does not require, an already-normalized address; no
    /// validation happens here and resolution failures propagate unwrapped.
    pub fn format(
        &self,
        address: &Address,
        latin: bool,
        locale: Option<&str>,
        country_name: Option<&str>,
    ) -> Result<String> {
        let rules = self.rules(address)?;
        let template = if latin {
            &rules.address_latin_format
        } else {
            &rules.address_format
        };

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for token in tokenize(template) {
            match token {
                Token::NewLine => flush_line(&mut lines, &mut current),
                Token::Literal(text) => current.push_str(text),
                Token::Field(field) => {
                    let value = address.get(field);
                    if rules.is_upper(field) {
                        current.push_str(&upper(value, locale));
                    } else {
                        current.push_str(value);
                    }
                }
            }
        }
        flush_line(&mut lines, &mut current);

        let country_line = match country_name {
            Some(name) => upper(name, locale),
            None => rules.country_name.clone(),
        };
        if !country_line.is_empty() {
            lines.push(country_line);
        }
        Ok(lines.join("\n"))
    }

    /// The order of address form fields, as a list per template line.
    ///
    /// Same tokenization as [`format`](AddressDb::format) without value
    /// substitution; lines without fields are omitted. Used by consumers
    /// building input forms.
    pub fn field_order(&self, address: &Address, latin: bool) -> Result<Vec<Vec<AddressField>>> {
        let rules = self.rules(address)?;
        let template = if latin {
            &rules.address_latin_format
        } else {
            &rules.address_format
        };

        let mut lines = Vec::new();
        let mut current = Vec::new();
        for token in tokenize(template) {
            match token {
                Token::NewLine => {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                }
                Token::Field(field) => current.push(field),
                Token::Literal(_) => {}
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        Ok(lines)
    }
}

fn flush_line(lines: &mut Vec<String>, current: &mut String) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}
