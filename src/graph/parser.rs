//! Line parser for `name: dep1, dep2, ...` declarations

use crate::error::{ParseError, ParseErrorKind};

const NAME_SEPARATOR: char = ':';
const DEPENDENCY_SEPARATOR: char = ',';

/// A single parsed dependency declaration, borrowing from the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub dependencies: Vec<&'a str>,
}

/// Parse one input line
///
/// Blank lines yield `Ok(None)`. Everything else must be a declaration.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Declaration<'_>>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some(colon) = line.find(NAME_SEPARATOR) else {
        let content = line.trim_end();
        return Err(ParseError::new(
            line_number,
            line,
            ParseErrorKind::MissingColon,
            (0, content.len()).into(),
        ));
    };

    let name = line[..colon].trim();
    if name.is_empty() {
        return Err(ParseError::new(
            line_number,
            line,
            ParseErrorKind::EmptyName,
            (colon, 1).into(),
        ));
    }

    let rest_start = colon + NAME_SEPARATOR.len_utf8();
    let rest = &line[rest_start..];
    if rest.trim().is_empty() {
        return Ok(Some(Declaration {
            name,
            dependencies: Vec::new(),
        }));
    }

    let mut dependencies = Vec::new();
    let mut offset = rest_start;
    for token in rest.split(DEPENDENCY_SEPARATOR) {
        let dependency = token.trim();
        if dependency.is_empty() {
            return Err(ParseError::new(
                line_number,
                line,
                ParseErrorKind::EmptyDependency,
                (offset, token.len()).into(),
            ));
        }
        dependencies.push(dependency);
        offset += token.len() + DEPENDENCY_SEPARATOR.len_utf8();
    }

    Ok(Some(Declaration { name, dependencies }))
}
