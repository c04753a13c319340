//! Positional message templates
//!
//! Templates reference their arguments by 1-based position: `%1%`, `%2%`, ...
//! An argument may be referenced any number of times, in any order. `%%`
//! produces a literal percent sign. printf-style directives (`%s`, `%d`,
//! `%1$s`) are not recognized and fail with [`FormatError::BadDirective`].
//!
//! ```
//! use poison_log::template::format_template;
//!
//! let out = format_template("%1% and %2%", &[&"a", &2]).unwrap();
//! assert_eq!(out, "a and 2");
//! ```

use std::fmt::{self, Display, Write};

use crate::error::FormatError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Percent,
    Arg(usize),
}

/// A parsed template, ready to render against an argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pieces: Vec<Piece<'a>>,
    arity: usize,
}

impl<'a> Template<'a> {
    /// Parse a template, rejecting malformed directives
    pub fn parse(source: &'a str) -> Result<Self, FormatError> {
        let bytes = source.as_bytes();
        let mut pieces = Vec::new();
        let mut arity = 0;
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            if literal_start < i {
                pieces.push(Piece::Literal(&source[literal_start..i]));
            }

            if bytes.get(i + 1) == Some(&b'%') {
                pieces.push(Piece::Percent);
                i += 2;
                literal_start = i;
                continue;
            }

            let digits_start = i + 1;
            let mut end = digits_start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end == digits_start || bytes.get(end) != Some(&b'%') {
                return Err(FormatError::BadDirective { position: i });
            }
            let index: usize = source[digits_start..end]
                .parse()
                .map_err(|_| FormatError::BadDirective { position: i })?;
            if index == 0 {
                return Err(FormatError::BadDirective { position: i });
            }

            arity = arity.max(index);
            pieces.push(Piece::Arg(index - 1));
            i = end + 1;
            literal_start = i;
        }

        if literal_start < bytes.len() {
            pieces.push(Piece::Literal(&source[literal_start..]));
        }

        Ok(Self { pieces, arity })
    }

    /// Number of arguments the template consumes (its highest position)
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Substitute `args`, which must match the template's arity exactly
    pub fn render(&self, args: &[&dyn Display]) -> Result<String, FormatError> {
        if args.len() < self.arity {
            return Err(FormatError::TooFewArguments {
                expected: self.arity,
                supplied: args.len(),
            });
        }
        if args.len() > self.arity {
            return Err(FormatError::TooManyArguments {
                consumed: self.arity,
                supplied: args.len(),
            });
        }

        let mut out = String::new();
        for piece in &self.pieces {
            // writing to a String is infallible
            let _ = match piece {
                Piece::Literal(text) => out.write_str(text),
                Piece::Percent => out.write_char('%'),
                Piece::Arg(index) => write!(out, "{}", args[*index]),
            };
        }
        Ok(out)
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => f.write_str(text)?,
                Piece::Percent => f.write_str("%%")?,
                Piece::Arg(index) => write!(f, "%{}%", index + 1)?,
            }
        }
        Ok(())
    }
}

/// Parse `template` and substitute `args` into it
pub fn format_template(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    Template::parse(template)?.render(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        assert_eq!(format_template("%1% and %2%", &[&"a", &2]).unwrap(), "a and 2");
        assert_eq!(format_template("fail: %1%", &[&42]).unwrap(), "fail: 42");
    }

    #[test]
    fn test_reorder_and_repeat() {
        let out = format_template("%2%-%1%-%2%", &[&"x", &"y"]).unwrap();
        assert_eq!(out, "y-x-y");
    }

    #[test]
    fn test_no_directives() {
        assert_eq!(format_template("plain text", &[]).unwrap(), "plain text");
        assert_eq!(format_template("", &[]).unwrap(), "");
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(format_template("100%% of %1%", &[&"it"]).unwrap(), "100% of it");
    }

    #[test]
    fn test_unicode_literals() {
        assert_eq!(format_template("ünï %1% çødé", &[&'→']).unwrap(), "ünï → çødé");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = format_template("%1% %3%", &[&1, &2]).unwrap_err();
        assert_eq!(err, FormatError::TooFewArguments { expected: 3, supplied: 2 });
    }

    #[test]
    fn test_too_many_arguments() {
        let err = format_template("%1%", &[&1, &2]).unwrap_err();
        assert_eq!(err, FormatError::TooManyArguments { consumed: 1, supplied: 2 });

        let err = format_template("nothing", &[&1]).unwrap_err();
        assert_eq!(err, FormatError::TooManyArguments { consumed: 0, supplied: 1 });
    }

    #[test]
    fn test_bad_directives() {
        assert_eq!(
            format_template("50% off", &[]).unwrap_err(),
            FormatError::BadDirective { position: 2 }
        );
        assert_eq!(
            format_template("%0%", &[&1]).unwrap_err(),
            FormatError::BadDirective { position: 0 }
        );
        assert_eq!(
            format_template("ends with %1", &[&1]).unwrap_err(),
            FormatError::BadDirective { position: 10 }
        );
        assert_eq!(
            format_template("%s", &[&1]).unwrap_err(),
            FormatError::BadDirective { position: 0 }
        );
    }

    #[test]
    fn test_printf_directives_are_rejected() {
        for (template, position) in [("n=%d", 2), ("%1$s", 0), ("%2$d and %1%", 0), ("%1% %-5s", 4)] {
            assert_eq!(
                format_template(template, &[&1, &2]).unwrap_err(),
                FormatError::BadDirective { position },
                "{template}"
            );
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Template::parse("%2% %1% %2%").unwrap().arity(), 2);
        assert_eq!(Template::parse("%%").unwrap().arity(), 0);
    }

    #[test]
    fn test_display_round_trips_source() {
        let source = "a %1% b %% c %2%";
        assert_eq!(Template::parse(source).unwrap().to_string(), source);
    }
}
