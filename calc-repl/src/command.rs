use calc_attrs::ErrorKind;
use calc_error::{Error, ErrorKind};
use calc_parser::tokenizer::{Lexer, TokenKind};

/// The command name was not recognized.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", name),
    labels = ["this command"],
    help = "type `help` to list the available commands",
)]
pub struct UnknownCommand {
    /// The name that was entered.
    pub name: String,
}

/// A `let` command without an `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing `=` in `let` command",
    labels = [""],
    help = "to define a variable, type: let <name> = <expression>",
)]
pub struct MissingAssignment;

/// The name on the left of a `let` command cannot be bound.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as a variable name", name),
    labels = ["this name"],
    help = "variable names start with a letter or `_`, and cannot be the name of a function",
)]
pub struct InvalidVariableName {
    /// The name that was entered.
    pub name: String,
}

/// Optional arguments of the `graph` command. Missing arguments use the graph defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphArgs<'a> {
    /// The expression to plot.
    pub expr: &'a str,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl<'a> GraphArgs<'a> {
    /// Splits the arguments of a `graph` command into the expression and its options.
    ///
    /// The expression ends at the first whitespace-separated word containing a `:`. Every word
    /// after that is an option of the form `name:value`. Options with an unknown name or an
    /// invalid value are ignored with a warning.
    pub fn parse(rest: &'a str) -> Self {
        let words = words_with_offsets(rest);
        let options_start = words.iter()
            .find(|(_, word)| word.contains(':'))
            .map_or(rest.len(), |(start, _)| *start);

        let mut args = GraphArgs {
            expr: rest[..options_start].trim(),
            ..Default::default()
        };

        for (_, word) in words.into_iter().filter(|(start, _)| *start >= options_start) {
            args.apply_option(word);
        }

        args
    }

    /// Applies a single `name:value` option.
    fn apply_option(&mut self, word: &str) {
        let Some((name, value)) = word.split_once(':') else {
            log::warn!("ignoring `{}`: graph options are written as `name:value`", word);
            return;
        };

        match name {
            "xmin" => self.x_min = parse_bound(name, value).or(self.x_min),
            "xmax" => self.x_max = parse_bound(name, value).or(self.x_max),
            "ymin" => self.y_min = parse_bound(name, value).or(self.y_min),
            "ymax" => self.y_max = parse_bound(name, value).or(self.y_max),
            "width" => self.width = parse_size(name, value).or(self.width),
            "height" => self.height = parse_size(name, value).or(self.height),
            _ => log::warn!("ignoring unknown graph option `{}`", name),
        }
    }
}

/// Parses the value of a bound option, which must be a finite number.
fn parse_bound(name: &str, value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::warn!("ignoring `{}:{}`: expected a finite number", name, value);
            None
        },
    }
}

/// Parses the value of a size option, which must be a positive integer.
fn parse_size(name: &str, value: &str) -> Option<u16> {
    match value.parse::<u16>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            log::warn!("ignoring `{}:{}`: expected a positive integer up to {}", name, value, u16::MAX);
            None
        },
    }
}

/// Returns the whitespace-separated words of the input, with the byte offset each word starts
/// at.
fn words_with_offsets(input: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(word_start)) => {
                words.push((word_start, &input[word_start..i]));
                start = None;
            },
            (false, None) => start = Some(i),
            _ => (),
        }
    }

    if let Some(word_start) = start {
        words.push((word_start, &input[word_start..]));
    }

    words
}

/// A command entered by the user.
///
/// Commands that take an expression borrow it from the input line, so errors can be reported
/// against it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// `parse <expr>`: print the syntax tree.
    Parse(&'a str),

    /// `eval <expr>`: evaluate with the session's variables.
    Eval(&'a str),

    /// `let <name> = <expr>`: evaluate and bind a session variable.
    Let {
        name: &'a str,
        expr: &'a str,
    },

    /// `diff <expr>`: differentiate with respect to `x`.
    Diff(&'a str),

    /// `integrate <expr>`: integrate with respect to `x`.
    Integrate(&'a str),

    /// `simplify <expr>`
    Simplify(&'a str),

    /// `solve <expr>`: solve `<expr> = 0` for `x`.
    Solve(&'a str),

    /// `factor <expr>`
    Factor(&'a str),

    /// `all <expr>`: parse, differentiate, and integrate.
    All(&'a str),

    /// `graph <expr> [options]`: plot the expression.
    Graph(GraphArgs<'a>),

    /// `help`
    Help,

    /// `quit` or `exit`
    Quit,

    /// A blank line.
    Empty,
}

impl<'a> Command<'a> {
    /// Parses a command from a line of input. Errors are spanned against the whole line.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Command::Empty);
        }

        let start = line.len() - line.trim_start().len();
        let (name, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        let rest = rest.trim_start();

        Ok(match name {
            "parse" => Command::Parse(rest),
            "eval" => Command::Eval(rest),
            "let" => {
                let rest_start = start + (trimmed.len() - rest.len());
                parse_let(rest, rest_start)?
            },
            "diff" => Command::Diff(rest),
            "integrate" => Command::Integrate(rest),
            "simplify" => Command::Simplify(rest),
            "solve" => Command::Solve(rest),
            "factor" => Command::Factor(rest),
            "all" => Command::All(rest),
            "graph" => Command::Graph(GraphArgs::parse(rest)),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(Error::new(
                vec![start..start + name.len()],
                UnknownCommand { name: name.to_string() },
            )),
        })
    }
}

/// Parses the `<name> = <expr>` part of a `let` command, starting at byte `offset` of the line.
fn parse_let(rest: &str, offset: usize) -> Result<Command<'_>, Error> {
    let Some((name_part, expr)) = rest.split_once('=') else {
        return Err(Error::new(vec![offset..offset + rest.len()], MissingAssignment));
    };

    let name = name_part.trim();
    let name_start = offset + (name_part.len() - name_part.trim_start().len());
    if !is_variable_name(name) {
        return Err(Error::new(
            vec![name_start..name_start + name.len()],
            InvalidVariableName { name: name.to_string() },
        ));
    }

    Ok(Command::Let { name, expr: expr.trim() })
}

/// Returns true if the tokenizer reads the whole input as a single variable.
fn is_variable_name(name: &str) -> bool {
    let mut lexer = Lexer::new(name);
    let first = lexer.next_token();
    first.kind == TokenKind::Variable
        && first.span == (0..name.len())
        && lexer.next_token().is_end()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expression_commands() {
        assert_eq!(Command::parse("eval 1 + 2").unwrap(), Command::Eval("1 + 2"));
        assert_eq!(Command::parse("  diff   x^2 ").unwrap(), Command::Diff("x^2"));
        assert_eq!(Command::parse("integrate\tsin(x)").unwrap(), Command::Integrate("sin(x)"));
        assert_eq!(Command::parse("factor").unwrap(), Command::Factor(""));
        assert_eq!(Command::parse("all x").unwrap(), Command::All("x"));
    }

    #[test]
    fn bare_commands() {
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse(" exit ").unwrap(), Command::Quit);
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("  derive x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownCommand>(), Some(&UnknownCommand { name: "derive".to_string() }));
        assert_eq!(err.spans, vec![2..8]);
    }

    #[test]
    fn let_command() {
        assert_eq!(
            Command::parse("let a = 2 + 3").unwrap(),
            Command::Let { name: "a", expr: "2 + 3" },
        );
        assert_eq!(
            Command::parse("let x_1=4").unwrap(),
            Command::Let { name: "x_1", expr: "4" },
        );
    }

    #[test]
    fn let_errors() {
        let err = Command::parse("let a 2").unwrap_err();
        assert!(err.is::<MissingAssignment>());
        assert_eq!(err.spans, vec![4..7]);

        let err = Command::parse("let sin = 2").unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidVariableName>(), Some(&InvalidVariableName { name: "sin".to_string() }));
        assert_eq!(err.spans, vec![4..7]);

        let err = Command::parse("let  2a = 2").unwrap_err();
        assert!(err.is::<InvalidVariableName>());
        assert_eq!(err.spans, vec![5..7]);

        assert!(Command::parse("let = 2").unwrap_err().is::<InvalidVariableName>());
    }

    #[test]
    fn graph_without_options() {
        assert_eq!(
            Command::parse("graph x^2 + 1").unwrap(),
            Command::Graph(GraphArgs { expr: "x^2 + 1", ..Default::default() }),
        );
    }

    #[test]
    fn graph_options() {
        let args = GraphArgs::parse("sin(x) * 2 xmin:-5 xmax:5 height:10 width:40");
        assert_eq!(args, GraphArgs {
            expr: "sin(x) * 2",
            x_min: Some(-5.0),
            x_max: Some(5.0),
            width: Some(40),
            height: Some(10),
            ..Default::default()
        });
    }

    #[test]
    fn bad_graph_options_are_ignored() {
        let args = GraphArgs::parse("x ymin:abc ymax:3 width:0 depth:2 stray height:inf");
        assert_eq!(args, GraphArgs {
            expr: "x",
            y_max: Some(3.0),
            ..Default::default()
        });
    }

    #[test]
    fn words() {
        assert_eq!(
            words_with_offsets(" ab  c\td "),
            vec![(1, "ab"), (5, "c"), (7, "d")],
        );
        assert!(words_with_offsets("   ").is_empty());
    }
}
