use calc_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::SymExpr,
    Engine,
};
use calc_error::Error;
use calc_graph::{Graph, GraphOptions};
use calc_parser::parser::{ast::expr::Expr, Parser};
use crate::command::{Command, GraphArgs};

/// The variable that calculus, solving, and plotting work with.
const VAR: &str = "x";

/// The text printed by the `help` command.
pub const HELP: &str = "\
commands:
  parse <expr>          show how the expression is parsed
  eval <expr>           evaluate the expression
  let <name> = <expr>   evaluate the expression and store it in a variable
  diff <expr>           differentiate with respect to x
  integrate <expr>      integrate with respect to x
  simplify <expr>       simplify the expression
  solve <expr>          solve <expr> = 0 for x
  factor <expr>         factor the expression
  all <expr>            parse, differentiate, and integrate
  graph <expr> [xmin:<n>] [xmax:<n>] [ymin:<n>] [ymax:<n>] [width:<n>] [height:<n>]
                        plot y = <expr>; the y-range fits the curve unless ymin or ymax is given
  help                  show this message
  quit, exit            leave";

/// Something to show the user after running a command.
#[derive(Debug)]
pub enum Output {
    /// Text to print to stdout.
    Text(String),

    /// An error to report against the given source text.
    Error {
        source: String,
        error: Error,
    },

    /// The user asked to leave.
    Quit,
}

impl Output {
    /// Creates an error output, reporting against the given source.
    fn error(source: &str, error: Error) -> Self {
        Output::Error { source: source.to_string(), error }
    }
}

/// The state kept between commands.
#[derive(Debug, Default)]
pub struct Session {
    /// Variables bound with `let`.
    ctxt: Ctxt,

    /// The engine used by the symbolic commands.
    engine: Engine,
}

impl Session {
    /// Creates a session without variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables bound in this session.
    pub fn ctxt(&self) -> &Ctxt {
        &self.ctxt
    }

    /// Runs one line of input, returning what to show the user.
    pub fn run(&mut self, line: &str) -> Vec<Output> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return vec![Output::error(line, err)],
        };

        match command {
            Command::Parse(src) => with_source(src, parse(src).map(|expr| vec![expr.to_string()])),
            Command::Eval(src) => with_source(src, self.eval(src).map(|value| vec![value.to_string()])),
            Command::Let { name, expr } => with_source(expr, self.bind(name, expr)),
            Command::Diff(src) => with_source(src, self.diff(src)),
            Command::Integrate(src) => with_source(src, self.integrate(src)),
            Command::Simplify(src) => with_source(src, self.simplify(src)),
            Command::Solve(src) => with_source(src, self.solve(src)),
            Command::Factor(src) => with_source(src, self.factor(src)),
            Command::All(src) => self.all(src),
            Command::Graph(args) => with_source(args.expr, self.graph(&args)),
            Command::Help => vec![Output::Text(HELP.to_string())],
            Command::Quit => vec![Output::Quit],
            Command::Empty => Vec::new(),
        }
    }

    /// Evaluates the expression with the session's variables.
    fn eval(&self, src: &str) -> Result<f64, Error> {
        parse(src)?.eval(&self.ctxt)
    }

    fn bind(&mut self, name: &str, src: &str) -> Result<Vec<String>, Error> {
        let value = self.eval(src)?;
        self.ctxt.add_var(name, value);
        log::debug!("bound `{}` to {}", name, value);
        Ok(vec![format!("{} = {}", name, value)])
    }

    /// Parses the expression into the engine, returning the parsed form.
    fn load(&mut self, src: &str) -> Result<SymExpr, Error> {
        self.engine.parse_from_string(src).cloned()
    }

    fn diff(&mut self, src: &str) -> Result<Vec<String>, Error> {
        self.load(src)?;
        let derivative = self.engine.differentiate(VAR)?;
        let simplified = derivative.simplify()?;
        Ok(vec![
            format!("d/d{}: {}", VAR, derivative),
            format!("simplified: {}", simplified),
        ])
    }

    fn integrate(&mut self, src: &str) -> Result<Vec<String>, Error> {
        self.load(src)?;
        let integral = self.engine.integrate(VAR)?;
        let simplified = integral.simplify()?;
        Ok(vec![
            format!("integral: {} + C", integral),
            format!("simplified: {} + C", simplified),
        ])
    }

    fn simplify(&mut self, src: &str) -> Result<Vec<String>, Error> {
        self.load(src)?;
        Ok(vec![self.engine.simplify()?.to_string()])
    }

    fn solve(&mut self, src: &str) -> Result<Vec<String>, Error> {
        self.load(src)?;
        Ok(vec![format!("{} = {}", VAR, self.engine.solve(VAR)?)])
    }

    fn factor(&mut self, src: &str) -> Result<Vec<String>, Error> {
        self.load(src)?;
        let factors = self.engine.factor()?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        Ok(vec![factors.join(" * ")])
    }

    /// Shows the parsed form, derivative, and integral of the expression. A failure of the
    /// derivative or integral is reported without stopping the other.
    fn all(&mut self, src: &str) -> Vec<Output> {
        let parsed = match self.load(src) {
            Ok(parsed) => parsed,
            Err(err) => return vec![Output::error(src, err)],
        };

        let derivative = self.engine.differentiate(VAR)
            .and_then(|derivative| derivative.simplify())
            .map(|derivative| Output::Text(format!("d/d{}: {}", VAR, derivative)))
            .unwrap_or_else(|err| Output::error(src, err));
        let integral = self.engine.integrate(VAR)
            .and_then(|integral| integral.simplify())
            .map(|integral| Output::Text(format!("integral: {} + C", integral)))
            .unwrap_or_else(|err| Output::error(src, err));

        vec![Output::Text(format!("parsed: {}", parsed)), derivative, integral]
    }

    fn graph(&self, args: &GraphArgs) -> Result<Vec<String>, Error> {
        let expr = parse(args.expr)?;
        let options = graph_options(args);

        let mut graph = Graph::with_options(options);
        graph.set_ctxt(self.ctxt.clone()).add(expr, options.curve_char);
        if args.y_min.is_none() && args.y_max.is_none() {
            graph.auto_scale_y();
        }

        let (x_min, x_max) = graph.options.x_range();
        let (y_min, y_max) = graph.options.y_range();
        Ok(vec![
            format!("x: [{}, {}], y: [{}, {}]", x_min, x_max, round(y_min), round(y_max)),
            graph.draw().to_string(),
        ])
    }
}

/// Parses the source into a syntax tree.
fn parse(src: &str) -> Result<Expr, Error> {
    Parser::new(src).try_parse_full::<Expr>()
}

/// Turns the lines produced by a command into text outputs, or its error into an error output
/// reported against `src`.
fn with_source(src: &str, result: Result<Vec<String>, Error>) -> Vec<Output> {
    match result {
        Ok(lines) => lines.into_iter().map(Output::Text).collect(),
        Err(err) => vec![Output::error(src, err)],
    }
}

/// Builds the options of a `graph` command. A range whose minimum is not below its maximum is
/// replaced by the default range.
fn graph_options(args: &GraphArgs) -> GraphOptions {
    let defaults = GraphOptions::default();
    let mut options = defaults.canvas_size(
        args.width.unwrap_or(defaults.canvas_size.0),
        args.height.unwrap_or(defaults.canvas_size.1),
    );

    let x_range = checked_range("x", defaults.x_range(), args.x_min, args.x_max);
    let y_range = checked_range("y", defaults.y_range(), args.y_min, args.y_max);
    options = options.bounds(x_range.0, x_range.1, y_range.0, y_range.1);
    options
}

/// Applies the given bounds to the default range, falling back to the default if the result is
/// empty.
fn checked_range(
    axis: &str,
    default: (f64, f64),
    min: Option<f64>,
    max: Option<f64>,
) -> (f64, f64) {
    let range = (min.unwrap_or(default.0), max.unwrap_or(default.1));
    if range.0 < range.1 {
        range
    } else {
        log::warn!("ignoring empty {}-range [{}, {}]", axis, range.0, range.1);
        default
    }
}

/// Rounds to 3 decimal places for display.
fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use calc_compute::numerical::error::kind::{DivisionByZero, UndefinedVariable};
    use calc_compute::symbolic::error::UnsupportedIntegration;
    use calc_parser::parser::error::kind::UnexpectedEof;
    use crate::command::UnknownCommand;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Runs the line, returning the printed text, or panicking on any other output.
    fn text(session: &mut Session, line: &str) -> Vec<String> {
        session.run(line)
            .into_iter()
            .map(|output| match output {
                Output::Text(text) => text,
                other => panic!("expected text, got {:?}", other),
            })
            .collect()
    }

    /// Runs the line, expecting a single error.
    fn error(session: &mut Session, line: &str) -> (String, Error) {
        let mut outputs = session.run(line);
        assert_eq!(outputs.len(), 1);
        match outputs.remove(0) {
            Output::Error { source, error } => (source, error),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn parse_and_eval() {
        let mut session = Session::new();
        assert_eq!(text(&mut session, "parse 1 + 2 * 3"), vec!["(1 + (2 * 3))"]);
        assert_eq!(text(&mut session, "eval 2^3^2"), vec!["512"]);
        assert_eq!(text(&mut session, "eval 1 / 4"), vec!["0.25"]);
    }

    #[test]
    fn variables() {
        let mut session = Session::new();
        assert_eq!(text(&mut session, "let a = 2 + 3"), vec!["a = 5"]);
        assert_eq!(text(&mut session, "eval 2a"), vec!["10"]);
        assert_eq!(session.ctxt().get_var("a"), Some(5.0));

        let (source, err) = error(&mut session, "eval b + 1");
        assert_eq!(source, "b + 1");
        assert!(err.is::<UndefinedVariable>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn failed_let_keeps_old_value() {
        let mut session = Session::new();
        text(&mut session, "let a = 1");

        let (source, err) = error(&mut session, "let a = 1 / 0");
        assert_eq!(source, "1 / 0");
        assert!(err.is::<DivisionByZero>());
        assert_eq!(session.ctxt().get_var("a"), Some(1.0));
    }

    #[test]
    fn calculus() {
        let mut session = Session::new();
        assert_eq!(text(&mut session, "diff x^2"), vec!["d/dx: 2(x ^ 1)", "simplified: 2x"]);
        assert_eq!(
            text(&mut session, "integrate x^2")[1],
            "simplified: ((x ^ 3) / 3) + C",
        );
        assert_eq!(text(&mut session, "simplify x * 1 + 0"), vec!["x"]);
    }

    #[test]
    fn solve_and_factor() {
        let mut session = Session::new();
        assert_eq!(text(&mut session, "solve 2*x - 3"), vec!["x = 1.5"]);
        assert_eq!(text(&mut session, "factor x^2 + x"), vec!["x * (x + 1)"]);
    }

    #[test]
    fn all_reports_each_part() {
        let mut session = Session::new();
        let outputs = session.run("all sin(x)^2");
        assert_eq!(outputs.len(), 3);
        assert!(matches!(&outputs[0], Output::Text(text) if text == "parsed: (sin(x) ^ 2)"));
        assert!(matches!(&outputs[1], Output::Text(text) if text.starts_with("d/dx: ")));
        assert!(matches!(&outputs[2], Output::Error { error, .. } if error.is::<UnsupportedIntegration>()));
    }

    #[test]
    fn parse_errors_are_reported_against_the_expression() {
        let mut session = Session::new();
        let (source, err) = error(&mut session, "diff 2 +");
        assert_eq!(source, "2 +");
        assert!(err.is::<UnexpectedEof>());
    }

    #[test]
    fn unknown_command() {
        let mut session = Session::new();
        let (source, err) = error(&mut session, "derive x");
        assert_eq!(source, "derive x");
        assert!(err.is::<UnknownCommand>());
    }

    #[test]
    fn graph() {
        let mut session = Session::new();
        let lines = text(&mut session, "graph x xmin:-2.5 xmax:2.5 ymin:-2.5 ymax:2.5 width:5 height:5");
        assert_eq!(lines, vec![
            "x: [-2.5, 2.5], y: [-2.5, 2.5]".to_string(),
            ["..+.*", "..+*.", "++*++", ".*+..", "*.+.."].join("\n"),
        ]);
    }

    #[test]
    fn graph_auto_scales() {
        let mut session = Session::new();
        let lines = text(&mut session, "graph x^2 width:20 height:8");
        assert_eq!(lines[0], "x: [-10, 10], y: [-15, 115]");
        assert_eq!(lines[1].lines().count(), 8);
    }

    #[test]
    fn graph_empty_range_falls_back() {
        let options = graph_options(&GraphArgs {
            expr: "x",
            x_min: Some(3.0),
            x_max: Some(1.0),
            ..Default::default()
        });
        assert_eq!(options.x_range(), (-10.0, 10.0));
    }

    #[test]
    fn help_and_quit() {
        let mut session = Session::new();
        assert_eq!(text(&mut session, "help"), vec![HELP]);
        assert!(matches!(session.run("exit").as_slice(), [Output::Quit]));
        assert!(session.run("").is_empty());
    }
}
