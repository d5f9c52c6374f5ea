//! Basic text-mode graphing calculator.
//!
//! This module plots single-variable expressions onto a grid of characters, suitable for printing
//! to a terminal.
//!
//! To plot, create a [`Graph`] and add expressions to it. Then, call [`Graph::draw()`] to render
//! the graph to a [`Canvas`], which can be printed directly.
//!
//! # Adding expressions
//!
//! The argument to [`Graph::try_add_expr()`] is any expression that can be parsed by
//! [`calc_parser`] as an [`Expr`]. The expression is plotted as `y = expr`, with the variable `x`
//! bound to the horizontal coordinate. Points at which the expression fails to evaluate, such as
//! `ln(x)` for `x <= 0`, are left blank.
//!
//! # Example
//!
//! ```
//! use calc_graph::{Graph, GraphOptions};
//!
//! # fn main() -> Result<(), calc_error::Error> {
//! let mut graph = Graph::with_options(GraphOptions::default().canvas_size(40, 12));
//! graph.try_add_expr("x^2 - 4")?
//!     .auto_scale_y();
//!
//! let canvas = graph.draw();
//! assert_eq!(canvas.height(), 12);
//! println!("{}", canvas);
//! # Ok(())
//! # }
//! ```

mod canvas;
mod eval;
pub mod opts;
pub mod point;

use calc_compute::numerical::ctxt::Ctxt;
use calc_error::Error;
use calc_parser::parser::{ast::expr::Expr, Parser};
use eval::{sample_columns, sample_evenly};
pub use canvas::Canvas;
pub use opts::GraphOptions;
pub use point::{CanvasPoint, GraphPoint};

/// The number of samples taken across the x-range by [`Graph::auto_scale_y`].
const AUTO_SCALE_SAMPLES: usize = 101;

/// An expression to plot, along with the character its curve is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphExpr {
    /// The expression to plot.
    pub expr: Expr,

    /// The character to draw the curve with.
    pub symbol: char,
}

/// A graph containing expressions to draw.
///
/// See the [module-level documentation](self) for more information.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The expressions to draw, in the order they were added.
    pub expressions: Vec<GraphExpr>,

    /// Variables available to the expressions, other than `x`.
    pub ctxt: Ctxt,

    /// The rendering options for the graph.
    pub options: GraphOptions,
}

impl Graph {
    /// Create a new, empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Create a new graph with the given options.
    pub fn with_options(options: GraphOptions) -> Graph {
        Graph {
            options,
            ..Graph::default()
        }
    }

    /// Set the variables available to the expressions. A binding for `x` is shadowed while
    /// sampling.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn set_ctxt(&mut self, ctxt: Ctxt) -> &mut Self {
        self.ctxt = ctxt;
        self
    }

    /// Add an expression to the graph, drawn with the given character.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn add(&mut self, expr: Expr, symbol: char) -> &mut Self {
        self.expressions.push(GraphExpr { expr, symbol });
        self
    }

    /// Tries to parse the given expression and add it to the graph, drawn with
    /// [`GraphOptions::curve_char`].
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn try_add_expr(&mut self, expr: &str) -> Result<&mut Self, Error> {
        let expr = Parser::new(expr).try_parse_full::<Expr>()?;
        let symbol = self.options.curve_char;
        Ok(self.add(expr, symbol))
    }

    /// Fit the visible y-range to the values of the expressions across the visible x-range.
    ///
    /// Each expression is sampled at evenly spaced points, and the y-range is set to span the
    /// smallest and largest finite values, padded on both sides by 15% of that span. The padding
    /// is at least `1.0`, and grows with the magnitude of the values so the range never collapses
    /// to a point. If no expression produces a finite value, the y-range is left unchanged.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn auto_scale_y(&mut self) -> &mut Self {
        let range = self.expressions
            .iter()
            .flat_map(|graph_expr| {
                sample_evenly(&graph_expr.expr, &self.ctxt, self.options, AUTO_SCALE_SAMPLES)
            })
            .fold(None, |range: Option<(f64, f64)>, point| match range {
                Some((min, max)) => Some((min.min(point.1), max.max(point.1))),
                None => Some((point.1, point.1)),
            });

        let Some((min, max)) = range else {
            log::debug!("auto-scale found no finite values; keeping y-range {:?}", self.options.y_range());
            return self;
        };

        let magnitude = max.abs().max(min.abs());
        let padding = ((max - min) * 0.15)
            .max(magnitude * f64::EPSILON * 4.0)
            .max(1.0);
        let (x_min, x_max) = self.options.x_range();
        self.options = self.options.bounds(x_min, x_max, min - padding, max + padding);
        log::debug!("auto-scaled y-range to {:?}", self.options.y_range());
        self
    }

    /// Draws the graph to a new [`Canvas`] with the graph's canvas size.
    ///
    /// Grid marks are drawn first, then the axes, then each expression's curve in the order the
    /// expressions were added, so later curves overwrite earlier ones.
    pub fn draw(&self) -> Canvas {
        let mut canvas = Canvas::new(
            self.options.canvas_size.0 as usize,
            self.options.canvas_size.1 as usize,
        );

        if self.options.show_grid {
            self.draw_grid(&mut canvas);
        }

        if self.options.show_axes {
            self.draw_axes(&mut canvas);
        }

        self.draw_expressions(&mut canvas);
        canvas
    }

    /// Returns the columns holding the integer x-values in view, skipping `x = 0`. Returns
    /// nothing if there are more such values than columns.
    fn grid_columns(&self) -> Vec<usize> {
        let y = self.options.center.1;
        integers_in(self.options.x_range(), self.options.canvas_size.0)
            .filter_map(|x| self.options.to_cell(GraphPoint(x, y)))
            .map(|cell| cell.0)
            .collect()
    }

    /// Returns the rows holding the integer y-values in view, skipping `y = 0`. Returns nothing
    /// if there are more such values than rows.
    fn grid_rows(&self) -> Vec<usize> {
        let x = self.options.center.0;
        integers_in(self.options.y_range(), self.options.canvas_size.1)
            .filter_map(|y| self.options.to_cell(GraphPoint(x, y)))
            .map(|cell| cell.1)
            .collect()
    }

    /// Marks each cell where an integer grid column crosses an integer grid row.
    fn draw_grid(&self, canvas: &mut Canvas) {
        let rows = self.grid_rows();
        for column in self.grid_columns() {
            for &row in &rows {
                canvas.set(CanvasPoint(column, row), self.options.grid_char);
            }
        }
    }

    /// Draws the `x = 0` and `y = 0` axes, if they are in view.
    fn draw_axes(&self, canvas: &mut Canvas) {
        let GraphPoint(center_x, center_y) = self.options.center;
        if let Some(cell) = self.options.to_cell(GraphPoint(0.0, center_y)) {
            canvas.fill_column(cell.0, self.options.axis_char);
        }
        if let Some(cell) = self.options.to_cell(GraphPoint(center_x, 0.0)) {
            canvas.fill_row(cell.1, self.options.axis_char);
        }
    }

    /// Draws every sampled point of each expression that lands inside the canvas.
    fn draw_expressions(&self, canvas: &mut Canvas) {
        for graph_expr in &self.expressions {
            for point in sample_columns(&graph_expr.expr, &self.ctxt, self.options) {
                if let Some(cell) = self.options.to_cell(point) {
                    canvas.set(cell, graph_expr.symbol);
                }
            }
        }
    }
}

/// Returns the non-zero integers in the inclusive range, or nothing if there are more than
/// `limit` of them.
fn integers_in((min, max): (f64, f64), limit: u16) -> impl Iterator<Item = f64> {
    let (first, last) = (min.ceil(), max.floor());
    let dense = !(first.is_finite() && last.is_finite()) || last - first + 1.0 > limit as f64;
    let count = if dense || last < first { 0 } else { (last - first) as u64 + 1 };

    (0..count)
        .map(move |i| first + i as f64)
        .filter(|&k| k != 0.0)
}
