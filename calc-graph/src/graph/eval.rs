use calc_compute::numerical::{ctxt::Ctxt, eval::Eval};
use calc_parser::parser::ast::expr::Expr;
use rayon::prelude::*;
use super::{GraphOptions, GraphPoint};

/// The name of the variable bound to the horizontal coordinate.
pub(crate) const INDEPENDENT: &str = "x";

/// Evaluates the expression at each of the given x-values in parallel, keeping the points whose
/// evaluation succeeded with a finite result.
///
/// Every sample binds [`INDEPENDENT`] in its own copy of `ctxt`, so variables already bound in
/// `ctxt` are visible to the expression.
pub(crate) fn sample_at(expr: &Expr, ctxt: &Ctxt, xs: &[f64]) -> Vec<GraphPoint<f64>> {
    let points = xs.par_iter()
        .map_init(
            || ctxt.clone(),
            |ctxt, &x| {
                ctxt.add_var(INDEPENDENT, x);
                expr.eval(ctxt)
                    .ok()
                    .filter(|y| y.is_finite())
                    .map(|y| GraphPoint(x, y))
            },
        )
        .collect::<Vec<_>>();

    let total = points.len();
    let kept = points.into_iter().flatten().collect::<Vec<_>>();
    log::debug!("sampled `{}`: {} points kept, {} skipped", expr, kept.len(), total - kept.len());
    kept
}

/// Evaluates the expression once per canvas column, at the graph x-value of the column's center.
pub(crate) fn sample_columns(expr: &Expr, ctxt: &Ctxt, options: GraphOptions) -> Vec<GraphPoint<f64>> {
    let xs = (0..options.canvas_size.0)
        .map(|column| options.x_to_graph(column as f64 + 0.5))
        .collect::<Vec<_>>();
    sample_at(expr, ctxt, &xs)
}

/// Evaluates the expression at `count` evenly spaced x-values spanning the visible x-range,
/// including both edges.
pub(crate) fn sample_evenly(
    expr: &Expr,
    ctxt: &Ctxt,
    options: GraphOptions,
    count: usize,
) -> Vec<GraphPoint<f64>> {
    let (min, max) = options.x_range();
    let step = if count > 1 { (max - min) / (count - 1) as f64 } else { 0.0 };
    let xs = (0..count)
        .map(|i| min + step * i as f64)
        .collect::<Vec<_>>();
    sample_at(expr, ctxt, &xs)
}

#[cfg(test)]
mod tests {
    use calc_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn one_sample_per_column() {
        let options = GraphOptions::default().canvas_size(4, 4).bounds(0.0, 4.0, 0.0, 4.0);
        let points = sample_columns(&parse("2x"), &Ctxt::new(), options);
        assert_eq!(points, vec![
            GraphPoint(0.5, 1.0),
            GraphPoint(1.5, 3.0),
            GraphPoint(2.5, 5.0),
            GraphPoint(3.5, 7.0),
        ]);
    }

    #[test]
    fn failures_are_skipped() {
        let points = sample_at(&parse("ln(x)"), &Ctxt::new(), &[-1.0, 0.0, 1.0]);
        assert_eq!(points, vec![GraphPoint(1.0, 0.0)]);

        let points = sample_at(&parse("1 / x"), &Ctxt::new(), &[0.0, 2.0]);
        assert_eq!(points, vec![GraphPoint(2.0, 0.5)]);
    }

    #[test]
    fn bound_variables_are_visible() {
        let ctxt = [("a", 3.0)].into_iter().collect::<Ctxt>();
        let points = sample_at(&parse("a + x"), &ctxt, &[1.0]);
        assert_eq!(points, vec![GraphPoint(1.0, 4.0)]);

        // unbound variables fail every sample
        assert!(sample_at(&parse("b + x"), &Ctxt::new(), &[1.0, 2.0]).is_empty());
    }

    #[test]
    fn even_samples_include_edges() {
        let options = GraphOptions::default().bounds(-1.0, 1.0, -1.0, 1.0);
        let points = sample_evenly(&parse("x"), &Ctxt::new(), options, 5);
        let xs = points.iter().map(|point| point.0).collect::<Vec<_>>();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }
}
