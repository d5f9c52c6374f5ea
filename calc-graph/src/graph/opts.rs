use super::point::{CanvasPoint, GraphPoint};

/// Options to use when drawing a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphOptions {
    /// The width and height of the canvas, in character cells.
    ///
    /// The default value is `(80, 24)`.
    pub canvas_size: CanvasPoint<u16>,

    /// The `(x, y)` point at which to center the graph.
    ///
    /// For example, to place the origin at the center of the canvas, set this to `(0.0, 0.0)`.
    ///
    /// This field is recomputed by [`Graph::auto_scale_y`](super::Graph::auto_scale_y) and
    /// [`GraphOptions::bounds`].
    ///
    /// The default value is `(0.0, 0.0)`.
    pub center: GraphPoint<f64>,

    /// The `(x, y)` scale of the graph.
    ///
    /// The scale indicates the distance, in graph units, from the center of the canvas to the edge
    /// of the canvas. For example, when the graph is centered at `(0.0, 0.0)` with a scale of
    /// `(10.0, 10.0)`, the visible graph will be from `(x, y): (-10.0, -10.0)` to `(x, y): (10.0,
    /// 10.0)`.
    ///
    /// The default value is `(10.0, 10.0)`.
    pub scale: GraphPoint<f64>,

    /// Whether to mark the points where integer grid lines cross.
    ///
    /// The default value is `true`.
    pub show_grid: bool,

    /// Whether to draw the `x = 0` and `y = 0` axes.
    ///
    /// The default value is `true`.
    pub show_axes: bool,

    /// The character used for grid marks.
    pub grid_char: char,

    /// The character used for the axes.
    pub axis_char: char,

    /// The character used for curves added without an explicit symbol.
    pub curve_char: char,
}

/// The default options for a graph. Returns a [`GraphOptions`] with the following values:
///
/// - [`canvas_size`](GraphOptions::canvas_size): `(80, 24)`
/// - [`center`](GraphOptions::center): `(0.0, 0.0)`
/// - [`scale`](GraphOptions::scale): `(10.0, 10.0)`
/// - [`show_grid`](GraphOptions::show_grid): `true`
/// - [`show_axes`](GraphOptions::show_axes): `true`
/// - [`grid_char`](GraphOptions::grid_char): `'.'`
/// - [`axis_char`](GraphOptions::axis_char): `'+'`
/// - [`curve_char`](GraphOptions::curve_char): `'*'`
impl Default for GraphOptions {
    fn default() -> GraphOptions {
        GraphOptions {
            canvas_size: CanvasPoint(80, 24),
            center: GraphPoint(0.0, 0.0),
            scale: GraphPoint(10.0, 10.0),
            show_grid: true,
            show_axes: true,
            grid_char: '.',
            axis_char: '+',
            curve_char: '*',
        }
    }
}

impl GraphOptions {
    /// Set the canvas size. Returns an updated [`GraphOptions`] for chaining.
    pub fn canvas_size(mut self, width: u16, height: u16) -> Self {
        self.canvas_size = CanvasPoint(width, height);
        self
    }

    /// Set the center of the graph. Returns an updated [`GraphOptions`] for chaining.
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center = GraphPoint(x, y);
        self
    }

    /// Set the scale of the graph. Returns an updated [`GraphOptions`] for chaining.
    pub fn scale(mut self, x: f64, y: f64) -> Self {
        self.scale = GraphPoint(x, y);
        self
    }

    /// Set the visible region of the graph from its edges, recomputing the center and scale.
    /// Returns an updated [`GraphOptions`] for chaining.
    pub fn bounds(mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        self.center = GraphPoint((x_min + x_max) / 2.0, (y_min + y_max) / 2.0);
        self.scale = GraphPoint((x_max - x_min) / 2.0, (y_max - y_min) / 2.0);
        self
    }

    /// Set whether to draw grid marks. Returns an updated [`GraphOptions`] for chaining.
    pub fn show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Set whether to draw the axes. Returns an updated [`GraphOptions`] for chaining.
    pub fn show_axes(mut self, show_axes: bool) -> Self {
        self.show_axes = show_axes;
        self
    }

    /// The visible range of x-values, as `(min, max)`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.center.0 - self.scale.0, self.center.0 + self.scale.0)
    }

    /// The visible range of y-values, as `(min, max)`.
    pub fn y_range(&self) -> (f64, f64) {
        (self.center.1 - self.scale.1, self.center.1 + self.scale.1)
    }
}

impl GraphOptions {
    /// Converts an x-value in **graph** space to an x-value in **canvas** space.
    pub(crate) fn x_to_canvas(&self, x: f64) -> f64 {
        let graph_space_range = self.scale.0 * 2.0;

        // normalize x-value to [0.0, 1.0], where 0.0 indicates left-edge of visible graph, 1.0
        // indicates right-edge of visible graph
        let normalized = (x - self.center.0) / graph_space_range + 0.5;

        normalized * self.canvas_size.0 as f64
    }

    /// Converts a y-value in **graph** space to a y-value in **canvas** space.
    pub(crate) fn y_to_canvas(&self, y: f64) -> f64 {
        let graph_space_range = self.scale.1 * 2.0;

        // rows grow downwards, so 0.0 is the top edge
        let normalized = 0.5 - (y - self.center.1) / graph_space_range;

        normalized * self.canvas_size.1 as f64
    }

    /// Converts a point in **graph** space to **canvas** space.
    pub fn to_canvas(&self, point: GraphPoint<f64>) -> CanvasPoint<f64> {
        CanvasPoint(
            self.x_to_canvas(point.0),
            self.y_to_canvas(point.1),
        )
    }

    /// Converts an x-value in **canvas** space to an x-value in **graph** space.
    pub(crate) fn x_to_graph(&self, x: f64) -> f64 {
        let normalized = x / self.canvas_size.0 as f64;
        normalized * self.scale.0 * 2.0 + self.center.0 - self.scale.0
    }

    /// Converts a y-value in **canvas** space to a y-value in **graph** space.
    pub(crate) fn y_to_graph(&self, y: f64) -> f64 {
        let normalized = 1.0 - y / self.canvas_size.1 as f64;
        normalized * self.scale.1 * 2.0 + self.center.1 - self.scale.1
    }

    /// Converts a point in **canvas** space to **graph** space.
    pub fn to_graph(&self, point: CanvasPoint<f64>) -> GraphPoint<f64> {
        GraphPoint(
            self.x_to_graph(point.0),
            self.y_to_graph(point.1),
        )
    }

    /// Returns the character cell `(column, row)` containing the given graph point, or [`None`]
    /// if the point lies outside the visible graph.
    ///
    /// Points exactly on the right or bottom edge belong to the last column or row.
    pub fn to_cell(&self, point: GraphPoint<f64>) -> Option<CanvasPoint<usize>> {
        let CanvasPoint(x, y) = self.to_canvas(point);
        Some(CanvasPoint(
            cell_index(x, self.canvas_size.0)?,
            cell_index(y, self.canvas_size.1)?,
        ))
    }
}

/// Truncates a canvas coordinate to the index of the cell containing it.
fn cell_index(value: f64, size: u16) -> Option<usize> {
    let size = size as f64;
    if !value.is_finite() || value < 0.0 || value > size || size == 0.0 {
        return None;
    }

    Some(value.floor().min(size - 1.0) as usize)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn defaults() {
        let options = GraphOptions::default();
        assert_eq!(options.canvas_size, CanvasPoint(80, 24));
        assert_eq!(options.x_range(), (-10.0, 10.0));
        assert_eq!(options.y_range(), (-10.0, 10.0));
        assert!(options.show_grid && options.show_axes);
        assert_eq!((options.grid_char, options.axis_char, options.curve_char), ('.', '+', '*'));
    }

    #[test]
    fn bounds_setter() {
        let options = GraphOptions::default().bounds(-2.0, 6.0, 1.0, 3.0);
        assert_eq!(options.center, GraphPoint(2.0, 2.0));
        assert_eq!(options.scale, GraphPoint(4.0, 1.0));
        assert_eq!(options.x_range(), (-2.0, 6.0));
        assert_eq!(options.y_range(), (1.0, 3.0));
    }

    fn skewed() -> GraphOptions {
        GraphOptions {
            canvas_size: CanvasPoint(65, 17),
            center: GraphPoint(-3.0, 2.41),
            scale: GraphPoint(3.59, 5.69),
            ..Default::default()
        }
    }

    /// Test the conversion functions from canvas to graph space.
    #[test]
    fn canvas_to_graph() {
        let options = skewed();
        let (width, height) = (options.canvas_size.0 as f64, options.canvas_size.1 as f64);

        assert_float_absolute_eq!(options.x_to_graph(0.0), -6.59, 1e-9);
        assert_float_absolute_eq!(options.x_to_graph(width), 0.59, 1e-9);
        assert_float_absolute_eq!(options.y_to_graph(0.0), 8.1, 1e-9);
        assert_float_absolute_eq!(options.y_to_graph(height), -3.28, 1e-9);
    }

    /// Test the conversion functions from graph to canvas space.
    #[test]
    fn graph_to_canvas() {
        let options = skewed();

        let CanvasPoint(left, top) = options.to_canvas(GraphPoint(-6.59, 8.1));
        assert_float_absolute_eq!(left, 0.0, 1e-9);
        assert_float_absolute_eq!(top, 0.0, 1e-9);

        let CanvasPoint(right, bottom) = options.to_canvas(GraphPoint(0.59, -3.28));
        assert_float_absolute_eq!(right, 65.0, 1e-9);
        assert_float_absolute_eq!(bottom, 17.0, 1e-9);
    }

    #[test]
    fn cells() {
        let options = GraphOptions::default().canvas_size(20, 10);

        // top-left corner
        assert_eq!(options.to_cell(GraphPoint(-10.0, 10.0)), Some(CanvasPoint(0, 0)));

        // edges clamp into the last cell
        assert_eq!(options.to_cell(GraphPoint(10.0, -10.0)), Some(CanvasPoint(19, 9)));

        // origin lies at the start of the middle cells
        assert_eq!(options.to_cell(GraphPoint(0.0, 0.0)), Some(CanvasPoint(10, 5)));

        assert_eq!(options.to_cell(GraphPoint(10.5, 0.0)), None);
        assert_eq!(options.to_cell(GraphPoint(0.0, -11.0)), None);
        assert_eq!(options.to_cell(GraphPoint(0.0, f64::NAN)), None);
    }
}
