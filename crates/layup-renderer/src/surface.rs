use layup_core::Color;

/// A caller-owned 2D drawing surface.
///
/// The operation set mirrors an immediate-mode canvas context: path-based
/// arc stroking plus filled text. The renderer borrows a surface at
/// initialization and drives it through this trait on every draw call;
/// creation and teardown of the concrete surface stay with the caller.
///
/// Coordinates are in surface units with the origin at the top-left corner
/// and y growing downward. Arc angles are in radians, measured from the
/// positive x-axis, increasing clockwise.
pub trait RenderSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Reset the given rectangle to blank.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding any unstroked path state.
    fn begin_path(&mut self);

    /// Append a circular arc to the current path.
    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_rad: f64, end_rad: f64);

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);

    /// Stroke the current path with the current line width and color.
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_fill_color(&mut self, color: Color);

    /// Draw `text` with its anchor at (`x`, `y`) in the current font and
    /// fill color.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
