use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use layup_core::{to_radians, Color, Layup, Point};

use crate::options::{LabelAnchor, RadiusLayout, RenderOptions};
use crate::surface::RenderSurface;

/// Reasons a draw call can be rejected. Rejected calls leave the surface
/// untouched.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("surface is not initialized; call init() first")]
    SurfaceNotInitialized,

    #[error("reference length must be a nonzero finite number, got {0}")]
    InvalidReferenceLength(f64),

    #[error("layer {index} ('{label}'): {reason}")]
    InvalidLayer {
        index: usize,
        label: String,
        reason: &'static str,
    },
}

/// Draws layup configurations as radial arc diagrams.
///
/// The renderer borrows a [`RenderSurface`] once via [`init`](Self::init)
/// and reuses it across draw calls; the same layup can be redrawn at
/// different reference lengths. Stroke colors come from an owned random
/// source, entropy-seeded by default and fixable with
/// [`with_seed`](Self::with_seed).
pub struct LayupRenderer<'a> {
    surface: Option<&'a mut dyn RenderSurface>,
    rng: StdRng,
    options: RenderOptions,
}

impl<'a> LayupRenderer<'a> {
    pub fn new() -> Self {
        Self {
            surface: None,
            rng: StdRng::from_entropy(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Seed the stroke-color random source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Store the drawing surface, replacing any previous one.
    pub fn init(&mut self, surface: &'a mut dyn RenderSurface) {
        self.surface = Some(surface);
    }

    /// Render `layup` scaled against the reference `length`.
    ///
    /// Soft-failure surface: any rejected call is reported once through the
    /// log channel and the surface is left untouched. Callers that need to
    /// distinguish outcomes use [`try_draw`](Self::try_draw).
    pub fn draw(&mut self, layup: &Layup, length: f64) {
        if let Err(err) = self.try_draw(layup, length) {
            log::error!("layup draw aborted: {err}");
        }
    }

    /// Render `layup`, reporting rejections as [`DrawError`].
    ///
    /// Clears the whole surface, then strokes one arc and fills one label
    /// per layer in stack order. Each layer's arc sweeps from the angle
    /// accumulated by its predecessors through its own angular extent; the
    /// accumulated angle is not wrapped at 360°, so layups summing past a
    /// full revolution draw overlapping arcs.
    pub fn try_draw(&mut self, layup: &Layup, length: f64) -> Result<(), DrawError> {
        let surface = self
            .surface
            .as_deref_mut()
            .ok_or(DrawError::SurfaceNotInitialized)?;
        validate(layup, length)?;

        let width = surface.width();
        let height = surface.height();
        let center = Point::new(width / 2.0, height / 2.0);
        let radius = center.x.min(center.y) - self.options.margin;

        surface.clear_rect(0.0, 0.0, width, height);

        let mut current_angle = 0.0;
        let mut consumed = 0.0;
        for layer in layup {
            // Layer thickness scaled into a radius fraction.
            let band = (layer.thickness / length) * radius;
            let (arc_radius, stroke_width) = match self.options.radius_layout {
                RadiusLayout::FixedOuter => {
                    log::trace!("layer '{}': band width {:.3}", layer.label, band);
                    (radius, self.options.line_width)
                }
                RadiusLayout::NestedBands => {
                    let ring_radius = radius - consumed - band / 2.0;
                    consumed += band;
                    (ring_radius, band)
                }
            };

            surface.begin_path();
            surface.arc(
                center.x,
                center.y,
                arc_radius,
                to_radians(current_angle),
                to_radians(current_angle + layer.angle),
            );
            surface.set_line_width(stroke_width);
            surface.set_stroke_color(Color::random(&mut self.rng));
            surface.stroke();

            current_angle += layer.angle;

            let anchor_angle = match self.options.label_anchor {
                LabelAnchor::HalfTotalSweep => current_angle / 2.0,
                LabelAnchor::ArcMidpoint => current_angle - layer.angle / 2.0,
            };
            let anchor = Point::on_circle(
                center,
                radius + self.options.label_offset,
                to_radians(anchor_angle),
            );
            surface.set_font(&self.options.label_font);
            surface.set_fill_color(self.options.label_color);
            surface.fill_text(&layer.label, anchor.x, anchor.y);
        }

        Ok(())
    }
}

impl Default for LayupRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(layup: &Layup, length: f64) -> Result<(), DrawError> {
    if length == 0.0 || !length.is_finite() {
        return Err(DrawError::InvalidReferenceLength(length));
    }
    for (index, layer) in layup.iter().enumerate() {
        if !layer.thickness.is_finite() || layer.thickness < 0.0 {
            return Err(DrawError::InvalidLayer {
                index,
                label: layer.label.clone(),
                reason: "thickness must be a finite nonnegative number",
            });
        }
        if !layer.angle.is_finite() {
            return Err(DrawError::InvalidLayer {
                index,
                label: layer.label.clone(),
                reason: "angle must be a finite number",
            });
        }
    }
    Ok(())
}
