use layup_core::Color;
use serde::{Deserialize, Serialize};

/// How each layer's arc radius is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusLayout {
    /// Every arc is stroked at the one shared outer radius. The per-layer
    /// band width is still computed from thickness and the reference
    /// length, but does not affect geometry.
    FixedOuter,
    /// Layers form nested rings stepping inward from the outer radius:
    /// each arc is stroked at its own band width and offset by the bands
    /// already consumed.
    NestedBands,
}

/// Where each layer's label is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    /// Half of the total angle accumulated through this layer. For layups
    /// with more than one layer of differing extent this drifts away from
    /// the layer's own arc.
    HalfTotalSweep,
    /// The midpoint of the layer's own arc.
    ArcMidpoint,
}

/// Rendering parameters for the layup diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Inset from the surface edge when sizing the diagram.
    pub margin: f64,
    /// Arc stroke width under [`RadiusLayout::FixedOuter`].
    pub line_width: f64,
    /// Label anchor distance beyond the outer radius.
    pub label_offset: f64,
    pub label_font: String,
    pub label_color: Color,
    pub radius_layout: RadiusLayout,
    pub label_anchor: LabelAnchor,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            line_width: 2.0,
            label_offset: 20.0,
            label_font: "14px Arial".to_string(),
            label_color: Color::BLACK,
            radius_layout: RadiusLayout::FixedOuter,
            label_anchor: LabelAnchor::HalfTotalSweep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!((options.margin - 10.0).abs() < 1e-10);
        assert!((options.line_width - 2.0).abs() < 1e-10);
        assert!((options.label_offset - 20.0).abs() < 1e-10);
        assert_eq!(options.label_font, "14px Arial");
        assert_eq!(options.label_color, Color::BLACK);
        assert_eq!(options.radius_layout, RadiusLayout::FixedOuter);
        assert_eq!(options.label_anchor, LabelAnchor::HalfTotalSweep);
    }
}
