use layup_core::Color;
use serde::{Deserialize, Serialize};

use crate::surface::RenderSurface;

/// One recorded drawing operation, ready to be shipped to a frontend
/// canvas as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    Arc {
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_rad: f64,
        end_rad: f64,
    },
    SetLineWidth(f64),
    SetStrokeColor(Color),
    Stroke,
    SetFont(String),
    SetFillColor(Color),
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// A [`RenderSurface`] that records every operation instead of rasterizing.
///
/// Serves as the handoff format to an actual canvas backend and as the
/// observation point for tests: after a draw call, `commands()` is the
/// exact operation sequence the renderer issued.
#[derive(Debug, Clone)]
pub struct CommandSurface {
    width: f64,
    height: f64,
    commands: Vec<SurfaceCommand>,
}

impl CommandSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the surface empty for reuse.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// True if nothing has been drawn since creation or the last drain.
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSurface for CommandSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(SurfaceCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_rad: f64, end_rad: f64) {
        self.commands.push(SurfaceCommand::Arc {
            center_x,
            center_y,
            radius,
            start_rad,
            end_rad,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(SurfaceCommand::SetFont(font.to_string()));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_issue_order() {
        let mut surface = CommandSurface::new(200.0, 100.0);
        surface.begin_path();
        surface.arc(100.0, 50.0, 40.0, 0.0, 1.0);
        surface.stroke();

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.commands()[0], SurfaceCommand::BeginPath);
        assert!(matches!(
            surface.commands()[1],
            SurfaceCommand::Arc { radius, .. } if (radius - 40.0).abs() < 1e-10
        ));
        assert_eq!(surface.commands()[2], SurfaceCommand::Stroke);
    }

    #[test]
    fn test_take_commands_resets() {
        let mut surface = CommandSurface::new(10.0, 10.0);
        surface.begin_path();
        assert!(!surface.is_blank());

        let drained = surface.take_commands();
        assert_eq!(drained.len(), 1);
        assert!(surface.is_blank());
    }

    #[test]
    fn test_commands_serialize_to_json() {
        let mut surface = CommandSurface::new(10.0, 10.0);
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.fill_text("ply", 5.0, 5.0);

        let json = serde_json::to_string(surface.commands()).unwrap();
        assert!(json.contains("ClearRect"));
        assert!(json.contains("FillText"));

        let back: Vec<SurfaceCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, surface.commands());
    }
}
