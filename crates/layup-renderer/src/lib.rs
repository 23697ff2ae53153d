//! # Layup Renderer
//!
//! Radial diagram renderer for layered material layups. Each layer of a
//! [`layup_core::Layup`] becomes one stroked arc segment and one text label
//! on a caller-owned 2D drawing surface, with angular position accumulating
//! layer by layer.
//!
//! The renderer draws through the [`RenderSurface`] trait; the bundled
//! [`CommandSurface`] records draw operations as serializable command data
//! that a frontend canvas can consume.

pub mod surface;
pub mod record;
pub mod options;
pub mod renderer;

pub use surface::RenderSurface;
pub use record::{CommandSurface, SurfaceCommand};
pub use options::{LabelAnchor, RadiusLayout, RenderOptions};
pub use renderer::{DrawError, LayupRenderer};
