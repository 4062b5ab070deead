//! Rendering bridge — replays document snapshots onto a drawing surface.
//!
//! The bridge knows nothing about where pixels end up. It speaks to an
//! abstract [`DrawSurface`] through exactly three primitives (clear,
//! draw-text, draw-rect) and guarantees the replay protocol: one `clear`,
//! then one `draw_text` per element in snapshot order, so paint order always
//! equals insertion order.
//!
//! Surfaces are acquired up front through a [`SurfaceProvider`]. If the host
//! cannot produce the surface it named, that is a construction-time error —
//! integration failures surface immediately instead of degrading into
//! silent no-op rendering on the first draw.

pub mod term;

use anyhow::{Context, Result};

use crate::document::Snapshot;
use crate::types::Color;

/// The primitive draw operations a host surface must support.
///
/// `draw_rect` is unused by text elements today but is part of the stable
/// contract, reserved for future element kinds. Draw calls are infallible:
/// anything that can go wrong with a surface goes wrong at acquisition.
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw_text(&mut self, content: &str, x: i32, y: i32, color: Color);
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color);
}

/// Host-supplied factory for drawing surfaces, keyed by a surface
/// handle/identifier (a canvas id, a terminal, a test recorder...).
pub trait SurfaceProvider {
    type Surface: DrawSurface;

    fn acquire(&self, target: &str) -> Result<Self::Surface>;
}

/// Replays snapshots onto one acquired surface.
#[derive(Debug)]
pub struct RenderBridge<S: DrawSurface> {
    surface: S,
}

impl<S: DrawSurface> RenderBridge<S> {
    /// Acquire `target` from the provider and wrap it in a bridge.
    ///
    /// Fails fast when the surface is unavailable; the error carries the
    /// target name for the host to report.
    pub fn acquire<P>(provider: &P, target: &str) -> Result<Self>
    where
        P: SurfaceProvider<Surface = S>,
    {
        let surface = provider
            .acquire(target)
            .with_context(|| format!("Failed to acquire drawing surface '{target}'"))?;
        Ok(RenderBridge { surface })
    }

    /// Wrap an already-acquired surface.
    pub fn new(surface: S) -> Self {
        RenderBridge { surface }
    }

    /// Replay a snapshot: clear once, then draw every element in sequence
    /// order. Later elements paint on top of earlier ones.
    pub fn replay(&mut self, snapshot: &Snapshot) {
        self.surface.clear();
        for el in snapshot {
            self.surface
                .draw_text(&el.content, el.position.x, el.position.y, el.color);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
