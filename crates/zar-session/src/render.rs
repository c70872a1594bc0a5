//! The rendering collaborator.

use zar_core::{DieType, PolyhedronMesh, RollAnimation};

/// Something that draws dice.
///
/// The board hands each die's mesh to [`display`](Renderer::display) once,
/// then triggers [`animate`](Renderer::animate) at every accepted roll.
/// Implementations run their own repaint loop; neither call may block.
pub trait Renderer {
    /// Show `mesh` for `die` at uniform `scale`.
    fn display(&self, die: DieType, mesh: &PolyhedronMesh, scale: f64);

    /// Begin a transient spin and scale pulse for `die`.
    fn animate(&self, die: DieType, animation: &RollAnimation);
}

/// A renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn display(&self, _die: DieType, _mesh: &PolyhedronMesh, _scale: f64) {}

    fn animate(&self, _die: DieType, _animation: &RollAnimation) {}
}
