use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and render to a
/// `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can update borrowed
/// presentation state (e.g. a list's scroll offset) during the render pass.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
