use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields), often borrowed
/// from `App` for the length of one frame, and render into a given `Rect`.
///
/// `render` takes `&mut self` so a component can keep per-frame caches,
/// in line with ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
