//! `ratatui` widget wrapper for layout trees

use p42_app::tree::Node;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::layout::measure;
use crate::render::{render_node, RenderContext, TapRegion};

/// Draws a layout tree as a ratatui widget
pub struct WidgetView<'a> {
    node: &'a Node,
    ctx: RenderContext,
}

impl<'a> WidgetView<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            ctx: RenderContext::default(),
        }
    }

    pub fn context(mut self, ctx: RenderContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Cells the tree needs, for sizing the surrounding layout
    pub fn desired_size(&self) -> (u16, u16) {
        let size = measure(self.node, &self.ctx.scale);
        (size.width, size.height)
    }

    /// Render and keep the tap regions, for hosts that handle mouse input
    pub fn render_with_taps(self, area: Rect, buf: &mut Buffer) -> Vec<TapRegion> {
        render_node(self.node, area, buf, &self.ctx)
    }
}

impl Widget for WidgetView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_node(self.node, area, buf, &self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use p42_app::tree::{Container, EdgeInsets, Text};

    #[test]
    fn test_renders_through_terminal() {
        let node: Node = Container::new(Text::new("Sales"))
            .padding(EdgeInsets::all(10))
            .into();
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(WidgetView::new(&node), term.area());
        assert!(term.buffer_contains("Sales"));
        assert_eq!(term.line(1).trim(), "Sales");
    }

    #[test]
    fn test_desired_size() {
        let node: Node = Container::new(Text::new("Sales"))
            .padding(EdgeInsets::all(10))
            .into();
        assert_eq!(WidgetView::new(&node).desired_size(), (9, 3));
    }
}
