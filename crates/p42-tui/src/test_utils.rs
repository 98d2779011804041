//! Test helpers for rendering trees into an in-memory terminal

use p42_app::tree::Node;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use crate::render::{render_node, RenderContext, TapRegion};

pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(40, 12)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to draw");
    }

    /// Render a tree over the whole terminal and return its tap regions
    pub fn render(&mut self, node: &Node, ctx: &RenderContext) -> Vec<TapRegion> {
        let mut taps = Vec::new();
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                taps = render_node(node, area, frame.buffer_mut(), ctx);
            })
            .expect("Failed to draw");
        taps
    }

    /// Symbols of row `y`
    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        (buffer.area.left()..buffer.area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// All symbols, row by row
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.line(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Number of cells in row `y` with background `color`
    pub fn count_bg(&self, y: u16, color: Color) -> usize {
        let buffer = self.buffer();
        (buffer.area.left()..buffer.area.right())
            .filter(|&x| buffer[(x, y)].bg == color)
            .count()
    }

    /// One past the last cell in row `y` with background `color`
    pub fn bg_extent(&self, y: u16, color: Color) -> u16 {
        let buffer = self.buffer();
        (buffer.area.left()..buffer.area.right())
            .rev()
            .find(|&x| buffer[(x, y)].bg == color)
            .map(|x| x + 1)
            .unwrap_or(0)
    }

    /// First row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| self.line(y).contains(text))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
