//! Rendering of layout trees into a ratatui buffer
//!
//! [`render_node`] walks a [`Node`] tree, splits stacks with the layout
//! helpers, paints container backgrounds and draws text and icon glyphs. It
//! returns the screen regions of tappable containers so a host can route
//! clicks back to the component through [`tap_at`].

use p42_app::config::Settings;
use p42_app::tree::{Alignment, Axis, Background, Container, Node, Stack};
use p42_app::Message;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

use crate::layout::{align_offset, fills_width, measure_in, stack_areas, Scale};
use crate::theme::{styles, IconSet};

/// Host settings used while rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub scale: Scale,
    pub icons: IconSet,
}

impl RenderContext {
    pub fn new(scale: Scale, icons: IconSet) -> Self {
        Self { scale, icons }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            scale: Scale::from_settings(&settings.tui),
            icons: IconSet::new(settings.ui.icons),
        }
    }
}

/// Screen area of a container carrying a tap action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapRegion {
    pub area: Rect,
    pub message: Message,
}

/// Message for a click at `(x, y)`.
///
/// Regions are reported outermost first, so the last hit is the innermost
/// tappable container.
pub fn tap_at(regions: &[TapRegion], x: u16, y: u16) -> Option<Message> {
    let position = Position::new(x, y);
    regions
        .iter()
        .rev()
        .find(|region| region.area.contains(position))
        .map(|region| region.message)
}

/// Render `node` into `area` and collect its tap regions
pub fn render_node(
    node: &Node,
    area: Rect,
    buf: &mut Buffer,
    ctx: &RenderContext,
) -> Vec<TapRegion> {
    let mut taps = Vec::new();
    let area = area.intersection(buf.area);

    // The root sits at the top-left corner at its intrinsic size, like the
    // child of a leading-aligned column.
    let size = measure_in(node, &ctx.scale, Axis::Vertical);
    let width = if fills_width(node, Axis::Vertical) {
        area.width
    } else {
        size.width.min(area.width)
    };
    let root = Rect::new(area.x, area.y, width, size.height.min(area.height));
    render_in(node, root, buf, ctx, Axis::Vertical, &mut taps);
    tracing::trace!(taps = taps.len(), ?area, "rendered tree");
    taps
}

fn render_in(
    node: &Node,
    area: Rect,
    buf: &mut Buffer,
    ctx: &RenderContext,
    parent: Axis,
    taps: &mut Vec<TapRegion>,
) {
    if area.is_empty() {
        return;
    }

    match node {
        Node::Text(text) => {
            buf.set_stringn(
                area.x,
                area.y,
                &text.content,
                area.width as usize,
                styles::text(text),
            );
        }
        Node::Image(image) => {
            let glyph = ctx.icons.glyph(&image.icon);
            let x = area.x + align_offset(Alignment::Center, area.width, 1);
            let y = area.y + align_offset(Alignment::Center, area.height, 1);
            buf.set_stringn(x, y, glyph, 1, styles::image(image));
        }
        Node::Divider => render_divider(area, buf, parent),
        Node::Spacer | Node::Placeholder(_) => {}
        Node::Container(container) => render_container(container, area, buf, ctx, taps),
        Node::Stack(stack) => render_stack(stack, area, buf, ctx, taps),
    }
}

fn render_divider(area: Rect, buf: &mut Buffer, parent: Axis) {
    let style = styles::divider();
    match parent {
        Axis::Vertical => {
            let line = "─".repeat(area.width as usize);
            buf.set_stringn(area.x, area.y, &line, area.width as usize, style);
        }
        Axis::Horizontal => {
            for y in area.top()..area.bottom() {
                buf.set_stringn(area.x, y, "│", 1, style);
            }
        }
    }
}

fn paint_background(background: &Background, area: Rect, buf: &mut Buffer) {
    match *background {
        Background::None => {}
        Background::Solid { color } => buf.set_style(area, styles::background(color)),
        Background::Proportional { color, fraction } => {
            let filled = ((f64::from(area.width) * fraction).round() as u16).min(area.width);
            if filled > 0 {
                let fill = Rect::new(area.x, area.y, filled, area.height);
                buf.set_style(fill, styles::background(color));
            }
        }
    }
}

fn render_container(
    container: &Container,
    area: Rect,
    buf: &mut Buffer,
    ctx: &RenderContext,
    taps: &mut Vec<TapRegion>,
) {
    let scale = &ctx.scale;
    paint_background(&container.background, area, buf);
    if let Some(message) = container.on_tap {
        taps.push(TapRegion { area, message });
    }

    let left = scale.columns(container.padding.leading).min(area.width);
    let top = scale.rows(container.padding.top).min(area.height);
    let inner = Rect::new(
        area.x + left,
        area.y + top,
        area.width
            .saturating_sub(left)
            .saturating_sub(scale.columns(container.padding.trailing)),
        area.height
            .saturating_sub(top)
            .saturating_sub(scale.rows(container.padding.bottom)),
    );

    let size = measure_in(&container.child, scale, Axis::Vertical);
    let width = if fills_width(&container.child, Axis::Vertical) {
        inner.width
    } else {
        size.width.min(inner.width)
    };
    let height = size.height.min(inner.height);
    let child_area = Rect::new(
        inner.x + align_offset(container.alignment, inner.width, width),
        inner.y + align_offset(Alignment::Center, inner.height, height),
        width,
        height,
    );
    render_in(&container.child, child_area, buf, ctx, Axis::Vertical, taps);
}

fn render_stack(
    stack: &Stack,
    area: Rect,
    buf: &mut Buffer,
    ctx: &RenderContext,
    taps: &mut Vec<TapRegion>,
) {
    let areas = stack_areas(stack.axis, stack.spacing, &stack.children, area, &ctx.scale);

    for (child, slot) in stack.children.iter().zip(areas) {
        let size = measure_in(child, &ctx.scale, stack.axis);
        let child_area = match stack.axis {
            Axis::Vertical => {
                let width = if fills_width(child, Axis::Vertical) {
                    slot.width
                } else {
                    size.width.min(slot.width)
                };
                Rect::new(
                    slot.x + align_offset(stack.alignment, slot.width, width),
                    slot.y,
                    width,
                    slot.height,
                )
            }
            Axis::Horizontal => {
                let height = if matches!(child, Node::Divider) {
                    slot.height
                } else {
                    size.height.min(slot.height)
                };
                Rect::new(
                    slot.x,
                    slot.y + align_offset(stack.alignment, slot.height, height),
                    slot.width,
                    height,
                )
            }
        };
        render_in(child, child_area, buf, ctx, stack.axis, taps);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use p42_app::tree::{Container, EdgeInsets, Text};
    use p42_core::color::palette;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_text_is_drawn_at_origin() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        render_node(&Text::new("42%").into(), buf.area, &mut buf, &RenderContext::default());
        assert_eq!(row_text(&buf, 0), "42%       ");
    }

    #[test]
    fn test_text_is_truncated_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        render_node(
            &Text::new("Yesterday").into(),
            buf.area,
            &mut buf,
            &RenderContext::default(),
        );
        assert_eq!(row_text(&buf, 0), "Yest");
    }

    #[test]
    fn test_solid_background_covers_container() {
        let node: Node = Container::new(Text::new("ok"))
            .padding(EdgeInsets::horizontal(5))
            .background(Background::solid(palette::GREEN))
            .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        render_node(&node, Rect::new(0, 0, 4, 1), &mut buf, &RenderContext::default());

        let green = Color::Rgb(0x00, 0x8E, 0x00);
        for x in 0..4 {
            assert_eq!(buf[(x, 0)].bg, green, "cell {}", x);
        }
        assert_ne!(buf[(4, 0)].bg, green);
        assert_eq!(row_text(&buf, 0), " ok       ");
    }

    #[test]
    fn test_proportional_background_rounds_to_cells() {
        let node: Node = Container::new(Node::Spacer)
            .background(Background::proportional(palette::RED, 0.33))
            .height(10)
            .fill_width()
            .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        render_node(&node, buf.area, &mut buf, &RenderContext::default());

        let red = Color::Rgb(0xFF, 0x25, 0x00);
        let filled = (0..10).filter(|&x| buf[(x, 0)].bg == red).count();
        assert_eq!(filled, 3);
    }

    #[test]
    fn test_trailing_alignment_in_fixed_frame() {
        let node: Node = Container::new(Text::new("42"))
            .width(30)
            .alignment(Alignment::Trailing)
            .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_node(&node, buf.area, &mut buf, &RenderContext::default());
        assert_eq!(row_text(&buf, 0), "    42");
    }

    #[test]
    fn test_vertical_divider_in_row() {
        let node: Node = Stack::horizontal(vec![
            Text::new("a").into(),
            Node::Divider,
            Text::new("b").into(),
        ])
        .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        render_node(&node, buf.area, &mut buf, &RenderContext::default());
        assert_eq!(row_text(&buf, 0), "a│b  ");
    }

    #[test]
    fn test_horizontal_divider_spans_column() {
        let node: Node = Stack::vertical(vec![Text::new("a").into(), Node::Divider])
            .alignment(Alignment::Leading)
            .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        render_node(&node, buf.area, &mut buf, &RenderContext::default());
        assert_eq!(row_text(&buf, 1), "────");
    }

    #[test]
    fn test_tap_regions_and_lookup() {
        let node: Node = Stack::horizontal(vec![
            Text::new("title").into(),
            Node::Spacer,
            Container::new(Text::new("i"))
                .on_tap(Message::InfoTapped)
                .into(),
        ])
        .into();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let taps = render_node(&node, buf.area, &mut buf, &RenderContext::default());

        assert_eq!(
            taps,
            vec![TapRegion {
                area: Rect::new(9, 0, 1, 1),
                message: Message::InfoTapped,
            }]
        );
        assert_eq!(tap_at(&taps, 9, 0), Some(Message::InfoTapped));
        assert_eq!(tap_at(&taps, 2, 0), None);
    }

    #[test]
    fn test_render_outside_buffer_is_clipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let taps = render_node(
            &Text::new("hello").into(),
            Rect::new(0, 0, 20, 5),
            &mut buf,
            &RenderContext::default(),
        );
        assert!(taps.is_empty());
        assert_eq!(row_text(&buf, 0), "hel");
    }
}
