//! Cell geometry for layout trees
//!
//! Trees are sized in layout points; the terminal works in cells. [`Scale`]
//! converts between the two and [`measure`] computes the intrinsic cell size
//! of a node. Splitting stacks into child areas is done with
//! `ratatui::layout::Layout` in [`stack_areas`].

use p42_app::tree::{Alignment, Axis, Node, Size};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Points-to-cells conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub points_per_column: u16,
    pub points_per_row: u16,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            points_per_column: 5,
            points_per_row: 10,
        }
    }
}

impl Scale {
    pub fn new(points_per_column: u16, points_per_row: u16) -> Self {
        Self {
            points_per_column: points_per_column.max(1),
            points_per_row: points_per_row.max(1),
        }
    }

    pub fn from_settings(settings: &p42_app::config::TuiSettings) -> Self {
        Self::new(settings.points_per_column, settings.points_per_row)
    }

    /// Horizontal points to columns, rounded to the nearest cell
    pub fn columns(&self, points: u16) -> u16 {
        round_div(points, self.points_per_column)
    }

    /// Vertical points to rows, rounded to the nearest cell
    pub fn rows(&self, points: u16) -> u16 {
        round_div(points, self.points_per_row)
    }
}

fn round_div(points: u16, per_cell: u16) -> u16 {
    let per_cell = u32::from(per_cell.max(1));
    ((u32::from(points) + per_cell / 2) / per_cell) as u16
}

/// Intrinsic size of `node` in cells, as a child of a vertical stack
pub fn measure(node: &Node, scale: &Scale) -> Size {
    measure_in(node, scale, Axis::Vertical)
}

/// Intrinsic size of `node` in cells when laid out along `parent`
pub fn measure_in(node: &Node, scale: &Scale, parent: Axis) -> Size {
    match node {
        Node::Text(text) => Size::new(text.content.width() as u16, 1),
        Node::Image(image) => {
            let width = image.size.map(|s| scale.columns(s)).unwrap_or(1).max(1);
            Size::new(width, 1)
        }
        Node::Placeholder(size) => Size::new(scale.columns(size.width), scale.rows(size.height)),
        Node::Spacer => Size::new(0, 0),
        Node::Divider => match parent {
            Axis::Vertical => Size::new(0, 1),
            Axis::Horizontal => Size::new(1, 0),
        },
        Node::Container(c) => {
            let child = measure_in(&c.child, scale, Axis::Vertical);
            let width = match c.frame.width {
                Some(w) => scale.columns(w),
                None => child
                    .width
                    .saturating_add(scale.columns(c.padding.leading))
                    .saturating_add(scale.columns(c.padding.trailing)),
            };
            let height = match c.frame.height {
                Some(h) => scale.rows(h),
                None => child
                    .height
                    .saturating_add(scale.rows(c.padding.top))
                    .saturating_add(scale.rows(c.padding.bottom)),
            };
            Size::new(width, height)
        }
        Node::Stack(stack) => {
            let gap = stack_spacing(stack.axis, stack.spacing, scale);
            let gaps = gap.saturating_mul(stack.children.len().saturating_sub(1) as u16);
            let mut main: u16 = gaps;
            let mut cross: u16 = 0;
            for child in &stack.children {
                let size = measure_in(child, scale, stack.axis);
                let (m, c) = match stack.axis {
                    Axis::Horizontal => (size.width, size.height),
                    Axis::Vertical => (size.height, size.width),
                };
                main = main.saturating_add(m);
                cross = cross.max(c);
            }
            match stack.axis {
                Axis::Horizontal => Size::new(main, cross),
                Axis::Vertical => Size::new(cross, main),
            }
        }
    }
}

/// Whether `node` takes all the width its parent offers
pub fn fills_width(node: &Node, parent: Axis) -> bool {
    match node {
        Node::Spacer => parent == Axis::Horizontal,
        Node::Divider => parent == Axis::Vertical,
        Node::Container(c) => {
            c.frame.width.is_none() && (c.frame.fill_width || fills_width(&c.child, Axis::Vertical))
        }
        Node::Stack(stack) => stack
            .children
            .iter()
            .any(|child| fills_width(child, stack.axis)),
        Node::Text(_) | Node::Image(_) | Node::Placeholder(_) => false,
    }
}

pub(crate) fn stack_spacing(axis: Axis, spacing: u16, scale: &Scale) -> u16 {
    match axis {
        Axis::Horizontal => scale.columns(spacing),
        Axis::Vertical => scale.rows(spacing),
    }
}

/// Split `area` along the stack's axis: one `Length` per child, `Fill` for
/// spacers and children that take the remaining width.
pub fn stack_areas(
    axis: Axis,
    spacing: u16,
    children: &[Node],
    area: Rect,
    scale: &Scale,
) -> Vec<Rect> {
    let constraints: Vec<Constraint> = children
        .iter()
        .map(|child| match child {
            Node::Spacer => Constraint::Fill(1),
            _ if axis == Axis::Horizontal && fills_width(child, axis) => Constraint::Fill(1),
            _ => {
                let size = measure_in(child, scale, axis);
                match axis {
                    Axis::Horizontal => Constraint::Length(size.width),
                    Axis::Vertical => Constraint::Length(size.height),
                }
            }
        })
        .collect();

    let layout = match axis {
        Axis::Horizontal => Layout::horizontal(constraints),
        Axis::Vertical => Layout::vertical(constraints),
    };
    layout
        .spacing(stack_spacing(axis, spacing, scale))
        .flex(Flex::Start)
        .split(area)
        .to_vec()
}

/// Offset of a `length` span inside `available` cells
pub fn align_offset(alignment: Alignment, available: u16, length: u16) -> u16 {
    let free = available.saturating_sub(length);
    match alignment {
        Alignment::Leading => 0,
        Alignment::Center => free / 2,
        Alignment::Trailing => free,
    }
}
