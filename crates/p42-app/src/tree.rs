//! # Layout Tree
//!
//! The data every component builder returns. A [`Node`] describes what to
//! draw, never how: hosts (the terminal renderer in `p42-tui`, or anything
//! consuming the JSON form) interpret it.
//!
//! All lengths are abstract layout points. Hosts decide how points map onto
//! their surface.
//!
//! ## Key Types
//!
//! - [`Node`] - A node of the tree (text, image, container, stack, ...)
//! - [`Container`] - Single child with padding, background, shape and frame
//! - [`Stack`] - Children laid out along one axis
//! - [`Background`] - Solid fill or a fill covering a fraction of the width

use p42_core::{Color, IconId};
use serde::{Deserialize, Serialize};

use crate::message::Message;

// ============================================================================
// Style vocabulary
// ============================================================================

/// Text style roles, largest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    LargeTitle,
    Title,
    Headline,
    #[default]
    Body,
    Callout,
    Footnote,
    Caption,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn is_emphasised(self) -> bool {
        matches!(self, FontWeight::Semibold | FontWeight::Bold)
    }
}

/// Padding on the four edges of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: u16,
    pub leading: u16,
    pub bottom: u16,
    pub trailing: u16,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::all(0);

    pub const fn all(value: u16) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    pub const fn horizontal(value: u16) -> Self {
        Self {
            top: 0,
            leading: value,
            bottom: 0,
            trailing: value,
        }
    }

    pub const fn vertical(value: u16) -> Self {
        Self {
            top: value,
            leading: 0,
            bottom: value,
            trailing: 0,
        }
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.leading.saturating_add(self.trailing)
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Background {
    #[default]
    None,
    Solid { color: Color },
    /// Fill covering `fraction` (0.0..=1.0) of the width, from the leading edge
    Proportional { color: Color, fraction: f64 },
}

impl Background {
    /// Solid background, or none for [`Color::Clear`]
    pub fn solid(color: Color) -> Self {
        if color.is_clear() {
            Background::None
        } else {
            Background::Solid { color }
        }
    }

    pub fn proportional(color: Color, fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Background::Proportional { color, fraction }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Background::None => None,
            Background::Solid { color } | Background::Proportional { color, .. } => Some(*color),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Rectangle,
    /// Fully rounded short edges
    Capsule,
    Circle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Fixed size of a container, or a request to take the full available width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub width: Option<u16>,
    pub height: Option<u16>,
    #[serde(default)]
    pub fill_width: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u16) -> Self {
        Self::new(side, side)
    }
}

// ============================================================================
// Leaf nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub color: Color,
    /// Drawn at reduced opacity
    #[serde(default)]
    pub dimmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: Font::default(),
            weight: FontWeight::default(),
            color: Color::Primary,
            dimmed: false,
            accessibility_label: None,
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub icon: IconId,
    #[serde(default)]
    pub color: Color,
    /// Edge length of the square icon frame, if fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

impl Image {
    pub fn new(icon: impl Into<IconId>) -> Self {
        Self {
            icon: icon.into(),
            color: Color::Primary,
            size: None,
            accessibility_label: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}

// ============================================================================
// Containers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub child: Box<Node>,
    #[serde(default)]
    pub padding: EdgeInsets,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub frame: Frame,
    /// Placement of the child inside a wider frame
    #[serde(default)]
    pub alignment: Alignment,
    /// Stable identity for list rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Message emitted when the container is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tap: Option<Message>,
}

impl Container {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            padding: EdgeInsets::ZERO,
            background: Background::None,
            shape: Shape::Rectangle,
            frame: Frame::default(),
            alignment: Alignment::Leading,
            key: None,
            accessibility_label: None,
            on_tap: None,
        }
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.frame.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.frame.height = Some(height);
        self
    }

    pub fn fill_width(mut self) -> Self {
        self.frame.fill_width = true;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn on_tap(mut self, message: Message) -> Self {
        self.on_tap = Some(message);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub axis: Axis,
    #[serde(default)]
    pub spacing: u16,
    /// Cross-axis alignment of the children
    #[serde(default)]
    pub alignment: Alignment,
    pub children: Vec<Node>,
}

impl Stack {
    pub fn horizontal(children: Vec<Node>) -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: 0,
            alignment: Alignment::Center,
            children,
        }
    }

    pub fn vertical(children: Vec<Node>) -> Self {
        Self {
            axis: Axis::Vertical,
            spacing: 0,
            alignment: Alignment::Center,
            children,
        }
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

// ============================================================================
// Node
// ============================================================================

/// One node of a layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text(Text),
    Image(Image),
    Container(Container),
    Stack(Stack),
    /// Flexible space along the parent stack's axis
    Spacer,
    /// Thin rule across the parent stack
    Divider,
    /// Empty space of a fixed size, keeps siblings aligned
    Placeholder(Size),
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(c) => std::slice::from_ref(c.child.as_ref()),
            Node::Stack(s) => &s.children,
            _ => &[],
        }
    }

    /// Visit this node and every descendant, depth first, in render order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Text contents in render order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text(t) = node {
                out.push(t.content.as_str());
            }
        });
        out
    }

    /// Icons in render order
    pub fn icons(&self) -> Vec<&IconId> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Image(i) = node {
                out.push(&i.icon);
            }
        });
        out
    }

    /// First image showing `icon`
    pub fn find_image(&self, icon: &IconId) -> Option<&Image> {
        let mut found = None;
        self.walk(&mut |node| {
            if let Node::Image(i) = node {
                if found.is_none() && &i.icon == icon {
                    found = Some(i);
                }
            }
        });
        found
    }

    /// Container carrying `key`
    pub fn find_key(&self, key: &str) -> Option<&Container> {
        let mut found = None;
        self.walk(&mut |node| {
            if let Node::Container(c) = node {
                if found.is_none() && c.key.as_deref() == Some(key) {
                    found = Some(c);
                }
            }
        });
        found
    }

    /// Container with an accessibility label equal to `label`
    pub fn find_labelled(&self, label: &str) -> Option<&Node> {
        let mut found = None;
        self.walk(&mut |node| {
            let node_label = match node {
                Node::Text(t) => t.accessibility_label.as_deref(),
                Node::Image(i) => i.accessibility_label.as_deref(),
                Node::Container(c) => c.accessibility_label.as_deref(),
                _ => None,
            };
            if found.is_none() && node_label == Some(label) {
                found = Some(node);
            }
        });
        found
    }

    /// Messages attached to tappable containers
    pub fn taps(&self) -> Vec<Message> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Container(Container {
                on_tap: Some(message),
                ..
            }) = node
            {
                out.push(*message);
            }
        });
        out
    }

    /// First container emitting `message` when tapped
    pub fn find_tap(&self, message: Message) -> Option<&Container> {
        let mut found = None;
        self.walk(&mut |node| {
            if let Node::Container(c) = node {
                if found.is_none() && c.on_tap == Some(message) {
                    found = Some(c);
                }
            }
        });
        found
    }

    /// Attach an accessibility label. Stacks and spacing nodes are wrapped in
    /// a container to carry it.
    pub fn labelled(self, label: impl Into<String>) -> Node {
        let label = label.into();
        match self {
            Node::Text(t) => Node::Text(t.accessibility_label(label)),
            Node::Image(i) => Node::Image(i.accessibility_label(label)),
            Node::Container(c) => Node::Container(c.accessibility_label(label)),
            other => Node::Container(Container::new(other).accessibility_label(label)),
        }
    }

    /// Serialize to the JSON form consumed by non-Rust hosts
    pub fn to_json(&self) -> p42_core::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> p42_core::Result<Node> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Image> for Node {
    fn from(image: Image) -> Self {
        Node::Image(image)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

impl From<Stack> for Node {
    fn from(stack: Stack) -> Self {
        Node::Stack(stack)
    }
}

/// Capitalize the first letter of every word and lowercase the rest
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Stack::vertical(vec![
            Text::new("Today").into(),
            Node::Divider,
            Container::new(Image::new("bolt"))
                .key("row-1")
                .on_tap(Message::InfoTapped)
                .into(),
            Text::new("42").into(),
        ])
        .into()
    }

    #[test]
    fn test_texts_in_render_order() {
        assert_eq!(sample().texts(), vec!["Today", "42"]);
    }

    #[test]
    fn test_icons_and_keys() {
        let tree = sample();
        assert_eq!(tree.icons().len(), 1);
        assert_eq!(tree.icons()[0].as_str(), "bolt");
        assert!(tree.find_key("row-1").is_some());
        assert!(tree.find_key("row-2").is_none());
        assert_eq!(tree.taps(), vec![Message::InfoTapped]);
    }

    #[test]
    fn test_labelled_wraps_stacks() {
        let text = Node::from(Text::new("x")).labelled("Period: x");
        assert!(matches!(&text, Node::Text(t) if t.accessibility_label.as_deref() == Some("Period: x")));

        let stack = Node::from(Stack::horizontal(vec![])).labelled("row");
        assert!(matches!(&stack, Node::Container(c) if c.accessibility_label.as_deref() == Some("row")));
        assert!(stack.find_labelled("row").is_some());
    }

    #[test]
    fn test_background_solid_clear_is_none() {
        assert_eq!(Background::solid(Color::Clear), Background::None);
        assert_eq!(Background::solid(Color::Clear).color(), None);
    }

    #[test]
    fn test_proportional_background_clamps_fraction() {
        assert_eq!(
            Background::proportional(Color::Black, 1.7),
            Background::Proportional {
                color: Color::Black,
                fraction: 1.0
            }
        );
        assert_eq!(
            Background::proportional(Color::Black, f64::NAN),
            Background::Proportional {
                color: Color::Black,
                fraction: 0.0
            }
        );
    }

    #[test]
    fn test_json_round_trip_keeps_structure() {
        let tree = sample();
        let json = tree.to_json().unwrap();
        assert!(json.contains("\"kind\":\"stack\""));
        assert!(json.contains("\"on_tap\":\"info_tapped\""));
        assert_eq!(Node::from_json(&json).unwrap(), tree);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("today"), "Today");
        assert_eq!(capitalize_words("LAST week"), "Last Week");
        assert_eq!(capitalize_words("year-to-date"), "Year-To-Date");
        assert_eq!(capitalize_words(""), "");
    }
}
