//! Header bar widgets
//!
//! Title bar with an optional leading icon, a connectivity dot and, when help
//! text is available, an info affordance that toggles a disclosure panel.

use p42_core::color::palette;
use p42_core::{icon, Color, IconId};

use crate::disclosure::{self, Disclosure};
use crate::message::Message;
use crate::tree::{
    capitalize_words, Background, Container, EdgeInsets, Font, FontWeight, Image, Node, Stack,
    Text,
};

/// Visual options for the header bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderOptions {
    /// Bar fill (default: system blue)
    pub background: Color,
    /// Title font (default: headline)
    pub font: Font,
    /// Title and icon color (default: white)
    pub label_color: Color,
    /// Leading icon edge length (default: 16)
    pub icon_size: u16,
    /// Bar height (default: 30)
    pub height: u16,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            background: palette::SYSTEM_BLUE,
            font: Font::Headline,
            label_color: Color::White,
            icon_size: 16,
            height: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderParams {
    pub title: String,
    pub icon: Option<IconId>,
    /// Color of the connectivity dot, chosen by the caller
    pub connectivity: Color,
    /// Shown in the disclosure panel; no info affordance when empty
    pub help_text: Option<String>,
    pub options: HeaderOptions,
}

impl HeaderParams {
    pub fn new(title: impl Into<String>, connectivity: Color) -> Self {
        Self {
            title: title.into(),
            icon: None,
            connectivity,
            help_text: None,
            options: HeaderOptions::default(),
        }
    }

    pub fn icon(mut self, icon: impl Into<IconId>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn options(mut self, options: HeaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Help text, if there is any to show
    fn help(&self) -> Option<&str> {
        self.help_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Build the header. The disclosure panel is rendered below the bar while
/// `disclosure` is open.
pub fn header(params: &HeaderParams, disclosure: Disclosure) -> Node {
    let opts = &params.options;
    let mut bar: Vec<Node> = Vec::new();

    if let Some(icon) = &params.icon {
        bar.push(
            Container::new(
                Image::new(icon.clone())
                    .color(opts.label_color)
                    .size(opts.icon_size),
            )
            .padding(EdgeInsets::all(4))
            .into(),
        );
        bar.push(Node::Divider);
    }

    let title = capitalize_words(&params.title);
    bar.push(
        Container::new(
            Text::new(title.clone())
                .font(opts.font)
                .weight(FontWeight::Semibold)
                .color(opts.label_color)
                .accessibility_label(format!("Title: {}", title)),
        )
        .padding(EdgeInsets::all(4))
        .into(),
    );
    bar.push(Node::Spacer);
    bar.push(
        Container::new(
            Image::new(icon::DOT)
                .color(params.connectivity)
                .accessibility_label("Connectivity"),
        )
        .padding(EdgeInsets::horizontal(4))
        .into(),
    );

    if params.help().is_some() {
        bar.push(
            Container::new(Image::new(icon::INFO).color(opts.label_color))
                .padding(EdgeInsets::horizontal(4))
                .accessibility_label("More information")
                .on_tap(Message::InfoTapped)
                .into(),
        );
    }

    let bar = Container::new(Stack::horizontal(bar))
        .height(opts.height)
        .fill_width()
        .background(Background::solid(opts.background));

    let mut column: Vec<Node> = vec![bar.into()];
    if let (Some(help), true) = (params.help(), disclosure.is_open()) {
        column.push(
            Container::new(
                Text::new(help)
                    .font(Font::Footnote)
                    .color(Color::Secondary),
            )
            .padding(EdgeInsets::all(4))
            .fill_width()
            .accessibility_label("Help")
            .into(),
        );
    }

    tracing::trace!(title = %params.title, open = disclosure.is_open(), "built header");
    Stack::vertical(column).into()
}

/// A mounted header: parameters plus the disclosure state it owns.
///
/// Dropping the instance discards the state; a new instance starts closed.
#[derive(Debug, Clone)]
pub struct Header {
    params: HeaderParams,
    disclosure: Disclosure,
}

impl Header {
    pub fn new(params: HeaderParams) -> Self {
        Self {
            params,
            disclosure: Disclosure::default(),
        }
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    /// Replace the parameters for the next render; the disclosure survives
    pub fn set_params(&mut self, params: HeaderParams) {
        self.params = params;
    }

    pub fn update(&mut self, message: Message) {
        self.disclosure = disclosure::update(self.disclosure, message);
    }

    pub fn view(&self) -> Node {
        header(&self.params, self.disclosure)
    }
}
