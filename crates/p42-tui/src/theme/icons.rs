//! Icon glyphs for the terminal host.
//!
//! Provides `IconSet` which resolves icon ids at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires Nerd Font installed)
//!
//! Every glyph occupies a single column so measured sizes stay valid in both
//! modes.

use p42_app::config::IconMode;
use p42_core::{icon, IconId};

/// Drawn for icon ids without a glyph
const FALLBACK: &str = "\u{2022}"; // •

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Glyph for `id`, or a bullet when the id is unknown
    pub fn glyph(&self, id: &IconId) -> &'static str {
        self.lookup(id.as_str()).unwrap_or_else(|| {
            tracing::trace!("no glyph for icon {}", id);
            FALLBACK
        })
    }

    fn lookup(&self, id: &str) -> Option<&'static str> {
        let (nerd, unicode) = match id {
            _ if id == icon::ARROW_UP.as_str() => ("\u{f0d8}", "\u{25b2}"), // nf-fa-caret_up, ▲
            _ if id == icon::ARROW_DOWN.as_str() => ("\u{f0d7}", "\u{25bc}"), // nf-fa-caret_down, ▼
            _ if id == icon::ARROW_RIGHT.as_str() => ("\u{f0da}", "\u{25b6}"), // nf-fa-caret_right, ▶
            _ if id == icon::CLOCK.as_str() => ("\u{f017}", "\u{25f7}"), // nf-fa-clock_o, ◷
            _ if id == icon::INFO.as_str() => ("\u{f05a}", "\u{2139}"),  // nf-fa-info_circle, ℹ
            _ if id == icon::DOT.as_str() => ("\u{f111}", "\u{25cf}"),   // nf-fa-circle, ●
            "bolt" | "bolt.fill" => ("\u{f0e7}", "\u{21af}"),           // nf-fa-bolt, ↯
            "cart" | "cart.fill" => ("\u{f07a}", "\u{25a4}"),           // nf-fa-shopping_cart, ▤
            "bag" | "bag.fill" => ("\u{f290}", "\u{25a3}"),             // nf-fa-shopping_bag, ▣
            "person" | "person.fill" => ("\u{f007}", "\u{263a}"),       // nf-fa-user, ☺
            "chart.bar" | "chart.bar.fill" => ("\u{f080}", "\u{2587}"), // nf-fa-bar_chart, ▇
            "eye" | "eye.fill" => ("\u{f06e}", "\u{25c9}"),             // nf-fa-eye, ◉
            "creditcard" | "creditcard.fill" => ("\u{f09d}", "\u{25ad}"), // nf-fa-credit_card, ▭
            _ => return None,
        };
        Some(match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    const KNOWN: &[&str] = &[
        "arrowtriangle.up.fill",
        "arrowtriangle.down.fill",
        "arrowtriangle.right.fill",
        "clock",
        "info.circle",
        "circle.fill",
        "bolt",
        "cart",
        "bag",
        "person",
        "chart.bar",
        "eye",
        "creditcard",
    ];

    #[test]
    fn test_unicode_arrows() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.glyph(&icon::ARROW_UP), "▲");
        assert_eq!(icons.glyph(&icon::ARROW_DOWN), "▼");
        assert_eq!(icons.glyph(&icon::ARROW_RIGHT), "▶");
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        for id in KNOWN {
            let id = IconId::new(*id);
            assert_ne!(unicode.glyph(&id), nerd.glyph(&id), "{}", id);
        }
    }

    #[test]
    fn test_every_glyph_is_one_column() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            for id in KNOWN {
                let glyph = icons.glyph(&IconId::new(*id));
                assert_eq!(glyph.width(), 1, "{} in {} mode", id, mode);
            }
            assert_eq!(icons.glyph(&IconId::new("unknown")).width(), 1);
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let icons = IconSet::new(IconMode::NerdFonts);
        assert_eq!(icons.glyph(&IconId::new("no.such.symbol")), FALLBACK);
    }
}
