//! State and status encoding.
//!
//! The one lookup table from [`TrendState`] and [`AlertStatus`] to icons and
//! colors. Components call into this module and never match on the enums to
//! pick colors themselves.
//!
//! | state     | icon                       | color     |
//! |-----------|----------------------------|-----------|
//! | `Up`      | `arrowtriangle.up.fill`    | `#008E00` |
//! | `Down`    | `arrowtriangle.down.fill`  | `#FF2500` |
//! | `Neutral` | `arrowtriangle.right.fill` | `#FDC209` |
//! | `None`    | `arrowtriangle.right.fill` | clear     |
//!
//! | status    | foreground | background |
//! |-----------|------------|------------|
//! | `Alert`   | white      | `#FF2500`  |
//! | `Warning` | black      | `#FDC209`  |
//! | `Normal`  | primary    | `#008E00`  |
//! | `None`    | primary    | clear      |

use crate::color::{palette, Color};
use crate::icon::{self, IconId};
use crate::types::{AlertStatus, TrendState};

/// Icon and color for one [`TrendState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEncoding {
    pub icon: IconId,
    pub color: Color,
}

/// Foreground/background pair for one [`AlertStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEncoding {
    pub foreground: Color,
    pub background: Color,
}

/// Icon for a trend. `None` shares the neutral icon.
pub fn icon_for(state: TrendState) -> IconId {
    match state {
        TrendState::Up => icon::ARROW_UP,
        TrendState::Down => icon::ARROW_DOWN,
        TrendState::Neutral | TrendState::None => icon::ARROW_RIGHT,
    }
}

/// Color for a trend. `None` is [`Color::Clear`].
pub const fn color_for(state: TrendState) -> Color {
    match state {
        TrendState::Up => palette::GREEN,
        TrendState::Down => palette::RED,
        TrendState::Neutral => palette::AMBER,
        TrendState::None => Color::Clear,
    }
}

pub const fn foreground_for(status: AlertStatus) -> Color {
    match status {
        AlertStatus::Alert => Color::White,
        AlertStatus::Warning => Color::Black,
        AlertStatus::Normal | AlertStatus::None => Color::Primary,
    }
}

pub const fn background_for(status: AlertStatus) -> Color {
    match status {
        AlertStatus::Alert => palette::RED,
        AlertStatus::Warning => palette::AMBER,
        AlertStatus::Normal => palette::GREEN,
        AlertStatus::None => Color::Clear,
    }
}

pub fn encode_state(state: TrendState) -> StateEncoding {
    StateEncoding {
        icon: icon_for(state),
        color: color_for(state),
    }
}

pub const fn encode_status(status: AlertStatus) -> StatusEncoding {
    StatusEncoding {
        foreground: foreground_for(status),
        background: background_for(status),
    }
}
