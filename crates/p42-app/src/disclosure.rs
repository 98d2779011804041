//! Disclosure toggle (TEA update function)
//!
//! Two states, starting closed. [`Message::InfoTapped`] flips between them;
//! nothing else changes the state.

use crate::message::Message;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }
}

/// Reduce a message into the next disclosure state
pub fn update(state: Disclosure, message: Message) -> Disclosure {
    match message {
        Message::InfoTapped => {
            let next = state.toggled();
            tracing::debug!("disclosure {:?} -> {:?}", state, next);
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap_n(n: usize) -> Disclosure {
        (0..n).fold(Disclosure::default(), |state, _| {
            update(state, Message::InfoTapped)
        })
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn test_single_tap_opens() {
        assert_eq!(tap_n(1), Disclosure::Open);
    }

    #[test]
    fn test_even_taps_close() {
        for n in [0, 2, 4, 10] {
            assert_eq!(tap_n(n), Disclosure::Closed, "{} taps", n);
        }
    }

    #[test]
    fn test_odd_taps_open() {
        for n in [1, 3, 7] {
            assert_eq!(tap_n(n), Disclosure::Open, "{} taps", n);
        }
    }
}
