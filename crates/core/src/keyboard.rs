//! Keyboard vocabulary delivered by the host document.

use smol_str::SmolStr;

/// A key identifier, as reported by the host's key-up listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key with an established name.
    Named(Named),

    /// A key that produced a character.
    Character(SmolStr),
}

/// A named, non-character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    /// The escape key.
    Escape,
    /// The enter key.
    Enter,
    /// The tab key.
    Tab,
    /// The backspace key.
    Backspace,
}

impl Key {
    /// Returns whether this key is the given named key.
    #[must_use]
    pub fn is_named(&self, named: Named) -> bool {
        matches!(self, Key::Named(key) if *key == named)
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Key::Named(named)
    }
}
