//! Player identity and capability.

use quindici_core::Parity;

/// How a player's moves are produced.
///
/// A human's moves arrive from parsed input; a computer's are drawn uniformly
/// at random from the currently legal (position, digit) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayerKind {
    /// Moves come from the front-end's parsed input.
    Human,
    /// Moves are generated by [`GameSession::random_move`].
    ///
    /// [`GameSession::random_move`]: crate::GameSession::random_move
    Computer,
}

/// A player: a display name, a parity constraint, and a capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    parity: Parity,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player.
    #[must_use]
    pub fn new(name: impl Into<String>, parity: Parity, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            parity,
            kind,
        }
    }

    /// Creates a human player.
    #[must_use]
    pub fn human(name: impl Into<String>, parity: Parity) -> Self {
        Self::new(name, parity, PlayerKind::Human)
    }

    /// Creates a computer player.
    #[must_use]
    pub fn computer(name: impl Into<String>, parity: Parity) -> Self {
        Self::new(name, parity, PlayerKind::Computer)
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The digit parity this player is constrained to.
    #[must_use]
    pub const fn parity(&self) -> Parity {
        self.parity
    }

    /// The player's capability.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let human = Player::human("Ada", Parity::Odd);
        assert_eq!(human.name(), "Ada");
        assert_eq!(human.parity(), Parity::Odd);
        assert!(human.kind().is_human());

        let computer = Player::computer("CPU", Parity::Even);
        assert!(computer.kind().is_computer());
        assert_eq!(computer.parity(), Parity::Even);
    }
}
