//! Player and Team data structures.

use serde::{Deserialize, Serialize};

/// Name shown when a team has no usable primary player name.
const FALLBACK_NAME: &str = "Player";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One side of the match: a single player, or two for doubles.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub player1: Player,
    /// Present only in doubles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2: Option<Player>,
    /// Display color as hex (e.g. `#3B82F6`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Team {
    /// A singles team with no color.
    pub fn singles(name: impl Into<String>) -> Self {
        Self {
            player1: Player::new(name),
            player2: None,
            color: None,
        }
    }

    /// A doubles team with no color.
    pub fn doubles(name_1: impl Into<String>, name_2: impl Into<String>) -> Self {
        Self {
            player2: Some(Player::new(name_2)),
            ..Self::singles(name_1)
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// This team with new names. The partner is replaced (or removed when `None`); the color
    /// is replaced only when a new one is given.
    pub fn edited(
        &self,
        name: impl Into<String>,
        partner: Option<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            player1: Player::new(name),
            player2: partner.map(Player::new),
            color: color.or_else(|| self.color.clone()),
        }
    }

    pub fn is_doubles(&self) -> bool {
        self.player2.as_ref().is_some_and(|p| !p.name.is_empty())
    }

    /// Name for display: "A / B" for doubles, "A" for singles.
    pub fn display_name(&self) -> String {
        let primary = if self.player1.name.is_empty() {
            FALLBACK_NAME
        } else {
            self.player1.name.as_str()
        };
        match &self.player2 {
            Some(partner) if !partner.name.is_empty() => format!("{} / {}", primary, partner.name),
            _ => primary.to_string(),
        }
    }
}
