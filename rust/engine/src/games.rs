//! Preset deck rules for popular trading card games.
//!
//! A template fills in the deck size and opening hand for a game and caps
//! how many copies of one card a deck may hold.

use serde::{Deserialize, Serialize};

/// Most target groups the calculator accepts in one query.
pub const MAX_TARGET_GROUPS: usize = 3;

/// Key of the free-form template whose values are all chosen by the player.
pub const CUSTOM_TEMPLATE_KEY: &str = "custom";

/// Turn order of the player whose opening hand is being evaluated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Player taking the first turn
    #[default]
    First,
    /// Player taking the second turn
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub deck_size: u32,
    pub base_hand_size: u32,
    /// Cards drawn at the start of the first player's first turn
    pub first_player_turn_draw: u32,
    /// Cards drawn at the start of the second player's first turn
    pub second_player_turn_draw: u32,
    pub max_copies: u32,
    pub description: &'static str,
}

pub static GAME_TEMPLATES: &[GameTemplate] = &[
    GameTemplate {
        key: CUSTOM_TEMPLATE_KEY,
        name: "Custom",
        deck_size: 40,
        base_hand_size: 5,
        first_player_turn_draw: 0,
        second_player_turn_draw: 1,
        max_copies: 4,
        description: "Set every value yourself. Keep the per-card copy limit of your game in mind.",
    },
    GameTemplate {
        key: "yugioh",
        name: "Yu-Gi-Oh! OCG",
        deck_size: 40,
        base_hand_size: 5,
        first_player_turn_draw: 0,
        second_player_turn_draw: 1,
        max_copies: 3,
        description: "Deck 40-60. Opening hand 5. No draw for the first player's first turn. Up to 3 copies per card.",
    },
    GameTemplate {
        key: "pokemon",
        name: "Pokemon TCG",
        deck_size: 60,
        base_hand_size: 7,
        first_player_turn_draw: 0,
        second_player_turn_draw: 0,
        max_copies: 4,
        description: "Deck 60. Opening hand 7. Up to 4 copies per card except basic Energy.",
    },
    GameTemplate {
        key: "pokemon-pocket",
        name: "Pokemon TCG Pocket",
        deck_size: 20,
        base_hand_size: 5,
        first_player_turn_draw: 1,
        second_player_turn_draw: 1,
        max_copies: 4,
        description: "Deck 20. Opening hand 5. Both players draw at the start of their first turn.",
    },
    GameTemplate {
        key: "mtg",
        name: "Magic: The Gathering (Constructed)",
        deck_size: 60,
        base_hand_size: 7,
        first_player_turn_draw: 0,
        second_player_turn_draw: 1,
        max_copies: 4,
        description: "Deck 60 minimum. Opening hand 7. The player on the play skips the first draw. Up to 4 copies per card except basic lands.",
    },
    GameTemplate {
        key: "onepiece",
        name: "One Piece Card Game",
        deck_size: 50,
        base_hand_size: 5,
        first_player_turn_draw: 0,
        second_player_turn_draw: 1,
        max_copies: 4,
        description: "Deck 50. Opening hand 5. No draw for the first player's first turn. Up to 4 copies per card.",
    },
    GameTemplate {
        key: "duelmasters",
        name: "Duel Masters",
        deck_size: 40,
        base_hand_size: 5,
        first_player_turn_draw: 0,
        second_player_turn_draw: 1,
        max_copies: 4,
        description: "Deck 40. Opening hand 5. No draw for the first player's first turn. Up to 4 copies per card.",
    },
];

impl GameTemplate {
    /// Looks up a template by key, ignoring ASCII case.
    ///
    /// ```
    /// use drawcalc_engine::games::GameTemplate;
    ///
    /// assert_eq!(GameTemplate::find("MTG").map(|t| t.deck_size), Some(60));
    /// assert!(GameTemplate::find("chess").is_none());
    /// ```
    pub fn find(key: &str) -> Option<&'static GameTemplate> {
        GAME_TEMPLATES
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Per-card copy limit to enforce, `None` for the custom template.
    pub fn copy_limit(&self) -> Option<u32> {
        (self.key != CUSTOM_TEMPLATE_KEY).then_some(self.max_copies)
    }

    pub fn turn_draw(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first_player_turn_draw,
            Seat::Second => self.second_player_turn_draw,
        }
    }

    /// Cards in hand when `seat` takes its first action.
    pub fn effective_hand_size(&self, seat: Seat) -> u32 {
        self.base_hand_size + self.turn_draw(seat)
    }
}
