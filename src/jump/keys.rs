//! Trigger keys and the key resolver.
//!
//! Users bind each jump action to a list of trigger strings. Only the first
//! character of a trigger is significant. Resolution walks the actions in a
//! fixed priority order (left, down, up, right, exit, exit-transparent) and the
//! first action with a matching trigger wins, so overlapping triggers make the
//! later action unreachable. [`KeyBindings::conflicts`] reports those overlaps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Returned when a direction name is not one of `left`, `down`, `up`, `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "down" => Ok(Direction::Down),
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// What a key press means while jump mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Bisect toward a direction.
    Move(Direction),
    /// Leave jump mode at the current cell.
    Exit,
    /// Leave jump mode, then replay the key as a normal-mode command.
    ExitTransparent,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "{}", direction),
            Action::Exit => write!(f, "exit"),
            Action::ExitTransparent => write!(f, "exit_transparent"),
        }
    }
}

/// Resolution order. Earlier entries win when triggers overlap.
pub const PRIORITY: [Action; 6] = [
    Action::Move(Direction::Left),
    Action::Move(Direction::Down),
    Action::Move(Direction::Up),
    Action::Move(Direction::Right),
    Action::Exit,
    Action::ExitTransparent,
];

/// Per-action trigger lists. Every list defaults to empty.
///
/// Deserializes straight from the `[jump.keys]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub down: Vec<String>,
    #[serde(default)]
    pub up: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
    #[serde(default)]
    pub exit: Vec<String>,
    #[serde(default)]
    pub exit_transparent: Vec<String>,
}

/// Two actions sharing a trigger character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConflict {
    /// The shared first character.
    pub key: char,
    /// The action that resolves for `key`.
    pub winner: Action,
    /// The action that can never be reached through `key`.
    pub shadowed: Action,
}

impl fmt::Display for KeyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key {:?} is bound to both {} and {}; {} wins",
            self.key, self.winner, self.shadowed, self.winner
        )
    }
}

impl KeyBindings {
    /// hjkl to move, Esc or `q` to leave, and `i`/`a` leave and start
    /// the normal-mode command they name.
    pub fn vim() -> Self {
        let keys = |list: &[&str]| list.iter().map(|k| k.to_string()).collect();
        Self {
            left: keys(&["h"]),
            down: keys(&["j"]),
            up: keys(&["k"]),
            right: keys(&["l"]),
            exit: keys(&["\u{1b}", "q"]),
            exit_transparent: keys(&["i", "a"]),
        }
    }

    /// Trigger list for an action.
    pub fn triggers(&self, action: Action) -> &[String] {
        match action {
            Action::Move(Direction::Left) => &self.left,
            Action::Move(Direction::Down) => &self.down,
            Action::Move(Direction::Up) => &self.up,
            Action::Move(Direction::Right) => &self.right,
            Action::Exit => &self.exit,
            Action::ExitTransparent => &self.exit_transparent,
        }
    }

    /// True if no action has any trigger.
    pub fn is_empty(&self) -> bool {
        PRIORITY.iter().all(|&action| self.triggers(action).is_empty())
    }

    /// Maps one input character to an action.
    ///
    /// Returns `None` when no trigger starts with `input`; callers ignore such
    /// keys and keep waiting.
    ///
    /// # Example
    ///
    /// ```
    /// use bsmotion::jump::keys::{Action, Direction, KeyBindings};
    ///
    /// let bindings = KeyBindings::vim();
    /// assert_eq!(bindings.resolve('j'), Some(Action::Move(Direction::Down)));
    /// assert_eq!(bindings.resolve('z'), None);
    /// ```
    pub fn resolve(&self, input: char) -> Option<Action> {
        PRIORITY
            .iter()
            .copied()
            .find(|&action| starts_any(self.triggers(action), input))
    }

    /// Lists every trigger character claimed by more than one action.
    pub fn conflicts(&self) -> Vec<KeyConflict> {
        let mut conflicts = Vec::new();
        for (i, &winner) in PRIORITY.iter().enumerate() {
            for &shadowed in &PRIORITY[i + 1..] {
                for key in first_chars(self.triggers(winner)) {
                    if starts_any(self.triggers(shadowed), key)
                        && !conflicts
                            .iter()
                            .any(|c: &KeyConflict| c.key == key && c.shadowed == shadowed)
                    {
                        conflicts.push(KeyConflict {
                            key,
                            winner,
                            shadowed,
                        });
                    }
                }
            }
        }
        conflicts
    }
}

fn starts_any(triggers: &[String], input: char) -> bool {
    triggers.iter().any(|t| t.chars().next() == Some(input))
}

fn first_chars(triggers: &[String]) -> impl Iterator<Item = char> + '_ {
    triggers.iter().filter_map(|t| t.chars().next())
}
