use serde::{Deserialize, Serialize};

/// The kinds of character animation an `[action|…]` directive can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Shake,
    JumpUp,
    JumpDown,
    Near,
    Away,
}

impl ActionKind {
    /// Parse the wire token used in directives ("shake", "jump_up", …).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shake" => Some(Self::Shake),
            "jump_up" => Some(Self::JumpUp),
            "jump_down" => Some(Self::JumpDown),
            "near" => Some(Self::Near),
            "away" => Some(Self::Away),
            _ => None,
        }
    }

    /// Returns the wire token for this action kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shake => "shake",
            Self::JumpUp => "jump_up",
            Self::JumpDown => "jump_down",
            Self::Near => "near",
            Self::Away => "away",
        }
    }
}

/// A request to animate a character, either embedded in a dialogue
/// line or standing alone as `[action|name|kind]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCommand {
    pub character: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// Stage slot a speaking character may occupy in the positional
/// dialogue grammar. Dialogue lines only address the four main slots;
/// staging commands use the wider [`StagePosition`](super::staging::StagePosition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialoguePosition {
    L1,
    L2,
    L3,
    L4,
}

impl DialoguePosition {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "L1" => Some(Self::L1),
            "L2" => Some(Self::L2),
            "L3" => Some(Self::L3),
            "L4" => Some(Self::L4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
        }
    }
}

/// One parsed dialogue line. A message carries at most one of these.
///
/// `position` and `sprite` are only ever populated by the positional
/// grammar; the compact grammar leaves them `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueContent {
    Narrator {
        content: String,
    },
    Character {
        #[serde(rename = "character_name")]
        name: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<ActionCommand>,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<DialoguePosition>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sprite: Option<String>,
    },
}

impl DialogueContent {
    /// The display text with any embedded action directive stripped.
    pub fn content(&self) -> &str {
        match self {
            Self::Narrator { content } => content,
            Self::Character { content, .. } => content,
        }
    }

    /// Returns true for narrator lines.
    pub fn is_narrator(&self) -> bool {
        matches!(self, Self::Narrator { .. })
    }
}
