use serde::{Deserialize, Serialize};

use super::dialogue::ActionCommand;

/// Stage slot addressable by staging commands. One slot wider than the
/// dialogue grammar's [`DialoguePosition`](super::dialogue::DialoguePosition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StagePosition {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl StagePosition {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "L1" => Some(Self::L1),
            "L2" => Some(Self::L2),
            "L3" => Some(Self::L3),
            "L4" => Some(Self::L4),
            "L5" => Some(Self::L5),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
            Self::L5 => "L5",
        }
    }
}

/// `[show|name|sprite|position]`: a character enters the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowCommand {
    pub name: String,
    pub sprite: String,
    pub position: StagePosition,
}

/// `[alter|name|sprite]`: swap a character's sprite without moving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterCommand {
    pub name: String,
    pub sprite: String,
}

/// `[move|name|position]`: relocate a character already on stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub name: String,
    pub position: StagePosition,
}

/// Any of the five standalone staging directives. These are parsed per
/// line by the presentation layer, separately from message aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StagingCommand {
    Show(ShowCommand),
    Alter(AlterCommand),
    Move(MoveCommand),
    /// `[leave|name]`: the named character exits the stage.
    Leave { name: String },
    Action(ActionCommand),
}
