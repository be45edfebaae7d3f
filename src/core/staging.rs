//! Standalone staging command parsing.
//!
//! Unlike scene directives, staging commands are anchored: the entire
//! trimmed line must be a single bracketed directive. This keeps
//! dialogue text that happens to contain bracket-like substrings from
//! being misread as stage instructions. Each parser returns `None` on
//! any shape mismatch.

use super::directive::anchored_fields;
use crate::schema::dialogue::{ActionCommand, ActionKind};
use crate::schema::staging::{
    AlterCommand, MoveCommand, ShowCommand, StagePosition, StagingCommand,
};

/// `[show|name|sprite|position]` as a whole line.
pub fn parse_show(line: &str) -> Option<ShowCommand> {
    let fields = anchored_fields(line, "show", 3)?;
    Some(ShowCommand {
        name: fields[0].trim().to_string(),
        sprite: fields[1].trim().to_string(),
        position: StagePosition::parse(fields[2].trim())?,
    })
}

/// `[alter|name|sprite]` as a whole line.
pub fn parse_alter(line: &str) -> Option<AlterCommand> {
    let fields = anchored_fields(line, "alter", 2)?;
    Some(AlterCommand {
        name: fields[0].trim().to_string(),
        sprite: fields[1].trim().to_string(),
    })
}

/// `[move|name|position]` as a whole line.
pub fn parse_move(line: &str) -> Option<MoveCommand> {
    let fields = anchored_fields(line, "move", 2)?;
    Some(MoveCommand {
        name: fields[0].trim().to_string(),
        position: StagePosition::parse(fields[1].trim())?,
    })
}

/// `[leave|name]` as a whole line. Returns the leaving character's name.
pub fn parse_leave(line: &str) -> Option<String> {
    let fields = anchored_fields(line, "leave", 1)?;
    Some(fields[0].trim().to_string())
}

/// `[action|character|kind]` as a whole line. Unknown action kinds do
/// not match.
pub fn parse_standalone_action(line: &str) -> Option<ActionCommand> {
    let fields = anchored_fields(line, "action", 2)?;
    Some(ActionCommand {
        character: fields[0].trim().to_string(),
        kind: ActionKind::parse(fields[1].trim())?,
    })
}

/// Try every staging parser against one line.
pub fn parse_staging(line: &str) -> Option<StagingCommand> {
    if let Some(cmd) = parse_show(line) {
        return Some(StagingCommand::Show(cmd));
    }
    if let Some(cmd) = parse_alter(line) {
        return Some(StagingCommand::Alter(cmd));
    }
    if let Some(cmd) = parse_move(line) {
        return Some(StagingCommand::Move(cmd));
    }
    if let Some(name) = parse_leave(line) {
        return Some(StagingCommand::Leave { name });
    }
    if let Some(cmd) = parse_standalone_action(line) {
        return Some(StagingCommand::Action(cmd));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_full_line() {
        let cmd = parse_show("[show|Alice|school_smile|L2]").unwrap();
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.sprite, "school_smile");
        assert_eq!(cmd.position, StagePosition::L2);
    }

    #[test]
    fn show_trims_fields() {
        let cmd = parse_show("[show| Alice | smile | L5 ]").unwrap();
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.sprite, "smile");
        assert_eq!(cmd.position, StagePosition::L5);
    }

    #[test]
    fn show_rejects_unknown_position() {
        assert!(parse_show("[show|Alice|smile|L6]").is_none());
        assert!(parse_show("[show|Alice|smile|center]").is_none());
    }

    #[test]
    fn show_requires_whole_line() {
        assert!(parse_show("Alice said [show|Alice|smile|L1]").is_none());
    }

    #[test]
    fn alter_and_move() {
        let alter = parse_alter("[alter|Alice|blush]").unwrap();
        assert_eq!(alter.sprite, "blush");

        let mv = parse_move("[move|Alice|L4]").unwrap();
        assert_eq!(mv.position, StagePosition::L4);
        assert!(parse_move("[move|Alice|nowhere]").is_none());
    }

    #[test]
    fn leave_returns_name() {
        assert_eq!(parse_leave("[leave|Alice]").as_deref(), Some("Alice"));
        assert!(parse_leave("[leave|Alice|extra]").is_some()); // tail field keeps pipes
        assert_eq!(
            parse_leave("[leave|Alice|extra]").as_deref(),
            Some("Alice|extra")
        );
    }

    #[test]
    fn standalone_action_validates_kind() {
        let cmd = parse_standalone_action("[action|Alice|shake]").unwrap();
        assert_eq!(cmd.character, "Alice");
        assert_eq!(cmd.kind, ActionKind::Shake);
        assert!(parse_standalone_action("[action|Alice|wave]").is_none());
    }

    #[test]
    fn parse_staging_dispatch() {
        assert!(matches!(
            parse_staging("[show|A|s|L1]"),
            Some(StagingCommand::Show(_))
        ));
        assert!(matches!(
            parse_staging("[leave|A]"),
            Some(StagingCommand::Leave { .. })
        ));
        assert!(matches!(
            parse_staging("[action|A|near]"),
            Some(StagingCommand::Action(_))
        ));
        assert!(parse_staging("A|hello").is_none());
        assert!(parse_staging("[bg|room]").is_none());
    }
}
