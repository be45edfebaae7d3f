//! Dialogue line parsing for both historical grammars.
//!
//! The source material exhibits two incompatible dialogue line shapes.
//! They are kept as an explicit tagged choice rather than merged; a
//! deployment picks one via [`DialogueGrammar`]. `Compact` is the
//! canonical default.

use serde::{Deserialize, Serialize};

use crate::schema::dialogue::{ActionCommand, ActionKind, DialogueContent, DialoguePosition};

/// The literal speaker name that marks a narrator line.
pub const NARRATOR_NAME: &str = "旁白";

/// Which dialogue line grammar the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueGrammar {
    /// `name|content`, with an optional embedded `[action|…]`.
    #[default]
    Compact,
    /// `name|position|sprite|content`; position and sprite segments may
    /// be empty. `旁白||content` short-circuits to a narrator line.
    Positional,
}

/// Parse one line as dialogue under the given grammar. Returns `None`
/// when the line does not fit the shape.
pub fn parse_dialogue(line: &str, grammar: DialogueGrammar) -> Option<DialogueContent> {
    match grammar {
        DialogueGrammar::Compact => parse_compact(line),
        DialogueGrammar::Positional => parse_positional(line),
    }
}

fn parse_compact(line: &str) -> Option<DialogueContent> {
    let (name, rest) = line.split_once('|')?;
    let name = name.trim();
    if name.is_empty() || rest.is_empty() {
        return None;
    }
    let (content, action) = extract_action(rest);
    if name == NARRATOR_NAME {
        return Some(DialogueContent::Narrator { content });
    }
    Some(DialogueContent::Character {
        name: name.to_string(),
        content,
        action,
        position: None,
        sprite: None,
    })
}

fn parse_positional(line: &str) -> Option<DialogueContent> {
    // Narrator sentinel: double pipe, no position or sprite segments.
    if let Some(rest) = line
        .strip_prefix(NARRATOR_NAME)
        .and_then(|r| r.strip_prefix("||"))
    {
        if rest.is_empty() {
            return None;
        }
        let (content, _) = extract_action(rest);
        return Some(DialogueContent::Narrator { content });
    }

    let mut segments = line.splitn(4, '|');
    let name = segments.next()?.trim();
    let position = segments.next()?;
    let sprite = segments.next()?;
    let rest = segments.next()?;
    if name.is_empty() || rest.is_empty() {
        return None;
    }

    let (content, action) = extract_action(rest);
    if name == NARRATOR_NAME {
        return Some(DialogueContent::Narrator { content });
    }

    // An unparseable position is treated as absent, not as a failed
    // line; dialogue survives a typo in its staging hints.
    let position = DialoguePosition::parse(position.trim());
    let sprite = sprite.trim();
    Some(DialogueContent::Character {
        name: name.to_string(),
        content,
        action,
        position,
        sprite: (!sprite.is_empty()).then(|| sprite.to_string()),
    })
}

/// Extract the first embedded `[action|character|kind]` from dialogue
/// content and strip it from the display text. The directive is
/// removed exactly once whether or not its body parses; an unknown
/// action kind yields `None` but still disappears from the text.
pub(crate) fn extract_action(content: &str) -> (String, Option<ActionCommand>) {
    const OPEN: &str = "[action|";
    let Some(start) = content.find(OPEN) else {
        return (content.trim().to_string(), None);
    };
    let Some(close) = content[start..].find(']') else {
        return (content.trim().to_string(), None);
    };
    let end = start + close;

    let action = parse_action_body(&content[start + OPEN.len()..end]);
    let mut cleaned = String::with_capacity(content.len());
    cleaned.push_str(&content[..start]);
    cleaned.push_str(&content[end + 1..]);
    (cleaned.trim().to_string(), action)
}

fn parse_action_body(body: &str) -> Option<ActionCommand> {
    let (character, kind) = body.split_once('|')?;
    let character = character.trim();
    if character.is_empty() {
        return None;
    }
    Some(ActionCommand {
        character: character.to_string(),
        kind: ActionKind::parse(kind.trim())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_character_line() {
        let d = parse_compact("Alice|Hello there").unwrap();
        match d {
            DialogueContent::Character {
                name,
                content,
                action,
                position,
                sprite,
            } => {
                assert_eq!(name, "Alice");
                assert_eq!(content, "Hello there");
                assert!(action.is_none());
                assert!(position.is_none());
                assert!(sprite.is_none());
            }
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn compact_narrator_sentinel() {
        let d = parse_compact("旁白|It is quiet.").unwrap();
        assert!(d.is_narrator());
        assert_eq!(d.content(), "It is quiet.");
    }

    #[test]
    fn compact_extracts_trailing_action() {
        let d = parse_compact("Alice|Hello there[action|Alice|shake]").unwrap();
        assert_eq!(d.content(), "Hello there");
        match d {
            DialogueContent::Character { action, .. } => {
                let action = action.unwrap();
                assert_eq!(action.character, "Alice");
                assert_eq!(action.kind, ActionKind::Shake);
            }
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn compact_narrator_drops_action() {
        let d = parse_compact("旁白|The door opens.[action|Alice|jump_up]").unwrap();
        assert!(d.is_narrator());
        assert_eq!(d.content(), "The door opens.");
    }

    #[test]
    fn compact_rejects_non_dialogue() {
        assert!(parse_compact("just narration without pipes").is_none());
        assert!(parse_compact("|no name").is_none());
        assert!(parse_compact("Alice|").is_none());
    }

    #[test]
    fn positional_full_line() {
        let d = parse_positional("Alice|L2|school_smile|Morning!").unwrap();
        match d {
            DialogueContent::Character {
                name,
                content,
                position,
                sprite,
                ..
            } => {
                assert_eq!(name, "Alice");
                assert_eq!(content, "Morning!");
                assert_eq!(position, Some(DialoguePosition::L2));
                assert_eq!(sprite.as_deref(), Some("school_smile"));
            }
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn positional_empty_segments_allowed() {
        let d = parse_positional("Alice|||Morning!").unwrap();
        match d {
            DialogueContent::Character {
                position, sprite, ..
            } => {
                assert!(position.is_none());
                assert!(sprite.is_none());
            }
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn positional_narrator_double_pipe() {
        let d = parse_positional("旁白||It is quiet.").unwrap();
        assert!(d.is_narrator());
        assert_eq!(d.content(), "It is quiet.");
    }

    #[test]
    fn positional_unknown_position_degrades_to_none() {
        let d = parse_positional("Alice|L5|smile|Hi").unwrap();
        match d {
            DialogueContent::Character { position, .. } => assert!(position.is_none()),
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn positional_action_in_content() {
        let d = parse_positional("Alice|L1||Hi[action|Alice|near]").unwrap();
        assert_eq!(d.content(), "Hi");
        match d {
            DialogueContent::Character { action, .. } => {
                assert_eq!(action.unwrap().kind, ActionKind::Near);
            }
            _ => panic!("expected character dialogue"),
        }
    }

    #[test]
    fn positional_rejects_too_few_segments() {
        assert!(parse_positional("Alice|Hello").is_none());
        assert!(parse_positional("Alice|L1|smile").is_none());
    }

    #[test]
    fn extract_action_is_single_pass() {
        // removed exactly once: re-extracting finds nothing new
        let (cleaned, action) = extract_action("Hi[action|A|shake] there");
        assert_eq!(cleaned, "Hi there");
        assert!(action.is_some());
        let (again, none) = extract_action(&cleaned);
        assert_eq!(again, cleaned);
        assert!(none.is_none());
    }

    #[test]
    fn extract_action_strips_even_unknown_kind() {
        let (cleaned, action) = extract_action("Hi[action|A|wave]");
        assert_eq!(cleaned, "Hi");
        assert!(action.is_none());
    }

    #[test]
    fn extract_action_leaves_unclosed_directive_alone() {
        let (cleaned, action) = extract_action("Hi[action|A|shake");
        assert_eq!(cleaned, "Hi[action|A|shake");
        assert!(action.is_none());
    }

    #[test]
    fn extract_action_only_first_occurrence() {
        let (cleaned, action) = extract_action("A[action|X|near]B[action|Y|away]");
        assert_eq!(cleaned, "AB[action|Y|away]");
        assert_eq!(action.unwrap().character, "X");
    }
}
