//! Message-level aggregation: raw chat text in, [`SceneUpdate`] out.

use crate::core::dialogue::{self, DialogueGrammar};
use crate::core::directive::{self, Directive};
use crate::core::staging;
use crate::schema::scene::SceneUpdate;

/// Parses whole messages into scene updates.
///
/// The parser is stateless and trivially `Copy`; the only
/// configuration is which dialogue grammar a deployment speaks.
/// Parsing never fails: unmatched lines contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageParser {
    grammar: DialogueGrammar,
}

impl MessageParser {
    /// A parser for the canonical compact dialogue grammar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grammar(grammar: DialogueGrammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> DialogueGrammar {
        self.grammar
    }

    /// Parse one message. Lines are trimmed and blank lines skipped.
    ///
    /// Each line contributes to at most one field, and each field is
    /// first-wins: the earliest line that defines a field keeps it,
    /// later matching lines are ignored. At most one dialogue record
    /// is produced per message.
    pub fn parse(&self, text: &str) -> SceneUpdate {
        let mut update = SceneUpdate::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(directive) = directive::classify(line) {
                apply_directive(&mut update, directive);
                continue;
            }

            // Staging commands have their own per-line entry points
            // (core::staging); they must not be misread as dialogue.
            if staging::parse_staging(line).is_some() {
                continue;
            }

            if update.dialogue.is_none() {
                update.dialogue = dialogue::parse_dialogue(line, self.grammar);
            }
        }

        update
    }
}

/// First-wins per field. `hide_cg` is a flag, so repeats are harmless.
fn apply_directive(update: &mut SceneUpdate, directive: Directive) {
    match directive {
        Directive::Background(alias) => {
            if update.background.is_none() {
                update.background = Some(alias);
            }
        }
        Directive::Cg(alias) => {
            if update.cg.is_none() {
                update.cg = Some(alias);
            }
        }
        Directive::HideCg => update.hide_cg = true,
        Directive::Bgm(alias) => {
            if update.bgm.is_none() {
                update.bgm = Some(alias);
            }
        }
        Directive::Choices(options) => {
            if update.choices.is_none() {
                update.choices = Some(options);
            }
        }
    }
}

/// Parse a message with the default (compact-grammar) parser.
pub fn parse_message(text: &str) -> SceneUpdate {
    MessageParser::new().parse(text)
}
