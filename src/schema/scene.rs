use serde::{Deserialize, Serialize};

use super::dialogue::DialogueContent;

/// The aggregate result of parsing one chat message.
///
/// Fields are independent: a message may set a background, a BGM cue,
/// and a dialogue line all at once. Unset fields mean "this message
/// does not touch that part of the scene". `hide_cg` is an explicit
/// clear signal and deliberately independent of `cg`; the presentation
/// layer decides precedence if a message carries both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cg: Option<String>,
    pub hide_cg: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<DialogueContent>,
    /// Non-empty when present; empty options are dropped at parse time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl SceneUpdate {
    /// Returns true if the message contained no recognized content at all.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.cg.is_none()
            && !self.hide_cg
            && self.bgm.is_none()
            && self.dialogue.is_none()
            && self.choices.is_none()
    }
}
