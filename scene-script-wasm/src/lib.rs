//! WASM bindings for scene-script: lets the browser-hosted chat
//! plugin run the parser in-process. JSON strings cross the boundary.

use wasm_bindgen::prelude::*;

use scene_script::core::assets::{AssetKind, AssetResolver};
use scene_script::core::config::PresentationConfig;
use scene_script::core::dialogue::DialogueGrammar;
use scene_script::core::message::MessageParser;
use scene_script::core::staging;

fn parse_grammar(s: &str) -> Result<DialogueGrammar, JsError> {
    match s {
        "compact" => Ok(DialogueGrammar::Compact),
        "positional" => Ok(DialogueGrammar::Positional),
        other => Err(JsError::new(&format!("Unknown dialogue grammar: {other}"))),
    }
}

fn parse_asset_kind(s: &str) -> Result<AssetKind, JsError> {
    match s {
        "image" => Ok(AssetKind::Image),
        "audio" => Ok(AssetKind::Audio),
        other => Err(JsError::new(&format!("Unknown asset kind: {other}"))),
    }
}

/// The per-session parsing facade the presentation layer holds on to.
#[wasm_bindgen]
pub struct SceneSession {
    parser: MessageParser,
    resolver: AssetResolver,
    config: PresentationConfig,
}

#[wasm_bindgen]
impl SceneSession {
    /// Create a session. `grammar` is "compact" or "positional";
    /// `base_url` overrides the default asset root when non-empty.
    #[wasm_bindgen(constructor)]
    pub fn new(grammar: &str, base_url: &str) -> Result<SceneSession, JsError> {
        let parser = MessageParser::with_grammar(parse_grammar(grammar)?);
        let resolver = if base_url.is_empty() {
            AssetResolver::default()
        } else {
            AssetResolver::new(base_url)
        };
        Ok(SceneSession {
            parser,
            resolver,
            config: PresentationConfig::default(),
        })
    }

    /// Parse one chat message. Returns the `SceneUpdate` as JSON.
    pub fn parse_message(&self, text: &str) -> Result<String, JsError> {
        let update = self.parser.parse(text);
        serde_json::to_string(&update)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Parse one line as a staging command. Returns the command as
    /// JSON, or the JSON literal `null` when the line is not one.
    pub fn parse_staging_line(&self, line: &str) -> Result<String, JsError> {
        serde_json::to_string(&staging::parse_staging(line))
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Resolve an asset alias. `kind` is "image" or "audio".
    pub fn resolve_asset(&self, alias: &str, kind: &str) -> Result<String, JsError> {
        Ok(self.resolver.resolve(alias, parse_asset_kind(kind)?))
    }

    /// Replace the session config from a RON string. Validation errors
    /// reject the update and keep the current config.
    pub fn load_config(&mut self, ron: &str) -> Result<(), JsError> {
        self.config = PresentationConfig::parse_ron(ron)
            .map_err(|e| JsError::new(&format!("Config error: {e}")))?;
        Ok(())
    }

    /// The current config as JSON for the settings panel.
    pub fn config_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.config)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Typewriter delay between characters, in milliseconds.
    pub fn typing_interval_ms(&self) -> u32 {
        self.config.typing_interval_ms()
    }

    /// Auto-advance delay after a finished line, in milliseconds.
    pub fn auto_play_delay_ms(&self) -> u32 {
        self.config.auto_play_delay_ms()
    }

    /// JSON array of supported dialogue grammar identifiers.
    pub fn grammars() -> String {
        serde_json::to_string(&["compact", "positional"]).unwrap_or_else(|_| "[]".to_string())
    }
}
