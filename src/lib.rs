//! Scene Script: a deterministic directive-markup parser for
//! visual-novel scenes.
//!
//! Chat messages carry a small line-oriented markup (`[bg|…]`,
//! `[bgm|…]`, `[choice|…]`, dialogue lines, staging commands) that
//! this crate translates into typed scene records. Parsing is a pure
//! function over the input text: no I/O, no shared state, and no
//! failures. Malformed lines simply contribute nothing.

pub mod core;
pub mod schema;

pub use crate::core::assets::{resolve_asset_url, AssetKind, AssetResolver};
pub use crate::core::dialogue::DialogueGrammar;
pub use crate::core::message::{parse_message, MessageParser};
pub use crate::schema::scene::SceneUpdate;
