//! Asset alias resolution: bare aliases from directives become
//! canonical URLs under a fixed base path. Pure string transformation,
//! no network access and no existence checks.

use serde::{Deserialize, Serialize};

/// Root URL under which bare asset aliases resolve.
pub const DEFAULT_ASSET_BASE: &str = "https://gitgud.io/RBQ/amakano3/-/raw/master";

/// Extensions accepted as already-complete asset file names.
const MEDIA_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "mp3", "ogg", "wav"];

/// What kind of asset a directive refers to. Decides the default file
/// extension when an alias carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Audio,
}

impl AssetKind {
    pub fn default_extension(&self) -> &'static str {
        match self {
            Self::Image => ".png",
            Self::Audio => ".mp3",
        }
    }
}

/// Maps asset aliases to URLs under a configurable base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResolver {
    base_url: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetResolver {
    /// A resolver rooted at `base_url`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an alias to a URL.
    ///
    /// Absolute `http(s)://` inputs pass through unchanged. An alias
    /// with a recognized media extension is joined to the base as-is;
    /// anything else gets the kind's default extension first.
    pub fn resolve(&self, alias: &str, kind: AssetKind) -> String {
        if alias.starts_with("http://") || alias.starts_with("https://") {
            return alias.to_string();
        }
        if has_media_extension(alias) {
            format!("{}/{}", self.base_url, alias)
        } else {
            format!("{}/{}{}", self.base_url, alias, kind.default_extension())
        }
    }
}

fn has_media_extension(alias: &str) -> bool {
    match alias.rsplit_once('.') {
        Some((_, ext)) => MEDIA_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Resolve against the default asset base.
pub fn resolve_asset_url(alias: &str, kind: AssetKind) -> String {
    AssetResolver::default().resolve(alias, kind)
}
