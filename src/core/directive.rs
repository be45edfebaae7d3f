//! Bracket directive matching: the `[tag|payload]` wire shape and the
//! priority-ordered dispatch table for scene-level directives.

/// A scene-level directive recognized inside a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Background(String),
    Cg(String),
    HideCg,
    Bgm(String),
    Choices(Vec<String>),
}

/// Scan `line` for `[tag|payload]` and return the payload of the first
/// well-formed occurrence. The pattern may appear anywhere in the line.
/// The payload runs to the first `]` and must be non-empty.
pub(crate) fn bracket_payload<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let mut search = line;
    loop {
        let start = search.find('[')?;
        let rest = &search[start + 1..];
        if let Some(body) = rest.strip_prefix(tag).and_then(|r| r.strip_prefix('|')) {
            let end = body.find(']')?;
            if end > 0 {
                return Some(&body[..end]);
            }
        }
        search = rest;
    }
}

/// Returns true if the bare flag directive `[tag]` occurs anywhere in
/// the line.
pub(crate) fn bracket_flag(line: &str, tag: &str) -> bool {
    let mut search = line;
    while let Some(start) = search.find('[') {
        let rest = &search[start + 1..];
        if let Some(after) = rest.strip_prefix(tag) {
            if after.starts_with(']') {
                return true;
            }
        }
        search = rest;
    }
    false
}

/// Anchored matcher for standalone directives: the entire trimmed line
/// must be exactly `[tag|f1|…|fN]` with `arity` fields. The first
/// `arity - 1` fields cannot contain `|`; the last field runs to the
/// closing bracket. Every field must be non-empty. Returns the raw
/// (untrimmed) fields.
///
/// No field may contain `]`: the first `]` on the line must be the
/// closing bracket. Names like `A]B` are rejected rather than matched
/// against whichever `]` comes last.
pub(crate) fn anchored_fields<'a>(
    line: &'a str,
    tag: &str,
    arity: usize,
) -> Option<Vec<&'a str>> {
    let interior = line
        .trim()
        .strip_prefix('[')?
        .strip_prefix(tag)?
        .strip_prefix('|')?
        .strip_suffix(']')?;
    if interior.contains(']') {
        return None;
    }
    let fields: Vec<&str> = interior.splitn(arity, '|').collect();
    if fields.len() != arity || fields.iter().any(|f| f.is_empty()) {
        return None;
    }
    Some(fields)
}

type Matcher = fn(&str) -> Option<Directive>;

/// The dispatch table for scene directives, in priority order. The
/// order is load-bearing: a line contributes to at most one field, and
/// the first matcher that fires claims it.
const SCENE_MATCHERS: &[Matcher] = &[
    match_background,
    match_cg,
    match_hide_cg,
    match_bgm,
    match_choices,
];

/// Classify one trimmed, non-blank line against the scene directive
/// table. Returns `None` for dialogue, staging commands, and anything
/// malformed.
pub fn classify(line: &str) -> Option<Directive> {
    SCENE_MATCHERS.iter().find_map(|matcher| matcher(line))
}

fn match_background(line: &str) -> Option<Directive> {
    bracket_payload(line, "bg").map(|p| Directive::Background(p.to_string()))
}

fn match_cg(line: &str) -> Option<Directive> {
    bracket_payload(line, "cg").map(|p| Directive::Cg(p.to_string()))
}

fn match_hide_cg(line: &str) -> Option<Directive> {
    bracket_flag(line, "hide_cg").then_some(Directive::HideCg)
}

fn match_bgm(line: &str) -> Option<Directive> {
    bracket_payload(line, "bgm").map(|p| Directive::Bgm(p.to_string()))
}

/// `[choice|opt1|opt2|…]`: options are pipe-separated, trimmed, and
/// empty options are dropped. No surviving option means no match.
fn match_choices(line: &str) -> Option<Directive> {
    let payload = bracket_payload(line, "choice")?;
    let options: Vec<String> = payload
        .split('|')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect();
    if options.is_empty() {
        None
    } else {
        Some(Directive::Choices(options))
    }
}
