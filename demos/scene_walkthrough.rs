//! Walks through a short scripted scene the way the presentation
//! layer would: parse each message, resolve assets, apply staging.
//!
//! Run with: cargo run --example scene_walkthrough

use scene_script::core::assets::{AssetKind, AssetResolver};
use scene_script::core::staging;
use scene_script::parse_message;

fn main() {
    let messages = [
        "[bg|classroom]\n[bgm|morning_theme]\n旁白|The first bell has already rung.",
        "[show|Alice|school_uniform_smile|L2]",
        "Alice|You're late again![action|Alice|shake]",
        "[cg|rooftop_sunset]\n旁白|She points at the clock.",
        "[hide_cg]\n[choice|Apologize|Make an excuse|Say nothing]",
    ];

    let resolver = AssetResolver::default();

    for (i, message) in messages.iter().enumerate() {
        println!("--- message {} ---", i + 1);

        // Staging commands are handled per line, before aggregation.
        for line in message.lines() {
            if let Some(cmd) = staging::parse_staging(line.trim()) {
                println!("stage: {cmd:?}");
            }
        }

        let update = parse_message(message);
        if let Some(ref bg) = update.background {
            println!("background -> {}", resolver.resolve(bg, AssetKind::Image));
        }
        if let Some(ref cg) = update.cg {
            println!("cg -> {}", resolver.resolve(cg, AssetKind::Image));
        }
        if update.hide_cg {
            println!("cg cleared");
        }
        if let Some(ref bgm) = update.bgm {
            println!("bgm -> {}", resolver.resolve(bgm, AssetKind::Audio));
        }
        if let Some(ref dialogue) = update.dialogue {
            println!("dialogue: {dialogue:?}");
        }
        if let Some(ref choices) = update.choices {
            println!("choices: {choices:?}");
        }
        println!();
    }
}
