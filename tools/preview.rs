/// Preview: parses a scene script and prints the structured result of
/// every message, including resolved asset URLs.
///
/// Usage: preview <script_file> [--grammar compact|positional]
use std::process;

use scene_script::core::assets::{AssetKind, AssetResolver};
use scene_script::core::dialogue::DialogueGrammar;
use scene_script::core::message::MessageParser;
use scene_script::core::staging;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: preview <script_file> [--grammar compact|positional]");
        process::exit(0);
    }

    let script_path = &args[1];
    let mut grammar = DialogueGrammar::Compact;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--grammar" && i + 1 < args.len() {
            i += 1;
            grammar = match args[i].as_str() {
                "compact" => DialogueGrammar::Compact,
                "positional" => DialogueGrammar::Positional,
                other => {
                    eprintln!("ERROR: Unknown grammar '{}'", other);
                    process::exit(1);
                }
            };
        }
        i += 1;
    }

    let contents = match std::fs::read_to_string(script_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: Failed to read '{}': {}", script_path, e);
            process::exit(1);
        }
    };

    let parser = MessageParser::with_grammar(grammar);
    let resolver = AssetResolver::default();

    for (index, message) in contents.split("\n\n").enumerate() {
        if message.trim().is_empty() {
            continue;
        }

        println!("=== Message {} ===", index + 1);

        let update = parser.parse(message);
        if let Some(ref alias) = update.background {
            println!("background: {}", resolver.resolve(alias, AssetKind::Image));
        }
        if let Some(ref alias) = update.cg {
            println!("cg:         {}", resolver.resolve(alias, AssetKind::Image));
        }
        if update.hide_cg {
            println!("hide_cg");
        }
        if let Some(ref alias) = update.bgm {
            println!("bgm:        {}", resolver.resolve(alias, AssetKind::Audio));
        }
        if let Some(ref dialogue) = update.dialogue {
            match ron::to_string(dialogue) {
                Ok(s) => println!("dialogue:   {}", s),
                Err(e) => eprintln!("ERROR serializing dialogue: {}", e),
            }
        }
        if let Some(ref choices) = update.choices {
            println!("choices:    {:?}", choices);
        }

        for line in message.lines() {
            if let Some(cmd) = staging::parse_staging(line.trim()) {
                match ron::to_string(&cmd) {
                    Ok(s) => println!("staging:    {}", s),
                    Err(e) => eprintln!("ERROR serializing staging command: {}", e),
                }
            }
        }

        if update.is_empty() {
            println!("(no scene content)");
        }
        println!();
    }
}
