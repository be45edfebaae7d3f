/// Script Linter: validates a scene script file before it ships.
///
/// Messages are separated by blank lines. Reports lines that no parser
/// recognizes and messages that carry more than one dialogue line.
///
/// Usage: script_linter <script_file> [--grammar compact|positional]
use std::process;

use scene_script::core::dialogue::{parse_dialogue, DialogueGrammar};
use scene_script::core::directive;
use scene_script::core::staging;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: script_linter <script_file> [--grammar compact|positional]");
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

    let (errors, warnings) = lint_script(&contents, grammar);

    println!("=== Script Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_script(contents: &str, grammar: DialogueGrammar) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut dialogue_lines_in_message = 0;
    let mut message_start = 1;

    for (idx, raw_line) in contents.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw_line.trim();

        // Blank line: message boundary
        if line.is_empty() {
            dialogue_lines_in_message = 0;
            message_start = line_number + 1;
            continue;
        }

        if directive::classify(line).is_some() {
            continue;
        }
        if staging::parse_staging(line).is_some() {
            continue;
        }
        if parse_dialogue(line, grammar).is_some() {
            dialogue_lines_in_message += 1;
            if dialogue_lines_in_message >= 2 {
                errors.push(format!(
                    "Line {}: extra dialogue line in the message starting at line {} (only the first is kept)",
                    line_number, message_start
                ));
            }
            // Bracket-shaped dialogue is almost always a typo'd directive
            if line.starts_with('[') {
                warnings.push(format!(
                    "Line {}: reads as dialogue but looks like a directive: {}",
                    line_number, line
                ));
            }
            continue;
        }

        if line.starts_with('[') {
            warnings.push(format!(
                "Line {}: malformed directive, will be ignored: {}",
                line_number, line
            ));
        } else {
            warnings.push(format!(
                "Line {}: unrecognized content, will be ignored: {}",
                line_number, line
            ));
        }
    }

    (errors, warnings)
}
