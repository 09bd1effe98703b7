use il_met_decode::{decode_atis, decode_warning};
use std::env;
use std::io::{self, BufRead};

/// Decode a message read from stdin and print the record as JSON
///
/// ATIS input lines are joined into a single message, warning input is
/// decoded line by line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str);

    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()?;

    let json = match mode {
        Some("atis") => serde_json::to_string_pretty(&decode_atis(&lines.join(" ")))?,
        Some("warning") => serde_json::to_string_pretty(&decode_warning(lines.as_slice()))?,
        _ => {
            eprintln!("Usage: {} <atis|warning> < message.txt", args[0]);
            std::process::exit(1);
        }
    };

    println!("{}", json);
    Ok(())
}
