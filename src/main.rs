use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::process;

use cypher_enigma::cipher::attack::{self, SearchControl};
use cypher_enigma::cipher::engine;
use cypher_enigma::config::{self, AttackRequest, MachineSettings};
use cypher_enigma::log;
use cypher_enigma::logging::LogLevel;

fn usage() -> ! {
    eprintln!("usage: cypher-enigma process <settings.json> <text|-> [--trace]");
    eprintln!("       cypher-enigma attack <request.json>");
    eprintln!("       cypher-enigma presets");
    process::exit(2);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("process") => run_process(&args[2..]),
        Some("attack") => run_attack(&args[2..]),
        Some("presets") => run_presets(),
        _ => usage(),
    }
}

fn read_text_argument(arg: &str) -> Result<String, Box<dyn Error>> {
    if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}

fn run_process(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (path, text_arg) = match (args.first(), args.get(1)) {
        (Some(path), Some(text)) => (path, text),
        _ => usage(),
    };
    let show_trace = args.iter().any(|a| a == "--trace");

    let settings: MachineSettings = serde_json::from_str(&fs::read_to_string(path)?)?;
    let errors = config::validate_settings(&settings);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("settings: {}", e);
        }
        process::exit(1);
    }

    let text = read_text_argument(text_arg)?;
    let result = engine::process_text(&text, &settings);
    if !result.processed {
        log!(LogLevel::Info, "no active components, text passed through");
    }
    println!("{}", result.output);
    if show_trace {
        eprintln!("{}", result.trace);
    }
    Ok(())
}

fn run_attack(args: &[String]) -> Result<(), Box<dyn Error>> {
    let path = match args.first() {
        Some(path) => path,
        None => usage(),
    };
    let request: AttackRequest = serde_json::from_str(&fs::read_to_string(path)?)?;

    let errors = attack::validate_attack(&request.ciphertext, &request.known_pairs, &request.settings);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("attack: {}", e);
        }
        process::exit(1);
    }

    let candidates = attack::search_with_hook(
        &request.ciphertext,
        &request.known_pairs,
        &request.settings,
        |progress| {
            if progress.combination % 1000 == 0 {
                log!(
                    LogLevel::Debug,
                    "combination {}/{} ({} matches so far)",
                    progress.combination,
                    progress.total,
                    progress.matches
                );
            }
            SearchControl::Continue
        },
    );

    println!("{} candidate(s)", candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "#{} {} -> {}",
            i + 1,
            candidate.positions_string,
            candidate.decrypted
        );
    }
    Ok(())
}

fn run_presets() -> Result<(), Box<dyn Error>> {
    println!("scramblers:");
    for preset in config::SCRAMBLER_PRESETS.iter() {
        println!("  {:<12} {}", preset.name, preset.wiring);
    }
    println!("reflectors:");
    for preset in config::REFLECTOR_PRESETS.iter() {
        println!("  {:<12} {}", preset.name, preset.wiring);
    }
    Ok(())
}
