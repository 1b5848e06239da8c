// src/cli.rs
use std::{env, fs, io::Read, path::PathBuf};

use crate::extract;
use crate::model::EntryRoot;

#[derive(Default)]
pub struct Params {
    pub inputs: Vec<PathBuf>,
    pub out: Option<PathBuf>,
    pub pretty: bool,
    pub keyed: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let mut payloads: Vec<(String, String)> = Vec::new();
    if params.inputs.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        payloads.push((s!("<stdin>"), buf));
    } else {
        for path in &params.inputs {
            payloads.push((path.display().to_string(), fs::read_to_string(path)?));
        }
    }

    let mut keyed: Vec<(String, EntryRoot)> = Vec::new();
    for (name, html) in &payloads {
        match extract::extract_entries(html) {
            Ok(extraction) => {
                if !extraction.failed_roots.is_empty() {
                    eprintln!(
                        "Warning: {name}: entry roots {:?} failed extraction",
                        extraction.failed_roots
                    );
                }
                keyed.extend(extraction.entries);
            }
            // unparseable payloads are skipped, the rest still go out
            Err(e) => {
                loge!("{name}: {e}");
                eprintln!("Warning: {name}: {e}");
            }
        }
    }

    let json = if params.keyed {
        to_json(&keyed, params.pretty)?
    } else {
        let entries: Vec<EntryRoot> = keyed.into_iter().map(|(_, e)| e).collect();
        to_json(&entries, params.pretty)?
    };

    match &params.out {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--pretty" => params.pretty = true,
            "--keyed" => params.keyed = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            _ => params.inputs.push(PathBuf::from(a)),
        }
    }
    Ok(params)
}
