use std::env;
use std::fs;
use std::process;

use cancionero::{CancioneroError, SongSheet, Songbook};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: cancionero <sheet.txt> <semitones> [output.txt]
       cancionero --songbook <cantoral.jsonl> <song> <semitones> [output.txt]";

fn main() {
    // Logs go to stderr, stdout is the transposed sheet
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cancionero=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let from_songbook = args[1] == "--songbook";
    let (semitones_arg, output_path) = if from_songbook {
        if args.len() < 5 {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        (&args[4], args.get(5))
    } else {
        (&args[2], args.get(3))
    };

    let semitones: i32 = match semitones_arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!(
                "Invalid semitone offset '{}': expected an integer like 2 or -3",
                semitones_arg
            );
            process::exit(1);
        }
    };

    let input_path = if from_songbook { &args[2] } else { &args[1] };
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let sheet = if from_songbook {
        load_song(&source, &args[3])
    } else {
        SongSheet::parse(&source)
    };

    let output = match sheet.and_then(|sheet| sheet.transposed(semitones).render()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Transposition error: {}", e);
            process::exit(1);
        }
    };

    tracing::info!(input = %input_path, semitones, "transposed sheet");

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed sheet to {}", path);
        }
        None => {
            print!("{}", output);
        }
    }
}

fn load_song(source: &str, key: &str) -> Result<SongSheet, CancioneroError> {
    let songbook = Songbook::from_jsonl(source)?;
    let song = songbook
        .find(key)
        .ok_or_else(|| CancioneroError::SongNotFound(key.to_string()))?;
    Ok(song.to_sheet())
}
