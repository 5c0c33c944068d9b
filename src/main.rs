use minirel::engine::Engine;
use minirel::errors::engine_error::EngineError;
use minirel::{executer, parser};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: minirel <db_location> <page_size> <buffer_pages> <indexing>");
        return ExitCode::FAILURE;
    }

    let db_location = &args[1];
    let Ok(page_size) = args[2].parse::<u32>() else {
        eprintln!("Error: page_size must be a positive integer.");
        return ExitCode::FAILURE;
    };
    let Ok(buffer_pages) = args[3].parse::<usize>() else {
        eprintln!("Error: buffer_pages must be a positive integer.");
        return ExitCode::FAILURE;
    };
    let indexing = match args[4].to_ascii_lowercase().as_str() {
        "true" | "on" => true,
        "false" | "off" => false,
        _ => {
            eprintln!("Error: indexing must be true or false.");
            return ExitCode::FAILURE;
        }
    };
    if page_size == 0 || buffer_pages == 0 {
        eprintln!("Error: page_size and buffer_pages must be positive.");
        return ExitCode::FAILURE;
    }

    println!("Welcome to minirel!");
    println!("Accessing database location....");

    let mut engine = match Engine::open(Path::new(db_location), page_size, buffer_pages, indexing) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to open database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if engine.catalog.page_size() != page_size {
        println!(
            "Ignoring the provided page size. Using the stored size of {}....",
            engine.catalog.page_size()
        );
    }

    prompt_loop(&mut engine);

    println!("Purging the page buffer and saving the catalog....");
    if let Err(e) = engine.shutdown() {
        eprintln!("Shutdown failed: {}", e);
        return ExitCode::FAILURE;
    }
    println!("Shutting down....");
    ExitCode::SUCCESS
}

// Reads commands until <QUIT> or end of input. A command may span lines
// and ends with a semicolon.
fn prompt_loop(engine: &mut Engine) {
    let stdin = io::stdin();
    let mut command = String::new();

    loop {
        if command.is_empty() {
            print!("minirel> ");
        } else {
            print!("      -> ");
        }
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // end of input
            Ok(_) => {}
        }

        let line = line.trim();
        if command.is_empty() && line.eq_ignore_ascii_case("<quit>") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        command.push_str(line);
        command.push(' ');
        if !line.ends_with(';') {
            continue;
        }

        let full = command.trim().trim_end_matches(';').trim().to_string();
        command.clear();
        run_command(engine, &full);
    }
}

fn run_command(engine: &mut Engine, input: &str) {
    if input.is_empty() {
        return;
    }
    match parser::parse_command(input) {
        Ok(statement) => {
            if let Err(e) = executer::execute(engine, statement) {
                println!("{}", e);
            }
        }
        Err(message) => println!("{}", EngineError::Parse(message)),
    }
}
