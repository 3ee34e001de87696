use nocturn::Scanner;
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(args[1].as_str()),
        _ => {
            writeln!(stdout, "Usage: nocturn [script]").expect("Something went wrong");
            std::process::exit(64);
        },
    };

    if let Err(e) = result {
        writeln!(stderr, "{}", e).expect("Something went wrong");
        std::process::exit(65);
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let clean = run(contents.as_str())?;
    if !clean {
        std::process::exit(65);
    }
    Ok(())
}

fn run_prompt() -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        run(buffer.as_str())?;
    }

    Ok(())
}

// Prints the token sequence and any diagnostics; returns whether the scan
// was diagnostic-free.
fn run(source: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let (tokens, errors) = Scanner::new(source).scan_tokens();

    for error in &errors {
        writeln!(stderr, "{}", error)?;
    }
    for token in &tokens {
        writeln!(stdout, "{:?}", token)?;
    }

    Ok(errors.is_empty())
}
