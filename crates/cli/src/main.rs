//! # salarycast-cli
//!
//! Interactive command-line front-end for the salary prediction model.
//! Loads the artifact once at startup, then reads one feature value per
//! line and prints one prediction per value until the user quits.

use std::io::{self, BufRead, Write};

use predictor_facade::format::format_currency;
use predictor_facade::{parse_feature, PredictionEngine, PredictorError, DEFAULT_MODEL_FILE};

const INPUT_LABEL: &str = "Years of experience";
const OUTPUT_LABEL: &str = "Estimated Salary";
const FAREWELL: &str = "Exiting. Goodbye!";

const CYAN: &str = "\x1b[96m";
const RESET: &str = "\x1b[0m";

/// What one line of user input produced
#[derive(Debug, PartialEq)]
enum LineOutcome {
    /// User asked to leave
    Exit,
    /// Successful prediction: the echoed input and the formatted result
    Prediction { input: f64, formatted: String },
    /// Recoverable problem; the loop keeps going
    Rejected(String),
}

fn is_exit_command(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit")
}

/// Map one input line to its outcome without touching stdout
fn handle_line(engine: &PredictionEngine, line: &str) -> LineOutcome {
    if is_exit_command(line) {
        return LineOutcome::Exit;
    }

    let value = match parse_feature(line) {
        Ok(value) => value,
        Err(error) => return LineOutcome::Rejected(friendly_message(&error)),
    };

    match engine.predict_one(value) {
        Ok(prediction) => LineOutcome::Prediction {
            input: value,
            formatted: format_currency(prediction),
        },
        Err(error) => LineOutcome::Rejected(friendly_message(&error)),
    }
}

fn friendly_message(error: &PredictorError) -> String {
    match error {
        PredictorError::InvalidInput(_) => {
            format!("{}. Enter a number such as 5.5, or 'quit'.", error)
        }
        _ => error.to_string(),
    }
}

fn print_prompt() {
    print!("Enter {} (e.g. 5.5) or type 'quit': ", INPUT_LABEL.to_lowercase());
    io::stdout().flush().ok();
}

fn print_prediction(input: f64, formatted: &str) {
    let banner = "=".repeat(50);
    println!();
    println!("{}", banner);
    println!("{} entered: {}", INPUT_LABEL, input);
    println!("Predicted {}: {}{}{}", OUTPUT_LABEL, CYAN, formatted, RESET);
    println!("{}", banner);
    println!();
}

/// Run the read-predict-print loop until quit or end of input
fn run_loop<R: BufRead>(engine: &PredictionEngine, input: R) {
    print_prompt();
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            // Treat a broken stdin like end of input
            Err(_) => break,
        };

        match handle_line(engine, &line) {
            LineOutcome::Exit => return,
            LineOutcome::Prediction { input, formatted } => print_prediction(input, &formatted),
            LineOutcome::Rejected(message) => println!("{}", message),
        }

        print_prompt();
    }
    // End of input reached without an explicit quit
    println!();
}

fn load_engine() -> PredictionEngine {
    match PredictionEngine::from_default_file() {
        Ok(engine) => {
            println!("Model '{}' loaded.", DEFAULT_MODEL_FILE);
            engine
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            match error {
                PredictorError::ArtifactNotFound { .. } => {
                    eprintln!(
                        "Place '{}' in the working directory and try again.",
                        DEFAULT_MODEL_FILE
                    );
                }
                _ => {
                    eprintln!(
                        "The artifact may come from an incompatible training pipeline version."
                    );
                }
            }
            std::process::exit(1);
        }
    }
}

fn main() {
    // An interrupt ends the session the same way 'quit' does
    ctrlc::set_handler(|| {
        println!("\n{}", FAREWELL);
        std::process::exit(0);
    })
    .expect("failed to install interrupt handler");

    let engine = load_engine();

    println!();
    println!("--- {} Predictor ---", OUTPUT_LABEL);
    run_loop(&engine, io::stdin().lock());
    println!("{}", FAREWELL);
}
