use std::io;
use std::process;

mod digits;
mod engine;

fn main() -> io::Result<()> {
    println!("Enter an expression with large integers (e.g., '123456789 + 987654321' or '987654321 - 123456789'):");

    let mut expression = String::new();
    io::stdin().read_line(&mut expression)?;

    match engine::evaluate(&expression) {
        Ok(result) => println!("Result: {}", result),
        Err(error @ engine::EvalError::InvalidFormat) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
        Err(error) => {
            // Only reachable through a defect in the expression grammar.
            eprintln!("Unexpected error: {}", error);
            process::exit(1);
        }
    }
    Ok(())
}
