//! Example demonstrating the binary-likeness heuristic
//!
//! Shows how inputs are classified before choosing a conversion direction,
//! including the deliberate misclassification of short numeric text.

use textbits::{decode, encode, looks_like_binary};

fn main() -> anyhow::Result<()> {
    println!("=== Auto-Detection Example ===\n");

    let inputs = [
        "Hello, world!",
        "01001000 01101001",
        "0100100001101001",
        "1101",
        "  ,,--  ",
    ];

    for input in inputs {
        let binary = looks_like_binary(input);
        println!("{:?}", input);
        if binary {
            match decode(input) {
                Ok(text) => println!("  binary → text: {:?}", text),
                Err(e) => println!("  looks binary, but: {e}"),
            }
        } else {
            println!("  text → binary: {}", encode(input));
        }
        println!();
    }

    Ok(())
}
