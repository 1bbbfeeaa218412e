use std::io::Read;

use clap::Parser;
use rotfold::fold;

/// Fold a message through the rotfold hash and print the resulting word.
#[derive(Parser)]
struct Args {
    /// Message to hash, or `-` to read raw bytes from stdin.
    message: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let bytes = if args.message == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        args.message.into_bytes()
    };

    println!("{:08x}", fold(&bytes));
    Ok(())
}
