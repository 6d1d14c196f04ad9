//! Decodes an hstore literal given on the command line and prints each pair.
//!
//! Run with
//!
//! ```bash
//! cargo run -p hstoremodem --example print_pairs -- '"a"=>"1", b=>NULL'
//! ```

use hstoremodem::parse;

fn main() {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(r#""a"=>"1", b=>NULL"#));

    for entry in parse(&raw) {
        match entry {
            Ok(entry) => match entry.value {
                Some(value) => println!("{} => {}", entry.key, value),
                None => println!("{} => NULL", entry.key),
            },
            Err(err) => {
                eprintln!("parse failed: {err}");
                std::process::exit(1);
            }
        }
    }
}
