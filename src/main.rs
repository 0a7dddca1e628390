// Menagerie: polymorphic feeding demo with explicit base delegation

use std::process;

use crossterm::style::Stylize;

use menagerie::animal::dog::Dog;
use menagerie::animal::person::Person;
use menagerie::roster::Menagerie;
use menagerie::terminal::StdoutTerminal;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--plain]", program_name);
    eprintln!();
    eprintln!("Feeds every animal in the demo roster and prints each one's");
    eprintln!("eating notifications in dispatch order.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --plain    disable styled headers");
    eprintln!("  -h, --help print this help and exit");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("menagerie");

    let mut plain = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--plain" => plain = true,
            "-h" | "--help" => {
                print_usage(program_name);
                return;
            }
            other => {
                eprintln!("Error: unrecognized argument '{}'", other);
                eprintln!();
                print_usage(program_name);
                process::exit(1);
            }
        }
    }

    // The reference scenario: one of each variant
    let mut menagerie = Menagerie::new();
    menagerie.admit("Mizu", Box::new(Dog::new("Mizu", 5)));
    menagerie.admit("Jose", Box::new(Person::new("Software Engineer", 23)));

    let mut console = StdoutTerminal;
    let mut first = true;
    for label in menagerie.labels() {
        if !first {
            println!();
        }
        first = false;

        let header = format!("── {} ──", label);
        if plain {
            println!("{}", header);
        } else {
            println!("{}", header.bold().cyan());
        }

        if let Err(e) = menagerie.feed(label, &mut console) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
