//! plainsql — the plain-English SQL CLI
//!
//! # Usage
//!
//! ```bash
//! # One-shot translation
//! plainsql "show all records from customers"
//!
//! # Machine-readable output
//! plainsql "delete from customers where id = 1" --format json
//!
//! # Interactive session
//! plainsql repl
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use plainsql::prelude::*;

#[derive(Parser)]
#[command(name = "plainsql")]
#[command(version)]
#[command(about = "Plain English in, SQL out", long_about = None)]
#[command(after_help = "EXAMPLES:
    plainsql 'show all records from customers'
    plainsql 'create a table for customers with name, email, phone'
    plainsql 'update customers set status to active where id = 1' --verbose
    plainsql repl")]
struct Cli {
    /// The request to translate
    request: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "sql")]
    format: OutputFormat,

    /// Also show how the request was classified
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Sql,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a request and show how it translates
    Explain {
        /// The request to explain
        request: String,
    },
    /// Interactive translation loop
    Repl,
    /// Show example requests for every statement kind
    Examples,
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Explain { request }) => explain_request(request),
        Some(Commands::Repl) => run_repl(),
        Some(Commands::Examples) => show_examples(),
        None => {
            if let Some(request) = &cli.request {
                if let Err(e) = translate_once(request, &cli) {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    std::process::exit(1);
                }
            } else {
                println!("{}", "plainsql — plain English in, SQL out".cyan().bold());
                println!();
                println!("Usage: plainsql <REQUEST> [OPTIONS]");
                println!();
                println!("Try: plainsql --help");
            }
        }
    }
}

fn translate_once(request: &str, cli: &Cli) -> Result<(), TranslateError> {
    let parsed = classify(request)?;
    let sql = build_statement(&parsed)?;

    match cli.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "operation": parsed.operation,
                "text": parsed.text,
                "sql": sql,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).unwrap_or_default()
            );
        }
        OutputFormat::Sql => {
            if cli.verbose {
                println!(
                    "{} {}",
                    "Operation:".dimmed(),
                    format!("{}", parsed.operation).cyan()
                );
            }
            println!("{sql}");
        }
    }

    Ok(())
}

fn explain_request(request: &str) {
    println!("{}", "plainsql — request explanation".cyan().bold());
    println!();
    println!("{} {}", "Request:".dimmed(), request.yellow());
    println!();

    match classify(request) {
        Ok(parsed) => {
            println!("{}", "Classified:".green().bold());
            println!(
                "  {} {}",
                "Operation:".dimmed(),
                format!("{}", parsed.operation).cyan()
            );
            println!("  {} {}", "Normalized:".dimmed(), parsed.text.white());
            println!();

            match build_statement(&parsed) {
                Ok(sql) => {
                    println!("{}", "Generated SQL:".green().bold());
                    println!("  {}", sql.white());
                }
                Err(e) => {
                    eprintln!("{} {}", "✗".red(), e.to_string().red());
                }
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Classification Error:".red().bold(), e);
        }
    }
}

fn run_repl() {
    use rustyline::DefaultEditor;
    use rustyline::error::ReadlineError;

    println!("{}", "plainsql — Interactive Mode".cyan().bold());
    println!("{}", "Type requests to see generated SQL. Commands:".dimmed());
    println!("  {}     - Exit the session", "quit".yellow());
    println!("  {}     - Show example requests", ".help".yellow());
    println!("  {}    - Clear screen", ".clear".yellow());
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{} {}", "Failed to initialize the prompt:".red(), e);
            return;
        }
    };

    // Load history if available
    let history_path = dirs::home_dir()
        .map(|p| p.join(".plainsql_history"))
        .unwrap_or_default();
    let _ = rl.load_history(&history_path);

    loop {
        let prompt = "plainsql> ".cyan().bold().to_string();
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match line {
                    "quit" | "exit" | ".quit" | ".exit" => {
                        println!("{}", "Goodbye! 👋".green());
                        break;
                    }
                    ".help" | "help" => {
                        show_examples();
                        println!();
                        continue;
                    }
                    ".clear" | "clear" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    _ => {}
                }

                match plainsql::translate(line) {
                    Ok(sql) => {
                        println!("{} {}", "→".green(), sql.white().bold());
                        println!();
                    }
                    Err(e) => {
                        eprintln!("{} {}", "✗".red(), e.to_string().red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye! 👋".green());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);
}

fn show_examples() {
    println!("{}", "Example requests".cyan().bold());
    println!();

    let examples = [
        ("CREATE", "create a table for customers with name, email, phone"),
        ("SELECT", "show all records from customers"),
        ("SELECT", "select from products where price > 100 order by price desc"),
        ("SELECT", "show count of orders from orders group by category"),
        ("SELECT", "show records from orders join orders with customers using customer_id"),
        ("INSERT", "add a record to customers with columns name, email values john, jdoe"),
        ("UPDATE", "update customers set status to active where id = 1"),
        ("DELETE", "delete from customers where id = 1"),
    ];

    for (kind, request) in examples {
        println!("  {:7} {}", kind.yellow(), request.white());
    }
}
