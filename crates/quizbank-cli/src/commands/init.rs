//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizbank.toml").exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write("quizbank.toml", SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    std::fs::create_dir_all("data")?;
    let example_path = std::path::Path::new("data/example.json");
    if example_path.exists() {
        println!("data/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created data/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizbank banks");
    println!("  2. Run: quizbank problems --bank example");
    println!("  3. Run: quizbank check --bank example --index 1 --answer 1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

data_dir = "./data"
default_mode = "all"
default_type = "single"
"#;

const EXAMPLE_BANK: &str = r#"{
  "name": "Example Bank",
  "problems": [
    {
      "content": "Rust guarantees memory safety without a garbage collector.",
      "answer": true,
      "analysis": "Ownership and borrowing are checked at compile time."
    },
    {
      "content": "Which keyword declares a mutable binding?",
      "answer": 1,
      "options": ["let", "let mut", "var", "mut let"],
      "analysis": "Bindings are immutable by default; {{OPT:2}} makes them mutable.",
      "knowledge": ["bindings"]
    },
    {
      "content": "Which of these are integer types?",
      "answer": [0, 2],
      "options": ["u8", "f32", "i64", "char"],
      "analysis": "{{OPT:1}} and {{OPT:3}} are integers; {{OPT:2}} is a float.",
      "knowledge": ["types"]
    },
    {
      "content": "The {{ANS}} checker enforces the rules of {{ANS}}.",
      "answer": ["borrow", "ownership"],
      "knowledge": ["ownership"]
    },
    {
      "content": "Name the Rust package manager.",
      "answer": "cargo"
    }
  ]
}
"#;
