//! The `quizbank validate` command.

use anyhow::Result;

use quizbank_core::validate::validate_bank;
use quizbank_core::BankStore;

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs, bank_filter: Option<&str>) -> Result<()> {
    let config = global.config()?;
    let store = BankStore::new(&config.data_dir);

    let bank_ids = match bank_filter {
        Some(id) => vec![id.to_string()],
        None => store.list_banks()?.into_iter().map(|b| b.id).collect(),
    };

    if bank_ids.is_empty() {
        println!("No banks found in {}.", config.data_dir.display());
        return Ok(());
    }

    let mut total_warnings = 0;

    for id in &bank_ids {
        let bank = store.load_bank(id)?;
        println!("Bank: {} ({} questions)", bank.name, bank.len());

        let warnings = validate_bank(&bank);
        for w in &warnings {
            let prefix = w
                .origin_index
                .map(|i| format!("  [{i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
