//! The `quizbank banks` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

use super::GlobalArgs;

pub fn execute(global: &GlobalArgs, json: bool) -> Result<()> {
    let config = global.config()?;
    let service = super::service(&config);
    let result = service.list_banks();

    if json {
        return super::print_envelope(result);
    }

    let banks = result?;
    if banks.is_empty() {
        println!(
            "No banks found in {}. Run `quizbank init` to create an example bank.",
            config.data_dir.display()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Name", "Questions", "Types", "Updated"]);
    for bank in &banks {
        let types = bank
            .type_counts
            .iter()
            .map(|(t, n)| format!("{t}: {n}"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            bank.id.clone(),
            bank.name.clone(),
            bank.count.to_string(),
            types,
            bank.last_updated.to_string(),
        ]);
    }
    println!("{table}");
    println!("{} bank(s)", banks.len());

    Ok(())
}
