use anyhow::{Context, Result};

use escala_rotation::{Assignment, DutyKind};
use escala_store::{AssignmentStore, JsonStore};

use crate::cli::ShowArgs;
use crate::config::EscalaConfig;

/// Print a stored year's assignments.
pub fn run(args: ShowArgs) -> Result<()> {
    let config = EscalaConfig::load(&args.config)?;
    let year = args.year.or(config.year).ok_or_else(|| {
        anyhow::anyhow!("no target year: set `year` in config or use --year")
    })?;

    let store = JsonStore::new(&config.io.data_dir);
    let assignments = store
        .load_year(year)
        .with_context(|| format!("failed to load year {year}"))?;

    if assignments.is_empty() {
        println!("no assignments stored for {year}");
        return Ok(());
    }

    for assignment in assignments.iter().take(args.limit) {
        println!("{}", format_line(assignment));
    }
    if assignments.len() > args.limit {
        println!("... {} more", assignments.len() - args.limit);
    }

    let home = assignments
        .iter()
        .filter(|a| a.kind() == DutyKind::Home)
        .count();
    println!(
        "year {year}: {home} home duties, {} cleanup duties",
        assignments.len() - home
    );
    Ok(())
}

fn format_line(assignment: &Assignment) -> String {
    let mut line = format!(
        "{}  {:7}  {}  ({})",
        assignment.date(),
        assignment.kind().to_string(),
        assignment.group_name(),
        assignment.note(),
    );
    if let Some(reference) = assignment.reference_work_date() {
        line.push_str(&format!("  work: {reference}"));
    }
    line
}
