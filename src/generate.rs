use anyhow::{Context, Result};
use tracing::info;

use escala_rotation::assign_year;
use escala_store::{AssignmentStore, JsonStore, Roster};

use crate::cli::GenerateArgs;
use crate::config::EscalaConfig;

/// Generate a full year of assignments and persist it.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = EscalaConfig::load(&args.config)?;
    let year = args.year.or(config.year).ok_or_else(|| {
        anyhow::anyhow!("no target year: set `year` in config or use --year")
    })?;

    let roster_path = args.roster.unwrap_or(config.io.roster);
    info!(path = %roster_path.display(), "loading roster");
    let roster = Roster::load(&roster_path)
        .with_context(|| format!("failed to load roster: {}", roster_path.display()))?;
    let home_groups = roster.home_groups();
    let cleanup_groups = roster.cleanup_groups();
    info!(
        n_home = home_groups.len(),
        n_cleanup = cleanup_groups.len(),
        "roster loaded"
    );

    let plan =
        assign_year(&home_groups, &cleanup_groups, year).context("assignment failed")?;
    let home = plan.home_count();
    let cleanup = plan.cleanup_count();

    let data_dir = args.data_dir.unwrap_or(config.io.data_dir);
    let mut store = JsonStore::new(data_dir);
    store
        .replace_year(year, plan.into_assignments())
        .with_context(|| format!("failed to persist year {year}"))?;

    println!(
        "year {year}: {home} home duties, {cleanup} cleanup duties -> {}",
        store.dir().display()
    );
    Ok(())
}
