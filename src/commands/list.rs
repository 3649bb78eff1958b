//! List command implementation
//!
//! Prints the registry's packages sorted by name.

use console::Style;

use super::load_registry;
use crate::cli::ListArgs;
use crate::config::{Package, Registry, Settings};
use crate::error::Result;

/// Run list command
pub fn run(settings: &Settings, args: ListArgs) -> Result<()> {
    let registry = load_registry(settings, false)?;
    let packages = filter_packages(&registry, args.filter.as_deref());

    if packages.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    let width = packages.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, package) in packages {
        display_package(name, package, width);
    }

    Ok(())
}

/// Packages whose name contains `filter` (case-insensitive), in name order
fn filter_packages<'a>(registry: &'a Registry, filter: Option<&str>) -> Vec<(&'a str, &'a Package)> {
    let filter = filter.map(str::to_lowercase);
    registry
        .packages
        .iter()
        .filter(|(name, _)| {
            filter
                .as_deref()
                .is_none_or(|f| name.to_lowercase().contains(f))
        })
        .map(|(name, package)| (name.as_str(), package))
        .collect()
}

fn display_package(name: &str, package: &Package, width: usize) {
    let interactive = if package.installer.interactive {
        format!(" {}", Style::new().yellow().apply_to("(interactive)"))
    } else {
        String::new()
    };

    println!(
        "{}  {}  {}{}",
        Style::new().bold().apply_to(format!("{:width$}", name)),
        package.version,
        Style::new().dim().apply_to(&package.installer.kind),
        interactive,
    );
}
