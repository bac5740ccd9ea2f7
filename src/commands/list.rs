//! List Command
//!
//! Implements `cmap list`.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::colormap::ColormapKind;
use crate::config::Config;

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON
    pub json: bool,
}

/// One row of `cmap list --json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub kind: ColormapKind,
    pub entries: usize,
}

/// Registered colormaps sorted by name
pub fn list_entries(config: &Config) -> Result<Vec<ListEntry>> {
    let registry = config.registry()?;
    Ok(registry
        .iter()
        .map(|colormap| ListEntry {
            name: colormap.name().to_string(),
            kind: colormap.kind(),
            entries: colormap.len(),
        })
        .collect())
}

/// Execute the list command
pub fn execute_list(options: ListOptions, config: &Config) -> Result<()> {
    let entries = list_entries(config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {}  {:<8}  {}",
            style(format!("{:<width$}", entry.name, width = width)).cyan(),
            entry.kind,
            style(entry.entries).dim()
        );
    }
    println!(
        "\n{} {} colormaps (append {} for the reversed version)",
        style("✓").green(),
        entries.len(),
        style("_r").cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_entries_sorted() {
        let entries = list_entries(&Config::default()).unwrap();
        assert!(entries.windows(2).all(|w| w[0].name < w[1].name));

        let viridis = entries.iter().find(|e| e.name == "viridis").unwrap();
        assert_eq!(viridis.kind, ColormapKind::Listed);
        assert_eq!(viridis.entries, 256);

        let jet = entries.iter().find(|e| e.name == "jet").unwrap();
        assert_eq!(jet.kind, ColormapKind::Gradient);
        assert_eq!(jet.entries, 256);

        let set1 = entries.iter().find(|e| e.name == "set1").unwrap();
        assert_eq!(set1.kind, ColormapKind::Listed);
        assert_eq!(set1.entries, 9);
    }

    #[test]
    fn test_list_entry_json() {
        let entry = ListEntry {
            name: "jet".to_string(),
            kind: ColormapKind::Gradient,
            entries: 256,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"jet","kind":"gradient","entries":256}"#);
    }
}
