//! Config CLI command
//!
//! Shows the effective settings and where they live, and can write the
//! defaults to disk.

use std::io::Write;

use clap::Args;

use crate::config::{PlannerPaths, Settings};
use crate::display::{CurrencyFormatter, LocaleFormatter};
use crate::error::{PlannerError, PlannerResult};

/// Arguments for the config command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the effective settings to the config file
    #[arg(long)]
    pub init: bool,
}

/// Handle the config command
pub fn handle_config_command<W: Write>(
    paths: &PlannerPaths,
    settings: &Settings,
    args: &ConfigArgs,
    writer: &mut W,
) -> PlannerResult<()> {
    if args.init {
        settings.save(paths)?;
        writeln!(writer, "Wrote settings to {}", paths.settings_file().display())?;
        writeln!(writer)?;
    }

    let formatter = LocaleFormatter::new(settings.currency_symbol.clone());
    let policy = &settings.fixed_policy;
    let categories: Vec<&str> = settings.category_set().iter().map(|c| c.key()).collect();

    writeln!(writer, "Paycheck Planner Configuration")?;
    writeln!(writer, "==============================")?;
    writeln!(writer, "Config directory: {}", paths.base_dir().display())?;
    writeln!(
        writer,
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    )?;
    writeln!(writer)?;
    writeln!(writer, "Settings:")?;
    writeln!(writer, "  Flow variant:    {}", settings.variant)?;
    writeln!(writer, "  Categories:      {}", categories.join(", "))?;
    writeln!(
        writer,
        "  Housing:         {} rent + {} utilities",
        formatter.format(policy.housing_rent),
        formatter.format(policy.housing_utilities)
    )?;
    writeln!(writer, "  Food:            {}", formatter.format(policy.food))?;
    writeln!(
        writer,
        "  Transportation:  {}",
        formatter.format(policy.transportation)
    )?;
    writeln!(
        writer,
        "  Wants guideline: {}%",
        settings.wants_guideline_percent
    )?;

    writer.flush().map_err(PlannerError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowVariant;
    use tempfile::TempDir;

    #[test]
    fn test_show_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut out = Vec::new();

        handle_config_command(&paths, &Settings::default(), &ConfigArgs::default(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(not created)"));
        assert!(text.contains("savings-summary"));
        assert!(text.contains("$275.00 rent + $100.00 utilities"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_init_writes_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::for_variant(FlowVariant::FinalWants);

        handle_config_command(&paths, &settings, &ConfigArgs { init: true }, &mut Vec::new())
            .unwrap();

        assert!(paths.is_initialized());
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.variant, FlowVariant::FinalWants);
    }
}
