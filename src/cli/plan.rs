//! Planning CLI commands
//!
//! `plan` runs the interactive wizard on the terminal; `quick` runs the same
//! flow in one shot from command-line amounts.

use std::io::{self, Write};

use clap::Args;
use tracing::info;

use crate::config::settings::{FlowVariant, Settings};
use crate::display::LocaleFormatter;
use crate::error::{PlannerResult, ValidationError};
use crate::export::{write_summary, ExportFormat};
use crate::models::{Category, Money, Summary};
use crate::wizard::{PlanningSession, WizardRunner};

/// Arguments for a one-shot plan
#[derive(Args, Debug, Clone, Default)]
pub struct QuickArgs {
    /// Paycheck amount (e.g., "1000" or "1000.00")
    #[arg(long)]
    pub income: String,

    /// Groceries; the configured policy amount when omitted
    #[arg(long)]
    pub food: Option<String>,

    /// Insurance, transit and subscriptions; the configured policy amount when omitted
    #[arg(long)]
    pub transportation: Option<String>,

    /// Other needs, checked against what's left
    #[arg(long)]
    pub other_needs: Option<String>,

    /// Wants. Repeat to add several amounts in the final-wants flow; in the
    /// savings-summary flow the last value wins
    #[arg(long)]
    pub wants: Vec<String>,

    /// Extra debt payment (savings-summary flow)
    #[arg(long)]
    pub debt: Option<String>,

    /// Future goals (savings-summary flow)
    #[arg(long)]
    pub goals: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Table)]
    pub format: ExportFormat,
}

/// Run the interactive wizard on stdin/stdout
pub fn handle_plan_command(settings: &Settings) -> PlannerResult<Summary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = WizardRunner::new(settings, stdin.lock(), stdout.lock());
    let summary = runner.run()?;
    info!(session = %runner.session().id(), "interactive plan finished");
    Ok(summary)
}

/// Run the whole flow from arguments and write the summary
pub fn handle_quick_command<W: Write>(
    settings: &Settings,
    args: &QuickArgs,
    writer: &mut W,
) -> PlannerResult<Summary> {
    let mut session = PlanningSession::new(settings);
    let categories = session.model().categories().clone();
    let policy = *session.model().policy();

    session.set_income(args.income.as_str())?;

    if categories.contains(Category::Housing) {
        session.allocate_fixed(Category::Housing, Money::zero())?;
    }

    for (category, raw) in [
        (Category::Food, &args.food),
        (Category::Transportation, &args.transportation),
    ] {
        if !categories.contains(category) {
            continue;
        }
        match raw {
            Some(raw) => session.allocate_fixed(category, raw.as_str())?,
            None => {
                session.allocate_fixed(category, policy.suggested(category).unwrap_or_default())?
            }
        }
    }

    if let Some(raw) = &args.other_needs {
        session.allocate_expense(Category::OtherNeeds, raw.as_str())?;
    }

    let summary = match session.variant() {
        FlowVariant::SavingsSummary => {
            for raw in &args.wants {
                session.allocate_expense(Category::Wants, raw.as_str())?;
            }
            session.complete_planning(
                args.debt.as_deref().unwrap_or("0"),
                args.goals.as_deref().unwrap_or("0"),
            )?
        }
        FlowVariant::FinalWants => {
            if args.debt.is_some() || args.goals.is_some() {
                return Err(ValidationError::VariantMismatch {
                    operation: "debt and goals",
                    variant: FlowVariant::FinalWants,
                }
                .into());
            }
            for raw in &args.wants {
                session.allocate_final_wants(raw.as_str())?;
            }
            session.finish()?
        }
    };

    let formatter = LocaleFormatter::new(settings.currency_symbol.clone());
    write_summary(&summary, args.format, &formatter, writer)?;
    Ok(summary)
}
