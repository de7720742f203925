//! Interactive wizard
//!
//! Walks a user through a [`PlanningSession`] one prompt at a time. Input and
//! output are generic so the whole flow can run against in-memory buffers.
//! Typing `restart` at any prompt starts over from the income step.

use std::io::{BufRead, Write};

use tracing::debug;

use super::session::PlanningSession;
use crate::config::settings::{FlowVariant, Settings};
use crate::display::{
    format_summary_table, housing_message, wants_guideline_message, CurrencyFormatter,
    LocaleFormatter, SavingsOutlook,
};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, Money, Summary};

/// Keyword that restarts the wizard from any prompt
pub const RESTART_KEYWORD: &str = "restart";

enum Flow {
    Done(Summary),
    Restarted,
}

/// Prompt-driven front end for a planning session
pub struct WizardRunner<R, W> {
    session: PlanningSession,
    formatter: LocaleFormatter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> WizardRunner<R, W> {
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        Self {
            session: PlanningSession::new(settings),
            formatter: LocaleFormatter::new(settings.currency_symbol.clone()),
            input,
            output,
        }
    }

    pub fn session(&self) -> &PlanningSession {
        &self.session
    }

    /// Run the wizard until a summary is produced
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Aborted`] if input ends early, or an I/O
    /// error if the terminal can't be read or written.
    pub fn run(&mut self) -> PlannerResult<Summary> {
        self.say("")?;
        self.say("===========================================")?;
        self.say("  Let's plan this paycheck!")?;
        self.say("===========================================")?;
        self.say(&format!(
            "Type '{}' at any prompt to start over.",
            RESTART_KEYWORD
        ))?;

        loop {
            match self.run_once()? {
                Flow::Done(summary) => {
                    self.say("")?;
                    self.say("Your plan")?;
                    self.say(&format_summary_table(&summary, &self.formatter))?;
                    return Ok(summary);
                }
                Flow::Restarted => {
                    self.session.restart();
                    self.say("")?;
                    self.say("Starting over.")?;
                }
            }
        }
    }

    fn run_once(&mut self) -> PlannerResult<Flow> {
        if !self.income_step()? {
            return Ok(Flow::Restarted);
        }
        if !self.fixed_steps()? {
            return Ok(Flow::Restarted);
        }
        if !self.other_needs_step()? {
            return Ok(Flow::Restarted);
        }

        let summary = match self.session.variant() {
            FlowVariant::SavingsSummary => {
                if !self.wants_step()? {
                    return Ok(Flow::Restarted);
                }
                match self.savings_step()? {
                    Some(summary) => summary,
                    None => return Ok(Flow::Restarted),
                }
            }
            FlowVariant::FinalWants => {
                if !self.final_wants_step()? {
                    return Ok(Flow::Restarted);
                }
                self.session.finish()?
            }
        };

        Ok(Flow::Done(summary))
    }

    fn income_step(&mut self) -> PlannerResult<bool> {
        self.say("")?;
        self.say("Step 1: Income")?;
        loop {
            let Some(line) = self.ask("How much is this paycheck? ")? else {
                return Ok(false);
            };
            match self.session.set_income(line.as_str()) {
                Ok(()) => return Ok(true),
                Err(err) if err.is_validation() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    fn fixed_steps(&mut self) -> PlannerResult<bool> {
        let categories = self.session.model().categories().clone();
        let policy = *self.session.model().policy();

        if categories.contains(Category::Housing) {
            self.say("")?;
            self.say("Step 2: Housing")?;
            self.say(&housing_message(&policy, &self.formatter))?;
            if self.ask("Press Enter to continue ")?.is_none() {
                return Ok(false);
            }
            self.session.allocate_fixed(Category::Housing, policy.housing_total())?;
        }

        for category in [Category::Food, Category::Transportation] {
            if !categories.contains(category) {
                continue;
            }
            let suggested = policy.suggested(category).unwrap_or_default();
            self.say("")?;
            let prompt = format!(
                "{} [{}]: ",
                category.label(),
                self.formatter.format(suggested)
            );
            let Some(line) = self.ask(&prompt)? else {
                return Ok(false);
            };
            if line.is_empty() {
                self.session.allocate_fixed(category, suggested)?;
            } else {
                self.session.allocate_fixed(category, line.as_str())?;
            }
        }

        if self.session.model().is_over_allocated() {
            let over = SavingsOutlook::from_remaining(self.session.model().remaining());
            self.say(&over.message(&self.formatter))?;
        }
        Ok(true)
    }

    fn other_needs_step(&mut self) -> PlannerResult<bool> {
        if !self.session.model().categories().contains(Category::OtherNeeds) {
            return Ok(true);
        }
        self.say("")?;
        self.say(&format!(
            "Other needs. Remaining: {}",
            self.formatter.format(self.session.model().remaining())
        ))?;
        self.bounded_expense(Category::OtherNeeds, "Other needs (toiletries, medicine, ...): ")
    }

    fn wants_step(&mut self) -> PlannerResult<bool> {
        if !self.session.model().categories().contains(Category::Wants) {
            return Ok(true);
        }
        self.say("")?;
        self.say("Wants")?;
        self.say(&self.guideline_message())?;
        self.bounded_expense(Category::Wants, "How much for wants? ")
    }

    fn final_wants_step(&mut self) -> PlannerResult<bool> {
        self.say("")?;
        self.say("Wants")?;
        self.say(&self.guideline_message())?;
        self.say("Add amounts one at a time; leave blank when you're done.")?;
        loop {
            let Some(line) = self.ask("Add to wants: ")? else {
                return Ok(false);
            };
            if line.is_empty() {
                return Ok(true);
            }
            match self.session.allocate_final_wants(line.as_str()) {
                Ok(remaining) => self.say(&format_remaining(remaining, &self.formatter))?,
                Err(err) if err.is_validation() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    fn savings_step(&mut self) -> PlannerResult<Option<Summary>> {
        self.say("")?;
        self.say("Savings and debt")?;
        let outlook = SavingsOutlook::from_remaining(self.session.model().remaining_after_wants());
        self.say(&outlook.message(&self.formatter))?;
        loop {
            let Some(debt) = self.ask("Extra debt payment: ")? else {
                return Ok(None);
            };
            let Some(goals) = self.ask("Future goals: ")? else {
                return Ok(None);
            };
            match self.session.complete_planning(debt.as_str(), goals.as_str()) {
                Ok(summary) => return Ok(Some(summary)),
                Err(err) if err.is_validation() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    fn bounded_expense(&mut self, category: Category, prompt: &str) -> PlannerResult<bool> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(false);
            };
            match self.session.allocate_expense(category, line.as_str()) {
                Ok(()) => return Ok(true),
                Err(err) if err.is_validation() => self.say(&err.to_string())?,
                Err(err) => return Err(err),
            }
        }
    }

    fn guideline_message(&self) -> String {
        let model = self.session.model();
        wants_guideline_message(
            model.remaining(),
            model.wants_guideline(),
            model.wants_guideline_percent(),
            &self.formatter,
        )
    }

    /// Prompt and read one trimmed line; `None` means the user asked to restart
    fn ask(&mut self, prompt: &str) -> PlannerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(step = %self.session.step(), "input ended");
            return Err(PlannerError::Aborted);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case(RESTART_KEYWORD) {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn say(&mut self, text: &str) -> PlannerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Remaining balance as the wizard would print it
pub fn format_remaining(remaining: Money, formatter: &dyn CurrencyFormatter) -> String {
    format!("Remaining: {}", formatter.format(remaining))
}
