use std::mem;

use anyhow::{Context, Result};

use crate::analysis::distribution::{self, Direction};
use crate::analysis::{growth, stats, trend};
use crate::config::SourceConfig;
use crate::data::loader;
use crate::data::model::{TotalsRecord, YearlyDataset};
use crate::state::{self, MainCommand, NavigationState, YearCommand};
use crate::ui::console::Console;
use crate::ui::render::{format_population, Chart, ChartKind, RenderSink};

// ---------------------------------------------------------------------------
// Interactive session driver
// ---------------------------------------------------------------------------

const TOP_N: usize = 30;
const EXTREME_K: usize = 5;
const PREDICTION_YEAR: i32 = 2025;

/// Runs the menu loop: prompts through the console, dispatches to the
/// analysis components and hands results to the rendering sink. Recoverable
/// failures are reported and the loop keeps going; only I/O failures on the
/// surfaces themselves end the session early.
pub struct ExplorerApp<C, S> {
    config: SourceConfig,
    console: C,
    sink: S,
    state: NavigationState,
}

impl<C: Console, S: RenderSink> ExplorerApp<C, S> {
    pub fn new(config: SourceConfig, console: C, sink: S) -> Self {
        ExplorerApp {
            config,
            console,
            sink,
            state: NavigationState::MainMenu,
        }
    }

    /// Block on user input until the exit command or EOF.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let state = mem::replace(&mut self.state, NavigationState::Exited);
            self.state = match state {
                NavigationState::Exited => return Ok(()),
                NavigationState::MainMenu => {
                    self.main_menu_turn().context("main menu turn")?
                }
                NavigationState::YearMenu { dataset } => self
                    .year_menu_turn(dataset)
                    .context("year menu turn")?,
            };
        }
    }

    // -- Main menu ----------------------------------------------------------

    fn main_menu_turn(&mut self) -> Result<NavigationState> {
        let Some(input) = self.console.read_line(state::MAIN_MENU_PROMPT)? else {
            return Ok(NavigationState::Exited);
        };

        match MainCommand::parse(input.trim()) {
            None => {
                self.console
                    .notify("Please choose a valid option from the menu.")?;
                Ok(NavigationState::MainMenu)
            }
            Some(MainCommand::Exit) => {
                self.console.notify("Program will now exit...")?;
                Ok(NavigationState::Exited)
            }
            Some(MainCommand::SelectYear(year)) => {
                // Sources were validated at startup, but every selection
                // reloads from disk, so a mid-session failure stays possible.
                match loader::load_year(&self.config, year) {
                    Ok(dataset) => Ok(NavigationState::YearMenu { dataset }),
                    Err(e) => {
                        log::error!("failed to load the {year} census table: {e}");
                        self.console.notify(&format!("Error: {e}"))?;
                        Ok(NavigationState::MainMenu)
                    }
                }
            }
            Some(MainCommand::GrowthReport) => {
                self.growth_report()?;
                Ok(NavigationState::MainMenu)
            }
            Some(MainCommand::PredictionReport) => {
                self.prediction_report()?;
                Ok(NavigationState::MainMenu)
            }
        }
    }

    fn load_totals_or_notify(&mut self) -> Result<Option<TotalsRecord>> {
        match loader::load_totals(&self.config) {
            Ok(totals) => Ok(Some(totals)),
            Err(e) => {
                log::error!("failed to load the totals table: {e}");
                self.console.notify(&format!("Error: {e}"))?;
                Ok(None)
            }
        }
    }

    fn growth_report(&mut self) -> Result<()> {
        let Some(totals) = self.load_totals_or_notify()? else {
            return Ok(());
        };
        let growth = match growth::compute_growth(&totals) {
            Ok(growth) => growth,
            Err(e) => {
                self.console.notify(&format!("Error: {e}"))?;
                return Ok(());
            }
        };

        let entries = vec![
            (
                "2010 Total Population".to_string(),
                format_population(totals.total_2010),
            ),
            (
                "2015 Total Population".to_string(),
                format_population(totals.total_2015),
            ),
            (
                "2020 Total Population".to_string(),
                format_population(totals.total_2020),
            ),
            (
                "Growth from 2010 to 2015".to_string(),
                format!("{:.2}%", growth.from_2010_to_2015),
            ),
            (
                "Growth from 2015 to 2020".to_string(),
                format!("{:.2}%", growth.from_2015_to_2020),
            ),
            (
                "Growth from 2010 to 2020".to_string(),
                format!("{:.2}%", growth.from_2010_to_2020),
            ),
        ];
        self.sink.summary("Growth Percentage per Census", &entries)?;
        Ok(())
    }

    fn prediction_report(&mut self) -> Result<()> {
        let Some(totals) = self.load_totals_or_notify()? else {
            return Ok(());
        };
        match trend::predict(&totals.as_points(), PREDICTION_YEAR) {
            Ok(prediction) => {
                let target = prediction.target_year;
                let entries = vec![
                    (
                        format!("Predicted Population in {target}"),
                        format!("{:.0}", prediction.predicted),
                    ),
                    (
                        format!("Growth from 2020 to {target}"),
                        format!("{:.2}%", prediction.growth_from_last),
                    ),
                ];
                self.sink
                    .summary(&format!("{target} Population Prediction"), &entries)?;
            }
            Err(e) => self.console.notify(&format!("Error: {e}"))?,
        }
        Ok(())
    }

    // -- Year menu ----------------------------------------------------------

    fn year_menu_turn(&mut self, dataset: YearlyDataset) -> Result<NavigationState> {
        let year = dataset.year;
        let prompt = state::year_menu_prompt(year);
        let Some(input) = self.console.read_line(&prompt)? else {
            return Ok(NavigationState::Exited);
        };

        match YearCommand::parse(input.trim()) {
            None => self.console.notify("Please choose a valid number.")?,
            Some(YearCommand::Back) => return Ok(NavigationState::MainMenu),
            Some(YearCommand::ViewRows) => {
                self.sink
                    .rows(&format!("Data Content of the {year} Census"), &dataset.rows)?;
            }
            Some(YearCommand::Summary) => match stats::summarize(&dataset.populations()) {
                Ok(summary) => {
                    let entries = vec![
                        (format!("Mean of Year {year}"), format!("{:.2}", summary.mean)),
                        (
                            format!("Median of Year {year}"),
                            format_population(summary.median),
                        ),
                        (
                            format!("Mode of Year {year}"),
                            format_population(summary.mode),
                        ),
                    ];
                    self.sink
                        .summary(&format!("Data Summary of the {year} Census"), &entries)?;
                }
                Err(e) => self.console.notify(&format!("Error: {e}"))?,
            },
            Some(YearCommand::DistributionChart) => {
                let ranked = distribution::top_n_with_other(&dataset.rows, TOP_N);
                let chart = Chart::from_rows(
                    ChartKind::Pie,
                    format!(
                        "Population Distribution of the Top {TOP_N} Barangays in the {year} Census"
                    ),
                    &ranked,
                );
                self.sink.chart(&chart)?;
            }
            Some(YearCommand::HighestFive) => {
                let ranked = distribution::extreme(&dataset.rows, EXTREME_K, Direction::Highest);
                let chart = Chart::from_rows(
                    ChartKind::BarHorizontal,
                    format!("Top {EXTREME_K} Barangays with Highest Population in the {year} Census"),
                    &ranked,
                );
                self.sink.chart(&chart)?;
            }
            Some(YearCommand::LowestFive) => {
                let ranked = distribution::extreme(&dataset.rows, EXTREME_K, Direction::Lowest);
                let chart = Chart::from_rows(
                    ChartKind::BarHorizontal,
                    format!("Top {EXTREME_K} Barangays with Lowest Population in the {year} Census"),
                    &ranked,
                );
                self.sink.chart(&chart)?;
            }
        }

        Ok(NavigationState::YearMenu { dataset })
    }
}

// ---------------------------------------------------------------------------
// Tests – scripted sessions over a temporary data directory
// ---------------------------------------------------------------------------
