use crate::data::model::{CensusYear, YearlyDataset};

// ---------------------------------------------------------------------------
// Navigation state
// ---------------------------------------------------------------------------

/// Current menu context. The loaded dataset is owned by the active year
/// menu and dropped when the user goes back to the main menu.
#[derive(Debug)]
pub enum NavigationState {
    MainMenu,
    YearMenu { dataset: YearlyDataset },
    /// Terminal; the session loop stops here.
    Exited,
}

// ---------------------------------------------------------------------------
// Menu commands
// ---------------------------------------------------------------------------

/// A recognized main-menu choice. Anything else re-prompts in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    SelectYear(CensusYear),
    GrowthReport,
    PredictionReport,
    Exit,
}

impl MainCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MainCommand::SelectYear(CensusYear::Y2010)),
            "2" => Some(MainCommand::SelectYear(CensusYear::Y2015)),
            "3" => Some(MainCommand::SelectYear(CensusYear::Y2020)),
            "4" => Some(MainCommand::GrowthReport),
            "5" => Some(MainCommand::PredictionReport),
            "6" => Some(MainCommand::Exit),
            _ => None,
        }
    }
}

/// A recognized year-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearCommand {
    ViewRows,
    Summary,
    DistributionChart,
    HighestFive,
    LowestFive,
    Back,
}

impl YearCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(YearCommand::ViewRows),
            "2" => Some(YearCommand::Summary),
            "3" => Some(YearCommand::DistributionChart),
            "4" => Some(YearCommand::HighestFive),
            "5" => Some(YearCommand::LowestFive),
            "6" => Some(YearCommand::Back),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu prompts
// ---------------------------------------------------------------------------

pub const MAIN_MENU_PROMPT: &str = "\n\
------------------------------------------\n\
      BAGUIO CITY POPULATION ANALYSIS\n\
------------------------------------------\n\
\n\
Select the option you want to explore:\n\
\n\
1. 2010\n\
2. 2015\n\
3. 2020\n\
4. Show Growth Percentage between Census\n\
5. Predict 2025 Population\n\
6. Exit Program\n\
\n\
Enter your choice: ";

pub fn year_menu_prompt(year: CensusYear) -> String {
    format!(
        "\n\
-------------------------\n\
      {year} CENSUS\n\
-------------------------\n\
\n\
Select the option you want to explore:\n\
\n\
1. View Data Content\n\
2. View Data Summary\n\
3. Display Top 30 Population Pie Chart\n\
4. Top 5 Highest Population per Barangay\n\
5. Top 5 Lowest Population per Barangay\n\
6. Go Back to Main Menu\n\
\n\
Enter your choice: "
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_choices_map_to_commands() {
        assert_eq!(
            MainCommand::parse("1"),
            Some(MainCommand::SelectYear(CensusYear::Y2010))
        );
        assert_eq!(
            MainCommand::parse("3"),
            Some(MainCommand::SelectYear(CensusYear::Y2020))
        );
        assert_eq!(MainCommand::parse("4"), Some(MainCommand::GrowthReport));
        assert_eq!(MainCommand::parse("6"), Some(MainCommand::Exit));
    }

    #[test]
    fn unrecognized_input_parses_to_none() {
        assert_eq!(MainCommand::parse("7"), None);
        assert_eq!(MainCommand::parse("growth"), None);
        assert_eq!(MainCommand::parse(""), None);
        assert_eq!(YearCommand::parse("0"), None);
        assert_eq!(YearCommand::parse("back"), None);
    }

    #[test]
    fn year_menu_choices_map_to_commands() {
        assert_eq!(YearCommand::parse("2"), Some(YearCommand::Summary));
        assert_eq!(YearCommand::parse("6"), Some(YearCommand::Back));
    }

    #[test]
    fn year_prompt_names_the_selected_year() {
        assert!(year_menu_prompt(CensusYear::Y2015).contains("2015 CENSUS"));
    }
}
