//! # Variable Pitch Propeller GUI
//!
//! Formula explorer built with Iced. The left column lists every formula
//! with a "Calculate" button that toggles its input panel; the right column
//! describes the model's symbols.

mod ui;

use iced::widget::{column, container, row, rule, text};
use iced::{Element, Length};
use log::warn;

use prop_core::glossary::MODEL_TITLE;
use prop_core::{Formula, FormulaPanel};

fn main() -> iced::Result {
    init_logger();

    iced::application(App::default, App::update, App::view)
        .title(MODEL_TITLE)
        .run()
}

fn init_logger() {
    let mut builder = pretty_env_logger::formatted_builder();

    if let Ok(s) = std::env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else if cfg!(debug_assertions) {
        builder.parse_filters("prop_core=debug,prop_gui=debug");
    } else {
        builder.parse_filters("warn");
    }

    let _ = builder.try_init();
}

/// Application state
#[derive(Debug, Default)]
pub struct App {
    /// Open formula panel, if any
    pub panel: FormulaPanel,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// "Calculate" button of a formula (toggles its panel)
    SelectFormula(Formula),
    /// Text typed into a variable field of the open panel
    InputChanged(&'static str, String),
    /// Compute button of the open panel
    Compute,
}

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectFormula(formula) => self.panel.select(formula),
            Message::InputChanged(variable, value) => {
                if let Err(e) = self.panel.edit(variable, value) {
                    warn!("ignoring input: {}", e);
                }
            }
            Message::Compute => {
                self.panel.compute();
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = container(text(MODEL_TITLE).size(24))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(10);

        let body = row![
            ui::formula_list::view_formula_list(&self.panel),
            rule::vertical(1),
            ui::descriptions::view_descriptions(),
        ]
        .spacing(10)
        .height(Length::Fill);

        column![header, body].padding(20).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prop_core::EvaluationResult;

    #[test]
    fn test_toggle_and_compute() {
        let mut app = App::default();
        app.update(Message::SelectFormula(Formula::LiftCoefficient));
        for (name, value) in [("aL1", "2"), ("alpha", "3"), ("aL0", "1")] {
            app.update(Message::InputChanged(name, value.to_string()));
        }
        app.update(Message::Compute);
        assert_eq!(app.panel.result(), Some(&EvaluationResult::Number(7.0)));

        app.update(Message::SelectFormula(Formula::LiftCoefficient));
        assert_eq!(app.panel, FormulaPanel::Closed);
    }

    #[test]
    fn test_compute_while_closed_is_noop() {
        let mut app = App::default();
        app.update(Message::Compute);
        app.update(Message::InputChanged("alpha", "1".to_string()));
        assert_eq!(app.panel, FormulaPanel::Closed);
    }
}
