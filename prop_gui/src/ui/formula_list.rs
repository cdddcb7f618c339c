//! Formula List (Left Column)
//!
//! One entry per catalog formula, in catalog order. The open formula's entry
//! is followed by its input panel.

use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Padding};

use prop_core::{FormulaCatalog, FormulaPanel};

use crate::Message;
use super::formula_panel;

/// Render the formula list with the open panel inline
pub fn view_formula_list(panel: &FormulaPanel) -> Element<'_, Message> {
    let mut list: Column<'_, Message> = column![].spacing(10);

    for def in FormulaCatalog::global() {
        let is_open = panel.is_open(def.formula);
        let style = if is_open { button::primary } else { button::secondary };

        let entry = row![
            button(text(format!("Calculate {}", def.name)).size(13))
                .on_press(Message::SelectFormula(def.formula))
                .padding(Padding::from([8, 16]))
                .style(style),
            text(def.formula_plain).size(16),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        list = list.push(entry);

        if is_open {
            if let Some(inputs) = panel.inputs() {
                list = list.push(formula_panel::view(def, inputs, panel.result()));
            }
        }
    }

    container(scrollable(list.padding(8)))
        .width(Length::FillPortion(1))
        .into()
}
