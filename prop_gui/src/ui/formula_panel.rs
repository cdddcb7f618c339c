//! Input panel for the open formula
//!
//! Shows one text field per declared variable, a Compute button and the
//! last result.

use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use prop_core::{EvaluationResult, FormulaDefinition, InputSet};

use crate::Message;

/// Render the input panel
pub fn view<'a>(
    definition: &'a FormulaDefinition,
    inputs: &'a InputSet,
    result: Option<&'a EvaluationResult>,
) -> Element<'a, Message> {
    let mut fields: Column<'a, Message> = column![
        text(format!("Input Values for {}", definition.name)).size(16),
        Space::new().height(6),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    for (name, value) in inputs.iter() {
        fields = fields.push(labeled_input(name, value.unwrap_or("")));
    }

    fields = fields.push(
        button(text("Compute").size(13))
            .on_press(Message::Compute)
            .padding(Padding::from([8, 20]))
            .style(button::secondary),
    );

    if let Some(result) = result {
        let value = text(result.to_string()).size(13);
        let value = if result.is_invalid() {
            value.color([0.8, 0.2, 0.2])
        } else {
            value
        };
        fields = fields.push(row![text("Result: ").size(13), value].align_y(Alignment::Center));
    }

    container(fields.padding(16))
        .width(Length::Fixed(320.0))
        .style(container::bordered_box)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(name: &'static str, value: &'a str) -> Element<'a, Message> {
    row![
        text(format!("{}:", name)).size(13).width(Length::Fixed(100.0)),
        text_input("", value)
            .on_input(move |s| Message::InputChanged(name, s))
            .width(Length::Fill)
            .padding(5)
            .size(13),
    ]
    .align_y(Alignment::Center)
    .into()
}
