//! Variable's Descriptions (Right Column)

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use prop_core::glossary::GLOSSARY;

use crate::Message;

/// Render the symbol descriptions
pub fn view_descriptions() -> Element<'static, Message> {
    let mut list: Column<'static, Message> = column![
        text("Variable's Descriptions").size(18),
        Space::new().height(8),
    ]
    .spacing(6);

    for entry in GLOSSARY {
        list = list.push(
            row![
                text(entry.plain).size(13),
                text(format!(": {}", entry.description)).size(13),
            ]
            .spacing(2),
        );
    }

    container(scrollable(list.padding(8)))
        .width(Length::FillPortion(1))
        .into()
}
