//! Toolbar component
//!
//! Site header plus an address bar that accepts any path or bare slug.

use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with the current page title
pub fn view_header(title: &str) -> Element<'_, Message> {
    row![
        button(text("Calcfolio").size(28))
            .on_press(Message::Open("/".to_string()))
            .padding(0)
            .style(button::text),
        Space::new().width(Length::Fill),
        text(title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the address bar and theme toggle
pub fn view_toolbar<'a>(title: &'a str, address: &'a str, dark_mode: bool) -> Element<'a, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let address_bar = row![
        text("Go to:").size(11),
        Space::new().width(4),
        text_input("/math/quadratic", address)
            .on_input(Message::AddressChanged)
            .on_submit(Message::Navigate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
        button(text("Go").size(11))
            .on_press(Message::Navigate)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        Space::new().width(16),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center);

    column![view_header(title), address_bar].spacing(4).into()
}
