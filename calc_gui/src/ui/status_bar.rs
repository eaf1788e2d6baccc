//! Status Bar (Bottom)
//!
//! Displays:
//! - Canonical URL of the current page
//! - Page keywords
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::metadata::PageMetadata;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(metadata: &'a PageMetadata, status: &'a str) -> Element<'a, Message> {
    let keywords = if metadata.keywords.is_empty() {
        String::new()
    } else {
        format!("  [{}]", metadata.keywords_joined())
    };

    row![
        text(&metadata.canonical).size(10),
        text(keywords).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
