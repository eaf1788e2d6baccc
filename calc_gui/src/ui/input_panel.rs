//! Input Panel (Center)
//!
//! Dispatches on the resolved route:
//! - Home -> category overview
//! - Category -> the calculators in that category
//! - Calculator -> calculator_form
//! - NotFound -> message with a way back home

use iced::widget::{button, column, container, scrollable, text, Column, Space};
use iced::{Element, Length, Padding};

use calc_core::catalog::{self, CategoryDescriptor, CategorySlug, CATEGORIES};
use calc_core::routing::Route;

use crate::{App, Message};
use super::calculator_form;

/// Render the input panel for the current page
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match &app.page.route {
        Route::Home => view_home(&app.page.metadata.description),
        Route::Category(category) => view_category(*category),
        Route::Calculator(calculator) => calculator_form::view(*calculator, &app.form),
        Route::NotFound(path) => column![
            text("Page not found").size(18),
            Space::new().height(8),
            text(format!("Nothing lives at \"{}\".", path)).size(12).color([0.5, 0.5, 0.5]),
            Space::new().height(8),
            button(text("Back to all calculators").size(11))
                .on_press(Message::Open("/".to_string()))
                .padding(Padding::from([4, 8]))
                .style(button::primary),
        ],
    };

    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_home(description: &str) -> Column<'_, Message> {
    let mut content = column![
        text("All Calculators").size(18),
        text(description).size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
    ]
    .spacing(6);

    for category in CATEGORIES.iter() {
        content = content.push(category_card(category));
    }
    content
}

fn category_card(category: &'static CategoryDescriptor) -> Element<'static, Message> {
    let count = catalog::in_category(category.category).count();
    button(
        column![
            text(format!("{} ({})", category.name, count)).size(13),
            text(category.description).size(10),
        ]
        .spacing(2),
    )
    .on_press(Message::Open(format!("/{}", category.slug)))
    .padding(Padding::from([6, 10]))
    .style(button::secondary)
    .width(Length::Fill)
    .into()
}

fn view_category(category: CategorySlug) -> Column<'static, Message> {
    let descriptor = category.descriptor();
    let mut content = column![
        text(format!("{} Calculators", descriptor.name)).size(18),
        text(descriptor.description).size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
    ]
    .spacing(4);

    for calculator in catalog::in_category(category) {
        content = content.push(
            button(
                column![
                    text(format!("{} {}", calculator.icon, calculator.title)).size(12),
                    text(calculator.description).size(10),
                ]
                .spacing(2),
            )
            .on_press(Message::Open(calculator.path()))
            .padding(Padding::from([5, 10]))
            .style(button::secondary)
            .width(Length::Fill),
        );
    }
    content
}
