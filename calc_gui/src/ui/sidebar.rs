//! Sidebar (Left)
//!
//! The calculator directory: a search box, then one collapsible section per
//! category. While a search is active the sections give way to a flat list
//! of matches.

use iced::widget::{button, column, container, row, rule, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::catalog::{self, CalculatorDescriptor, CategorySlug};

use crate::{App, Message};

/// Render the sidebar
pub fn view_sidebar(app: &App, width: f32) -> Element<'_, Message> {
    let selected_id = app.calculator().map(|c| c.id);

    let mut panel_content: Column<'_, Message> = column![
        text_input("Search calculators", &app.search)
            .on_input(Message::SearchChanged)
            .padding(4)
            .size(11),
        Space::new().height(4),
    ]
    .spacing(2);

    if app.search.trim().is_empty() {
        for category in CategorySlug::ALL {
            let expanded = !app.collapsed.contains(&category);
            panel_content = panel_content.push(view_section_header(category, expanded));

            if expanded {
                let mut list: Column<'_, Message> = column![].spacing(2).padding(Padding::from([4, 8]));
                for calculator in catalog::in_category(category) {
                    list = list.push(calculator_button(calculator, selected_id == Some(calculator.id)));
                }
                panel_content = panel_content.push(list);
            }
            panel_content = panel_content.push(rule::horizontal(1));
        }
    } else {
        let matches = catalog::search(&app.search);
        panel_content = panel_content.push(
            text(format!("{} match(es)", matches.len())).size(10).color([0.5, 0.5, 0.5]),
        );
        for calculator in matches {
            panel_content = panel_content.push(calculator_button(calculator, selected_id == Some(calculator.id)));
        }
    }

    container(scrollable(panel_content.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

fn calculator_button(calculator: &'static CalculatorDescriptor, selected: bool) -> Element<'static, Message> {
    let style = if selected { button::primary } else { button::secondary };
    button(text(format!("{} {}", calculator.icon, calculator.title)).size(10))
        .on_press(Message::Open(calculator.path()))
        .padding(Padding::from([3, 6]))
        .style(style)
        .width(Length::Fill)
        .into()
}

/// Collapsible category header with expand/collapse indicator
fn view_section_header(category: CategorySlug, expanded: bool) -> Element<'static, Message> {
    let indicator = if expanded { "▼" } else { "▶" };
    let descriptor = category.descriptor();
    let count = catalog::in_category(category).count();

    let header_btn = button(
        row![
            text(indicator).size(10),
            Space::new().width(4),
            text(format!("{} ({})", descriptor.name, count)).size(11),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleCategory(category))
    .padding(Padding::from([4, 6]))
    .style(button::text)
    .width(Length::Fill);

    row![
        header_btn,
        button(text("→").size(11))
            .on_press(Message::Open(format!("/{}", descriptor.slug)))
            .padding(Padding::from([2, 6]))
            .style(button::secondary),
    ]
    .spacing(2)
    .into()
}
