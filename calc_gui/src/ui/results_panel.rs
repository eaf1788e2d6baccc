//! Results Panel (Right Side)
//!
//! Shows, top to bottom: the latest input error, the last successful report
//! and the calculator's educational content.

use iced::widget::{column, container, row, rule, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

use calc_core::content::Content;
use calc_core::report::{Report, ReportTable};

use crate::{App, Message};

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let mut content: Column<'_, Message> = column![].spacing(4);

    if app.calculator().is_some() {
        if let Some(ref error) = app.error_message {
            content = content.push(text("Error").size(14));
            content = content.push(text(error).size(12).color([0.8, 0.2, 0.2]));
            content = content.push(Space::new().height(8));
        }
        match &app.evaluation {
            Some(evaluation) => content = content.push(view_report(&evaluation.report)),
            None => {
                content = content.push(
                    text("Fill in the form and press Calculate.").size(12).color([0.5, 0.5, 0.5]),
                )
            }
        }
        if let Some(ref learn) = app.content {
            content = content.push(Space::new().height(12));
            content = content.push(rule::horizontal(1));
            content = content.push(view_content(learn));
        }
    } else {
        content = content.push(text(&app.page.metadata.title).size(14));
        content = content.push(text(&app.page.metadata.description).size(11).color([0.5, 0.5, 0.5]));
    }

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_report(report: &Report) -> Column<'_, Message> {
    let mut body = column![
        text(&report.headline.label).size(11).color([0.5, 0.5, 0.5]),
        text(&report.headline.value).size(24),
        Space::new().height(6),
    ]
    .spacing(2);

    for line in &report.lines {
        body = body.push(
            row![
                text(&line.label).size(11).width(Length::FillPortion(1)),
                text(&line.value).size(11).width(Length::FillPortion(1)),
            ]
            .spacing(8),
        );
    }

    if let Some(ref table) = report.table {
        body = body.push(Space::new().height(8));
        body = body.push(view_table(table));
    }

    if !report.notes.is_empty() {
        body = body.push(Space::new().height(8));
        for note in &report.notes {
            body = body.push(text(format!("• {}", note)).size(10).color([0.4, 0.4, 0.4]));
        }
    }
    body
}

fn view_table(table: &ReportTable) -> Column<'_, Message> {
    let header: Row<'_, Message> = table
        .columns
        .iter()
        .fold(row![].spacing(6), |r, c| r.push(text(c).size(10).width(Length::FillPortion(1))));

    let mut body = column![text(&table.title).size(12), header, rule::horizontal(1)].spacing(2);
    for cells in &table.rows {
        let line: Row<'_, Message> = cells
            .iter()
            .fold(row![].spacing(6), |r, c| r.push(text(c).size(10).width(Length::FillPortion(1))));
        body = body.push(line);
    }
    body
}

fn view_content(learn: &Content) -> Column<'_, Message> {
    let mut body = column![Space::new().height(6), text(&learn.intro).size(11)].spacing(4);
    for section in &learn.sections {
        body = body.push(Space::new().height(6));
        body = body.push(text(&section.heading).size(13));
        body = body.push(text(&section.body).size(11));
    }
    body
}
