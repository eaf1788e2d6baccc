//! Calculator form editor
//!
//! Builds one input row per field of the selected calculator. Choice fields
//! become pick lists; everything else is a text input, so half-typed values
//! ("1.", "-") stay editable until the user asks for a result.

use iced::widget::{button, column, pick_list, row, rule, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::catalog::CalculatorDescriptor;
use calc_core::form::{FieldKind, FieldSpec, FormValues};

use crate::Message;

const LABEL_WIDTH: f32 = 170.0;

/// Render the form for one calculator
pub fn view<'a>(calculator: &'static CalculatorDescriptor, form: &'a FormValues) -> Column<'a, Message> {
    let mut fields: Column<'a, Message> = column![].spacing(6);
    for field in calculator.kind.fields() {
        fields = fields.push(view_field(field, form));
    }

    let actions = row![
        button(text("Calculate").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([4, 12]))
            .style(button::primary),
        button(text("Clear").size(11))
            .on_press(Message::ResetForm)
            .padding(Padding::from([4, 12]))
            .style(button::secondary),
    ]
    .spacing(6);

    column![
        text(format!("{} {}", calculator.icon, calculator.title)).size(18),
        text(calculator.description).size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        rule::horizontal(1),
        Space::new().height(8),
        fields,
        Space::new().height(12),
        actions,
        Space::new().height(6),
        text("* required").size(9).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2)
}

fn view_field<'a>(field: &'static FieldSpec, form: &'a FormValues) -> Element<'a, Message> {
    let key = field.key;
    let mut label = field.display_label();
    if field.required {
        label.push_str(" *");
    }

    match field.kind {
        FieldKind::Choice(choices) => {
            let selected = form
                .get(key)
                .and_then(|value| choices.iter().find(|c| c.value == value).copied());
            row![
                text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
                pick_list(choices, selected, move |choice| {
                    Message::FieldChanged(key, choice.value.to_string())
                })
                .placeholder("Select...")
                .width(Length::Fill)
                .text_size(11),
            ]
            .align_y(Alignment::Center)
            .into()
        }
        _ => labeled_input(
            label,
            field.placeholder,
            form.get(key).unwrap_or(""),
            move |value| Message::FieldChanged(key, value),
        ),
    }
}

/// Label on the left, text input filling the rest
fn labeled_input<'a>(
    label: String,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
