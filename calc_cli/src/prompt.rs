//! Interactive prompts for fields not given on the command line.

use std::io::{self, BufRead, Write};

use calc_core::form::{FieldKind, FieldSpec, FormValues};

fn prompt_text(label: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn field_prompt(field: &FieldSpec) -> String {
    let mut prompt = field.display_label();
    if let FieldKind::Choice(choices) = field.kind {
        let options: Vec<&str> = choices.iter().map(|c| c.value).collect();
        prompt.push_str(&format!(" <{}>", options.join("|")));
    }
    if field.kind == FieldKind::Date {
        prompt.push_str(" (YYYY-MM-DD)");
    }
    if !field.placeholder.is_empty() {
        prompt.push_str(&format!(" [e.g. {}]", field.placeholder));
    }
    if !field.required {
        prompt.push_str(" (optional)");
    }
    prompt.push_str(": ");
    prompt
}

/// Ask for every blank field. An empty answer leaves the field blank;
/// end of input stops prompting.
pub fn fill_missing(
    fields: &[FieldSpec],
    form: &mut FormValues,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    for field in fields.iter() {
        if !form.is_blank(field.key) {
            continue;
        }
        match prompt_text(&field_prompt(field), input, output)? {
            Some(answer) if !answer.is_empty() => form.set(field.key, answer),
            Some(_) => {}
            None => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::CalculatorKind;

    #[test]
    fn test_fills_only_blank_fields() {
        let mut form = FormValues::new().with("weight_kg", "70");
        let mut input = "175\n".as_bytes();
        let mut output = Vec::new();
        fill_missing(CalculatorKind::BodyMassIndex.fields(), &mut form, &mut input, &mut output).unwrap();
        assert_eq!(form.get("height_cm"), Some("175"));
        let shown = String::from_utf8(output).unwrap();
        assert!(!shown.contains("Weight"));
        assert!(shown.contains("Height (cm)"));
    }

    #[test]
    fn test_choice_fields_list_options() {
        let field = CalculatorKind::TemperatureConverter
            .fields()
            .iter()
            .find(|f| matches!(f.kind, FieldKind::Choice(_)))
            .unwrap();
        assert!(field_prompt(field).contains("<c|f|k>"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut form = FormValues::new();
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        fill_missing(CalculatorKind::CartesianToPolar.fields(), &mut form, &mut input, &mut output).unwrap();
        assert!(form.is_blank("x"));
        assert!(form.is_blank("y"));
    }
}
