use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
fn must_get_named_element<'a>(form: &ElementRef<'a>, tag: &str, name: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("{tag}[name=\"{name}\"]")).unwrap();

    form.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No {tag} found with name \"{name}\""))
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_named_element(form, "input", name);
    let input_type = input.value().attr("type").unwrap_or_default();
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_textarea_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let textarea = must_get_named_element(form, "textarea", name);
    let got_value = textarea.text().collect::<String>();

    assert_eq!(
        got_value, value,
        "want textarea with text \"{value}\", got {got_value:?}"
    );
}

/// Check which option of the select `name` is selected, `None` meaning no option.
#[track_caller]
pub(crate) fn assert_form_select_value(form: &ElementRef<'_>, name: &str, value: Option<&str>) {
    let select = must_get_named_element(form, "select", name);
    let selected = select
        .select(&Selector::parse("option[selected]").unwrap())
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect::<Vec<_>>();
    let want = value.into_iter().collect::<Vec<_>>();

    assert_eq!(
        selected, want,
        "want selected options {want:?} for select \"{name}\", got {selected:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

/// Check the inline error messages in `form`, given as (field name, message)
/// pairs in the order they appear.
///
/// Each message must directly follow the field's input and the input must be
/// styled as invalid. Every other input must not be styled as invalid.
#[track_caller]
pub(crate) fn assert_form_error_messages(form: &ElementRef<'_>, want: &[(&str, &str)]) {
    let error_selector = Selector::parse(".invalid-feedback").unwrap();
    let got: Vec<(String, String)> = form
        .select(&error_selector)
        .map(|error| {
            let field = error
                .prev_siblings()
                .filter_map(ElementRef::wrap)
                .find_map(|sibling| sibling.value().attr("name"))
                .unwrap_or_default()
                .to_owned();
            let message = error.text().collect::<String>().trim().to_owned();

            (field, message)
        })
        .collect();
    let got: Vec<(&str, &str)> = got
        .iter()
        .map(|(field, message)| (field.as_str(), message.as_str()))
        .collect();

    assert_eq!(got, want, "want error messages {want:?}, got {got:?}");

    let invalid_selector = Selector::parse(".is-invalid").unwrap();
    let mut invalid_fields: Vec<&str> = form
        .select(&invalid_selector)
        .map(|element| element.value().attr("name").unwrap_or_default())
        .collect();
    let mut want_fields: Vec<&str> = want.iter().map(|(field, _)| *field).collect();
    invalid_fields.sort_unstable();
    want_fields.sort_unstable();

    assert_eq!(
        invalid_fields, want_fields,
        "want invalid inputs {want_fields:?}, got {invalid_fields:?}"
    );
}
