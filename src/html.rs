use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

use crate::endpoints;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

// Card styles
pub const CARD_STYLE: &str = "card shadow";
pub const CARD_BODY_STYLE: &str = "card-body";

// Form styles
pub const FORM_GROUP_STYLE: &str = "mb-2";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-control";
pub const FORM_SELECT_STYLE: &str = "form-select";
pub const FORM_ERROR_STYLE: &str = "invalid-feedback";
pub const BUTTON_PRIMARY_STYLE: &str = "btn btn-info text-white w-100";

// Table styles
pub const TABLE_STYLE: &str = "table table-hover";
pub const TABLE_HEADER_STYLE: &str = "table-dark";
pub const CATEGORY_BADGE_STYLE: &str = "badge bg-secondary";

// Alert styles
pub const ALERT_SUCCESS_STYLE: &str = "alert alert-success alert-dismissible fade show";
pub const ALERT_WARNING_STYLE: &str = "alert alert-warning alert-dismissible fade show";

/// Append the invalid style to the input style `base_style` if `is_invalid`.
pub fn input_style(base_style: &str, is_invalid: bool) -> String {
    if is_invalid {
        format!("{base_style} is-invalid")
    } else {
        base_style.to_owned()
    }
}

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Product Manager" }
                link href=(BOOTSTRAP_CSS) rel="stylesheet";

                style
                {
                    (PreEscaped(r#"
                    body { background-color: #f0f8ff; padding: 20px; }
                    .card { border-radius: 10px; margin-bottom: 20px; }
                    .btn { border-radius: 5px; }
                    "#))
                }
            }

            body
            {
                div class="container"
                {
                    (content)
                }

                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
}

/// A dismissible alert with a bold `heading` followed by `message`.
pub fn alert(style: &str, heading: &str, message: &str) -> Markup {
    html! {
        div class=(style) role="alert"
        {
            strong { (heading) }
            " " (message)
            button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close" {}
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        div class="text-center py-5"
        {
            h1 class="display-1 fw-bold text-info" { (header) }
            p class="fs-3" { (description) }
            p class="lead" { (fix) }
            a href=(endpoints::ROOT) class="btn btn-info text-white my-4" { "Back to Homepage" }
        }
    );

    base(title, &content)
}

/// Format `number` as dollars with two decimal places and thousands
/// separators, e.g. "$1,234.50".
pub fn format_currency(number: f64) -> String {
    static DOLLARS_FMT: OnceLock<Formatter> = OnceLock::new();

    let dollars_fmt = DOLLARS_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    // Split into whole dollars and cents so numfmt only ever sees whole numbers.
    let total_cents = (number.abs() * 100.0).round() as u64;
    let (dollars, cents) = (total_cents / 100, total_cents % 100);

    let dollars = if dollars == 0 {
        // numfmt formats zero as "0" without the prefix.
        "$0".to_owned()
    } else {
        dollars_fmt.fmt_string(dollars as f64)
    };

    // Negative amounts that round to zero are shown as "$0.00".
    let sign = if number < 0.0 && total_cents > 0 {
        "-"
    } else {
        ""
    };

    format!("{sign}{dollars}.{cents:02}")
}
