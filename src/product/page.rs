//! The product page: the catalog table and the form for adding a product.

use axum::{
    Form,
    extract::rejection::FormRejection,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        ALERT_SUCCESS_STYLE, ALERT_WARNING_STYLE, BUTTON_PRIMARY_STYLE, CARD_BODY_STYLE,
        CARD_STYLE, CATEGORY_BADGE_STYLE, FORM_ERROR_STYLE, FORM_GROUP_STYLE, FORM_LABEL_STYLE,
        FORM_SELECT_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_HEADER_STYLE, TABLE_STYLE, alert, base,
        format_currency, input_style,
    },
    product::{Catalog, Field, FieldErrors, ProductForm, SUGGESTED_CATEGORIES, validate},
};

/// Everything needed to render the product page for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The products to list.
    pub catalog: Catalog,
    /// The values to show in the form.
    pub form: ProductForm,
    /// Messages to show under the form's inputs.
    pub errors: FieldErrors,
    /// Shown in a banner after a product was added.
    pub success_message: Option<String>,
}

impl ProductPage {
    /// The page shown when no form was submitted.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::seed(),
            form: ProductForm::default(),
            errors: FieldErrors::default(),
            success_message: None,
        }
    }

    /// Handle a submitted product form.
    ///
    /// A valid form adds the product to the seed catalog and clears the form.
    /// An invalid form leaves the catalog alone and keeps the trimmed input
    /// so the user can fix it.
    pub fn submit(form: &ProductForm) -> Self {
        let mut catalog = Catalog::seed();
        let form = form.trimmed();

        match validate(&form) {
            Ok(new_product) => {
                let product = catalog.add(new_product);
                tracing::info!(id = product.id, name = %product.name, "Added product");
                let success_message = format!("Nice! '{}' was added successfully!", product.name);

                Self {
                    catalog,
                    form: ProductForm::default(),
                    errors: FieldErrors::default(),
                    success_message: Some(success_message),
                }
            }
            Err(errors) => {
                tracing::debug!(
                    "Rejected product form with errors in: {:?}",
                    errors.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>()
                );

                Self {
                    catalog,
                    form,
                    errors,
                    success_message: None,
                }
            }
        }
    }

    /// Render the full HTML document.
    pub fn into_html(self) -> Markup {
        product_view(&self)
    }
}

impl Default for ProductPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the product page.
pub async fn get_products_page() -> Response {
    ProductPage::new().into_html().into_response()
}

/// Handle the product form submission and render the product page.
///
/// The body is decoded as key/value pairs so that a repeated field keeps its
/// last value. A body that cannot be read as a form is treated as an empty form.
pub async fn create_product_endpoint(
    pairs: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form: ProductForm = match pairs {
        Ok(Form(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            tracing::warn!("Could not parse product form, treating it as empty: {rejection}");
            ProductForm::default()
        }
    };

    ProductPage::submit(&form).into_html().into_response()
}

fn product_view(page: &ProductPage) -> Markup {
    let content = html! {
        h1 class="text-center mb-3" { "🛍️ Product Manager" }
        p class="text-center text-muted mb-4" { "Add and view your products" }

        @if let Some(success_message) = &page.success_message {
            (alert(ALERT_SUCCESS_STYLE, "Yay!", success_message))
        }

        @if !page.errors.is_empty() {
            (alert(ALERT_WARNING_STYLE, "Wait!", "Please check the form below."))
        }

        div class="row"
        {
            div class="col-lg-5"
            {
                div class=(CARD_STYLE)
                {
                    div class="card-header bg-info text-white"
                    {
                        h5 class="mb-0" { "➕ Add New Product" }
                    }

                    div class=(CARD_BODY_STYLE) { (product_form_view(&page.form, &page.errors)) }
                }
            }

            div class="col-lg-7"
            {
                div class=(CARD_STYLE)
                {
                    div class="card-header bg-success text-white"
                    {
                        h5 class="mb-0" { "📋 Product List" }
                    }

                    div class=(CARD_BODY_STYLE) { (product_table_view(&page.catalog)) }
                }
            }
        }
    };

    base("Products", &content)
}

fn product_form_view(form: &ProductForm, errors: &FieldErrors) -> Markup {
    let error_message = |field: Field| {
        html! {
            @if let Some(error) = errors.get(field) {
                div class=(FORM_ERROR_STYLE) { (error.to_string()) }
            }
        }
    };
    let input_class =
        |base_style: &str, field: Field| input_style(base_style, errors.get(field).is_some());

    html! {
        form method="post" action=(endpoints::ROOT)
        {
            div class=(FORM_GROUP_STYLE)
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name *" }

                input
                    id="name"
                    type="text"
                    name="name"
                    class=(input_class(FORM_TEXT_INPUT_STYLE, Field::Name))
                    value=(form.name);

                (error_message(Field::Name))
            }

            div class=(FORM_GROUP_STYLE)
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description *" }

                textarea
                    id="description"
                    name="description"
                    rows="2"
                    class=(input_class(FORM_TEXT_INPUT_STYLE, Field::Description))
                {
                    (form.description)
                }

                (error_message(Field::Description))
            }

            div class=(FORM_GROUP_STYLE)
            {
                label for="price" class=(FORM_LABEL_STYLE) { "Price ($) *" }

                input
                    id="price"
                    type="number"
                    step="0.01"
                    name="price"
                    class=(input_class(FORM_TEXT_INPUT_STYLE, Field::Price))
                    value=(form.price);

                (error_message(Field::Price))
            }

            div class="mb-3"
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category *" }

                select
                    id="category"
                    name="category"
                    class=(input_class(FORM_SELECT_STYLE, Field::Category))
                {
                    option value="" { "-- Choose --" }

                    @for category in SUGGESTED_CATEGORIES {
                        option value=(category) selected[form.category == category] { (category) }
                    }
                }

                (error_message(Field::Category))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Product" }
        }
    }
}

fn product_table_view(catalog: &Catalog) -> Markup {
    html! {
        @if catalog.is_empty() {
            p class="text-muted text-center" { "No products to show yet." }
        } @else {
            div class="table-responsive"
            {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th { "ID" }
                            th { "Name" }
                            th { "Price" }
                            th { "Category" }
                        }
                    }

                    tbody
                    {
                        @for product in catalog.products() {
                            tr
                            {
                                td { (product.id) }
                                td { (product.name) }
                                td { (format_currency(product.price)) }
                                td { span class=(CATEGORY_BADGE_STYLE) { (product.category) } }
                            }
                        }
                    }
                }
            }
        }
    }
}
