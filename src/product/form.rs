//! Product form data and validation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::product::domain::NewProduct;

/// Form data for creating a product.
///
/// Build one from the decoded key/value pairs of a request body with
/// [FromIterator]: fields missing from the body default to an empty string,
/// a repeated field keeps its last value and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    /// The product name.
    pub name: String,
    /// The product description.
    pub description: String,
    /// The price as typed, parsed during validation.
    pub price: String,
    /// The chosen category.
    pub category: String,
}

impl ProductForm {
    /// Copy of the form with leading and trailing whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price: self.price.trim().to_owned(),
            category: self.category.trim().to_owned(),
        }
    }
}

impl FromIterator<(String, String)> for ProductForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "description" => form.description = value,
                "price" => form.price = value,
                "category" => form.category = value,
                _ => {}
            }
        }

        form
    }
}

/// An input in the product form, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
}

impl Field {
    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
        }
    }
}

/// A problem with a single form field.
///
/// The display text is shown to the user under the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The name is empty.
    #[error("You need to enter a product name.")]
    MissingName,

    /// The description is empty.
    #[error("Please describe the product.")]
    MissingDescription,

    /// The price is empty.
    #[error("How much does it cost?")]
    MissingPrice,

    /// The price is not a plain decimal number, see [is_plain_decimal].
    #[error("Price needs to be a number.")]
    PriceNotNumeric,

    /// The price is less than zero.
    #[error("Price can't be less than zero!")]
    NegativePrice,

    /// The category is empty.
    #[error("Please choose a category.")]
    MissingCategory,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::MissingName => Field::Name,
            FieldError::MissingDescription => Field::Description,
            FieldError::MissingPrice | FieldError::PriceNotNumeric | FieldError::NegativePrice => {
                Field::Price
            }
            FieldError::MissingCategory => Field::Category,
        }
    }
}

/// The errors found in a product form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    /// The error for `field`, if it has one.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Whether every field is valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Validate a product form.
///
/// Every field is checked, so the returned [FieldErrors] holds one entry for
/// each invalid field. `form` is expected to be trimmed already.
///
/// # Errors
///
/// Returns the errors for every field that failed validation.
pub fn validate(form: &ProductForm) -> Result<NewProduct, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.is_empty() {
        errors.insert(FieldError::MissingName);
    }

    if form.description.is_empty() {
        errors.insert(FieldError::MissingDescription);
    }

    let price = match parse_price(&form.price) {
        Ok(price) => price,
        Err(error) => {
            errors.insert(error);
            0.0
        }
    };

    if form.category.is_empty() {
        errors.insert(FieldError::MissingCategory);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewProduct {
        name: form.name.clone(),
        description: form.description.clone(),
        price,
        category: form.category.clone(),
    })
}

/// Parse a price, reporting at most one error in the order: missing, not a
/// number, negative.
fn parse_price(text: &str) -> Result<f64, FieldError> {
    if text.is_empty() {
        return Err(FieldError::MissingPrice);
    }

    if !is_plain_decimal(text) {
        return Err(FieldError::PriceNotNumeric);
    }

    let price: f64 = match text.parse() {
        Ok(price) => price,
        Err(_) => return Err(FieldError::PriceNotNumeric),
    };

    if !price.is_finite() {
        return Err(FieldError::PriceNotNumeric);
    }

    if price < 0.0 {
        return Err(FieldError::NegativePrice);
    }

    // Turns "-0" into 0.
    Ok(price + 0.0)
}

/// Whether `text` is an optionally signed decimal number such as `3`,
/// `-3.50` or `.5`.
///
/// Exponents, hexadecimal and other notations are rejected.
pub fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}
