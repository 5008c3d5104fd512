#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{GiftBox, OrderForm};

/// State of the catalog + order screen.
///
/// `selected` doubles as the modal flag: `Some` means the order form is open
/// for that box.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub boxes: Vec<GiftBox>,
    pub loading: bool,
    pub selected: Option<GiftBox>,
    pub form: OrderForm,
    pub submitting: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        // A fresh screen is loading until its first fetch resolves.
        Self { boxes: Vec::new(), loading: true, selected: None, form: OrderForm::default(), submitting: false }
    }
}

/// Editable contact fields of the order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

/// Field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("customer name is required")]
    MissingName,
    #[error("customer email is not a valid address")]
    InvalidEmail,
    #[error("customer phone is required")]
    MissingPhone,
}

impl FormError {
    #[must_use]
    pub fn field(self) -> FormField {
        match self {
            Self::MissingName => FormField::Name,
            Self::InvalidEmail => FormField::Email,
            Self::MissingPhone => FormField::Phone,
        }
    }
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("no box selected")]
    NoSelection,
    #[error("an order is already being submitted")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FormError),
}

impl CatalogState {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Mark a fetch as started. Keeps whatever list is already shown.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the list. An open order form survives only if its box is
    /// still listed; otherwise it closes and `box_id` goes back to zero.
    pub fn load_succeeded(&mut self, boxes: Vec<GiftBox>) {
        self.boxes = boxes;
        self.loading = false;
        let Some(selected_id) = self.selected.as_ref().map(|b| b.id) else {
            return;
        };
        let current = self.boxes.iter().find(|b| b.id == selected_id).cloned();
        match current {
            Some(current) => self.selected = Some(current),
            None => self.close_modal(),
        }
    }

    /// Clear the list and close any open order form with it.
    pub fn load_failed(&mut self) {
        self.boxes.clear();
        self.loading = false;
        self.close_modal();
    }

    fn close_modal(&mut self) {
        self.selected = None;
        self.form.box_id = 0;
    }

    /// Open the order form for `gift`. Contact fields typed so far are kept.
    pub fn select(&mut self, gift: &GiftBox) {
        self.form.box_id = gift.id;
        self.selected = Some(gift.clone());
    }

    /// Close the order form. Refused while a submission is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.selected = None;
        true
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form.customer_name = value,
            FormField::Email => self.form.customer_email = value,
            FormField::Phone => self.form.customer_phone = value,
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.customer_name,
            FormField::Email => &self.form.customer_email,
            FormField::Phone => &self.form.customer_phone,
        }
    }

    /// Validate and flip `submitting` on, returning the body to post.
    ///
    /// # Errors
    ///
    /// Returns why the submission cannot start; state is left untouched.
    pub fn begin_submit(&mut self) -> Result<OrderForm, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        if self.selected.is_none() {
            return Err(SubmitRejected::NoSelection);
        }
        validate_form(&self.form)?;
        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Close the modal and reset the form to its empty default.
    pub fn submit_succeeded(&mut self) {
        self.selected = None;
        self.form = OrderForm::default();
        self.submitting = false;
    }

    /// Keep the modal and the entered values so the user can retry.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}

/// Required-field checks. Format checking stops at "looks like an address".
///
/// # Errors
///
/// Returns the first failing field in form order.
pub fn validate_form(form: &OrderForm) -> Result<(), FormError> {
    if form.customer_name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if !looks_like_email(form.customer_email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    if form.customer_phone.trim().is_empty() {
        return Err(FormError::MissingPhone);
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
