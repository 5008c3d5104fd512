//! View models and plain-text rendering for the catalog screen.
//!
//! `catalog_view` is the single place that decides what is visible; the
//! text renderer only lays the view out for a terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::net::types::GiftBox;
use crate::state::catalog::{CatalogState, FormField};
use crate::state::toast::Toast;

pub const PAGE_TITLE: &str = "Упаковщик подарков";
pub const PAGE_SUBTITLE: &str = "Выберите идеальную подарочную коробку для вашего случая";
pub const ORDER_ACTION: &str = "Заказать";
pub const MODAL_HEADING: &str = "Оформление заказа";
pub const SUBMIT_LABEL: &str = "Оформить заказ";
pub const SUBMITTING_LABEL: &str = "Оформляем...";
pub const CANCEL_LABEL: &str = "Отмена";
pub const LOADING_LABEL: &str = "Загрузка...";

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub image_url: String,
    pub action_label: &'static str,
}

impl From<&GiftBox> for CardView {
    fn from(gift: &GiftBox) -> Self {
        Self {
            id: gift.id,
            title: gift.title.clone(),
            description: gift.description.clone(),
            price_label: gift.price_label(),
            image_url: gift.image_url.clone(),
            action_label: ORDER_ACTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub heading: &'static str,
    pub summary: String,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub cancel_disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView {
    Loading,
    Ready { cards: Vec<CardView>, modal: Option<ModalView> },
}

impl CatalogView {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Loading => &[],
            Self::Ready { cards, .. } => cards,
        }
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalView> {
        match self {
            Self::Loading => None,
            Self::Ready { modal, .. } => modal.as_ref(),
        }
    }
}

/// Derive what the screen shows from its state.
#[must_use]
pub fn catalog_view(state: &CatalogState) -> CatalogView {
    if state.loading {
        return CatalogView::Loading;
    }
    let cards = state.boxes.iter().map(CardView::from).collect();
    let modal = state.selected.as_ref().map(|gift| modal_view(state, gift));
    CatalogView::Ready { cards, modal }
}

fn modal_view(state: &CatalogState, gift: &GiftBox) -> ModalView {
    ModalView {
        heading: MODAL_HEADING,
        summary: format!("{} — {}", gift.title, gift.price_label()),
        fields: vec![
            field_view(state, FormField::Name, "Ваше имя", "text", "Иван Иванов"),
            field_view(state, FormField::Email, "Email", "email", "ivan@example.com"),
            field_view(state, FormField::Phone, "Телефон", "tel", "+7 (999) 123-45-67"),
        ],
        submit_label: if state.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        submit_disabled: state.submitting,
        cancel_disabled: state.submitting,
    }
}

fn field_view(
    state: &CatalogState,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> FieldView {
    FieldView { field, label, input_type, placeholder, value: state.field(field).to_owned(), required: true }
}

// =============================================================================
// TEXT
// =============================================================================

/// Lay out a catalog view for a terminal.
#[must_use]
pub fn render_text(view: &CatalogView) -> String {
    let mut out = format!("{PAGE_TITLE}\n{PAGE_SUBTITLE}\n\n");
    match view {
        CatalogView::Loading => out.push_str(LOADING_LABEL),
        CatalogView::Ready { cards, modal } => {
            for card in cards {
                out.push_str(&render_card(card));
                out.push('\n');
            }
            if let Some(modal) = modal {
                out.push_str(&render_modal(modal));
            }
        }
    }
    out
}

#[must_use]
pub fn render_card(card: &CardView) -> String {
    format!(
        "[{id}] {title}\n    {description}\n    {price}    <{action}>\n    {image}\n",
        id = card.id,
        title = card.title,
        description = card.description,
        price = card.price_label,
        action = card.action_label,
        image = card.image_url,
    )
}

#[must_use]
pub fn render_modal(modal: &ModalView) -> String {
    let mut out = format!("== {} ==\n{}\n", modal.heading, modal.summary);
    for field in &modal.fields {
        if field.value.is_empty() {
            out.push_str(&format!("  {}: ({})\n", field.label, field.placeholder));
        } else {
            out.push_str(&format!("  {}: {}\n", field.label, field.value));
        }
    }
    let disabled = if modal.submit_disabled { " (disabled)" } else { "" };
    out.push_str(&format!("  <{CANCEL_LABEL}>{disabled} <{}>{disabled}\n", modal.submit_label));
    out
}

#[must_use]
pub fn render_toast(toast: &Toast) -> String {
    let marker = if toast.is_error() { "!" } else { "*" };
    format!("{marker} {}: {}", toast.title, toast.description)
}
