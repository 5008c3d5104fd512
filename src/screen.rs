//! Catalog + order screen controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller per mounted screen. It owns the [`CatalogState`], the
//! notification queue, and a [`Storefront`] to talk to. The host (terminal
//! loop, tests) feeds it user events and renders `state()` afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Network and status failures never escape: each action turns them into one
//! destructive toast and leaves the screen in a continuable state. No
//! retries; the user acts again.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::net::api::Storefront;
use crate::net::types::{GiftBox, OrderReceipt};
use crate::state::catalog::{CatalogState, FormField, SubmitRejected};
use crate::state::toast::{self, Toast, ToastQueue};

/// Result of a submit action, for hosts that want more than the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx from the service. The receipt is present when the body had one.
    Placed(Option<OrderReceipt>),
    /// Request sent but failed. Modal and fields are unchanged.
    Failed,
    /// Request never sent.
    Rejected(SubmitRejected),
}

pub struct CatalogScreen<S> {
    storefront: S,
    state: CatalogState,
    toasts: ToastQueue,
}

impl<S: Storefront> CatalogScreen<S> {
    #[must_use]
    pub fn new(storefront: S) -> Self {
        Self { storefront, state: CatalogState::default(), toasts: ToastQueue::default() }
    }

    /// Create the screen and run its activation fetch.
    pub async fn mount(storefront: S) -> Self {
        let mut screen = Self::new(storefront);
        screen.load().await;
        screen
    }

    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.pending()
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    /// Fetch the product list once. Failure empties the list and raises a
    /// single toast.
    pub async fn load(&mut self) {
        self.state.begin_load();
        match self.storefront.fetch_boxes().await {
            Ok(boxes) => {
                tracing::info!(count = boxes.len(), "catalog loaded");
                self.state.load_succeeded(boxes);
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.state.load_failed();
                self.toasts.push(Toast::error(toast::LOAD_FAILED));
            }
        }
    }

    /// Card action: open the order form for a box from the loaded list.
    /// Returns `false` when `box_id` is not in the list.
    pub fn order_click(&mut self, box_id: i64) -> bool {
        let Some(gift) = self.find_box(box_id).cloned() else {
            return false;
        };
        self.state.select(&gift);
        true
    }

    #[must_use]
    pub fn find_box(&self, box_id: i64) -> Option<&GiftBox> {
        self.state.boxes.iter().find(|b| b.id == box_id)
    }

    pub fn cancel(&mut self) -> bool {
        self.state.cancel()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    /// Form submission. `submitting` stays set for the whole await.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let form = match self.state.begin_submit() {
            Ok(form) => form,
            Err(rejected) => {
                tracing::debug!(%rejected, "submit rejected");
                return SubmitOutcome::Rejected(rejected);
            }
        };

        match self.storefront.submit_order(&form).await {
            Ok(receipt) => {
                tracing::info!(box_id = form.box_id, "order placed");
                self.state.submit_succeeded();
                self.toasts.push(Toast::success(toast::ORDER_PLACED_TITLE, toast::ORDER_PLACED));
                SubmitOutcome::Placed(receipt)
            }
            Err(e) => {
                tracing::warn!(box_id = form.box_id, error = %e, "order submit failed");
                self.state.submit_failed();
                self.toasts.push(Toast::error(toast::ORDER_FAILED));
                SubmitOutcome::Failed
            }
        }
    }
}
