//! M-Pesa payment form for featured listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only input path for payments: the submit handler suppresses native
//! navigation, builds a `PayRequest`, issues one `/pay` call, and renders the
//! resulting `PaymentStatus` into the status line below the form.

#[cfg(test)]
#[path = "payment_form_test.rs"]
mod payment_form_test;

use leptos::prelude::*;

use crate::net::types::PayRequest;
use crate::state::payment::PaymentStatus;

fn message_class(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Failed(_) => "payment-message payment-message--error",
        PaymentStatus::PromptSent => "payment-message payment-message--success",
        PaymentStatus::Idle | PaymentStatus::Processing => "payment-message",
    }
}

#[component]
pub fn PaymentForm() -> impl IntoView {
    let phone = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let status = RwSignal::new(PaymentStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_processing() {
            return;
        }
        // Blank input is skipped without a message.
        let Some(request) = PayRequest::from_form(&phone.get_untracked(), &amount.get_untracked()) else {
            return;
        };
        status.set(PaymentStatus::Processing);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::initiate_payment(&request).await;
            status.set(PaymentStatus::from_result(&result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form id="mpesaForm" class="payment-form" on:submit=on_submit>
            <label class="payment-form__field">
                "M-Pesa phone number"
                <input
                    class="payment-input"
                    type="tel"
                    name="phone"
                    placeholder="2547XXXXXXXX"
                    autocomplete="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="payment-form__field">
                "Amount (KES)"
                <input
                    class="payment-input"
                    type="number"
                    name="amount"
                    min="1"
                    step="1"
                    placeholder="100"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn payment-button"
                type="submit"
                disabled=move || status.get().is_processing()
            >
                "Pay with M-Pesa"
            </button>
        </form>
        <Show when=move || status.get() != PaymentStatus::Idle>
            <p id="mpesaMessage" class=move || message_class(&status.get()) role="status">
                {move || status.get().message()}
            </p>
        </Show>
    }
}
