//! Featured-listing page: pay to have a celebrity profile featured.

use leptos::prelude::*;

use crate::components::payment_form::PaymentForm;

#[component]
pub fn FeaturedPage() -> impl IntoView {
    view! {
        <main class="featured-page">
            <section class="featured-card">
                <h1>"Get Featured"</h1>
                <p class="featured-card__subtitle">
                    "Pay with M-Pesa to feature your listing. A PIN prompt will appear on your phone."
                </p>
                <PaymentForm/>
            </section>
        </main>
    }
}
