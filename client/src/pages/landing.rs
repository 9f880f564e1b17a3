//! Landing page: hero, value sections, and the lead capture form.
//!
//! ARCHITECTURE
//! ============
//! The page owns the only mutable state (`RwSignal<LeadFormState>`) and the
//! UTM params captured at mount, and hands both to the submit driver in
//! `state::lead_form`. Sections are anchored by the ids in `config` so nav
//! links and the developer self-checks agree on them.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::SubmitButton;
use crate::components::card::Card;
use crate::components::field::{HoneypotField, SelectField, TextAreaField, TextField};
use crate::components::footer::SiteFooter;
use crate::components::nav::SiteNav;
use crate::config::{ANCHOR_CONTACT, ANCHOR_FEATURES, ANCHOR_WHY, BRAND_NAME, PAGE_TITLE};
use crate::state::lead_form::{FormField, INTEREST_OPTIONS, LeadFormState};
use crate::util::dev_checks;
use crate::util::utm::UtmParams;

/// A titled blurb rendered as a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

pub const WHY_POINTS: [Blurb; 3] = [
    Blurb {
        title: "Answers in minutes",
        body: "Connect your warehouse once and ask questions in plain language. No ticket queue.",
    },
    Blurb {
        title: "One source of truth",
        body: "Metrics are defined once and reused everywhere, so every team reads the same numbers.",
    },
    Blurb {
        title: "Built for operators",
        body: "Alerts, weekly digests, and drill-downs designed for the people running the business.",
    },
];

pub const FEATURES: [Blurb; 6] = [
    Blurb { title: "Live dashboards", body: "Share boards that refresh as data lands, with per-viewer filters." },
    Blurb { title: "Metric catalog", body: "Versioned metric definitions with owners and change history." },
    Blurb { title: "Anomaly alerts", body: "Get notified when a metric moves outside its normal range." },
    Blurb { title: "Cohort analysis", body: "Slice retention and revenue by signup week, plan, or channel." },
    Blurb { title: "Warehouse native", body: "Queries run in your warehouse. Your data never leaves it." },
    Blurb { title: "SSO and roles", body: "SAML sign-in and row-level permissions for every workspace." },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let form = RwSignal::new(LeadFormState::default());
    let utm = StoredValue::new(UtmParams::from_location());

    Effect::new(|| dev_checks::run_in_document());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::BrowserTransport;
            let attempt = crate::state::lead_form::submit(&form, &utm.get_value(), &transport).await;
            attempt.log();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, utm);
    };

    let submitted = move || form.with(LeadFormState::is_submitted);
    let disabled = Signal::derive(move || form.with(LeadFormState::submit_disabled));
    let loading = Signal::derive(move || form.with(LeadFormState::is_loading));
    let error = move || form.with(|s| s.error.clone());

    view! {
        <Title text=PAGE_TITLE/>
        <div class="landing">
            <SiteNav/>

            <section class="hero">
                <h1 class="hero__title">"Turn product data into decisions"</h1>
                <p class="hero__subtitle">
                    {BRAND_NAME}
                    " gives every team trustworthy metrics, live dashboards, and alerts without waiting on an analyst."
                </p>
                <a class="hero__cta" href=ANCHOR_CONTACT.href()>"Talk to us"</a>
            </section>

            <section id=ANCHOR_WHY.id class="section section--why">
                <h2 class="section__title">"Why teams switch"</h2>
                <div class="section__grid">
                    {WHY_POINTS
                        .iter()
                        .map(|p| view! {
                            <Card modifier="why">
                                <h3>{p.title}</h3>
                                <p>{p.body}</p>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id=ANCHOR_FEATURES.id class="section section--features">
                <h2 class="section__title">"Features"</h2>
                <ul class="feature-list">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <li class="feature-list__item">
                                <Card modifier="feature">
                                    <h3>{f.title}</h3>
                                    <p>{f.body}</p>
                                </Card>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>

            <section id=ANCHOR_CONTACT.id class="section section--contact">
                <h2 class="section__title">"Get in touch"</h2>
                <Card modifier="contact">
                    <Show
                        when=submitted
                        fallback=move || view! {
                            <form class="lead-form" on:submit=on_submit novalidate>
                                <TextField form=form field=FormField::Name label="Name" autocomplete="name" required=true/>
                                <TextField
                                    form=form
                                    field=FormField::Email
                                    label="Work email"
                                    input_type="email"
                                    placeholder="you@company.com"
                                    autocomplete="email"
                                    required=true
                                />
                                <TextField form=form field=FormField::Company label="Company" autocomplete="organization"/>
                                <TextField form=form field=FormField::Phone label="Phone" input_type="tel" autocomplete="tel"/>
                                <SelectField form=form field=FormField::Interest label="I'm interested in" options=&INTEREST_OPTIONS/>
                                <TextAreaField
                                    form=form
                                    field=FormField::Notes
                                    label="Anything else?"
                                    placeholder="Team size, tools you use today, timelines..."
                                />
                                <HoneypotField form=form/>
                                <Show when=move || error().is_some()>
                                    <p class="lead-form__error" role="alert">{move || error().unwrap_or_default()}</p>
                                </Show>
                                <SubmitButton label="Request a demo" loading_label="Sending..." disabled=disabled loading=loading/>
                            </form>
                        }
                    >
                        <div class="lead-form__confirmation" role="status">
                            <h3>"Thanks, we got it."</h3>
                            <p>"Someone from our team will reach out within one business day."</p>
                        </div>
                    </Show>
                </Card>
            </section>

            <SiteFooter/>
        </div>
    }
}
