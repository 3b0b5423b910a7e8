//! Student outing requests: status list plus a new-request form.

#[cfg(test)]
#[path = "outing_requests_test.rs"]
mod outing_requests_test;

use leptos::prelude::*;

use crate::net::types::{NewOutingRequest, OutingRequest, OutingStatus};

/// Trim and check the form fields. ISO dates compare correctly as strings.
fn validate_outing_form(reason: &str, from_date: &str, to_date: &str) -> Result<NewOutingRequest, &'static str> {
    let (reason, from_date, to_date) = (reason.trim(), from_date.trim(), to_date.trim());
    if reason.is_empty() || from_date.is_empty() || to_date.is_empty() {
        return Err("Please fill in the reason and both dates.");
    }
    if to_date < from_date {
        return Err("The return date cannot be before the departure date.");
    }
    Ok(NewOutingRequest { reason: reason.to_owned(), from_date: from_date.to_owned(), to_date: to_date.to_owned() })
}

pub(crate) fn status_badge_class(status: OutingStatus) -> &'static str {
    match status {
        OutingStatus::Pending => "badge badge--warning",
        OutingStatus::Approved => "badge badge--success",
        OutingStatus::Rejected => "badge badge--danger",
    }
}

#[component]
pub fn OutingRequests(
    #[prop(into)] requests: Signal<Vec<OutingRequest>>,
    #[prop(into)] busy: Signal<bool>,
    on_create: Callback<NewOutingRequest>,
) -> impl IntoView {
    let show_form = RwSignal::new(false);
    let reason = RwSignal::new(String::new());
    let from_date = RwSignal::new(String::new());
    let to_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_outing_form(&reason.get_untracked(), &from_date.get_untracked(), &to_date.get_untracked()) {
            Ok(request) => {
                error.set(None);
                on_create.run(request);
                reason.set(String::new());
                from_date.set(String::new());
                to_date.set(String::new());
                show_form.set(false);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <section class="card outing-requests">
            <header class="card__header">
                <h2 class="card__title">"Outing Requests"</h2>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    "New Request"
                </button>
            </header>

            <Show when=move || show_form.get()>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Reason"
                        <textarea
                            class="form__input"
                            rows="3"
                            placeholder="Enter the reason for your outing request..."
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form__row">
                        <label class="form__label">
                            "From Date"
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || from_date.get()
                                on:input=move |ev| from_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "To Date"
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || to_date.get()
                                on:input=move |ev| to_date.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </form>
            </Show>

            <Show
                when=move || requests.with(|r| !r.is_empty())
                fallback=|| view! { <p class="card__empty">"No outing requests yet."</p> }
            >
                <ul class="outing-requests__items">
                    {move || {
                        requests
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <li class="outing-requests__item">
                                        <div class="outing-requests__top">
                                            <span class="outing-requests__reason">{r.reason}</span>
                                            <span class=status_badge_class(r.status)>{r.status.label()}</span>
                                        </div>
                                        <p class="outing-requests__dates">{format!("{} - {}", r.from_date, r.to_date)}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}
