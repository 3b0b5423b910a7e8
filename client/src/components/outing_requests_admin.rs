//! Admin review queue for outing requests, pending first.

use leptos::prelude::*;

use super::outing_requests::status_badge_class;
use crate::net::types::{OutingRequest, OutingStatus};
use crate::state::records::{pending_count, sort_pending_first};

#[component]
pub fn OutingRequestsAdmin(
    #[prop(into)] requests: Signal<Vec<OutingRequest>>,
    /// Id of the request whose update is in flight.
    #[prop(into)]
    processing: Signal<Option<String>>,
    on_update: Callback<(String, OutingStatus)>,
) -> impl IntoView {
    let sorted = move || {
        let mut list = requests.get();
        sort_pending_first(&mut list);
        list
    };

    view! {
        <section class="card outing-admin">
            <header class="card__header">
                <h2 class="card__title">"Outing Requests"</h2>
                <span class="badge badge--warning">
                    {move || format!("{} pending", requests.with(|r| pending_count(r)))}
                </span>
            </header>
            <Show
                when=move || requests.with(|r| !r.is_empty())
                fallback=|| view! { <p class="card__empty">"No outing requests."</p> }
            >
                <ul class="outing-admin__items">
                    {move || {
                        sorted()
                            .into_iter()
                            .map(|r| {
                                let status = r.status;
                                let pending = status == OutingStatus::Pending;
                                let id = r.id.clone();
                                let in_flight = move || processing.with(|p| p.as_deref() == Some(id.as_str()));
                                let badge = (!pending)
                                    .then(|| view! { <span class=status_badge_class(status)>{status.label()}</span> });
                                let actions = pending.then(|| {
                                    let approve_id = r.id.clone();
                                    let reject_id = r.id.clone();
                                    view! {
                                        <div class="form__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=in_flight.clone()
                                                on:click=move |_| on_update.run((approve_id.clone(), OutingStatus::Approved))
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                disabled=in_flight
                                                on:click=move |_| on_update.run((reject_id.clone(), OutingStatus::Rejected))
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    }
                                });
                                view! {
                                    <li class="outing-admin__item" class:outing-admin__item--pending=pending>
                                        <div class="outing-admin__top">
                                            <span class="outing-admin__student">{r.student_name}</span>
                                            {badge}
                                        </div>
                                        <p class="outing-admin__reason">{r.reason}</p>
                                        <p class="outing-admin__dates">{format!("{} - {}", r.from_date, r.to_date)}</p>
                                        {actions}
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
