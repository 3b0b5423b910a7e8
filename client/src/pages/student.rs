//! Student dashboard: profile, attendance, outing requests and announcements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute`, so a session is present by the time the
//! page mounts. All four collections load in parallel; a demo session gets the
//! local fixtures instead and files outing requests locally.

use leptos::prelude::*;

use super::common::demo_suffix;
use crate::components::announcements_list::AnnouncementsList;
use crate::components::attendance_table::AttendanceTable;
use crate::components::header::Header;
use crate::components::notice_toast::NoticeToast;
use crate::components::outing_requests::OutingRequests;
use crate::components::profile_card::ProfileCard;
use crate::net::types::{Announcement, AttendanceRecord, NewOutingRequest, OutingRequest, Role, StudentProfile};
use crate::state::demo::{
    demo_announcements, demo_attendance, demo_outing_requests, demo_profile, is_demo_token, local_outing_request,
    next_local_id, today_iso,
};
use crate::state::session::{SessionContext, use_session};
use crate::state::ui::{Notice, StudentTab, UiState};

const SUBMITTED_TITLE: &str = "Request Submitted";
const SUBMITTED_DESCRIPTION: &str = "Your outing request has been submitted for approval.";

#[derive(Clone, Copy)]
struct StudentData {
    profile: RwSignal<Option<StudentProfile>>,
    attendance: RwSignal<Vec<AttendanceRecord>>,
    outings: RwSignal<Vec<OutingRequest>>,
    announcements: RwSignal<Vec<Announcement>>,
    loading: RwSignal<bool>,
    submitting: RwSignal<bool>,
}

impl StudentData {
    fn new() -> Self {
        Self {
            profile: RwSignal::new(None),
            attendance: RwSignal::new(Vec::new()),
            outings: RwSignal::new(Vec::new()),
            announcements: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            submitting: RwSignal::new(false),
        }
    }

    fn fill_demo(self) {
        self.profile.set(Some(demo_profile()));
        self.attendance.set(demo_attendance());
        self.outings.set(demo_outing_requests(Role::Student));
        self.announcements.set(demo_announcements());
        self.loading.set(false);
    }

    fn prepend_outing(self, request: OutingRequest) {
        self.outings.update(|list| list.insert(0, request));
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let data = StudentData::new();

    #[cfg(feature = "hydrate")]
    let api = super::common::PageApi::from_context();

    {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Effect::new(move || {
            if is_demo_token(session.token_untracked().as_deref()) {
                data.fill_demo();
                return;
            }
            #[cfg(feature = "hydrate")]
            load(&api, session, ui, data);
        });
    }

    let on_create = Callback::new(move |new: NewOutingRequest| {
        if is_demo_token(session.token_untracked().as_deref()) {
            file_locally(session, ui, data, new);
            return;
        }
        #[cfg(feature = "hydrate")]
        submit(&api, session, ui, data, new);
        #[cfg(not(feature = "hydrate"))]
        let _ = new;
    });

    let tab_button = move |tab: StudentTab| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || ui.with(|u| u.student_tab == tab)
                on:click=move |_| ui.update(|u| u.student_tab = tab)
            >
                {tab.label()}
            </button>
        }
    };

    let content = move || match ui.with(|u| u.student_tab) {
        StudentTab::Profile => {
            data.profile.get().map(|profile| view! { <ProfileCard profile=profile/> }.into_any()).unwrap_or_else(|| {
                view! { <p class="card__empty">"Profile unavailable."</p> }.into_any()
            })
        }
        StudentTab::Attendance => view! { <AttendanceTable records=data.attendance/> }.into_any(),
        StudentTab::Outing => {
            view! { <OutingRequests requests=data.outings busy=data.submitting on_create=on_create/> }.into_any()
        }
        StudentTab::Announcements => view! { <AnnouncementsList announcements=data.announcements/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <Header/>
            <main class="dashboard__main">
                <nav class="tabs">{StudentTab::ALL.into_iter().map(tab_button).collect_view()}</nav>
                <Show
                    when=move || !data.loading.get()
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    {content}
                </Show>
            </main>
            <NoticeToast/>
        </div>
    }
}

fn file_locally(session: SessionContext, ui: RwSignal<UiState>, data: StudentData, new: NewOutingRequest) {
    let Some(user) = session.user_untracked() else {
        return;
    };
    let id = data.outings.with_untracked(|list| next_local_id("outing", list.len()));
    data.prepend_outing(local_outing_request(new, &user, id, today_iso()));
    ui.update(|u| u.notice = Some(Notice::success(demo_suffix(SUBMITTED_TITLE, true), SUBMITTED_DESCRIPTION)));
}

#[cfg(feature = "hydrate")]
fn load(api: &super::common::PageApi, session: SessionContext, ui: RwSignal<UiState>, data: StudentData) {
    use super::common::{absorb, failure_notice};

    let api = api.clone();
    let client = api.client(session.token_untracked());
    leptos::task::spawn_local(async move {
        let (profile, attendance, outings, announcements) = futures::join!(
            client.profile(),
            client.attendance(),
            client.outing_requests(),
            client.announcements()
        );

        let mut failure = None;
        if let Some(profile) = absorb(api.check(profile), &mut failure) {
            data.profile.set(Some(profile));
        }
        if let Some(records) = absorb(api.check(attendance), &mut failure) {
            data.attendance.set(records);
        }
        if let Some(requests) = absorb(api.check(outings), &mut failure) {
            data.outings.set(requests);
        }
        if let Some(items) = absorb(api.check(announcements), &mut failure) {
            data.announcements.set(items);
        }
        if let Some(err) = failure {
            leptos::logging::warn!("student dashboard load failed: {err}");
            if let Some(notice) = failure_notice("Failed to load data", &err) {
                ui.update(|u| u.notice = Some(notice));
            }
        }
        data.loading.set(false);
    });
}

#[cfg(feature = "hydrate")]
fn submit(
    api: &super::common::PageApi,
    session: SessionContext,
    ui: RwSignal<UiState>,
    data: StudentData,
    new: NewOutingRequest,
) {
    use super::common::failure_notice;

    if data.submitting.get_untracked() {
        return;
    }
    data.submitting.set(true);
    let api = api.clone();
    let client = api.client(session.token_untracked());
    leptos::task::spawn_local(async move {
        match api.check(client.create_outing_request(&new).await) {
            Ok(request) => {
                data.prepend_outing(request);
                ui.update(|u| u.notice = Some(Notice::success(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION)));
            }
            Err(e) => {
                leptos::logging::warn!("outing request failed: {e}");
                if let Some(notice) = failure_notice("Failed to submit request", &e) {
                    ui.update(|u| u.notice = Some(notice));
                }
            }
        }
        data.submitting.set(false);
    });
}
