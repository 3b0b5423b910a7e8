//! Admin dashboard: student roster, attendance marking, outing review and
//! announcement publishing.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use super::common::{demo_suffix, outing_update_notice};
use crate::components::announcement_form::AnnouncementForm;
use crate::components::announcements_list::AnnouncementsList;
use crate::components::attendance_marker::AttendanceMarker;
use crate::components::header::Header;
use crate::components::notice_toast::NoticeToast;
use crate::components::outing_requests_admin::OutingRequestsAdmin;
use crate::components::students_list::StudentsList;
use crate::net::types::{
    Announcement, AttendanceStatus, MarkAttendance, NewAnnouncement, OutingRequest, OutingStatus, Role, StudentProfile,
};
use crate::state::demo::{
    demo_announcements, demo_outing_requests, demo_students, is_demo_token, local_announcement, next_local_id,
    today_iso,
};
use crate::state::records::apply_outing_status;
use crate::state::session::use_session;
use crate::state::ui::{AdminTab, Notice, UiState};

const PUBLISHED_TITLE: &str = "Announcement Published";
const PUBLISHED_DESCRIPTION: &str = "Your announcement is now visible to all students.";

fn attendance_marked_notice(status: AttendanceStatus, date: &str, demo: bool) -> Notice {
    Notice::success(demo_suffix("Attendance Marked", demo), format!("Marked {} for student on {date}", status.as_str()))
}

#[derive(Clone, Copy)]
struct AdminData {
    students: RwSignal<Vec<StudentProfile>>,
    outings: RwSignal<Vec<OutingRequest>>,
    announcements: RwSignal<Vec<Announcement>>,
    loading: RwSignal<bool>,
    marking: RwSignal<bool>,
    publishing: RwSignal<bool>,
    /// Id of the outing request whose status update is in flight.
    processing: RwSignal<Option<String>>,
}

impl AdminData {
    fn new() -> Self {
        Self {
            students: RwSignal::new(Vec::new()),
            outings: RwSignal::new(Vec::new()),
            announcements: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            marking: RwSignal::new(false),
            publishing: RwSignal::new(false),
            processing: RwSignal::new(None),
        }
    }

    fn fill_demo(self) {
        self.students.set(demo_students());
        self.outings.set(demo_outing_requests(Role::Admin));
        self.announcements.set(demo_announcements());
        self.loading.set(false);
    }

    fn set_outing_status(self, id: &str, status: OutingStatus) {
        self.outings.update(|list| {
            if !apply_outing_status(list, id, status) {
                leptos::logging::warn!("outing request {id} no longer listed");
            }
        });
    }

    fn prepend_announcement(self, announcement: Announcement) {
        self.announcements.update(|list| list.insert(0, announcement));
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let data = AdminData::new();
    let demo = move || is_demo_token(session.token_untracked().as_deref());
    let notify = move |notice: Notice| ui.update(|u| u.notice = Some(notice));

    #[cfg(feature = "hydrate")]
    let api = super::common::PageApi::from_context();

    {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Effect::new(move || {
            if demo() {
                data.fill_demo();
                return;
            }
            #[cfg(feature = "hydrate")]
            remote::load(&api, session.token_untracked(), ui, data);
        });
    }

    let on_mark = {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Callback::new(move |entry: MarkAttendance| {
            if demo() {
                notify(attendance_marked_notice(entry.status, &entry.date, true));
                return;
            }
            #[cfg(feature = "hydrate")]
            remote::mark(&api, session.token_untracked(), ui, data, entry);
        })
    };

    let on_update = {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Callback::new(move |(id, status): (String, OutingStatus)| {
            if demo() {
                data.set_outing_status(&id, status);
                notify(outing_update_notice(status, true));
                return;
            }
            #[cfg(feature = "hydrate")]
            remote::update_outing(&api, session.token_untracked(), ui, data, id, status);
        })
    };

    let on_publish = Callback::new(move |new: NewAnnouncement| {
        if demo() {
            let id = data.announcements.with_untracked(|list| next_local_id("announcement", list.len()));
            data.prepend_announcement(local_announcement(new, id, today_iso()));
            notify(Notice::success(demo_suffix(PUBLISHED_TITLE, true), PUBLISHED_DESCRIPTION));
            return;
        }
        #[cfg(feature = "hydrate")]
        remote::publish(&api, session.token_untracked(), ui, data, new);
        #[cfg(not(feature = "hydrate"))]
        let _ = new;
    });

    let tab_button = move |tab: AdminTab| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || ui.with(|u| u.admin_tab == tab)
                on:click=move |_| ui.update(|u| u.admin_tab = tab)
            >
                {tab.label()}
            </button>
        }
    };

    let content = move || match ui.with(|u| u.admin_tab) {
        AdminTab::Students => view! { <StudentsList students=data.students/> }.into_any(),
        AdminTab::Attendance => {
            view! { <AttendanceMarker students=data.students busy=data.marking on_mark=on_mark/> }.into_any()
        }
        AdminTab::Outing => view! {
            <OutingRequestsAdmin requests=data.outings processing=data.processing on_update=on_update/>
        }
        .into_any(),
        AdminTab::Announcements => view! {
            <div class="announcements-admin">
                <AnnouncementForm busy=data.publishing on_publish=on_publish/>
                <AnnouncementsList announcements=data.announcements/>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dashboard">
            <Header/>
            <main class="dashboard__main">
                <nav class="tabs">{AdminTab::ALL.into_iter().map(tab_button).collect_view()}</nav>
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

#[cfg(feature = "hydrate")]
mod remote {
    use leptos::prelude::*;

    use super::{AdminData, PUBLISHED_DESCRIPTION, PUBLISHED_TITLE, attendance_marked_notice};
    use crate::net::types::{MarkAttendance, NewAnnouncement, OutingStatus};
    use crate::pages::common::{PageApi, absorb, failure_notice, outing_update_notice};
    use crate::state::ui::{Notice, UiState};

    fn report(ui: RwSignal<UiState>, title: &str, err: &crate::net::api::ApiError) {
        leptos::logging::warn!("{title}: {err}");
        if let Some(notice) = failure_notice(title, err) {
            ui.update(|u| u.notice = Some(notice));
        }
    }

    pub(super) fn load(api: &PageApi, token: Option<String>, ui: RwSignal<UiState>, data: AdminData) {
        let api = api.clone();
        let client = api.client(token);
        leptos::task::spawn_local(async move {
            let (students, outings, announcements) =
                futures::join!(client.students(), client.outing_requests(), client.announcements());

            let mut failure = None;
            if let Some(list) = absorb(api.check(students), &mut failure) {
                data.students.set(list);
            }
            if let Some(list) = absorb(api.check(outings), &mut failure) {
                data.outings.set(list);
            }
            if let Some(list) = absorb(api.check(announcements), &mut failure) {
                data.announcements.set(list);
            }
            if let Some(err) = failure {
                report(ui, "Failed to load data", &err);
            }
            data.loading.set(false);
        });
    }

    pub(super) fn mark(api: &PageApi, token: Option<String>, ui: RwSignal<UiState>, data: AdminData, entry: MarkAttendance) {
        if data.marking.get_untracked() {
            return;
        }
        data.marking.set(true);
        let api = api.clone();
        let client = api.client(token);
        leptos::task::spawn_local(async move {
            match api.check(client.mark_attendance(&entry).await) {
                Ok(()) => ui.update(|u| u.notice = Some(attendance_marked_notice(entry.status, &entry.date, false))),
                Err(e) => report(ui, "Failed to mark attendance", &e),
            }
            data.marking.set(false);
        });
    }

    pub(super) fn update_outing(
        api: &PageApi,
        token: Option<String>,
        ui: RwSignal<UiState>,
        data: AdminData,
        id: String,
        status: OutingStatus,
    ) {
        if data.processing.with_untracked(Option::is_some) {
            return;
        }
        data.processing.set(Some(id.clone()));
        let api = api.clone();
        let client = api.client(token);
        leptos::task::spawn_local(async move {
            match api.check(client.update_outing_status(&id, status).await) {
                Ok(()) => {
                    data.set_outing_status(&id, status);
                    ui.update(|u| u.notice = Some(outing_update_notice(status, false)));
                }
                Err(e) => report(ui, "Failed to update request", &e),
            }
            data.processing.set(None);
        });
    }

    pub(super) fn publish(api: &PageApi, token: Option<String>, ui: RwSignal<UiState>, data: AdminData, new: NewAnnouncement) {
        if data.publishing.get_untracked() {
            return;
        }
        data.publishing.set(true);
        let api = api.clone();
        let client = api.client(token);
        leptos::task::spawn_local(async move {
            match api.check(client.create_announcement(&new).await) {
                Ok(announcement) => {
                    data.prepend_announcement(announcement);
                    ui.update(|u| u.notice = Some(Notice::success(PUBLISHED_TITLE, PUBLISHED_DESCRIPTION)));
                }
                Err(e) => report(ui, "Failed to publish announcement", &e),
            }
            data.publishing.set(false);
        });
    }
}
