//! Local UI chrome state (dashboard tabs, toast notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and record state so
//! rendering controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the student dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentTab {
    #[default]
    Profile,
    Attendance,
    Outing,
    Announcements,
}

impl StudentTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Attendance, Self::Outing, Self::Announcements];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Attendance => "Attendance",
            Self::Outing => "Outing",
            Self::Announcements => "Announcements",
        }
    }
}

/// Tabs on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Students,
    Attendance,
    Outing,
    Announcements,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Students, Self::Attendance, Self::Outing, Self::Announcements];

    pub fn label(self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Attendance => "Attendance",
            Self::Outing => "Outing",
            Self::Announcements => "Announcements",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissible toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), description: description.into() }
    }
}

/// UI state for dashboard tabs and the active notice.
///
/// Provided as `RwSignal<UiState>` context from the app root.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub student_tab: StudentTab,
    pub admin_tab: AdminTab,
    pub notice: Option<Notice>,
}
