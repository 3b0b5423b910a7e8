//! List transforms over campus records shown on the dashboards.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{AttendanceRecord, AttendanceStatus, OutingRequest, OutingStatus};

/// Present/absent tally for a student's attendance list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

impl AttendanceSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let present = records.iter().filter(|r| r.status == AttendanceStatus::Present).count();
        Self { total: records.len(), present, absent: records.len() - present }
    }

    /// Share of classes attended, rounded half-up to a whole percent. 0 when empty.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.present * 200 + self.total) / (self.total * 2)
    }
}

/// Order requests so pending ones come first; relative order is otherwise kept.
pub fn sort_pending_first(requests: &mut [OutingRequest]) {
    requests.sort_by_key(|r| r.status != OutingStatus::Pending);
}

pub fn pending_count(requests: &[OutingRequest]) -> usize {
    requests.iter().filter(|r| r.status == OutingStatus::Pending).count()
}

/// Set the status of the request with `id`. Returns `false` if no such request exists.
pub fn apply_outing_status(requests: &mut [OutingRequest], id: &str, status: OutingStatus) -> bool {
    match requests.iter_mut().find(|r| r.id == id) {
        Some(request) => {
            request.status = status;
            true
        }
        None => false,
    }
}
