//! Per-page dashboard session: the last task the backend accepted and the
//! bookkeeping that keeps overlapping submissions from clobbering each other.
//!
//! A `Session` lives in a signal owned by the dashboard view, so a reload
//! starts from [`Session::default`].

use api::TaskId;
use thiserror::Error;

/// Identifies one submission from `begin` to `finish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("A validation is already running")]
pub struct SessionBusy;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    current_task: Option<TaskId>,
    issued: u64,
    in_flight: Option<Ticket>,
}

impl Session {
    pub fn current_task(&self) -> Option<&TaskId> {
        self.current_task.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a submission. Refused while another one is still in flight.
    pub fn begin(&mut self) -> Result<Ticket, SessionBusy> {
        if self.in_flight.is_some() {
            return Err(SessionBusy);
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        Ok(ticket)
    }

    /// Record the task the backend created. Last accepted submission wins.
    pub fn accept_task(&mut self, ticket: Ticket, task_id: TaskId) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.current_task = Some(task_id);
        true
    }

    /// Adopt a task id that did not come from a submission (task lookup).
    pub fn adopt_task(&mut self, task_id: TaskId) {
        self.current_task = Some(task_id);
    }

    /// Whether results for `ticket` may still be shown.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    pub fn finish(&mut self, ticket: Ticket) {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_task() {
        let session = Session::default();
        assert!(session.current_task().is_none());
        assert!(!session.is_busy());
    }

    #[test]
    fn refuses_overlapping_submissions() {
        let mut session = Session::default();
        let first = session.begin().unwrap();
        assert_eq!(session.begin(), Err(SessionBusy));
        session.finish(first);
        assert!(session.begin().is_ok());
    }

    #[test]
    fn later_submission_overwrites_task() {
        let mut session = Session::default();
        let first = session.begin().unwrap();
        assert!(session.accept_task(first, TaskId::new("T1")));
        session.finish(first);

        let second = session.begin().unwrap();
        assert!(session.accept_task(second, TaskId::new("T2")));
        session.finish(second);

        assert_eq!(session.current_task(), Some(&TaskId::new("T2")));
    }

    #[test]
    fn superseded_ticket_cannot_write() {
        let mut session = Session::default();
        let stale = session.begin().unwrap();
        session.finish(stale);
        let fresh = session.begin().unwrap();

        assert!(!session.is_latest(stale));
        assert!(!session.accept_task(stale, TaskId::new("old")));
        assert!(session.current_task().is_none());

        // Finishing a stale ticket must not release the fresh one.
        session.finish(stale);
        assert!(session.is_busy());
        session.finish(fresh);
        assert!(!session.is_busy());
    }
}
