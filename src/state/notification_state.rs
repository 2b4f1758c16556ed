// ============================================================================
// NOTIFICATION STATE - Feed + fetch tickets (Idle -> Fetching -> Idle)
// ============================================================================
// Each fetch is issued a ticket. A response is applied only if its ticket is
// newer than the last applied one and not older than the mark-read barrier,
// so a poll that started before "mark read" cannot undo it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{badge_text, unread_count, Notification};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollPhase {
    Idle,
    Fetching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
    next_ticket: u64,
    last_applied: Option<u64>,
    barrier: u64,
    in_flight: usize,
    dropdown_open: bool,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight += 1;
        ticket
    }

    /// Returns `true` when the list was replaced
    pub fn complete_fetch(&mut self, ticket: FetchTicket, notifications: Vec<Notification>) -> bool {
        self.finish();
        if !self.accepts(ticket) {
            log::info!("⏭️ [NOTIF] Dropping stale response (ticket {})", ticket.0);
            return false;
        }
        self.last_applied = Some(ticket.0);
        self.notifications = notifications;
        true
    }

    /// Failed fetches leave the current list untouched
    pub fn fail_fetch(&mut self, ticket: FetchTicket) {
        self.finish();
        log::warn!("⚠️ [NOTIF] Fetch {} failed, keeping {} cached", ticket.0, self.notifications.len());
    }

    /// Called before a mark-read request: fetches already in flight are now stale
    pub fn invalidate_in_flight(&mut self) {
        self.barrier = self.next_ticket;
    }

    fn accepts(&self, ticket: FetchTicket) -> bool {
        ticket.0 >= self.barrier && self.last_applied.map_or(true, |last| ticket.0 > last)
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn phase(&self) -> PollPhase {
        if self.in_flight > 0 {
            PollPhase::Fetching
        } else {
            PollPhase::Idle
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn badge_text(&self) -> Option<String> {
        badge_text(self.unread_count())
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Returns the new open state
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    /// Returns true if it was open
    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.dropdown_open, false)
    }
}

/// Shared handle held by the page state
#[derive(Clone, Default)]
pub struct NotificationState {
    pub feed: Rc<RefCell<NotificationFeed>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        self.feed.borrow_mut().begin_fetch()
    }

    pub fn complete_fetch(&self, ticket: FetchTicket, notifications: Vec<Notification>) -> bool {
        self.feed.borrow_mut().complete_fetch(ticket, notifications)
    }

    pub fn fail_fetch(&self, ticket: FetchTicket) {
        self.feed.borrow_mut().fail_fetch(ticket)
    }

    pub fn invalidate_in_flight(&self) {
        self.feed.borrow_mut().invalidate_in_flight()
    }

    pub fn badge_text(&self) -> Option<String> {
        self.feed.borrow().badge_text()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.feed.borrow().notifications().to_vec()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.feed.borrow().is_dropdown_open()
    }

    pub fn toggle_dropdown(&self) -> bool {
        self.feed.borrow_mut().toggle_dropdown()
    }

    pub fn close_dropdown(&self) -> bool {
        self.feed.borrow_mut().close_dropdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(read_flags: &[bool]) -> Vec<Notification> {
        read_flags
            .iter()
            .enumerate()
            .map(|(i, is_read)| Notification {
                id: i as u64,
                title: format!("T{}", i),
                message: String::new(),
                kind: None,
                is_read: *is_read,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn phase_follows_in_flight_fetches() {
        let mut feed = NotificationFeed::new();
        assert_eq!(feed.phase(), PollPhase::Idle);
        let ticket = feed.begin_fetch();
        assert_eq!(feed.phase(), PollPhase::Fetching);
        feed.complete_fetch(ticket, list(&[false]));
        assert_eq!(feed.phase(), PollPhase::Idle);
        assert_eq!(feed.badge_text().as_deref(), Some("1"));
    }

    #[test]
    fn older_response_landing_late_is_dropped() {
        let mut feed = NotificationFeed::new();
        let poll = feed.begin_fetch();
        let on_open = feed.begin_fetch();

        assert!(feed.complete_fetch(on_open, list(&[true, true])));
        assert!(!feed.complete_fetch(poll, list(&[false, false])));
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn poll_started_before_mark_read_cannot_revert_it() {
        let mut feed = NotificationFeed::new();
        let first = feed.begin_fetch();
        feed.complete_fetch(first, list(&[false, false, false]));

        let poll = feed.begin_fetch();
        feed.invalidate_in_flight();
        let refetch = feed.begin_fetch();

        assert!(feed.complete_fetch(refetch, list(&[true, true, true])));
        assert!(!feed.complete_fetch(poll, list(&[false, false, false])));
        assert_eq!(feed.badge_text(), None);
    }

    #[test]
    fn stale_response_arriving_first_is_still_dropped_after_barrier() {
        let mut feed = NotificationFeed::new();
        let poll = feed.begin_fetch();
        feed.invalidate_in_flight();
        assert!(!feed.complete_fetch(poll, list(&[false])));
        assert!(feed.notifications().is_empty());
        assert_eq!(feed.phase(), PollPhase::Idle);
    }

    #[test]
    fn failure_keeps_previous_list() {
        let mut feed = NotificationFeed::new();
        let ok = feed.begin_fetch();
        feed.complete_fetch(ok, list(&[false, true]));
        let failing = feed.begin_fetch();
        feed.fail_fetch(failing);
        assert_eq!(feed.notifications().len(), 2);
        assert_eq!(feed.phase(), PollPhase::Idle);
    }

    #[test]
    fn dropdown_toggles() {
        let state = NotificationState::new();
        assert!(state.toggle_dropdown());
        assert!(state.is_dropdown_open());
        assert!(state.close_dropdown());
        assert!(!state.is_dropdown_open());
    }

    #[test]
    fn closing_a_closed_dropdown_reports_no_change() {
        let state = NotificationState::new();
        assert!(!state.close_dropdown());
        state.toggle_dropdown();
        assert!(state.close_dropdown());
        assert!(!state.close_dropdown());
    }
}
