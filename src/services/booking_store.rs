use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::errors::{ActionError, ValidationError};
use crate::models::{Booking, BookingAction, BookingStatus, RoomType};

/// Result of a successful [`BookingStore::apply_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Deleted(Booking),
    StatusChanged { index: usize, status: BookingStatus },
}

/// Ordered bookings for one session. Positions are the addressable index of a
/// booking and shift down after a delete.
#[derive(Debug, Default, Clone)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        guest: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
        notes: &str,
    ) -> Result<usize, ValidationError> {
        let now = Local::now().naive_local();
        self.add_at(guest, check_in, check_out, room_type, notes, now)
    }

    /// Same as [`add`](Self::add) with an explicit creation timestamp.
    pub fn add_at(
        &mut self,
        guest: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
        notes: &str,
        created_at: NaiveDateTime,
    ) -> Result<usize, ValidationError> {
        let guest = guest.trim();
        if guest.is_empty() {
            return Err(ValidationError::EmptyGuestName);
        }
        if check_out < check_in {
            return Err(ValidationError::CheckOutBeforeCheckIn);
        }

        let index = self.bookings.len();
        self.bookings.push(Booking {
            id: Uuid::new_v4(),
            guest: guest.to_string(),
            check_in,
            check_out,
            room_type,
            notes: notes.to_string(),
            created_at: created_at.with_nanosecond(0).unwrap_or(created_at),
            status: BookingStatus::Confirmed,
        });

        tracing::debug!(index, room_type = room_type.as_str(), "booking added");
        Ok(index)
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, index: usize) -> Option<&Booking> {
        self.bookings.get(index)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Converts a caller-supplied signed index into a valid position.
    pub fn resolve_index(&self, raw: i64) -> Result<usize, ActionError> {
        usize::try_from(raw)
            .ok()
            .filter(|i| *i < self.bookings.len())
            .ok_or(ActionError::IndexOutOfRange {
                index: raw,
                len: self.bookings.len(),
            })
    }

    pub fn apply_action(
        &mut self,
        index: usize,
        action: BookingAction,
    ) -> Result<ActionOutcome, ActionError> {
        if index >= self.bookings.len() {
            return Err(ActionError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.bookings.len(),
            });
        }

        let outcome = match action {
            BookingAction::Delete => ActionOutcome::Deleted(self.bookings.remove(index)),
            BookingAction::MarkCheckedIn => self.set_status(index, BookingStatus::CheckedIn),
            BookingAction::MarkCheckedOut => self.set_status(index, BookingStatus::CheckedOut),
        };

        tracing::debug!(index, action = action.as_str(), "booking action applied");
        Ok(outcome)
    }

    /// Resolves a stable booking id to its current position, then applies `action`.
    pub fn apply_action_by_id(
        &mut self,
        id: Uuid,
        action: BookingAction,
    ) -> Result<ActionOutcome, ActionError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(ActionError::UnknownBooking(id))?;
        self.apply_action(index, action)
    }

    fn set_status(&mut self, index: usize, status: BookingStatus) -> ActionOutcome {
        self.bookings[index].status = status;
        ActionOutcome::StatusChanged { index, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn store_with(guests: &[&str]) -> BookingStore {
        let mut store = BookingStore::new();
        for guest in guests {
            store
                .add(guest, d("2024-05-01"), d("2024-05-03"), RoomType::Double, "")
                .unwrap();
        }
        store
    }

    #[test]
    fn test_add_then_check_in() {
        let mut store = BookingStore::new();
        let index = store
            .add("Aisha", d("2024-05-01"), d("2024-05-03"), RoomType::Double, "")
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.list()[0].status, BookingStatus::Confirmed);

        store.apply_action(0, BookingAction::MarkCheckedIn).unwrap();
        assert_eq!(store.list()[0].status, BookingStatus::CheckedIn);
        assert_eq!(store.list()[0].status.as_str(), "Checked-in");
    }

    #[test]
    fn test_add_returns_previous_length() {
        let mut store = store_with(&["Aisha", "Rahul"]);
        let index = store
            .add("Lina", d("2024-06-01"), d("2024-06-02"), RoomType::Suite, "late arrival")
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().notes, "late arrival");
    }

    #[test]
    fn test_empty_guest_rejected() {
        let mut store = BookingStore::new();
        let err = store
            .add("", d("2024-05-01"), d("2024-05-03"), RoomType::Single, "")
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGuestName);
        assert!(store.is_empty());

        let err = store
            .add("   ", d("2024-05-01"), d("2024-05-03"), RoomType::Single, "")
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGuestName);
    }

    #[test]
    fn test_empty_guest_wins_over_bad_dates() {
        let mut store = BookingStore::new();
        let err = store
            .add("", d("2024-05-05"), d("2024-05-04"), RoomType::Single, "")
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGuestName);
    }

    #[test]
    fn test_check_out_before_check_in_rejected() {
        let mut store = store_with(&["Aisha"]);
        let before = store.list().to_vec();
        let err = store
            .add("Rahul", d("2024-05-05"), d("2024-05-04"), RoomType::Suite, "")
            .unwrap_err();
        assert_eq!(err, ValidationError::CheckOutBeforeCheckIn);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_same_day_stay_allowed() {
        let mut store = BookingStore::new();
        store
            .add("Nina", d("2024-05-05"), d("2024-05-05"), RoomType::Single, "")
            .unwrap();
        let booking = &store.list()[0];
        assert_eq!(booking.check_in, booking.check_out);
    }

    #[test]
    fn test_guest_name_is_trimmed() {
        let mut store = BookingStore::new();
        store
            .add("  Aisha ", d("2024-05-01"), d("2024-05-03"), RoomType::Double, "")
            .unwrap();
        assert_eq!(store.list()[0].guest, "Aisha");
    }

    #[test]
    fn test_created_at_truncated_and_stable() {
        let mut store = BookingStore::new();
        let created = dt("2024-05-01 09:15:42") + chrono::Duration::milliseconds(750);
        store
            .add_at("Aisha", d("2024-05-01"), d("2024-05-03"), RoomType::Deluxe, "", created)
            .unwrap();
        let stamp = store.list()[0].created_at;
        assert_eq!(stamp, dt("2024-05-01 09:15:42"));

        store.apply_action(0, BookingAction::MarkCheckedIn).unwrap();
        store.apply_action(0, BookingAction::MarkCheckedOut).unwrap();
        assert_eq!(store.list()[0].created_at, stamp);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut store = store_with(&["Aisha", "Rahul", "Lina"]);
        let outcome = store.apply_action(1, BookingAction::Delete).unwrap();
        match outcome {
            ActionOutcome::Deleted(b) => assert_eq!(b.guest, "Rahul"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        let guests: Vec<&str> = store.list().iter().map(|b| b.guest.as_str()).collect();
        assert_eq!(guests, vec!["Aisha", "Lina"]);
    }

    #[test]
    fn test_delete_first_keeps_second() {
        let mut store = store_with(&["Aisha", "Rahul"]);
        store.apply_action(0, BookingAction::Delete).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].guest, "Rahul");
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut store = store_with(&["Aisha"]);
        store.apply_action(0, BookingAction::MarkCheckedIn).unwrap();
        store.apply_action(0, BookingAction::MarkCheckedIn).unwrap();
        assert_eq!(store.list()[0].status, BookingStatus::CheckedIn);
    }

    #[test]
    fn test_check_out_without_check_in_allowed() {
        let mut store = store_with(&["Aisha"]);
        let outcome = store.apply_action(0, BookingAction::MarkCheckedOut).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::StatusChanged {
                index: 0,
                status: BookingStatus::CheckedOut
            }
        );
    }

    #[test]
    fn test_out_of_range_leaves_store_unchanged() {
        let mut empty = BookingStore::new();
        assert!(matches!(
            empty.apply_action(0, BookingAction::Delete),
            Err(ActionError::IndexOutOfRange { index: 0, len: 0 })
        ));

        let mut store = store_with(&["Aisha", "Rahul"]);
        let before = store.list().to_vec();
        assert!(store.apply_action(2, BookingAction::MarkCheckedIn).is_err());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_resolve_index_rejects_negative() {
        let store = store_with(&["Aisha"]);
        assert_eq!(store.resolve_index(0), Ok(0));
        assert_eq!(
            store.resolve_index(-1),
            Err(ActionError::IndexOutOfRange { index: -1, len: 1 })
        );
        assert!(store.resolve_index(1).is_err());
    }

    #[test]
    fn test_apply_by_id_survives_index_shift() {
        let mut store = store_with(&["Aisha", "Rahul", "Lina"]);
        let lina = store.list()[2].id;
        store.apply_action(0, BookingAction::Delete).unwrap();
        store
            .apply_action_by_id(lina, BookingAction::MarkCheckedIn)
            .unwrap();
        assert_eq!(store.list()[1].guest, "Lina");
        assert_eq!(store.list()[1].status, BookingStatus::CheckedIn);

        let missing = Uuid::new_v4();
        assert_eq!(
            store.apply_action_by_id(missing, BookingAction::Delete),
            Err(ActionError::UnknownBooking(missing))
        );
    }
}
