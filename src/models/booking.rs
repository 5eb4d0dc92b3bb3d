use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub guest: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: RoomType,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    #[serde(rename = "Checked-in")]
    CheckedIn,
    #[serde(rename = "Checked-out")]
    CheckedOut,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::CheckedIn => "Checked-in",
            BookingStatus::CheckedOut => "Checked-out",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Delete,
    MarkCheckedIn,
    MarkCheckedOut,
}

impl BookingAction {
    pub const ALL: [BookingAction; 3] = [
        BookingAction::Delete,
        BookingAction::MarkCheckedIn,
        BookingAction::MarkCheckedOut,
    ];

    /// Parses the action selector of the manage form. `"none"` (and an empty
    /// value) is the presentation-level no-op and yields `Ok(None)`.
    pub fn parse_choice(s: &str) -> Result<Option<Self>, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(None),
            "delete" => Ok(Some(BookingAction::Delete)),
            "mark_checked_in" | "mark as checked-in" => Ok(Some(BookingAction::MarkCheckedIn)),
            "mark_checked_out" | "mark as checked-out" => Ok(Some(BookingAction::MarkCheckedOut)),
            other => Err(format!("unknown action: {other}")),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingAction::Delete => "Delete",
            BookingAction::MarkCheckedIn => "Mark as Checked-in",
            BookingAction::MarkCheckedOut => "Mark as Checked-out",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingAction::Delete => "delete",
            BookingAction::MarkCheckedIn => "mark_checked_in",
            BookingAction::MarkCheckedOut => "mark_checked_out",
        }
    }
}
