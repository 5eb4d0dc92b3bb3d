use crate::models::Booking;

const HEADER: [&str; 7] = [
    "Guest",
    "Check-in",
    "Check-out",
    "Room Type",
    "Notes",
    "Created At",
    "Status",
];

/// Serializes bookings as CSV with CRLF line endings. The header row is
/// always written, even for an empty session.
pub fn bookings_csv(bookings: &[Booking]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(vec![]);

    writer.write_record(HEADER)?;
    for b in bookings {
        let check_in = b.check_in.format("%Y-%m-%d").to_string();
        let check_out = b.check_out.format("%Y-%m-%d").to_string();
        let created_at = b.created_at.format("%Y-%m-%dT%H:%M:%S").to_string();
        writer.write_record([
            b.guest.as_str(),
            check_in.as_str(),
            check_out.as_str(),
            b.room_type.as_str(),
            b.notes.as_str(),
            created_at.as_str(),
            b.status.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;
    use crate::services::booking_store::BookingStore;
    use chrono::{NaiveDate, NaiveDateTime};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(
            bookings_csv(&[]).unwrap(),
            "Guest,Check-in,Check-out,Room Type,Notes,Created At,Status\r\n"
        );
    }

    #[test]
    fn test_export_quotes_awkward_fields() {
        let mut store = BookingStore::new();
        let created =
            NaiveDateTime::parse_from_str("2024-05-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        store
            .add_at(
                "Aisha",
                d("2024-05-01"),
                d("2024-05-03"),
                RoomType::Double,
                "late, \"VIP\"",
                created,
            )
            .unwrap();

        let csv = bookings_csv(store.list()).unwrap();
        assert!(csv.ends_with("\r\n"));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Aisha,2024-05-01,2024-05-03,Double,\"late, \"\"VIP\"\"\",2024-05-01T08:00:00,Confirmed"
        );
    }

    #[test]
    fn test_export_keeps_multiline_notes_in_one_record() {
        let mut store = BookingStore::new();
        store
            .add("Lina", d("2024-06-01"), d("2024-06-02"), RoomType::Suite, "line one\nline two")
            .unwrap();

        let csv = bookings_csv(store.list()).unwrap();
        assert!(csv.contains(",\"line one\nline two\","));
    }
}
