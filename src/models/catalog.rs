//! Fixed reference data shown by the non-booking views. None of these values
//! are derived from session bookings.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    /// CSS accent class for the metric card.
    pub accent: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecentBooking {
    pub booking_id: u32,
    pub guest: &'static str,
    pub room: u16,
    pub status: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Room {
    pub room_no: u16,
    pub room_type: &'static str,
    pub status: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Customer {
    pub name: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct StaffMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const METRICS: [Metric; 3] = [
    Metric {
        title: "Occupancy",
        value: "78%",
        caption: "Today",
        accent: "m1",
    },
    Metric {
        title: "Total Revenue",
        value: "$12,450",
        caption: "This month",
        accent: "m2",
    },
    Metric {
        title: "Upcoming Check-ins",
        value: "14",
        caption: "Next 24 hrs",
        accent: "m3",
    },
];

pub const RECENT_BOOKINGS: [RecentBooking; 3] = [
    RecentBooking {
        booking_id: 1001,
        guest: "Aisha",
        room: 204,
        status: "Checked-in",
    },
    RecentBooking {
        booking_id: 1002,
        guest: "Rahul",
        room: 110,
        status: "Booked",
    },
    RecentBooking {
        booking_id: 1003,
        guest: "Lina",
        room: 305,
        status: "Checked-out",
    },
];

pub const ROOMS: [Room; 5] = [
    Room { room_no: 101, room_type: "Single", status: "Available" },
    Room { room_no: 102, room_type: "Double", status: "Occupied" },
    Room { room_no: 103, room_type: "Suite", status: "Available" },
    Room { room_no: 201, room_type: "Double", status: "Maintenance" },
    Room { room_no: 202, room_type: "Deluxe", status: "Available" },
];

pub const CUSTOMERS: [Customer; 2] = [
    Customer { name: "Aisha", phone: "9876543210" },
    Customer { name: "Rahul", phone: "9123456780" },
];

pub const STAFF: [StaffMember; 2] = [
    StaffMember { name: "Alex", role: "Manager" },
    StaffMember { name: "Nina", role: "Receptionist" },
];
