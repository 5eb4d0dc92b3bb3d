//! Server-rendered HTML for the sidebar views.

use chrono::NaiveDate;

use crate::models::catalog;
use crate::models::{Booking, BookingAction, RoomType};
use crate::services::sessions::{Flash, FlashKind};

static LAYOUT_HTML: &str = include_str!("web/layout.html");
pub static STYLE_CSS: &str = include_str!("web/style.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Bookings,
    Rooms,
    Customers,
    Staff,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Bookings,
        View::Rooms,
        View::Customers,
        View::Staff,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Bookings => "Bookings",
            View::Rooms => "Rooms",
            View::Customers => "Customers",
            View::Staff => "Staff",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/dashboard",
            View::Bookings => "/bookings",
            View::Rooms => "/rooms",
            View::Customers => "/customers",
            View::Staff => "/staff",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            View::Dashboard => "📊 Dashboard Overview",
            View::Bookings => "📝 Bookings",
            View::Rooms => "🛏 Room Management",
            View::Customers => "👤 Customers",
            View::Staff => "🧑‍💼 Staff",
        }
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(hotel_name: &str, active: View, content: &str) -> String {
    let nav = View::ALL
        .iter()
        .map(|v| {
            let class = if *v == active { " class=\"active\"" } else { "" };
            format!("      <a href=\"{}\"{class}>{}</a>", v.path(), v.label())
        })
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!("<h2>{}</h2>\n{content}", active.heading());

    // Braces in the hotel name are emitted as entities so it can never form a
    // placeholder; content goes in last for the same reason.
    let hotel = escape(hotel_name).replace('{', "&#123;").replace('}', "&#125;");
    LAYOUT_HTML
        .replace("{{title}}", active.label())
        .replace("{{nav}}", &nav)
        .replace("{{hotel}}", &hotel)
        .replace("{{content}}", &content)
}

/// Cells must already be escaped.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}

fn card(title: &str, inner: &str) -> String {
    format!("<div class=\"card\"><h3>{title}</h3>{inner}</div>")
}

fn flash_html(flash: &Flash) -> String {
    let (class, icon) = match flash.kind {
        FlashKind::Success => ("success", "✅ "),
        FlashKind::Error => ("error", ""),
        FlashKind::Info => ("info", ""),
    };
    format!(
        "<div class=\"flash {class}\" role=\"status\">{icon}{}</div>",
        escape(&flash.message)
    )
}

pub fn dashboard_page(hotel_name: &str, trend_svg: &str) -> String {
    let metrics: String = catalog::METRICS
        .iter()
        .map(|m| {
            format!(
                "<div class=\"metric {}\"><div class=\"header\">{}</div>\
                 <div class=\"value\">{}</div><div class=\"small\">{}</div></div>",
                m.accent, m.title, m.value, m.caption
            )
        })
        .collect();

    let recent_rows: Vec<Vec<String>> = catalog::RECENT_BOOKINGS
        .iter()
        .map(|b| {
            vec![
                b.booking_id.to_string(),
                b.guest.to_string(),
                b.room.to_string(),
                b.status.to_string(),
            ]
        })
        .collect();

    let quick_actions = "<a class=\"button\" href=\"/bookings\">New Booking</a><br/>\
         <a class=\"button\" href=\"/rooms\">Add Room</a><br/>\
         <a class=\"button\" href=\"/api/bookings/export.csv\">Export CSV</a>";

    let content = format!(
        "<div class=\"row\">{metrics}</div><br/>\
         {}\
         <div class=\"row\"><div class=\"wide\">{}</div><div>{}</div></div>",
        card("Booking Trend", trend_svg),
        card(
            "Recent Bookings",
            &table(&["Booking ID", "Guest", "Room", "Status"], &recent_rows)
        ),
        card("Quick Actions", quick_actions),
    );

    layout(hotel_name, View::Dashboard, &content)
}

pub fn bookings_page(
    hotel_name: &str,
    bookings: &[Booking],
    flash: Option<&Flash>,
    today: NaiveDate,
) -> String {
    let mut content = String::new();
    if let Some(flash) = flash {
        content.push_str(&flash_html(flash));
    }

    let today = today.format("%Y-%m-%d");
    let room_options: String = RoomType::ALL
        .iter()
        .map(|t| format!("<option value=\"{0}\">{0}</option>", t.as_str()))
        .collect();
    let form = format!(
        "<form method=\"post\" action=\"/bookings\">\
         <label for=\"guest\">Guest Name</label><input id=\"guest\" name=\"guest\" type=\"text\">\
         <label for=\"check_in\">Check-in Date</label>\
         <input id=\"check_in\" name=\"check_in\" type=\"date\" value=\"{today}\">\
         <label for=\"check_out\">Check-out Date</label>\
         <input id=\"check_out\" name=\"check_out\" type=\"date\" value=\"{today}\">\
         <label for=\"room_type\">Room Type</label>\
         <select id=\"room_type\" name=\"room_type\">{room_options}</select>\
         <label for=\"notes\">Notes (optional)</label>\
         <textarea id=\"notes\" name=\"notes\" rows=\"3\"></textarea>\
         <button type=\"submit\">Add Booking</button></form>"
    );
    content.push_str(&card("Add New Booking", &form));

    content.push_str("<h3>All Bookings</h3>");
    if bookings.is_empty() {
        content.push_str(&flash_html(&Flash::info(
            "No bookings yet. Add one using the form above.",
        )));
    } else {
        let rows: Vec<Vec<String>> = bookings
            .iter()
            .enumerate()
            .map(|(i, b)| {
                vec![
                    i.to_string(),
                    escape(&b.guest),
                    b.check_in.format("%Y-%m-%d").to_string(),
                    b.check_out.format("%Y-%m-%d").to_string(),
                    b.room_type.as_str().to_string(),
                    escape(&b.notes),
                    b.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    b.status.as_str().to_string(),
                ]
            })
            .collect();
        content.push_str(&table(
            &[
                "#",
                "Guest",
                "Check-in",
                "Check-out",
                "Room Type",
                "Notes",
                "Created At",
                "Status",
            ],
            &rows,
        ));

        let max_index = bookings.len() - 1;
        let action_options: String = BookingAction::ALL
            .iter()
            .map(|a| format!("<option value=\"{}\">{}</option>", a.as_str(), a.label()))
            .collect();
        let manage = format!(
            "<hr/><p>Manage bookings:</p>\
             <form method=\"post\" action=\"/bookings/action\">\
             <label for=\"index\">Booking index (0..N-1) to operate on</label>\
             <input id=\"index\" name=\"index\" type=\"number\" min=\"0\" max=\"{max_index}\" step=\"1\" value=\"0\">\
             <label for=\"action\">Action</label>\
             <select id=\"action\" name=\"action\">\
             <option value=\"none\">None</option>{action_options}\
             </select>\
             <button type=\"submit\">Apply</button></form>"
        );
        content.push_str(&manage);
    }

    layout(hotel_name, View::Bookings, &content)
}

pub fn rooms_page(hotel_name: &str) -> String {
    let rows: Vec<Vec<String>> = catalog::ROOMS
        .iter()
        .map(|r| vec![r.room_no.to_string(), r.room_type.to_string(), r.status.to_string()])
        .collect();
    let content = format!(
        "<div class=\"card\">{}</div>",
        table(&["Room No", "Type", "Status"], &rows)
    );
    layout(hotel_name, View::Rooms, &content)
}

pub fn customers_page(hotel_name: &str) -> String {
    let rows: Vec<Vec<String>> = catalog::CUSTOMERS
        .iter()
        .map(|c| vec![c.name.to_string(), c.phone.to_string()])
        .collect();
    let content = format!("<div class=\"card\">{}</div>", table(&["Name", "Phone"], &rows));
    layout(hotel_name, View::Customers, &content)
}

pub fn staff_page(hotel_name: &str) -> String {
    let rows: Vec<Vec<String>> = catalog::STAFF
        .iter()
        .map(|s| vec![s.name.to_string(), s.role.to_string()])
        .collect();
    let content = format!("<div class=\"card\">{}</div>", table(&["Name", "Role"], &rows));
    layout(hotel_name, View::Staff, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::booking_store::BookingStore;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_layout_marks_active_view() {
        let html = rooms_page("Hotel Management");
        assert!(html.contains("<a href=\"/rooms\" class=\"active\">Rooms</a>"));
        assert!(html.contains("<a href=\"/staff\">Staff</a>"));
        assert!(html.contains("<td>201</td><td>Double</td><td>Maintenance</td>"));
    }

    #[test]
    fn test_empty_bookings_page_shows_hint_and_no_manage_form() {
        let html = bookings_page("Hotel Management", &[], None, d("2024-05-01"));
        assert!(html.contains("No bookings yet. Add one using the form above."));
        assert!(!html.contains("/bookings/action"));
        assert!(html.contains("value=\"2024-05-01\""));
    }

    #[test]
    fn test_bookings_page_escapes_guest_text() {
        let mut store = BookingStore::new();
        store
            .add(
                "<script>x</script>",
                d("2024-05-01"),
                d("2024-05-02"),
                RoomType::Suite,
                "{{content}}",
            )
            .unwrap();
        let html = bookings_page("Hotel Management", store.list(), None, d("2024-05-01"));
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("max=\"0\""));
        assert!(html.contains("{{content}}"));
    }

    #[test]
    fn test_hotel_name_cannot_inject_placeholders() {
        let html = staff_page("{{nav}} Inn {{content}}");
        assert_eq!(html.matches("<a href=\"/rooms\">Rooms</a>").count(), 1);
        assert_eq!(html.matches("<table>").count(), 1);
        assert!(html.contains("&#123;&#123;nav&#125;&#125; Inn"));
    }

    #[test]
    fn test_manage_form_lists_every_action() {
        let mut store = BookingStore::new();
        store
            .add("Aisha", d("2024-05-01"), d("2024-05-02"), RoomType::Double, "")
            .unwrap();
        let html = bookings_page("Hotel Management", store.list(), None, d("2024-05-01"));
        assert!(html.contains("<option value=\"none\">None</option>"));
        assert!(html.contains("<option value=\"delete\">Delete</option>"));
        assert!(html.contains("<option value=\"mark_checked_in\">Mark as Checked-in</option>"));
        assert!(html.contains("<option value=\"mark_checked_out\">Mark as Checked-out</option>"));
    }

    #[test]
    fn test_flash_rendered() {
        let flash = Flash::error("Please enter guest name.");
        let html = bookings_page("Hotel Management", &[], Some(&flash), d("2024-05-01"));
        assert!(html.contains("<div class=\"flash error\" role=\"status\">Please enter guest name.</div>"));
    }
}
