//! Student dashboard.

use std::fmt::Write;

use axum::response::Html;

use hostel_service::StudentOverview;

use super::{escape, layout};

pub fn dashboard_page(overview: &StudentOverview, room: &str) -> Html<String> {
    let mut body = format!(
        "<nav><a href=\"/rooms\">Rooms</a><a href=\"/logout\">Logout</a></nav>\n\
         <h1>My Allotment</h1>\n\
         <p>Student ID: <strong>{}</strong></p>\n\
         <p>Room: <strong>{}</strong></p>\n",
        escape(&overview.sid),
        escape(room),
    );

    if !overview.transactions.is_empty() {
        body.push_str("<h2>Payments</h2>\n<table>\n<tr><th>Room</th><th>Transaction</th><th>Date (UTC)</th></tr>\n");
        for tx in &overview.transactions {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&tx.room),
                escape(&tx.tx_hash),
                tx.created_at.format("%Y-%m-%d %H:%M:%S"),
            );
        }
        body.push_str("</table>\n");
    }

    layout("Dashboard", &body)
}
