//! Room list and selection page.

use std::fmt::Write;

use axum::response::Html;

use hostel_entity::Room;

use super::{escape, layout};

pub fn rooms_page(sid: &str, rooms: &[Room], assigned: Option<&Room>) -> Html<String> {
    let mut body = format!(
        "<nav><a href=\"/student/dashboard\">Dashboard</a><a href=\"/logout\">Logout</a></nav>\n\
         <h1>Rooms</h1>\n<p>Logged in as <strong>{}</strong></p>\n",
        escape(sid)
    );

    if let Some(room) = assigned {
        let _ = writeln!(
            body,
            "<p>Your allotted room: <strong>{}</strong></p>",
            escape(&room.room)
        );
    }

    body.push_str("<table>\n<tr><th>Room</th><th>Status</th></tr>\n");
    for room in rooms {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td class=\"{status}\">{status}</td></tr>",
            escape(&room.room),
            status = room.status,
        );
    }
    body.push_str("</table>\n");

    if assigned.is_none() {
        body.push_str("<form method=\"post\" action=\"/select_room\">\n<p><select name=\"room\">\n");
        for room in rooms.iter().filter(|r| !r.is_occupied()) {
            let _ = writeln!(
                body,
                "<option value=\"{0}\">{0}</option>",
                escape(&room.room)
            );
        }
        body.push_str("</select>\n<button type=\"submit\">Select</button></p>\n</form>\n");
    }

    layout("Rooms", &body)
}
