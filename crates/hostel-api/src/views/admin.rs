//! Admin login and dashboard pages.

use std::fmt::Write;

use axum::response::Html;

use hostel_service::AdminOverview;

use super::{escape, layout};

pub fn login_page(error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape(e)))
        .unwrap_or_default();

    layout(
        "Admin Login",
        &format!(
            r#"<h1>Admin Login</h1>
{error}<form method="post" action="/admin">
  <p><label>Username <input name="username" required></label></p>
  <p><label>Password <input name="password" type="password" required></label></p>
  <p><button type="submit">Login</button></p>
</form>"#
        ),
    )
}

pub fn dashboard_page(overview: &AdminOverview) -> Html<String> {
    let mut body = String::from(
        "<nav><a href=\"/admin/logout\">Logout</a></nav>\n<h1>Admin Dashboard</h1>\n\
         <h2>Occupied rooms</h2>\n<table>\n<tr><th>Room</th><th>Student</th><th></th></tr>\n",
    );

    for room in &overview.occupied_rooms {
        let _ = writeln!(
            body,
            "<tr><td>{0}</td><td>{1}</td><td><button data-room=\"{0}\" class=\"revoke\">Revoke</button></td></tr>",
            escape(&room.room),
            escape(room.assigned_sid.as_deref().unwrap_or("")),
        );
    }

    body.push_str(
        "</table>\n<h2>Transactions</h2>\n<table>\n\
         <tr><th>Student</th><th>Room</th><th>Transaction</th><th>Date (UTC)</th></tr>\n",
    );
    for tx in &overview.transactions {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&tx.sid),
            escape(&tx.room),
            escape(&tx.tx_hash),
            tx.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    body.push_str(
        r#"</table>
<script>
for (const btn of document.querySelectorAll("button.revoke")) {
  btn.addEventListener("click", async () => {
    const res = await fetch("/admin/revoke_room", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ room: btn.dataset.room })
    });
    const data = await res.json();
    if (data.ok) { location.reload(); } else { alert(data.error); }
  });
}
</script>"#,
    );

    layout("Admin Dashboard", &body)
}
