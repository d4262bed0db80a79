//! Payment page. The client asserts the payment reference; the page posts
//! it to `/mark_paid` and then offers the receipt.

use axum::response::Html;

use super::{escape, layout};

pub fn payment_page(sid: &str, room: &str) -> Html<String> {
    let room_json = serde_json::to_string(room).unwrap_or_else(|_| "\"\"".to_string());

    let body = format!(
        r#"<nav><a href="/rooms">Rooms</a><a href="/logout">Logout</a></nav>
<h1>Payment</h1>
<p>Student: <strong>{sid}</strong></p>
<p>Room: <strong>{room}</strong></p>
<p><label>Transaction hash <input id="tx" required></label></p>
<p><button id="pay">Confirm payment</button></p>
<p id="status"></p>
<script>
const room = {room_json};
document.getElementById("pay").addEventListener("click", async () => {{
  const txHash = document.getElementById("tx").value.trim();
  const status = document.getElementById("status");
  const res = await fetch("/mark_paid", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{ room, txHash }})
  }});
  const data = await res.json();
  if (!data.ok) {{ status.textContent = data.error; return; }}
  const dateUtc = new Date().toISOString().replace("T", " ").slice(0, 19);
  const pdf = await fetch("/download_receipt", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{ room, txHash, dateUtc }})
  }});
  const url = URL.createObjectURL(await pdf.blob());
  status.innerHTML = '';
  const a = document.createElement("a");
  a.href = url;
  a.download = "receipt.pdf";
  a.textContent = "Download receipt";
  status.appendChild(a);
}});
</script>"#,
        sid = escape(sid),
        room = escape(room),
        room_json = room_json.replace('<', "\\u003c"),
    );

    layout("Payment", &body)
}
