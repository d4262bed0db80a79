//! Student login page.

use axum::response::Html;

use super::layout;

pub fn login_page() -> Html<String> {
    layout(
        "Hostel Login",
        r#"<h1>Hostel Room Allotment</h1>
<form method="post" action="/">
  <p><label>Student ID <input name="sid" required></label></p>
  <p><label>Password <input name="pwd" type="password" required></label></p>
  <p><button type="submit">Login</button></p>
</form>
<p><a href="/admin">Admin login</a></p>"#,
    )
}
