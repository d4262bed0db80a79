//! Server-rendered HTML pages.
//!
//! Every interpolated value goes through [`escape`].

pub mod admin;
pub mod login;
pub mod payment;
pub mod rooms;
pub mod student;

use axum::response::Html;

/// Escape text for HTML element and attribute contexts.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap `body` in the shared page shell.
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: Helvetica, Arial, sans-serif; margin: 2rem auto; max-width: 760px; color: #222; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: .4rem .6rem; text-align: left; }}
.occupied {{ color: #a33; }}
.available {{ color: #2a7; }}
.error {{ color: #a33; }}
nav a {{ margin-right: 1rem; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    ))
}
