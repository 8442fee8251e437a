//! Shared HTML helpers: escaping and the page shell every view is wrapped in.

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// A header link shown on the right of the top bar.
pub struct NavLink<'a> {
    pub href: &'a str,
    pub label: &'a str,
}

pub fn page(title: &str, brand: &str, nav: &NavLink<'_>, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
      body {{ font-family: Inter, Arial, sans-serif; margin: 0; }}
      header {{ display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; border-bottom: 1px solid #ddd; }}
      main {{ max-width: 60rem; margin: 0 auto; padding: 1.5rem; }}
      fieldset {{ margin-bottom: 1rem; }}
      label {{ display: block; margin-top: 0.5rem; }}
      input, textarea {{ width: 100%; box-sizing: border-box; }}
      .badge {{ display: inline-block; padding: 0.1rem 0.6rem; margin: 0.2rem; border-radius: 1rem; background: #e0ecff; }}
      .avatar {{ width: 8rem; height: 8rem; border-radius: 50%; object-fit: cover; }}
      .entry {{ border-bottom: 1px solid #eee; padding-bottom: 1rem; margin-bottom: 1rem; }}
    </style>
  </head>
  <body>
    <header>
      <a href="/" class="brand">{brand}</a>
      <nav><a href="{nav_href}">{nav_label}</a></nav>
    </header>
    <main>
{body}
    </main>
  </body>
</html>
"#,
        title = escape(title),
        brand = escape(brand),
        nav_href = escape(nav.href),
        nav_label = escape(nav.label),
        body = body,
    )
}
