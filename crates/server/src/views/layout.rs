//! Page chrome: document shell, header with cart badge, footer

use super::html::escape;

const STORE_NAME: &str = "ModernStore";

fn document(title: &str, body_class: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {store}</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body class="{body_class}">
{content}
</body>
</html>"#,
        title = escape(title),
        store = STORE_NAME,
        body_class = body_class,
        content = content,
    )
}

fn flash_banner(flash: Option<&str>) -> String {
    flash
        .map(|message| format!(r#"<div class="flash" role="status">{}</div>"#, escape(message)))
        .unwrap_or_default()
}

fn header(cart_count: u32) -> String {
    format!(
        r#"<header class="site-header">
  <a href="/" class="brand"><span class="logo">S</span><h1>{store}</h1></a>
  <nav>
    <a href="/">Shop</a>
    <a href="/login">Login</a>
    <a href="/signup" class="button">Sign Up</a>
  </nav>
  <a href="/cart" class="cart-button" aria-label="Open cart">Cart<span class="badge" id="cart-count">{count}</span></a>
</header>"#,
        store = STORE_NAME,
        count = cart_count,
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="site-footer">
  <nav><a href="/">Shop</a><a href="/login">Login</a><a href="/signup">Signup</a></nav>
  <p>&copy; 2026 {store}.</p>
</footer>"#,
        store = STORE_NAME
    )
}

/// Shop pages: header, optional notice, content, footer
pub fn page(title: &str, cart_count: u32, flash: Option<&str>, content: &str) -> String {
    let body = format!(
        "{header}\n{flash}\n<main>\n{content}\n</main>\n{footer}",
        header = header(cart_count),
        flash = flash_banner(flash),
        content = content,
        footer = footer(),
    );
    document(title, "shop", &body)
}

/// Login and signup: no shop chrome, just a way back
pub fn auth_page(title: &str, flash: Option<&str>, content: &str) -> String {
    let body = format!(
        r#"{flash}
<main class="auth">
{content}
</main>
<a href="/" class="back-to-shop">&larr; Back to Shop</a>"#,
        flash = flash_banner(flash),
        content = content,
    );
    document(title, "auth", &body)
}
