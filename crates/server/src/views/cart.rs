//! Cart drawer

use super::html::escape;
use storefront_core::models::{format_price, CartItem};
use storefront_core::state::Cart;

fn line(item: &CartItem) -> String {
    let decrement_disabled = if item.quantity <= 1 { " disabled" } else { "" };
    format!(
        r#"<li class="cart-line">
  <img src="{image}" alt="{title}">
  <div class="cart-line-body">
    <div class="cart-line-head">
      <h4>{title}</h4>
      <form method="post" action="/cart/{id}/remove"><button type="submit" class="icon" aria-label="Remove">Remove</button></form>
    </div>
    <p class="price">{price}</p>
    <div class="quantity">
      <form method="post" action="/cart/{id}/decrement"><button type="submit" aria-label="Decrease"{disabled}>&minus;</button></form>
      <span class="quantity-value">{quantity}</span>
      <form method="post" action="/cart/{id}/increment"><button type="submit" aria-label="Increase">+</button></form>
    </div>
    <p class="line-total">{line_total}</p>
  </div>
</li>"#,
        id = item.id,
        image = escape(&item.image),
        title = escape(&item.title),
        price = format_price(item.price),
        disabled = decrement_disabled,
        quantity = item.quantity,
        line_total = format_price(item.line_total()),
    )
}

pub fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return r#"<aside class="cart-drawer">
  <h2>Your Cart</h2>
  <div class="panel empty">
    <h3>Cart is empty</h3>
    <p>Looks like you haven't added anything yet.</p>
    <a href="/" class="button">Start Shopping</a>
  </div>
</aside>"#
            .to_string();
    }

    let lines: String = cart.items().iter().map(line).collect();
    format!(
        r#"<aside class="cart-drawer">
  <div class="drawer-head"><h2>Your Cart</h2><a href="/" aria-label="Close">Close</a></div>
  <ul class="cart-lines">{lines}</ul>
  <div class="drawer-foot">
    <div class="subtotal"><span>Subtotal</span><strong>{total}</strong></div>
    <button type="button" class="primary">Proceed to Checkout</button>
  </div>
</aside>"#,
        lines = lines,
        total = format_price(cart.total()),
    )
}
