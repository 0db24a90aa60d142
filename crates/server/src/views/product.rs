//! Product detail page

use super::html::escape;
use super::shop::product_card;
use storefront_core::models::{format_price, Product};

pub fn render(product: &Product, related: &[&Product]) -> String {
    let mut content = format!(
        r#"<a href="/" class="back-link">&larr; Back to Shop</a>
<section class="product-detail">
  <div class="detail-image"><img src="{image}" alt="{title}"></div>
  <div class="detail-info">
    <span class="category-tag">{category}</span>
    <h1>{title}</h1>
    <div class="rating">&#9733; <strong>{rate}</strong> <span>({count} reviews)</span></div>
    <div class="price large">{price}</div>
    <p class="description">{description}</p>
    <form method="post" action="/cart/add/{id}"><button type="submit" class="primary">Add to Cart</button></form>
  </div>
</section>"#,
        id = product.id,
        image = escape(&product.image),
        title = escape(&product.title),
        category = escape(&product.category),
        rate = product.rating.rate,
        count = product.rating.count,
        price = format_price(product.price),
        description = escape(&product.description),
    );

    if !related.is_empty() {
        content.push_str(
            r#"<section class="related"><div class="section-heading"><h2>Similar <span>Products</span></h2><a href="/">View All</a></div><div class="product-grid">"#,
        );
        for p in related {
            content.push_str(&product_card(p));
        }
        content.push_str("</div></section>");
    }

    content
}

pub fn not_found() -> &'static str {
    r#"<div class="panel empty">
  <h2>Product not found</h2>
  <p>The product you are looking for doesn't exist or has been removed.</p>
  <a href="/" class="button">Back to Shop</a>
</div>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_core::models::Rating;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Backpack {}", id),
            price: Decimal::new(10995, 2),
            description: "Fits 15 inch laptops".to_string(),
            category: "bags".to_string(),
            image: String::new(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        }
    }

    #[test]
    fn test_detail_renders_fields() {
        let html = render(&product(1), &[]);
        assert!(html.contains("<h1>Backpack 1</h1>"));
        assert!(html.contains("$109.95"));
        assert!(html.contains("(120 reviews)"));
        assert!(!html.contains("Similar"));
    }

    #[test]
    fn test_related_products_section() {
        let a = product(2);
        let b = product(3);
        let html = render(&product(1), &[&a, &b]);
        assert!(html.contains("Similar <span>Products</span>"));
        assert_eq!(html.matches(r#"<article class="product-card">"#).count(), 2);
    }
}
