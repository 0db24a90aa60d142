//! Catalog page: hero, filter bar, and the product grid in all its states

use super::html::escape;
use rust_decimal::Decimal;
use storefront_core::models::{format_price, Product};
use storefront_core::state::{CatalogView, StoreState, ALL_CATEGORIES, DEFAULT_MAX_PRICE};

const SKELETON_CARDS: usize = 8;

/// One product tile, used by the grid and the "similar products" row
pub fn product_card(product: &Product) -> String {
    format!(
        r#"<article class="product-card">
  <a href="/product/{id}" class="product-image"><img src="{image}" alt="{title}" loading="lazy"><span class="category-tag">{category}</span></a>
  <div class="product-body">
    <div class="rating">&#9733; <strong>{rate}</strong> <span>({count})</span></div>
    <h3><a href="/product/{id}">{title}</a></h3>
    <p class="description">{description}</p>
    <div class="product-footer">
      <span class="price">{price}</span>
      <form method="post" action="/cart/add/{id}"><button type="submit">Add to Cart</button></form>
    </div>
  </div>
</article>"#,
        id = product.id,
        image = escape(&product.image),
        title = escape(&product.title),
        category = escape(&product.category),
        rate = product.rating.rate,
        count = product.rating.count,
        description = escape(&product.description),
        price = format_price(product.price),
    )
}

fn filter_bar(state: &StoreState) -> String {
    let filters = &state.filters;
    let slider_max = state.price_ceiling.max(Decimal::from(DEFAULT_MAX_PRICE));

    let mut options = format!(
        r#"<option value="{all}"{selected}>All Categories</option>"#,
        all = ALL_CATEGORIES,
        selected = selected(filters.category.as_str() == ALL_CATEGORIES),
    );
    for category in &state.categories {
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = escape(category),
            selected = selected(filters.category.as_str() == category),
        ));
    }

    format!(
        r#"<form class="filter-bar" method="post" action="/filters">
  <label>Search Products
    <input type="text" name="search" placeholder="Search by name..." value="{search}">
  </label>
  <label>Category
    <select name="category">{options}</select>
  </label>
  <label>Max Price <span class="max-price">${max_price}</span>
    <input type="range" name="max_price" min="0" max="{slider_max}" step="1" value="{max_price}">
    <span class="range-labels"><span>$0</span><span>${slider_max}</span></span>
  </label>
  <button type="submit">Apply</button>
</form>"#,
        search = escape(&filters.search),
        options = options,
        max_price = filters.max_price.normalize(),
        slider_max = slider_max.normalize(),
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

fn results_summary(count: usize, filtered: bool) -> String {
    let clear = if filtered {
        r#"<form method="post" action="/filters/clear"><button type="submit" class="link">Clear All Filters</button></form>"#
    } else {
        ""
    };
    format!(
        r#"<div class="results-summary"><p>Showing <strong>{count}</strong> products</p>{clear}</div>"#,
        count = count,
        clear = clear,
    )
}

fn loading_grid() -> String {
    let card = r#"<div class="product-card skeleton"><div class="skeleton-image"></div><div class="skeleton-line short"></div><div class="skeleton-line"></div></div>"#;
    format!(
        r#"<div class="product-grid" aria-busy="true">{}</div>"#,
        card.repeat(SKELETON_CARDS)
    )
}

fn failure_panel(message: &str) -> String {
    format!(
        r#"<div class="panel error">
  <h3>Failed to load products</h3>
  <p>{message}</p>
  <form method="post" action="/reload"><button type="submit">Try Again</button></form>
</div>"#,
        message = escape(message)
    )
}

fn empty_panel() -> &'static str {
    r#"<div class="panel empty">
  <h3>No products found</h3>
  <p>Try adjusting your filters or search terms.</p>
</div>"#
}

/// Body of the catalog page
pub fn render(state: &StoreState) -> String {
    let mut content = String::from(
        r#"<section class="hero">
  <h2>Discover Our <span>Premium</span> Collection</h2>
  <p>High-quality products from across the globe, curated just for you.</p>
</section>"#,
    );
    content.push_str(&filter_bar(state));

    match state.catalog_view() {
        CatalogView::Loading => content.push_str(&loading_grid()),
        CatalogView::Failed { message } => content.push_str(&failure_panel(message)),
        CatalogView::Empty => {
            content.push_str(&results_summary(0, state.is_filtered()));
            content.push_str(empty_panel());
        }
        CatalogView::Products(products) => {
            content.push_str(&results_summary(products.len(), state.is_filtered()));
            content.push_str(r#"<div class="product-grid">"#);
            for product in products {
                content.push_str(&product_card(product));
            }
            content.push_str("</div>");
        }
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::Catalog;
    use storefront_core::models::Rating;
    use storefront_core::state::StoreAction;

    fn product(id: u64, title: &str, price: Decimal) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: "desc".to_string(),
            category: "men's clothing".to_string(),
            image: format!("https://img.example/{}.png", id),
            rating: Rating {
                rate: 4.5,
                count: 9,
            },
        }
    }

    fn loaded() -> StoreState {
        let mut state = StoreState::default();
        state.apply(StoreAction::CatalogLoaded(Catalog {
            products: vec![
                product(1, "Blue Shirt", Decimal::new(2000, 2)),
                product(2, "Red Hat", Decimal::new(1500, 2)),
            ],
            categories: vec!["men's clothing".to_string()],
        }));
        state
    }

    #[test]
    fn test_loading_renders_skeletons_only() {
        let html = render(&StoreState::default());
        assert_eq!(html.matches("skeleton-image").count(), SKELETON_CARDS);
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_failure_renders_message_and_retry() {
        let mut state = StoreState::default();
        state.apply(StoreAction::CatalogFailed("Failed to fetch data".to_string()));
        let html = render(&state);
        assert!(html.contains("Failed to load products"));
        assert!(html.contains("Failed to fetch data"));
        assert!(html.contains(r#"action="/reload""#));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_products_render_with_prices() {
        let html = render(&loaded());
        assert_eq!(html.matches(r#"<article class="product-card">"#).count(), 2);
        assert!(html.contains("$20.00"));
        assert!(html.contains("Showing <strong>2</strong> products"));
        assert!(!html.contains("Clear All Filters"));
        assert!(html.contains(r#"max="1000""#));
        assert!(html.contains(r#"value="20""#));
    }

    #[test]
    fn test_empty_state_offers_clear() {
        let mut state = loaded();
        state.apply(StoreAction::SetSearch("umbrella".to_string()));
        let html = render(&state);
        assert!(html.contains("No products found"));
        assert!(html.contains("Clear All Filters"));
        assert!(html.contains(r#"value="umbrella""#));
    }

    #[test]
    fn test_category_option_selected_and_escaped() {
        let mut state = loaded();
        state.apply(StoreAction::SetCategory(
            storefront_core::state::CategoryFilter::parse("men's clothing"),
        ));
        let html = render(&state);
        assert!(html.contains(r#"<option value="men&#39;s clothing" selected>"#));
    }
}
