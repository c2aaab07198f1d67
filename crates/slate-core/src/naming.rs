//! Identifier case conversions for schema names
//!
//! Word splitting and casing come from `heck`; digits stay attached to the
//! word they follow, so `v1` remains a single word.
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use heck::{ToSnakeCase, ToUpperCamelCase};

/// `OrderItems` -> `order_items`
pub fn lower_snake_case(name: &str) -> String {
    name.to_snake_case()
}

/// `order_items` -> `OrderItems`
pub fn upper_camel_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Lower-snake-case every segment of a dotted name, keeping the dots
pub fn dotted_lower_snake_case(qualified: &str) -> String {
    qualified
        .split('.')
        .map(lower_snake_case)
        .collect::<Vec<_>>()
        .join(".")
}

/// The trailing `n` segments of a dotted name (fewer if unavailable)
pub fn last_segments(qualified: &str, n: usize) -> Vec<&str> {
    let segments: Vec<&str> = qualified.split('.').filter(|s| !s.is_empty()).collect();
    let skip = segments.len().saturating_sub(n);
    segments[skip..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_snake_case() {
        assert_eq!(lower_snake_case("OrderItems"), "order_items");
        assert_eq!(lower_snake_case("shop"), "shop");
        assert_eq!(lower_snake_case("v1"), "v1");
        assert_eq!(lower_snake_case("createdAt"), "created_at");
        assert_eq!(lower_snake_case("HTTPServer"), "http_server");
        assert_eq!(lower_snake_case("user-id"), "user_id");
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case("card"), "Card");
        assert_eq!(upper_camel_case("order_items"), "OrderItems");
        assert_eq!(upper_camel_case("orderItems"), "OrderItems");
        assert_eq!(upper_camel_case("payment_method"), "PaymentMethod");
    }

    #[test]
    fn test_dotted_names() {
        assert_eq!(dotted_lower_snake_case("shop.v1"), "shop.v1");
        assert_eq!(dotted_lower_snake_case("acme.OrderService.v2"), "acme.order_service.v2");
        assert_eq!(last_segments("a.b.c.d", 3), vec!["b", "c", "d"]);
        assert_eq!(last_segments("shop.v1", 3), vec!["shop", "v1"]);
        assert_eq!(last_segments("", 2), Vec::<&str>::new());
    }
}
