//! The sample menu loaded into an empty catalog at startup.

use crate::model::{CatalogItemCreate, Category};
use rust_decimal::Decimal;

const PHOTO_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}{PHOTO_PARAMS}")
}

/// The eight house dishes, in the order they are inserted (ids 1..=8 on a fresh store).
pub fn sample_menu() -> Vec<CatalogItemCreate> {
    vec![
        CatalogItemCreate::new(
            "Bruschetta Italiana",
            "Fresh tomatoes, basil, and garlic on toasted bread with olive oil",
            Decimal::new(899, 2),
            Category::Appetizers,
            photo("1572441713132-51c75654db73"),
        ),
        CatalogItemCreate::new(
            "Antipasto Platter",
            "Selection of cured meats, cheeses, olives, and vegetables",
            Decimal::new(1499, 2),
            Category::Appetizers,
            photo("1544124499-58912cbddaad"),
        ),
        CatalogItemCreate::new(
            "Fettuccine Alfredo",
            "Rich and creamy pasta with parmesan cheese and butter",
            Decimal::new(1699, 2),
            Category::Pasta,
            photo("1621996346565-e3dbc353d2e5"),
        ),
        CatalogItemCreate::new(
            "Spaghetti Carbonara",
            "Traditional Roman pasta with eggs, pancetta, and pecorino cheese",
            Decimal::new(1899, 2),
            Category::Pasta,
            photo("1612874742237-6526221588e3"),
        ),
        CatalogItemCreate::new(
            "Margherita Pizza",
            "Classic pizza with fresh mozzarella, tomatoes, and basil",
            Decimal::new(1599, 2),
            Category::Pizza,
            photo("1574071318508-1cdbab80d002"),
        ),
        CatalogItemCreate::new(
            "Pepperoni Pizza",
            "Classic pepperoni with mozzarella cheese on crispy crust",
            Decimal::new(1799, 2),
            Category::Pizza,
            photo("1565299624946-b28f40a0ca4b"),
        ),
        CatalogItemCreate::new(
            "Tiramisu",
            "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone",
            Decimal::new(799, 2),
            Category::Desserts,
            photo("1571877227200-a0d98ea607e9"),
        ),
        CatalogItemCreate::new(
            "Cannoli",
            "Crispy pastry shells filled with sweet ricotta and chocolate chips",
            Decimal::new(699, 2),
            Category::Desserts,
            photo("1578985545062-69928b1d9587"),
        ),
    ]
}
