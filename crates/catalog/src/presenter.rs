use crate::product::Product;
use crate::schema::header;

/// Fixed message when nothing is visible (or the store was unreachable —
/// the customer is never shown the difference).
const EMPTY_CATALOG: &str = "📭 *No hay productos disponibles en este momento*";

const HEADER: &str = "☕ *CATÁLOGO DE CAFÉ DISPONIBLE*\n━━━━━━━━━━━━━━━━━━━━━\n\n";

const PRODUCT_SEPARATOR: &str = "────────────────\n\n";

const CALL_TO_ACTION: &str =
    "_Para ordenar, envía un mensaje con el nombre del café y la cantidad deseada_";

/// Renders the catalog into the outgoing chat message.
///
/// Pure data-to-text; the literal strings (banner, separators, emoji,
/// fallbacks) are part of the user-facing contract.
#[derive(Debug, Default)]
pub struct CatalogPresenter;

impl CatalogPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One message for the whole catalog, one block per product in input
    /// order. A malformed product renders with its fallback strings; it
    /// never takes the rest of the catalog down with it.
    pub fn render(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return EMPTY_CATALOG.to_string();
        }

        let mut message = String::from(HEADER);
        for product in products {
            message.push_str(&product_block(product));
        }
        message.push_str(CALL_TO_ACTION);
        message
    }
}

fn product_block(product: &Product) -> String {
    let name = product.name().unwrap_or("Sin nombre");
    let price = product.price_per_kg().unwrap_or("0");
    let stock = product.get(header::STOCK_KG).unwrap_or("0");
    let origin = product.origin().unwrap_or("No especificado");
    let score = product.score().unwrap_or("-");
    let farmer = product.farmer().unwrap_or("No especificado");

    format!(
        "*{name}*\n\
         💰 S/{price} por kg\n\
         📦 Disponible: {stock} kg\n\
         📍 Origen: {origin}\n\
         ⭐ Puntaje: {score}/100\n\
         👨‍🌾 Agricultor: {farmer}\n\
         {PRODUCT_SEPARATOR}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        [
            header::ID,
            header::NAME,
            header::PRICE_PER_KG,
            header::ORIGIN,
            header::SCORE,
            header::FARMER,
            header::STOCK_KG,
            header::DESCRIPTION,
            header::STATUS,
            header::LAST_MODIFIED,
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    fn product(cells: &[&str]) -> Product {
        let row: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        Product::from_row(&headers(), &row).unwrap()
    }

    #[test]
    fn empty_catalog_is_the_fixed_message() {
        let rendered = CatalogPresenter::new().render(&[]);
        assert_eq!(rendered, "📭 *No hay productos disponibles en este momento*");
    }

    #[test]
    fn renders_one_block_per_product_in_input_order() {
        let products = vec![
            product(&[
                "CAT-001",
                "Café de Colombia Premium",
                "42.5",
                "Cusco",
                "87",
                "Familia Quispe",
                "25",
                "",
                "ACTIVE",
                "",
            ]),
            product(&[
                "CAT-002",
                "Café de Puno",
                "38",
                "Puno",
                "84",
                "Coop. Valle Azul",
                "12.5",
                "",
                "ACTIVE",
                "",
            ]),
        ];

        let rendered = CatalogPresenter::new().render(&products);

        assert!(rendered.starts_with("☕ *CATÁLOGO DE CAFÉ DISPONIBLE*\n━━━━━━━━━━━━━━━━━━━━━\n\n"));
        assert!(rendered.ends_with(
            "_Para ordenar, envía un mensaje con el nombre del café y la cantidad deseada_"
        ));
        assert_eq!(rendered.matches("────────────────\n\n").count(), 2);

        let first = rendered.find("Café de Colombia Premium").unwrap();
        let second = rendered.find("Café de Puno").unwrap();
        assert!(first < second);
    }

    #[test]
    fn one_product_block_is_verbatim() {
        let rendered = CatalogPresenter::new().render(&[product(&[
            "CAT-001",
            "Café de Colombia Premium",
            "42.5",
            "Cusco",
            "87",
            "Familia Quispe",
            "25",
            "Notas de chocolate",
            "ACTIVE",
            "01/09/2025 10:00",
        ])]);

        let expected = "☕ *CATÁLOGO DE CAFÉ DISPONIBLE*\n\
                        ━━━━━━━━━━━━━━━━━━━━━\n\n\
                        *Café de Colombia Premium*\n\
                        💰 S/42.5 por kg\n\
                        📦 Disponible: 25 kg\n\
                        📍 Origen: Cusco\n\
                        ⭐ Puntaje: 87/100\n\
                        👨‍🌾 Agricultor: Familia Quispe\n\
                        ────────────────\n\n\
                        _Para ordenar, envía un mensaje con el nombre del café y la cantidad deseada_";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn missing_fields_fall_back_to_the_literals() {
        // Only the id column is populated beyond the name-less minimum.
        let rendered = CatalogPresenter::new().render(&[product(&["CAT-009"])]);

        assert!(rendered.contains("*Sin nombre*"));
        assert!(rendered.contains("💰 S/0 por kg"));
        assert!(rendered.contains("📦 Disponible: 0 kg"));
        assert!(rendered.contains("📍 Origen: No especificado"));
        assert!(rendered.contains("⭐ Puntaje: -/100"));
        assert!(rendered.contains("👨‍🌾 Agricultor: No especificado"));
    }
}
