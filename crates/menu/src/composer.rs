use chrono::{DateTime, Utc};

use cafeto_core::decimal;
use cafeto_orders::{ActiveOrder, DraftOrder, OrderProduct, SessionState};

/// Shown when an order record carries no resolvable product name.
const PRODUCT_FALLBACK: &str = "Producto";

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━";

/// Renders the top-level menu message.
///
/// Composition order is fixed: active orders (if any), the unconfirmed draft
/// (if one has a product), then the numbered main menu with the conditional
/// reorder option. Every literal below is part of the user-facing contract.
#[derive(Debug, Default)]
pub struct MenuComposer;

impl MenuComposer {
    pub fn new() -> Self {
        Self
    }

    /// Render against the wall clock.
    pub fn render(
        &self,
        session: &SessionState,
        active_orders: &[ActiveOrder],
        has_history: bool,
    ) -> String {
        self.render_at(Utc::now(), session, active_orders, has_history)
    }

    /// Render with an explicit clock reading (deterministic variant).
    pub fn render_at(
        &self,
        now: DateTime<Utc>,
        session: &SessionState,
        active_orders: &[ActiveOrder],
        has_history: bool,
    ) -> String {
        let mut header = String::new();
        if !active_orders.is_empty() {
            header.push_str(&active_orders_block(now, active_orders));
        }
        if let Some(draft) = session.displayable_draft() {
            header.push_str(&draft_block(draft));
        }

        let reorder_option = if has_history {
            "*4* - Volver a pedir\n"
        } else {
            ""
        };

        format!(
            "{header}*MENÚ PRINCIPAL*\n\n\
             *1* - Ver catálogo y pedir\n\
             *2* - Consultar pedido\n\
             *3* - Información del negocio\n\
             {reorder_option}\n\
             Envía el número de tu elección"
        )
    }
}

fn active_orders_block(now: DateTime<Utc>, orders: &[ActiveOrder]) -> String {
    let mut block = format!("*TUS PEDIDOS ACTIVOS:*\n{SEPARATOR}\n");

    for order in orders {
        let name = order
            .product
            .as_ref()
            .and_then(OrderProduct::name)
            .unwrap_or(PRODUCT_FALLBACK);
        let quantity = decimal::format(order.quantity_kg);
        let total = decimal::format_soles(order.total.unwrap_or(0.0));
        let elapsed = elapsed_text(now, order);

        block.push_str(&format!(
            "\n*{id}*\n{name}\n{quantity}kg - {total}\nEstado: *{status}*\nHace {elapsed}\n",
            id = order.id,
            status = order.status,
        ));
    }

    block.push_str(&format!(
        "\n_Usa el código para consultar detalles_\n{SEPARATOR}\n\n"
    ));
    block
}

fn draft_block(draft: &DraftOrder) -> String {
    let name = draft
        .product
        .as_ref()
        .and_then(|product| product.name.as_deref())
        .unwrap_or(PRODUCT_FALLBACK);
    let quantity = match draft.quantity_kg {
        Some(kg) => format!("{}kg", decimal::format(kg)),
        None => "cantidad por definir".to_string(),
    };
    let total = match draft.total {
        Some(total) => decimal::format_soles(total),
        None => "por calcular".to_string(),
    };

    format!(
        "*PEDIDO ACTUAL (sin confirmar)*\n{SEPARATOR}\n\
         {name}\n\
         Cantidad: {quantity}\n\
         Total: {total}\n\
         {SEPARATOR}\n\n\
         _Escribe *cancelar* para eliminar_\n\n"
    )
}

/// Human-relative elapsed time for an order.
///
/// No timestamp, or one that does not parse, reads as "Hoy"; a timestamp in
/// the future reads as "Reciente". Buckets use floor division: minutes under
/// an hour, whole hours under a day, whole days beyond, singular at exactly
/// one. This can never abort a render.
fn elapsed_text(now: DateTime<Utc>, order: &ActiveOrder) -> String {
    let Some(placed) = order.placed_at() else {
        if order.timestamp.is_some() || order.legacy_date.is_some() {
            tracing::debug!(order = %order.id, "unparsable order timestamp, rendering as today");
        }
        return "Hoy".to_string();
    };

    if placed > now {
        return "Reciente".to_string();
    }

    let minutes = (now - placed).num_minutes();
    if minutes < 60 {
        format!("{minutes} min")
    } else if minutes < 1440 {
        let hours = minutes / 60;
        format!("{hours} {}", if hours == 1 { "hora" } else { "horas" })
    } else {
        let days = minutes / 1440;
        format!("{days} {}", if days == 1 { "día" } else { "días" })
    }
}
