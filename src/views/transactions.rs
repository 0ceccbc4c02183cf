//! Server-rendered HTML for the transaction listing.

use crate::models::Transaction;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Transacciones aprobadas</title>
<style>
body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 0.5rem 0.75rem; border-bottom: 1px solid #ddd; text-align: left; }
th { background: #009ee3; color: #fff; }
td.amount { text-align: right; font-variant-numeric: tabular-nums; }
td.empty { text-align: center; color: #777; }
</style>
</head>
<body>
<h1>Transacciones aprobadas</h1>
<table>
<thead>
<tr><th>Fecha</th><th>Monto</th><th>Moneda</th><th>Concepto</th><th>Email del pagador</th><th>Estado</th><th>ID de pago</th></tr>
</thead>
<tbody>
"#;

const PAGE_TAIL: &str = "</tbody>\n</table>\n</body>\n</html>\n";

const EMPTY_ROW: &str = "<tr><td class=\"empty\" colspan=\"7\">Todavía no hay transacciones.</td></tr>\n";

/// Renders rows in the order given; callers pass them newest first.
pub fn render_transactions_page(transactions: &[Transaction]) -> String {
    let mut html = String::from(PAGE_HEAD);

    if transactions.is_empty() {
        html.push_str(EMPTY_ROW);
    }
    for transaction in transactions {
        html.push_str(&render_row(transaction));
    }

    html.push_str(PAGE_TAIL);
    html
}

fn render_row(transaction: &Transaction) -> String {
    format!(
        "<tr><td>{}</td><td class=\"amount\">{:.2}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&transaction.date),
        transaction.amount,
        escape_html(&transaction.currency),
        escape_html(&transaction.description),
        escape_html(&transaction.payer_email),
        escape_html(&transaction.status),
        transaction.payment_id,
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
