//! HTTP surface for the browser dashboard: statement text in, classified
//! transactions plus statistics out. Stateless — nothing is persisted
//! between requests.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use saldo_core::Transaction;
use saldo_stats::{compute_statistics, Report, Statistics};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/statements", post(analyze_statement))
        .layer(TraceLayer::new_for_http())
        // The dashboard is served from a different origin during development.
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub delimiter: Option<char>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub transactions: Vec<Transaction>,
    pub statistics: Statistics,
    pub report: Report,
}

async fn analyze_statement(Json(request): Json<AnalyzeRequest>) -> Json<AnalyzeResponse> {
    let transactions = saldo_import::parse_transactions(&request.text, request.delimiter);
    tracing::info!(rows = transactions.len(), "parsed statement upload");

    let statistics = compute_statistics(&transactions);
    let report = Report::new(&transactions, &statistics);
    Json(AnalyzeResponse {
        transactions,
        statistics,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saldo_core::MainCategory;

    #[tokio::test]
    async fn analyze_returns_transactions_and_statistics() {
        let request = AnalyzeRequest {
            text: "Dato;Forklaring;Beløp;Ut fra konto;Inn på konto\n\
                   15.01.2024;REMA 1000;;150,00;\n\
                   20.01.2024;Lønn;;;32000,00\n"
                .to_string(),
            delimiter: None,
        };

        let Json(response) = analyze_statement(Json(request)).await;
        assert_eq!(response.transactions.len(), 2);
        assert_eq!(response.transactions[0].category.main, MainCategory::Expenses);
        assert_eq!(
            response.statistics.expenses.subcategories["groceries"],
            response.transactions[0].abs_amount()
        );
        assert_eq!(response.report.transaction_count, 2);

        // The whole payload must serialize for the dashboard.
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["statistics"]["monthly_summary"]["2024-01"].is_object());
    }

    #[tokio::test]
    async fn analyze_handles_comma_delimited_uploads() {
        let request = AnalyzeRequest {
            text: "Date,Description,Amount\n2024-01-15,Kiwi,-99.90\n".to_string(),
            delimiter: None,
        };
        let Json(response) = analyze_statement(Json(request)).await;
        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].category.subcategory, "groceries");
    }

    #[tokio::test]
    async fn analyze_of_empty_text_is_empty_but_valid() {
        let request = AnalyzeRequest {
            text: String::new(),
            delimiter: None,
        };
        let Json(response) = analyze_statement(Json(request)).await;
        assert!(response.transactions.is_empty());
        assert!(response.statistics.expenses.total.is_zero());
        assert_eq!(response.report.savings_rate, None);
    }
}
