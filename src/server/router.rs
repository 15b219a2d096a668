use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, get_users, set_user_role, ADMIN_TAG},
        auth::{self, callback, get_user, login, logout, AUTH_TAG},
        compliance::{self, get_document, get_documents, review_document, COMPLIANCE_TAG},
        dashboard::{
            self, get_expiring_documents, get_payment_blocks, get_recent_activity, get_summary,
            DASHBOARD_TAG,
        },
        invoice::{self, get_invoices, INVOICE_TAG},
        payment_run::{
            self, execute_payment_run, get_payment_run, get_payment_runs, preview_payment_run,
            PAYMENT_RUN_TAG,
        },
        verification::{self, lookup_licence, verify_licence, VERIFICATION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Compliance Board API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        admin::get_users,
        admin::set_user_role,
        payment_run::execute_payment_run,
        payment_run::preview_payment_run,
        payment_run::get_payment_runs,
        payment_run::get_payment_run,
        verification::lookup_licence,
        verification::verify_licence,
        compliance::get_documents,
        compliance::get_document,
        compliance::review_document,
        invoice::get_invoices,
        dashboard::get_summary,
        dashboard::get_expiring_documents,
        dashboard::get_payment_blocks,
        dashboard::get_recent_activity,
    ),
    tags(
        (name = AUTH_TAG, description = "Sign-in through the identity provider"),
        (name = ADMIN_TAG, description = "User and role administration"),
        (name = PAYMENT_RUN_TAG, description = "Compliance-gated payment runs"),
        (name = VERIFICATION_TAG, description = "Gas Safe register verification"),
        (name = COMPLIANCE_TAG, description = "Contractor compliance documents"),
        (name = INVOICE_TAG, description = "Contractor invoices"),
        (name = DASHBOARD_TAG, description = "Dashboard widgets"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/admin/users", get(get_users))
        .route("/api/admin/users/{id}/role", put(set_user_role))
        .route(
            "/api/internal/payment-run",
            get(preview_payment_run).post(execute_payment_run),
        )
        .route("/api/internal/payment-runs", get(get_payment_runs))
        .route("/api/internal/payment-runs/{id}", get(get_payment_run))
        .route(
            "/api/verification/gas-safe",
            get(lookup_licence).post(verify_licence),
        )
        .route("/api/compliance/documents", get(get_documents))
        .route("/api/compliance/documents/{id}", get(get_document))
        .route(
            "/api/compliance/documents/{id}/review",
            put(review_document),
        )
        .route("/api/invoices", get(get_invoices))
        .route("/api/dashboard/summary", get(get_summary))
        .route(
            "/api/dashboard/expiring-documents",
            get(get_expiring_documents),
        )
        .route("/api/dashboard/payment-blocks", get(get_payment_blocks))
        .route("/api/dashboard/recent-activity", get(get_recent_activity))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
