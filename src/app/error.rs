use crate::utils::error::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

// 細節只寫進日誌，客戶端一律收到 500
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            self,
            self.category(),
            self.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", self.recovery_suggestion());

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
