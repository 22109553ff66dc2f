use actix_web::{web, HttpResponse};
use relay_core::services::DepositRequest;

use crate::app::AppState;
use crate::dto::DepositResponse;
use crate::handlers::ApiError;

/// Handler for POST /otp
///
/// # Request Body
///
/// ```json
/// {"tur": "oluşturma", "otp": "0042", "tel": "+905551112233"}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "OTP başarıyla kaydedildi",
///     "phone": "+905551112233",
///     "tur": "creation",
///     "timestamp": "2024-03-01T12:00:00Z"
/// }
/// ```
///
/// ## Errors
/// 400 with `{"error", "message", "field", "timestamp"}` on validation failure
pub async fn deposit_otp(
    state: web::Data<AppState>,
    request: web::Json<DepositRequest>,
) -> Result<HttpResponse, ApiError> {
    let receipt = state.dispatch.deposit(request.into_inner())?;
    Ok(HttpResponse::Ok().json(DepositResponse::from(receipt)))
}
