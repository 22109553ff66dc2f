use actix_web::{web, HttpResponse};
use relay_shared::validation::validators;

use crate::app::AppState;
use crate::dto::{InboundBody, InboundResponse};

/// Handler for POST /inbound
///
/// Repeats of the same sender and text within one minute are acknowledged as
/// `duplicate` without being processed again.
pub async fn receive_inbound(
    state: web::Data<AppState>,
    body: web::Json<InboundBody>,
) -> HttpResponse {
    let InboundBody { text, sender } = body.into_inner();
    let text = text.unwrap_or_default();
    let sender = sender.unwrap_or_default();

    if validators::not_blank(&sender)
        && validators::not_blank(&text)
        && !state.dedup.check_and_record(&sender, &text)
    {
        return HttpResponse::Ok().json(InboundResponse::duplicate());
    }

    let outcome = state.dispatch.handle_inbound(&text, &sender).await;
    HttpResponse::Ok().json(InboundResponse::Handled(outcome))
}
