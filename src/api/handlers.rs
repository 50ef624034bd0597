use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};

use crate::actions::{self, Download};
use crate::awb::AwbBillBuilder;
use crate::invoice::InvoiceBuilder;
use crate::models::{OrderRecord, ShipmentRecord};
use super::error::ApiResult;
use super::state::ApiState;

/// Convierte una descarga en una respuesta adjunta.
fn attachment(download: Download) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(download.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(download.filename)],
        })
        .body(download.bytes)
}

/// Download the AWB bill as a PDF
pub async fn download_awb(
    record: web::Json<ShipmentRecord>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let download = actions::download_awb_bill(state.typst.as_ref(), &record).await?;
    Ok(attachment(download))
}

/// Typst source of the AWB bill, without compiling it
pub async fn preview_awb(record: web::Json<ShipmentRecord>) -> ApiResult<HttpResponse> {
    let document = AwbBillBuilder::new().build(&record);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(document.to_typst()))
}

/// Invoice markup
pub async fn invoice_html(
    order: web::Json<OrderRecord>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let html = InvoiceBuilder::new(state.invoice_config.as_ref().clone()).render_html(&order)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Download the invoice as a PDF
pub async fn download_invoice(
    order: web::Json<OrderRecord>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let download = actions::download_invoice(
        state.html_converter.as_ref(),
        &state.invoice_config,
        &order,
    )
    .await?;

    Ok(attachment(download))
}

/// Page that shows the invoice PDF and opens the print dialog
pub async fn print_invoice(
    order: web::Json<OrderRecord>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let view = actions::print_invoice(
        state.html_converter.as_ref(),
        &state.invoice_config,
        &order,
    )
    .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(view.page()?))
}
