use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde_json::json;
use thiserror::Error;

use crate::{http::Error, types, types::form::compliance::UpdateItem, App};

#[tracing::instrument]
pub async fn update(
    app: web::Data<App>,
    path: web::Path<u32>,
    form: Json<UpdateItem>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();

    let mut tx = app.compliance.begin().await?;
    let Some(item) = tx.find_mut(id) else {
        #[derive(Debug, Error)]
        #[error("Checklist item not found")]
        struct ItemNotFound;
        return Err(Error::from_context(types::Error::NotFound, ItemNotFound));
    };

    form.apply(item);
    let item = item.clone();
    tx.recompute_summary();
    tx.commit().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Checklist item updated",
        "item": item,
    })))
}
