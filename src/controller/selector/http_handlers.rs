use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use super::session::{SessionStore, apply_msgs, snapshot};
use crate::error::SelectorError;
use crate::model::ShotForm;
use crate::mvu::selector::{Msg, SelectionReport};
use crate::view::bag_editor::render_bag_editor;
use crate::view::index::{render_index_template, render_staged_readouts};
use crate::view::results::render_results;

#[derive(Debug, Deserialize)]
pub struct CarryForm {
    #[serde(default)]
    pub carry: String,
}

fn html_response(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// An empty bag is something the page renders; anything else is a server fault.
fn results_or_error(markup: Markup, result: Result<(), SelectorError>) -> HttpResponse {
    match result {
        Ok(()) | Err(SelectorError::EmptyBag) => html_response(markup),
        Err(e) => {
            eprintln!("{}", json!({"handler":"results","error": e.to_string()}));
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn index(store: Data<SessionStore>) -> impl Responder {
    let model = snapshot(store.get_ref()).await;
    html_response(render_index_template(&model))
}

pub async fn recalculate(
    form: web::Form<ShotForm>,
    store: Data<SessionStore>,
) -> impl Responder {
    let (model, result) = apply_msgs(
        store.get_ref(),
        vec![Msg::StageShot(form.into_inner()), Msg::Recalculate],
    )
    .await;
    let markup = html! {
        (render_results(&model))
        (render_staged_readouts(&model.staged))
    };
    results_or_error(markup, result)
}

/// Keeps the server's staged form in step with the sliders without committing it.
pub async fn stage(form: web::Form<ShotForm>, store: Data<SessionStore>) -> impl Responder {
    let (model, _) = apply_msgs(store.get_ref(), vec![Msg::StageShot(form.into_inner())]).await;
    html_response(render_staged_readouts(&model.staged))
}

pub async fn edit_carry(
    path: web::Path<String>,
    form: web::Form<CarryForm>,
    store: Data<SessionStore>,
) -> impl Responder {
    let key = path.into_inner();
    let known = snapshot(store.get_ref()).await.bag.get(&key).is_some();
    if !known {
        let e = SelectorError::NotFound(format!("club '{key}'"));
        return HttpResponse::NotFound().json(json!({"error": e.to_string()}));
    }

    let (model, result) = apply_msgs(
        store.get_ref(),
        vec![Msg::EditCarry {
            key,
            carry: form.into_inner().carry,
        }],
    )
    .await;
    results_or_error(render_results(&model), result)
}

pub async fn toggle_editor(store: Data<SessionStore>) -> impl Responder {
    let (model, _) = apply_msgs(store.get_ref(), vec![Msg::ToggleEditor]).await;
    html_response(render_bag_editor(&model.bag, model.show_editor))
}

pub async fn recommendation(
    query: web::Query<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> impl Responder {
    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let model = snapshot(store.get_ref()).await;
    if want_json {
        HttpResponse::Ok().json(SelectionReport::from(&model))
    } else {
        html_response(render_results(&model))
    }
}

/// Mounts every selector route on `cfg`, relative to wherever the caller scopes it.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/stage", web::post().to(stage))
        .route("/recalculate", web::post().to(recalculate))
        .route("/bag/{key}", web::post().to(edit_carry))
        .route("/editor/toggle", web::post().to(toggle_editor))
        .route("/recommendation", web::get().to(recommendation))
        .route("/health", web::get().to(HttpResponse::Ok));
}
