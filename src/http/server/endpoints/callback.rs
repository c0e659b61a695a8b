use std::sync::Arc;

use warp::Filter;

use crate::config::Presentation;
use crate::http::encoding::reply;
use crate::http::pages;
use crate::relay::{CallbackParams, OAuthRelay};

pub fn callback_endpoint(
    relay: Arc<OAuthRelay>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_relay = warp::any().map(move || relay.clone());

    warp::path!("callback")
        .and(warp::get())
        .and(with_relay)
        .and(warp::query::<CallbackParams>())
        .and_then(|relay: Arc<OAuthRelay>, params: CallbackParams| async move {
            use warp::Reply;

            let grant = reply::accept(relay.exchange_code(params).await)?;
            let response = match relay.config().presentation {
                Presentation::Page => warp::reply::html(pages::success(&grant)).into_response(),
                Presentation::Text => pages::success_text(&grant).into_response(),
            };
            Ok::<_, warp::Rejection>(response)
        })
}
