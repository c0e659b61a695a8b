use std::sync::Arc;

use warp::Filter;

use crate::core::types::Environment;
use crate::http::encoding::{reply::{self, Redirect}, LoginForm};
use crate::http::pages;
use crate::relay::OAuthRelay;

fn redirect(relay: &OAuthRelay, form: LoginForm) -> Result<warp::reply::Response, warp::Rejection> {
    let env = Environment::from_selection(form.sf_env.as_deref());
    reply::reply(relay.authorization_url(env).map(Redirect))
}

pub fn login_endpoint(
    relay: Arc<OAuthRelay>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_relay = warp::any().map(move || relay.clone());

    // Without a selection the landing page is shown; with one, the browser
    // goes straight to the provider.
    let index = warp::path::end()
        .and(warp::get())
        .and(with_relay.clone())
        .and(warp::query::<LoginForm>())
        .and_then(|relay: Arc<OAuthRelay>, form: LoginForm| async move {
            use warp::Reply;

            match form.sf_env {
                Some(_) => redirect(&relay, form),
                None => Ok(warp::reply::html(pages::index()).into_response()),
            }
        });

    let login = warp::path!("login")
        .and(warp::post())
        .and(with_relay.clone())
        .and(warp::body::form::<LoginForm>())
        .and_then(|relay: Arc<OAuthRelay>, form: LoginForm| async move {
            redirect(&relay, form)
        });

    index.or(login)
}
