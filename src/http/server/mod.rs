use std::net::SocketAddr;
use std::sync::Arc;

use warp::Filter;

use crate::relay::OAuthRelay;

mod endpoints;

use endpoints::{callback::callback_endpoint, login::login_endpoint};

use super::encoding::error::handle_reject;

#[derive(Debug)]
pub struct Server {
    relay: Arc<OAuthRelay>,
}

impl Server {
    pub fn new(relay: Arc<OAuthRelay>) -> Self {
        Self {
            relay: Arc::clone(&relay),
        }
    }

    pub fn routes(
        &self,
    ) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        login_endpoint(self.relay.clone())
            .or(callback_endpoint(self.relay.clone()))
            .recover(handle_reject)
            .with(warp::log("http-api"))
    }

    pub async fn serve(self, addr: SocketAddr) {
        let routes = self.routes();
        tracing::info!(%addr, "Listening");
        warp::serve(routes).run(addr).await;
    }
}
