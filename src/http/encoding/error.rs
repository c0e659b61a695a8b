use tracing::{event, Level};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::relay::Error;

#[derive(Debug)]
pub struct RelayRejection(pub Error);

impl warp::reject::Reject for RelayRejection {}

impl From<Error> for RelayRejection {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Every relay failure becomes a 500 with a JSON `{"error": ..}` body.
pub async fn handle_reject(err: Rejection) -> Result<impl Reply, Rejection> {
    match err.find::<RelayRejection>() {
        Some(RelayRejection(e)) => {
            event!(Level::WARN, error = %e, "Request failed");
            let body = ErrorBody {
                error: e.to_string(),
            };
            Ok(warp::reply::with_status(
                warp::reply::json(&body),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
        None => Err(err),
    }
}
