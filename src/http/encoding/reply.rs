use url::Url;
use warp::http::header::{HeaderValue, LOCATION};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::Rejection;

use super::error::RelayRejection;

/// A `302 Found` pointing the browser at the provider.
#[derive(Debug)]
pub struct Redirect(pub Url);

impl Reply for Redirect {
    fn into_response(self) -> Response {
        match HeaderValue::from_str(self.0.as_str()) {
            Ok(location) => {
                let mut response = Response::default();
                *response.status_mut() = StatusCode::FOUND;
                response.headers_mut().insert(LOCATION, location);
                response
            }
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

pub fn accept<T, E>(result: Result<T, E>) -> Result<T, Rejection>
where
    E: Into<RelayRejection>,
{
    result.map_err(|e| warp::reject::custom(e.into()))
}

pub fn reply<T, E>(result: Result<T, E>) -> Result<Response, Rejection>
where
    T: Reply,
    E: Into<RelayRejection>,
{
    result
        .map(|t| t.into_response())
        .map_err(|e| warp::reject::custom(e.into()))
}
