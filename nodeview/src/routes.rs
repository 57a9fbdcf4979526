use crate::handlers::{self, StatusPage};
use tracing::info;
use warp::{Filter, Rejection, Reply};

/// `GET /` and `GET /health` (HEAD too), with access logging.
pub fn routes(page: StatusPage) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let page_filter = warp::any().map(move || page.clone());

    let index = warp::path::end()
        .and(get_or_head())
        .and(page_filter)
        .and_then(handlers::status_page);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(get_or_head())
        .and_then(handlers::health);

    health.or(index).with(warp::log::custom(log_request))
}

fn get_or_head() -> impl Filter<Extract = (), Error = Rejection> + Copy {
    warp::get().or(warp::head()).unify()
}

fn log_request(request: warp::log::Info<'_>) {
    info!(
        target: "nodeview::access",
        "{} {} {} {:?}",
        request.method(),
        request.path(),
        request.status().as_u16(),
        request.elapsed()
    );
}
