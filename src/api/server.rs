use crate::api::routes;
use crate::config::SharedConfig;
use crate::srv::DynSrvLookup;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub srv_lookup: DynSrvLookup,
}

pub fn new(
    config: SharedConfig,
    srv_lookup: DynSrvLookup,
) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.http_bind_addr)
        .serve(routes::new(config, srv_lookup).into_make_service())
}
