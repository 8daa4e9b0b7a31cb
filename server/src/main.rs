mod routes;

use std::net::SocketAddr;

/// Path where network files are stored.
/// Must end with `/`, or all subdirectory names will start with `/`.
pub const NETWORKS_PATH: &str = "../networks/";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addrstr = "127.0.0.1:8000";
    let addr: SocketAddr = match addrstr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Cannot parse the address {addrstr}: {e}");
            return;
        }
    };
    let api = routes::api(NETWORKS_PATH.to_string());

    let server = warp::serve(api).run(addr);
    server.await;
}
