//! spec §6: `GET /ping` liveness string.

use crate::prelude::*;

#[test]
fn ping_responds_while_the_server_is_up() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(1);
    let body = reqwest::blocking::get(format!("{}/ping", server.base_url)).unwrap().text().unwrap();
    assert!(!body.is_empty());
}
