//! spec §6: `/accept` requires a terminal status with a result file present.

use crate::prelude::*;

#[test]
fn accept_on_a_non_terminal_task_fails_the_precondition() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(14);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-accept", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    let response = reqwest::blocking::Client::new()
        .post(format!("{}/accept?task_id={task_id}", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn accept_on_an_unknown_task_is_a_400() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(15);
    let response = reqwest::blocking::Client::new()
        .post(format!("{}/accept?task_id=not-a-real-id", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
