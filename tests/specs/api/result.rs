//! spec §6: `GET /result` requires `finished` with the output file present.
//! Driving a task there needs the GPU worker lifecycle (spec §4.6), which is
//! out of scope for these HTTP-only specs; here we only pin the precondition
//! rejection for tasks that never reach `finished`.

use crate::prelude::*;

#[test]
fn result_before_the_task_finishes_fails_the_precondition() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(2);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-result", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    let response = reqwest::blocking::get(format!("{}/result?task_id={task_id}", server.base_url)).unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn result_for_an_unknown_task_is_a_400() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(3);
    let response = reqwest::blocking::get(format!("{}/result?task_id=not-a-real-id", server.base_url)).unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
