//! spec §6: `/kill` sets `is_need_kill`; the actual termination is L5's job
//! (spec §4.7) and is exercised at the scheduler level, not here.

use crate::prelude::*;

#[test]
fn kill_on_an_unknown_task_is_a_400() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(12);
    let response = reqwest::blocking::Client::new()
        .post(format!("{}/kill?task_id=not-a-real-id", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn kill_on_a_new_task_flags_is_need_kill_without_changing_status() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(13);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-kill", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    let response = reqwest::blocking::Client::new()
        .post(format!("{}/kill?task_id={task_id}", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let state: serde_json::Value = reqwest::blocking::get(format!("{}/state?task_id={task_id}", server.base_url))
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(state["is_need_kill"], true);
    assert_eq!(state["status"], "new");
}
