//! spec §6: `GET /state`.

use crate::prelude::*;

#[test]
fn state_for_an_unknown_task_id_is_a_400() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(10);
    let response = reqwest::blocking::get(format!("{}/state?task_id=not-a-real-id", server.base_url)).unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn state_for_a_fresh_task_reflects_new_with_no_pid() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(11);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-state", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    let state: serde_json::Value = reqwest::blocking::get(format!("{}/state?task_id={task_id}", server.base_url))
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(state["status"], "new");
    assert_eq!(state["pid"], -1);
    assert_eq!(state["is_accepted"], false);
}
