//! spec §6: `/run` requires a loaded, still-`new` task.

use crate::prelude::*;

fn create(base_url: &str) -> String {
    reqwest::blocking::Client::new()
        .post(format!("{base_url}/create?task_type=delays&user_id=u-run"))
        .send()
        .unwrap()
        .json()
        .unwrap()
}

#[test]
fn run_without_loaded_arguments_fails_the_precondition() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(8);
    let task_id = create(&server.base_url);

    let response = reqwest::blocking::Client::new()
        .post(format!("{}/run?task_id={task_id}", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn run_after_load_args_moves_the_task_to_ready() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(9);
    let task_id = create(&server.base_url);

    let loaded = reqwest::blocking::Client::new()
        .post(format!("{}/load-args?task_id={task_id}", server.base_url))
        .body(vec![1, 2, 3])
        .send()
        .unwrap();
    assert_eq!(loaded.status(), reqwest::StatusCode::OK);

    let run = reqwest::blocking::Client::new()
        .post(format!("{}/run?task_id={task_id}", server.base_url))
        .send()
        .unwrap();
    assert_eq!(run.status(), reqwest::StatusCode::OK);

    let state: serde_json::Value = reqwest::blocking::get(format!("{}/state?task_id={task_id}", server.base_url))
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(state["status"], "ready");
}
