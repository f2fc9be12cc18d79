//! spec §6/§4.2: `GET /log` returns the append-only task log.

use crate::prelude::*;

#[test]
fn log_for_a_freshly_created_task_mentions_creation() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(0);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-log", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    let log = reqwest::blocking::get(format!("{}/log?task_id={task_id}", server.base_url))
        .unwrap()
        .text()
        .unwrap();
    assert!(log.contains("Task was created"), "log was: {log}");
}

#[test]
fn load_args_appends_a_line_to_the_existing_log() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(1);
    let task_id: String = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=delays&user_id=u-log2", server.base_url))
        .send()
        .unwrap()
        .json()
        .unwrap();

    reqwest::blocking::Client::new()
        .post(format!("{}/load-args?task_id={task_id}", server.base_url))
        .body(vec![9, 9])
        .send()
        .unwrap();

    let log = reqwest::blocking::get(format!("{}/log?task_id={task_id}", server.base_url))
        .unwrap()
        .text()
        .unwrap();
    assert!(log.contains("Task was created"), "log was: {log}");
    assert!(log.contains("Arguments were loaded"), "log was: {log}");
}
