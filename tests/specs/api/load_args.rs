//! spec §6: `/load-args` byte-cap boundary and the `new`-status precondition.

use crate::prelude::*;

fn create(base_url: &str) -> String {
    reqwest::blocking::Client::new()
        .post(format!("{base_url}/create?task_type=delays&user_id=u-load-args"))
        .send()
        .unwrap()
        .json()
        .unwrap()
}

#[test]
fn loading_arguments_onto_a_new_task_stores_them_and_renders_the_launcher_script() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(5);
    let task_id = create(&server.base_url);

    let response = reqwest::blocking::Client::new()
        .post(format!("{}/load-args?task_id={task_id}", server.base_url))
        .body(vec![1, 2, 3, 4])
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[test]
fn loading_arguments_twice_fails_the_new_status_precondition() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(6);
    let task_id = create(&server.base_url);
    let url = format!("{}/load-args?task_id={task_id}", server.base_url);

    let first = reqwest::blocking::Client::new().post(&url).body(vec![1]).send().unwrap();
    assert_eq!(first.status(), reqwest::StatusCode::OK);

    let second = reqwest::blocking::Client::new().post(&url).body(vec![2]).send().unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn a_body_under_the_upload_cap_is_accepted() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(7);
    let task_id = create(&server.base_url);

    // The real cap is 1 GiB; constructing a genuinely over-cap body here
    // would be wasteful, so this just pins the happy path below it and
    // leaves the boundary arithmetic to handlers_tests.rs.
    let response = reqwest::blocking::Client::new()
        .post(format!("{}/load-args?task_id={task_id}", server.base_url))
        .body(vec![0u8; 1024])
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
