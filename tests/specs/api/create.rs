//! spec §6/§8: `/create` and the per-user task cap boundary.

use crate::prelude::*;

fn create(base_url: &str, user_id: &str) -> reqwest::blocking::Response {
    reqwest::blocking::Client::new()
        .post(format!("{base_url}/create?task_type=delays&user_id={user_id}"))
        .send()
        .unwrap()
}

#[test]
fn create_returns_a_task_id_as_a_json_string() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(2);
    let response = create(&server.base_url, "u-create");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let task_id: String = response.json().unwrap();
    assert!(!task_id.is_empty());
}

#[test]
fn an_unknown_task_type_is_a_precondition_error() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    let server = ApiServer::start(3);
    let response = reqwest::blocking::Client::new()
        .post(format!("{}/create?task_type=not-a-type&user_id=u1", server.base_url))
        .send()
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test]
fn the_nth_plus_one_create_past_the_per_user_cap_is_rate_limited() {
    if !redis_is_reachable() {
        eprintln!("skipping: no reachable Redis at REDIS_HOST/REDIS_PORT");
        return;
    }
    // gst-api's default cap is 200; rather than pay for 200 real creates,
    // this spec asserts the boundary condition in isolation by round-
    // tripping many creates for a dedicated user and checking that one of
    // them, and only one, is ever the first 429 — i.e. the cap is strict
    // and consistent under the binary's real (not mocked) enforcement.
    let server = ApiServer::start(4);
    let mut first_429_at = None;
    for n in 1..=205 {
        let response = create(&server.base_url, "u-cap");
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            first_429_at = Some(n);
            break;
        }
    }
    assert_eq!(first_429_at, Some(201), "the 201st create for one user should be the first rejection");
}
