use crate::router::handle;
use crate::tests::utils::{body_string, service_with, FailingCalculator, StubCalculator};
use astra::Body;
use http::{Method, Request};
use rust_decimal_macros::dec;
use std::sync::Arc;

const AMOUNT_FORM: &str = "purchase_price=400000&down_payment_in=amount&down_payment=200000\
&mortgage_term_unit=years&mortgage_term=30&interest_rate=3.5";

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/searches")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

#[test]
fn home_page_shows_search_form() {
    let (_dir, svc) = service_with(Arc::new(FailingCalculator));

    let resp = handle(get("/"), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("action=\"/searches\""));
    assert!(body.contains("name=\"purchase_price\""));
    assert!(body.contains("name=\"down_payment_in\""));
}

#[test]
fn posting_a_search_redirects_to_its_page() {
    let (_dir, svc) = service_with(Arc::new(StubCalculator::new(dec!(898), dec!(123312))));

    let resp = handle(post_form(AMOUNT_FORM), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 302, "Should redirect after create");

    let location = resp
        .headers()
        .get("Location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/searches/"));

    let resp = handle(get(&location), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("$200000.00"));
    assert!(body.contains("$898.00"));
    assert!(body.contains("$123312.00"));
    assert!(body.contains("$323312.00"));
}

#[test]
fn validation_failure_rerenders_form() {
    let (_dir, svc) = service_with(Arc::new(StubCalculator::new(dec!(898), dec!(123312))));

    let form = "purchase_price=20&down_payment_in=amount&down_payment=10\
&mortgage_term_unit=months&mortgage_term=481&interest_rate=3.5";
    let resp = handle(post_form(form), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Mortgage term months can't be greater than 480"));
    // What the user typed is kept.
    assert!(body.contains("value=\"481\""));
}

#[test]
fn unparseable_field_rerenders_form() {
    let (_dir, svc) = service_with(Arc::new(StubCalculator::new(dec!(898), dec!(123312))));

    let form = "purchase_price=abc&down_payment=10&mortgage_term=30&interest_rate=3.5";
    let resp = handle(post_form(form), &svc).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("purchase price must be a number"));
}

#[test]
fn duplicate_post_is_a_conflict() {
    let (_dir, svc) = service_with(Arc::new(StubCalculator::new(dec!(898), dec!(123312))));

    handle(post_form(AMOUNT_FORM), &svc).expect("first create failed");
    let err = handle(post_form(AMOUNT_FORM), &svc)
        .err()
        .expect("second create should fail");

    assert_eq!(err.status(), 409);
}

#[test]
fn calculator_outage_is_bad_gateway() {
    let (_dir, svc) = service_with(Arc::new(FailingCalculator));

    let err = handle(post_form(AMOUNT_FORM), &svc)
        .err()
        .expect("create should fail without a calculator");
    assert_eq!(err.status(), 502);

    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("nothing was saved"));
}

#[test]
fn unknown_routes_and_ids_are_not_found() {
    let (_dir, svc) = service_with(Arc::new(FailingCalculator));

    for uri in ["/nope", "/searches/999", "/searches/abc"] {
        let err = handle(get(uri), &svc).err().expect("should be an error");
        assert_eq!(err.status(), 404, "{uri}");
    }
}
