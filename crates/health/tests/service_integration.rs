//! Integration tests for the health service.
//!
//! These tests exercise the service the way the HTTP layer does: shared
//! behind an `Arc` and checked from many threads at once.

use std::sync::Arc;
use std::thread;

use health::{HealthService, HealthStatus, ProcessHealthService};

fn create_service() -> Arc<ProcessHealthService> {
    Arc::new(ProcessHealthService::new("server-template"))
}

#[test]
fn concurrent_checks_report_the_same_instance() {
    let service = create_service();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.check())
        })
        .collect();

    for handle in handles {
        let response = handle.join().unwrap();
        assert_eq!(response.status, HealthStatus::Ok);
        assert_eq!(response.instance_id, service.instance_id());
        assert_eq!(response.service, "server-template");
    }
}

#[test]
fn service_is_usable_as_trait_object() {
    let service: Box<dyn HealthService> = Box::new(ProcessHealthService::new("boxed"));
    let response = service.check();
    assert!(response.is_healthy());
    assert_eq!(response.service, "boxed");
}

#[test]
fn every_check_produces_a_fresh_value() {
    let service = create_service();
    let mut first = service.check();
    first.service.push_str("-mutated");

    let second = service.check();
    assert_eq!(second.service, "server-template");
}
