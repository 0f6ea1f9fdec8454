mod helpers;

use captive_portal_application::use_cases::StartAccessPointUseCase;
use captive_portal_domain::{AccessPointConfig, DomainError};
use helpers::MockAccessPoint;
use std::net::Ipv4Addr;
use std::sync::Arc;

#[tokio::test]
async fn test_start_returns_advertised_interface() {
    let ap = Arc::new(MockAccessPoint::new());
    let use_case = StartAccessPointUseCase::new(ap.clone());

    let iface = use_case.execute(&AccessPointConfig::default()).await.unwrap();

    assert_eq!(iface.address, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(iface.gateway, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(iface.dns, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(ap.start_count(), 1);
    assert_eq!(ap.last_ssid().as_deref(), Some("myssid"));
}

#[tokio::test]
async fn test_start_rejects_oversized_ssid_without_touching_hardware() {
    let ap = Arc::new(MockAccessPoint::new());
    let use_case = StartAccessPointUseCase::new(ap.clone());
    let config = AccessPointConfig {
        ssid: "s".repeat(33),
        ..Default::default()
    };

    let result = use_case.execute(&config).await;

    assert!(matches!(result, Err(DomainError::AccessPoint(_))));
    assert_eq!(ap.start_count(), 0);
}

#[tokio::test]
async fn test_start_propagates_driver_failure() {
    let ap = Arc::new(MockAccessPoint::failing(DomainError::AccessPoint(
        "radio busy".to_string(),
    )));
    let use_case = StartAccessPointUseCase::new(ap);

    let result = use_case.execute(&AccessPointConfig::default()).await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::AccessPoint("radio busy".to_string())
    );
}

#[tokio::test]
async fn test_start_rejects_interface_with_wrong_address() {
    let ap = Arc::new(MockAccessPoint::reporting_address(Ipv4Addr::new(192, 168, 1, 1)));
    let use_case = StartAccessPointUseCase::new(ap);

    let result = use_case.execute(&AccessPointConfig::default()).await;

    assert!(matches!(result, Err(DomainError::AccessPoint(_))));
}
