#[path = "common/mod.rs"]
mod common;

use common::{Backend, Recorded, spawn_backend};
use coverdesk::{
    Collection, CoverdeskError, EntityKind, FormBuffer, HttpApi, InsuranceApi, PaymentMethod,
    PolicyType, Session,
};
use serde_json::json;

#[tokio::test]
async fn test_list_parses_collection_in_server_order() {
    let backend = Backend::default();
    backend.serve_json(
        "policy",
        r#"[
            {"id": 5, "customerId": 1, "policyType": "AUTO", "premium": 500, "policyLimit": 25000.0},
            {"id": 2, "customerId": 1, "policyType": "HOME", "premium": "750.25"}
        ]"#,
    );
    let base = spawn_backend(backend.clone()).await;
    let api = HttpApi::new(&base, None).unwrap();

    let collection = api.list(EntityKind::Policy).await.unwrap();

    let Collection::Policies(policies) = collection else {
        panic!("expected policies, got {:?}", collection);
    };
    assert_eq!(policies.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5, 2]);
    assert_eq!(policies[0].policy_type, PolicyType::Auto);
    assert_eq!(policies[0].premium.to_string(), "500");
    assert_eq!(
        policies[0].policy_limit.as_ref().map(|l| l.to_string()),
        Some("25000.0".to_string())
    );
    assert_eq!(policies[1].premium.to_string(), "750.25");
    assert_eq!(policies[1].policy_limit, None);
    assert_eq!(
        backend.requests(),
        vec![Recorded {
            method: "GET",
            path: "/api/policy".to_string(),
            body: None,
        }]
    );
}

#[tokio::test]
async fn test_list_empty_collection() {
    let base = spawn_backend(Backend::default()).await;
    let api = HttpApi::new(&base, None).unwrap();

    let collection = api.list(EntityKind::Claim).await.unwrap();
    assert_eq!(collection, Collection::Claims(vec![]));
}

#[tokio::test]
async fn test_list_error_status() {
    let backend = Backend::default();
    backend.fail("customer");
    let base = spawn_backend(backend).await;
    let api = HttpApi::new(&base, None).unwrap();

    let result = api.list(EntityKind::Customer).await;
    assert!(matches!(result, Err(CoverdeskError::Status(500))));
}

#[tokio::test]
async fn test_list_malformed_body() {
    let backend = Backend::default();
    backend.serve_json("payment", r#"{"not": "an array"}"#);
    let base = spawn_backend(backend).await;
    let api = HttpApi::new(&base, None).unwrap();

    let result = api.list(EntityKind::Payment).await;
    assert!(matches!(result, Err(CoverdeskError::Json(_))));
}

#[tokio::test]
async fn test_create_posts_string_values() {
    let backend = Backend::default();
    let base = spawn_backend(backend.clone()).await;
    let api = HttpApi::new(&base, None).unwrap();
    let form = FormBuffer::with_values(
        EntityKind::Claim,
        &[
            ("policyId", "12"),
            ("claimAmount", "1999.99"),
            ("incidentDate", "2024-02-29"),
        ],
    )
    .unwrap();

    let text = api.create(&form).await.unwrap();

    assert_eq!(text, "Claim created successfully");
    assert_eq!(
        backend.requests(),
        vec![Recorded {
            method: "POST",
            path: "/api/claim".to_string(),
            body: Some(json!({
                "policyId": "12",
                "claimAmount": "1999.99",
                "incidentDate": "2024-02-29"
            })),
        }]
    );
}

#[tokio::test]
async fn test_delete_path_and_text() {
    let backend = Backend::default();
    let base = spawn_backend(backend.clone()).await;
    let api = HttpApi::new(&format!("{}/", base), None).unwrap();

    let text = api.delete(EntityKind::Policy, 42).await.unwrap();

    assert_eq!(text, "Policy deleted successfully");
    assert_eq!(backend.requests()[0].method, "DELETE");
    assert_eq!(backend.requests()[0].path, "/api/policy/42");
}

#[tokio::test]
async fn test_delete_payment_is_refused_locally() {
    let backend = Backend::default();
    let base = spawn_backend(backend.clone()).await;
    let api = HttpApi::new(&base, None).unwrap();

    let result = api.delete(EntityKind::Payment, 1).await;

    assert!(matches!(
        result,
        Err(CoverdeskError::NotDeletable(EntityKind::Payment))
    ));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Bind and drop a listener to get a port nothing is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpApi::new(&format!("http://{}/api", addr), None).unwrap();

    let result = api.list(EntityKind::Customer).await;
    assert!(matches!(result, Err(CoverdeskError::Http(_))));
}

#[tokio::test]
async fn test_session_over_http() {
    let backend = Backend::default();
    backend.serve_json(
        "payment",
        r#"[{"id": 1, "customerId": 4, "amount": 250, "paymentMethod": "UPI",
             "transactionId": "TXN-1", "status": "SUCCESS"}]"#,
    );
    let base = spawn_backend(backend.clone()).await;
    let session = Session::new(HttpApi::new(&base, None).unwrap(), EntityKind::Payment);

    session.start().await;
    session.update(|m| {
        let form = m.form_mut(EntityKind::Payment);
        form.set("customerId", "4").unwrap();
        form.set("amount", "250").unwrap();
        form.set("paymentMethod", "UPI").unwrap();
    });
    assert!(session.create(EntityKind::Payment).await);

    let methods: Vec<&str> = backend
        .requests()
        .iter()
        .map(|r| r.method)
        .collect();
    assert_eq!(methods, vec!["GET", "POST", "GET"]);
    assert_eq!(
        session.read(|m| m.message().map(|msg| msg.text.clone())),
        Some("Payment processed successfully".to_string())
    );
    assert_eq!(
        session.read(|m| m.payments()[0].payment_method.clone()),
        PaymentMethod::Upi
    );
}

#[tokio::test]
async fn test_session_list_failure_over_http() {
    let backend = Backend::default();
    backend.fail("policy");
    let base = spawn_backend(backend).await;
    let session = Session::new(HttpApi::new(&base, None).unwrap(), EntityKind::Customer);

    session.activate(EntityKind::Policy).await;

    assert_eq!(
        session.read(|m| m.message().map(|msg| msg.text.clone())),
        Some("Error loading policies".to_string())
    );
}
