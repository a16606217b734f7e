//! End-to-end scenarios against the mock provider (spec §8's literal seeds).
//! Each test drives the facades the way an application would, with no
//! provider SDK type ever appearing.

use std::collections::HashMap;

use cloudweave_contracts::control::{
    AuthenticationService, EventBusService, ObjectStoreService, QueueService, SecretsService,
    WebHostingService,
};
use cloudweave_core::models::auth::{AuthConfig, AuthorizationUrlParams};
use cloudweave_core::models::data_store::ExecuteResult;
use cloudweave_core::models::deployment::{DeployApplicationParams, ScaleParams, UpdateApplicationParams};
use cloudweave_core::models::event_bus::{Event, EventPattern, Target};
use cloudweave_core::models::object_store::{BucketOptions, PutObjectParams};
use cloudweave_core::models::provider_config::{ProviderConfig, ProviderKind};
use cloudweave_core::models::queue::{MessageBody, QueueOptions, ReceiveParams, SendMessageParams};
use cloudweave_core::models::secret::SecretValue;
use cloudweave_facade::ControlFacade;
use cloudweave_reliability::DependencyValidator;

fn mock_config() -> ProviderConfig {
    ProviderConfig::new(ProviderKind::Mock)
}

#[tokio::test]
async fn deploy_web_app_with_storage_and_db() {
    let control = ControlFacade::new(mock_config()).await.unwrap();

    let objects = control.object_store().await.unwrap();
    objects.create_bucket("my-app-assets", BucketOptions::default()).await.unwrap();
    objects
        .put_object(PutObjectParams {
            bucket: "my-app-assets".to_string(),
            key: "config.json".to_string(),
            body: br#"{"appName":"MyAwesomeApp","version":"1.0.0"}"#.to_vec(),
            content_type: Some("application/json".to_string()),
        })
        .await
        .unwrap();

    let data_store = control.data_store().await.unwrap();
    data_store
        .execute(
            "CREATE TABLE users (id SERIAL PRIMARY KEY, name VARCHAR(100), email VARCHAR(100) UNIQUE)",
            &[],
        )
        .await
        .unwrap();
    let inserted: ExecuteResult = data_store
        .execute(
            "INSERT INTO users(name,email) VALUES ($1,$2)",
            &[serde_json::json!("Alice"), serde_json::json!("alice@example.com")],
        )
        .await
        .unwrap();
    assert_eq!(inserted.rows_affected, 1);

    let web_hosting = control.web_hosting().await.unwrap();
    let deployment = web_hosting
        .deploy_application(DeployApplicationParams {
            name: "my-awesome-app".to_string(),
            image: "myorg/awesome-app:v1.0.0".to_string(),
            port: 3000,
            environment: HashMap::from([("NODE_ENV".to_string(), "production".to_string())]),
            cpu: 2,
            memory: 4096,
            min_instances: 2,
            max_instances: 10,
            tags: HashMap::new(),
        })
        .await
        .unwrap();
    assert!(deployment.url.starts_with("http://") || deployment.url.starts_with("https://"));

    web_hosting
        .scale_application(
            &deployment.id,
            ScaleParams { min_instances: 3, max_instances: 15 },
        )
        .await
        .unwrap();
    let scaled = web_hosting.get_deployment(&deployment.id).await.unwrap();
    assert_eq!((scaled.min_instances, scaled.max_instances), (3, 15));

    web_hosting
        .update_application(
            &deployment.id,
            UpdateApplicationParams {
                image: Some("myorg/awesome-app:v1.1.0".to_string()),
                environment: Some(HashMap::from([
                    ("NODE_ENV".to_string(), "production".to_string()),
                    ("FEATURE_FLAG_NEW_UI".to_string(), "true".to_string()),
                ])),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let updated = web_hosting.get_deployment(&deployment.id).await.unwrap();
    assert_eq!(updated.image, "myorg/awesome-app:v1.1.0");
    assert_eq!(updated.environment.get("FEATURE_FLAG_NEW_UI").map(String::as_str), Some("true"));
}

#[test]
fn dependency_validation_batch_flags_exactly_one_invalid_record() {
    let validator = DependencyValidator::new();
    let mut records = Vec::new();
    for i in 0..100 {
        records.push(serde_json::json!({
            "id": format!("dep-service-{i}"),
            "name": format!("service-{i}"),
            "type": "database",
            "provider": "aws",
            "region": "us-east-1",
            "status": "deployed",
            "created": "2026-01-01T00:00:00Z",
            "updated": "2026-01-01T00:00:00Z",
        }));
    }
    records[42] = serde_json::json!({
        "id": "invalid-id",
        "name": "service-42",
        "type": "database",
        "provider": "aws",
        "region": "bad-region",
        "status": "deployed",
        "created": "2026-01-01T00:00:00Z",
        "updated": "2026-01-01T00:00:00Z",
    });

    let outcome = validator.validate_batch(&records);
    assert_eq!(outcome.invalid.len(), 1);
    assert_eq!(outcome.invalid[0].index, 42);
    let paths: Vec<&str> = outcome.invalid[0].errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"/id"));
    assert!(paths.contains(&"/region"));
}

#[tokio::test]
async fn event_routing_matches_only_the_targeted_rule() {
    let world = cloudweave_mock::World::new();
    let mut factory = cloudweave_contracts::factory::ProviderFactory::new(mock_config());
    cloudweave_mock::register(&mut factory, world.clone()).unwrap();
    let control = ControlFacade::from_factory(std::sync::Arc::new(factory));
    let event_bus = control.event_bus().await.unwrap();

    event_bus.create_event_bus("app-events").await.unwrap();
    let rule = event_bus
        .put_rule(
            "app-events",
            "user-created",
            EventPattern {
                source: vec!["user-service".to_string()],
                type_: vec!["user.created".to_string()],
                data: None,
            },
        )
        .await
        .unwrap();
    event_bus
        .put_targets(
            "app-events",
            "user-created",
            vec![Target { id: "T1".to_string(), arn: "arn:mock:target/T1".to_string() }],
        )
        .await
        .unwrap();

    let matching = Event {
        source: "user-service".to_string(),
        r#type: "user.created".to_string(),
        data: HashMap::from([("userId".to_string(), serde_json::json!("123"))]),
    };
    let non_matching = Event {
        source: "billing".to_string(),
        r#type: "user.created".to_string(),
        data: HashMap::new(),
    };

    let matching_id = event_bus.publish_event("app-events", matching.clone()).await.unwrap();
    let non_matching_id = event_bus.publish_event("app-events", non_matching.clone()).await.unwrap();
    assert!(!matching_id.is_empty());
    assert_ne!(matching_id, non_matching_id);

    assert!(rule.event_pattern.matches(&matching));
    assert!(!rule.event_pattern.matches(&non_matching));
    let targets = event_bus.list_rules("app-events").await.unwrap()[0].targets.clone();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].id, "T1");

    let deliveries = world.event_deliveries.lock().await;
    let t1_deliveries = deliveries.get("T1").cloned().unwrap_or_default();
    assert_eq!(t1_deliveries.len(), 1);
    assert_eq!(t1_deliveries[0].source, matching.source);
}

#[tokio::test]
async fn secret_rotation_invariant_holds_under_the_cache() {
    let factory = std::sync::Arc::new(cloudweave_facade::build_factory(mock_config()).await.unwrap());
    let control = ControlFacade::from_factory(factory.clone());
    let runtime = cloudweave_facade::RuntimeFacade::from_factory(factory);

    let secrets = control.secrets().await.unwrap();
    secrets.create_secret("db-password", SecretValue::Text("p0".to_string())).await.unwrap();
    secrets.update_secret("db-password", SecretValue::Text("p1".to_string())).await.unwrap();

    let listed = secrets.list_secrets().await.unwrap();
    let entry = listed.iter().find(|s| s.name == "db-password").unwrap();
    assert!(entry.version > 1);

    let value = secrets.get_secret_value("db-password").await.unwrap();
    assert!(matches!(value, SecretValue::Text(ref v) if v == "p1"));

    let secrets_client = runtime.secrets().await.unwrap();
    let first = secrets_client.get_secret_value("db-password").await.unwrap();
    let second = secrets_client.get_secret_value("db-password").await.unwrap();
    assert!(matches!((first, second), (SecretValue::Text(a), SecretValue::Text(b)) if a == b));
}

#[tokio::test]
async fn fifo_queue_preserves_group_order_while_standard_queue_does_not_promise_it() {
    let control = ControlFacade::new(mock_config()).await.unwrap();
    let queue = control.queue().await.unwrap();

    queue.create_queue("orders.fifo", QueueOptions { fifo: true, ..Default::default() }).await.unwrap();
    for body in ["A", "B", "C"] {
        queue
            .send_message(
                "orders.fifo",
                SendMessageParams {
                    body: MessageBody::Text(body.to_string()),
                    attributes: HashMap::new(),
                    deduplication_id: Some(format!("dedup-{body}")),
                    group_id: Some("group-1".to_string()),
                },
            )
            .await
            .unwrap();
    }
    let received = queue
        .receive_messages("orders.fifo", ReceiveParams { max_messages: 3, wait_time_seconds: 0 })
        .await
        .unwrap();
    let bodies: Vec<String> = received
        .iter()
        .map(|m| match &m.body {
            MessageBody::Text(t) => t.clone(),
            MessageBody::Structured(v) => v.to_string(),
        })
        .collect();
    assert_eq!(bodies, vec!["A", "B", "C"]);

    queue.create_queue("orders-standard", QueueOptions::default()).await.unwrap();
    for body in ["A", "B", "C"] {
        queue
            .send_message(
                "orders-standard",
                SendMessageParams {
                    body: MessageBody::Text(body.to_string()),
                    attributes: HashMap::new(),
                    deduplication_id: None,
                    group_id: None,
                },
            )
            .await
            .unwrap();
    }
    let received_standard = queue
        .receive_messages("orders-standard", ReceiveParams { max_messages: 3, wait_time_seconds: 0 })
        .await
        .unwrap();
    let mut standard_bodies: Vec<String> = received_standard
        .iter()
        .map(|m| match &m.body {
            MessageBody::Text(t) => t.clone(),
            MessageBody::Structured(v) => v.to_string(),
        })
        .collect();
    standard_bodies.sort();
    assert_eq!(standard_bodies, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn auth_token_lifecycle_rejects_a_tampered_access_token() {
    let control = ControlFacade::new(mock_config()).await.unwrap();
    let auth = control.authentication().await.unwrap();

    auth.configure(AuthConfig {
        client_id: "client-1".to_string(),
        client_secret: None,
        issuer: "https://issuer.example".to_string(),
        role_claim: None,
    })
    .await
    .unwrap();

    let url = auth.get_authorization_url(AuthorizationUrlParams {
        redirect_uri: "https://app.example/callback".to_string(),
        scopes: vec!["openid".to_string(), "email".to_string()],
        state: "s".to_string(),
    });
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id"));
    assert!(url.contains("redirect_uri"));
    assert!(url.contains("scope=openid+email") || url.contains("scope=openid%20email") || url.contains("scope=openid email"));
    assert!(url.contains("state=s"));

    let err = auth
        .validate_token("tampered.not-a-real.token")
        .await
        .expect_err("a tampered token must not validate");
    assert_eq!(err.kind, cloudweave_core::ErrorKind::Authentication);
}
