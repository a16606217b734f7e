//! The mock provider's shared in-memory state (spec §4.8).
//!
//! One [`World`] per facade instance — "no persistent state across facade
//! instances" is enforced simply by never sharing a `World` across
//! [`crate::MockProvider`] constructions. Every map is behind its own
//! `tokio::sync::Mutex` rather than one big lock, so a slow `put_object`
//! never blocks a concurrent `get_secret_value`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cloudweave_core::models::auth::{AuthConfig, TokenClaims};
use cloudweave_core::models::cache_cluster::CacheCluster;
use cloudweave_core::models::configuration::ConfigurationProfile;
use cloudweave_core::models::container_repo::{ContainerImage, LifecyclePolicy, Repository};
use cloudweave_core::models::deployment::Deployment;
use cloudweave_core::models::document::Document;
use cloudweave_core::models::event_bus::{Event, EventBus};
use cloudweave_core::models::function::{EventSourceMapping, FunctionUrlConfig, ServerlessFunction};
use cloudweave_core::models::job::{Job, ScheduledJob};
use cloudweave_core::models::notification::Topic;
use cloudweave_core::models::object_store::{BucketOptions, ObjectData};
use cloudweave_core::models::queue::{Message, Queue, QueueOptions};
use cloudweave_core::models::secret::{Secret, SecretValue};
use tokio::sync::Mutex;

/// Generates opaque identifiers shaped `mock-<service>-<n>` (spec §4.8).
#[derive(Default)]
pub struct IdGen {
    counters: Mutex<HashMap<&'static str, u64>>,
}

impl IdGen {
    pub async fn next(&self, service: &'static str) -> String {
        let mut counters = self.counters.lock().await;
        let counter = counters.entry(service).or_insert(0);
        *counter += 1;
        format!("mock-{service}-{}", *counter)
    }
}

/// Optional per-call latency injection, used by benchmarks and flakiness
/// tests (spec §4.8). Zero by default.
#[derive(Clone, Copy, Default)]
pub struct LatencyInjection {
    pub millis: u64,
}

impl LatencyInjection {
    pub async fn apply(self) {
        if self.millis > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.millis)).await;
        }
    }
}

#[derive(Default)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: Option<std::time::Instant>,
}

#[derive(Default)]
pub struct World {
    pub ids: IdGen,
    pub latency: LatencyInjection,
    /// Seed for the batch-simulation RNG (spec §4.8) — injectable for
    /// deterministic tests.
    pub rng_seed: AtomicU64,

    pub deployments: Mutex<HashMap<String, Deployment>>,

    pub functions: Mutex<HashMap<String, ServerlessFunction>>,
    pub event_source_mappings: Mutex<HashMap<String, EventSourceMapping>>,
    pub function_urls: Mutex<HashMap<String, FunctionUrlConfig>>,

    pub jobs: Mutex<HashMap<String, Job>>,
    pub scheduled_jobs: Mutex<HashMap<String, ScheduledJob>>,

    pub queues: Mutex<HashMap<String, Queue>>,
    pub queue_options: Mutex<HashMap<String, QueueOptions>>,
    pub messages: Mutex<HashMap<String, VecDeque<Message>>>,

    pub event_buses: Mutex<HashMap<String, EventBus>>,
    /// Per-target delivery record, keyed by target id, so a publish can be
    /// asserted to have actually reached the rule's targets.
    pub event_deliveries: Mutex<HashMap<String, Vec<Event>>>,

    pub secrets: Mutex<HashMap<String, Secret>>,
    pub secret_values: Mutex<HashMap<String, SecretValue>>,
    pub secrets_pending_deletion: Mutex<HashSet<String>>,

    pub config_profiles: Mutex<HashMap<(String, String), ConfigurationProfile>>,

    pub topics: Mutex<HashMap<String, Topic>>,

    pub collections: Mutex<HashSet<String>>,
    pub documents: Mutex<HashMap<(String, String), Document>>,

    pub tables: Mutex<HashMap<String, String>>,
    pub rows: Mutex<HashMap<String, HashMap<String, serde_json::Value>>>,
    pub migrations_applied: Mutex<HashSet<u32>>,

    pub buckets: Mutex<HashMap<String, BucketOptions>>,
    pub objects: Mutex<HashMap<(String, String), ObjectData>>,

    pub auth_config: Mutex<Option<AuthConfig>>,
    pub issued_tokens: Mutex<HashMap<String, TokenClaims>>,
    pub users: Mutex<HashMap<String, HashSet<String>>>,

    pub cache_clusters: Mutex<HashMap<String, CacheCluster>>,
    pub cache_kv: Mutex<HashMap<(String, String), CacheEntry>>,

    pub repositories: Mutex<HashMap<String, Repository>>,
    pub lifecycle_policies: Mutex<HashMap<String, LifecyclePolicy>>,
    pub images: Mutex<HashMap<String, Vec<ContainerImage>>>,
}

impl World {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_latency(millis: u64) -> Arc<Self> {
        let world = Self {
            latency: LatencyInjection { millis },
            ..Default::default()
        };
        Arc::new(world)
    }

    pub fn with_seed(seed: u64) -> Arc<Self> {
        let world = Self {
            rng_seed: AtomicU64::new(seed),
            ..Default::default()
        };
        Arc::new(world)
    }

    pub fn seed(&self) -> u64 {
        self.rng_seed.load(Ordering::Relaxed)
    }
}
