//! Test doubles shared by the stonerbot integration tests.
//!
//! [`MockBot`] records every sent reply; [`StubDirectory`] returns canned results and counts calls,
//! so tests can assert that e.g. `/help` never reaches the directory.

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bot_core::{Bot, Chat, Location, Message, Result, User};
use chrono::Utc;
use leafly_client::{Directory, LeaflyError, StatusCode};

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// The only reply sent; panics if there were zero or several.
    pub fn single_reply(&self) -> String {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one reply, got {:?}", sent);
        sent[0].text.clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Canned strain outcome for [`StubDirectory`].
#[derive(Clone)]
pub enum StrainOutcome {
    Found(Vec<String>),
    /// Simulates a 5xx from the directory.
    Unavailable,
}

pub struct StubDirectory {
    strains: StrainOutcome,
    stores: Vec<String>,
    strain_queries: Mutex<Vec<String>>,
    location_calls: AtomicUsize,
}

impl StubDirectory {
    pub fn new(strains: StrainOutcome, stores: Vec<String>) -> Arc<Self> {
        Arc::new(Self {
            strains,
            stores,
            strain_queries: Mutex::new(Vec::new()),
            location_calls: AtomicUsize::new(0),
        })
    }

    pub fn strain_queries(&self) -> Vec<String> {
        self.strain_queries.lock().unwrap().clone()
    }

    pub fn location_calls(&self) -> usize {
        self.location_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.strain_queries().len() + self.location_calls()
    }
}

#[async_trait]
impl Directory for StubDirectory {
    async fn search_strains(&self, text: &str) -> std::result::Result<Vec<String>, LeaflyError> {
        self.strain_queries.lock().unwrap().push(text.to_string());
        match &self.strains {
            StrainOutcome::Found(strains) => Ok(strains.clone()),
            StrainOutcome::Unavailable => Err(LeaflyError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: String::new(),
            }),
        }
    }

    async fn search_locations(&self, _latitude: f64, _longitude: f64) -> Vec<String> {
        self.location_calls.fetch_add(1, Ordering::SeqCst);
        self.stores.clone()
    }
}

fn user() -> User {
    User {
        id: 123,
        username: Some("tester".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn chat() -> Chat {
    Chat {
        id: 456,
        chat_type: "private".to_string(),
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user(),
        chat: chat(),
        content: content.to_string(),
        location: None,
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

pub fn location_message(latitude: f64, longitude: f64) -> Message {
    Message {
        id: "2".to_string(),
        user: user(),
        chat: chat(),
        content: String::new(),
        location: Some(Location {
            latitude,
            longitude,
        }),
        message_type: "location".to_string(),
        created_at: Utc::now(),
    }
}
