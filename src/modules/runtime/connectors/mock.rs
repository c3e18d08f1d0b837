//! In-memory connector for tests

use async_trait::async_trait;
use bindcheck_core::{BindcheckError, ConnectionCredentials};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::{Connector, Session};

/// How the mock behaves once connected
#[derive(Debug, Clone)]
pub(crate) enum MockBehavior {
    /// Answer every query with this value
    Value(&'static str),
    /// Answer with no row
    NoRow,
    /// Refuse to connect
    RefuseConnect,
    /// Fail the query
    FailQuery,
    /// Answer the query, then fail on close
    FailClose,
}

/// Counts opened and closed sessions and records the credentials used
pub(crate) struct MockConnector {
    behavior: MockBehavior,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    seen: Mutex<Vec<ConnectionCredentials>>,
}

impl MockConnector {
    pub(crate) fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn seen(&self) -> Vec<ConnectionCredentials> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(
        &self,
        credentials: &ConnectionCredentials,
    ) -> Result<Box<dyn Session>, BindcheckError> {
        self.seen.lock().unwrap().push(credentials.clone());
        if let MockBehavior::RefuseConnect = self.behavior {
            return Err(BindcheckError::Database(format!(
                "connection refused by {}",
                credentials.address()
            )));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            behavior: self.behavior.clone(),
            closed: self.closed.clone(),
        }))
    }

    fn connector_type(&self) -> &'static str {
        "mock"
    }
}

struct MockSession {
    behavior: MockBehavior,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl Session for MockSession {
    async fn query_scalar(&mut self, _statement: &str) -> Result<Option<String>, BindcheckError> {
        match self.behavior {
            MockBehavior::Value(v) => Ok(Some(v.to_string())),
            MockBehavior::FailClose => Ok(Some("2024-05-01 12:30:00".to_string())),
            MockBehavior::NoRow => Ok(None),
            MockBehavior::FailQuery => Err(BindcheckError::QueryExecution(
                "table does not exist".to_string(),
            )),
            MockBehavior::RefuseConnect => unreachable!("never connected"),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), BindcheckError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::FailClose => {
                Err(BindcheckError::Database("connection reset".to_string()))
            }
            _ => Ok(()),
        }
    }
}
