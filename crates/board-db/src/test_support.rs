use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use board_types::models::Message;

use crate::MessageStore;

pub fn refused() -> sqlx::Error {
    sqlx::Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
}

/// Store whose ping and schema outcomes are scripted up front. Records the
/// order of calls so startup sequencing can be asserted.
pub struct ScriptedStore {
    pings: Mutex<VecDeque<bool>>,
    ping_default: bool,
    schema_ok: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedStore {
    /// `pings` are consumed in order; once exhausted every ping returns
    /// `ping_default`.
    pub fn new(pings: &[bool], ping_default: bool) -> Self {
        Self {
            pings: Mutex::new(pings.iter().copied().collect()),
            ping_default,
            schema_ok: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_failing_schema(mut self) -> Self {
        self.schema_ok = false;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ping_count(&self) -> usize {
        self.calls().iter().filter(|c| **c == "ping").count()
    }
}

impl MessageStore for ScriptedStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push("ping");
        let ok = self.pings.lock().unwrap().pop_front().unwrap_or(self.ping_default);
        if ok { Ok(()) } else { Err(refused()) }
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push("ensure_schema");
        if self.schema_ok {
            Ok(())
        } else {
            Err(sqlx::Error::Protocol("permission denied for schema public".into()))
        }
    }

    async fn list_messages(&self) -> Result<Vec<Message>, sqlx::Error> {
        Ok(Vec::new())
    }

    async fn insert_message(&self, _content: &str) -> Result<Message, sqlx::Error> {
        Err(refused())
    }
}
