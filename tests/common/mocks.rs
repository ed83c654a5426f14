use async_trait::async_trait;
use dream_relay::{Error, Result, interpreter::InterpretationService};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
    Panic(String),
}

/// In-process interpretation service that records every call.
#[derive(Debug)]
pub struct MockInterpreter {
    reply: Reply,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

impl MockInterpreter {
    fn with_reply(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Self::with_reply(Reply::Fail(message.into()))
    }

    pub fn panicking(message: impl Into<String>) -> Arc<Self> {
        Self::with_reply(Reply::Panic(message.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterpretationService for MockInterpreter {
    async fn interpret(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());

        match &self.reply {
            Reply::Text(reply) => Ok(reply.clone()),
            Reply::Fail(message) => Err(Error::downstream(message.clone())),
            Reply::Panic(message) => panic!("{}", message),
        }
    }
}
