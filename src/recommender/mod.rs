//! Recommender service access
//!
//! `RecommenderClient` performs the HTTP calls. `Dispatcher` runs them on a
//! background runtime and hands replies back over a channel so the terminal
//! loop never blocks on the network.

mod client;
mod types;

pub use client::{DEFAULT_SERVER, RecommenderClient, RecommenderError};
pub use types::{Analysis, KnownPosition, RowScore, WordScore};

use crate::core::Word;
use crate::query::Request;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tokio::runtime::{Builder, Runtime};

/// A finished background request
#[derive(Debug)]
pub enum Reply {
    Analysis {
        request: Request,
        result: Result<Analysis, RecommenderError>,
    },
    RowScore {
        attempt: usize,
        word: Word,
        result: Result<RowScore, RecommenderError>,
    },
}

/// Runs recommender requests off the UI thread
pub struct Dispatcher {
    client: RecommenderClient,
    runtime: Runtime,
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
}

impl Dispatcher {
    /// Start a small runtime for `client`
    ///
    /// # Errors
    /// Returns an error if the runtime cannot be created.
    pub fn new(client: RecommenderClient) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("solvle-http")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            client,
            runtime,
            tx,
            rx,
        })
    }

    #[must_use]
    pub fn client(&self) -> &RecommenderClient {
        &self.client
    }

    pub fn request_analysis(&self, request: Request) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.analyze(&request).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(Reply::Analysis { request, result });
        });
    }

    pub fn request_row_score(&self, attempt: usize, word: Word, request: Request) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.score(&request).await;
            let _ = tx.send(Reply::RowScore {
                attempt,
                word,
                result,
            });
        });
    }

    /// Next finished reply, if any
    #[must_use]
    pub fn try_recv(&self) -> Option<Reply> {
        match self.rx.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
