//! Outgoing requests and incoming replies

use super::{BoardController, ScoreSlot};
use crate::core::Word;
use crate::query::{self, Request};
use crate::recommender::{Analysis, RecommenderError, RowScore};
use crate::settings::SettingsRepository;

/// A request the controller wants sent
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    /// Suggestions for the current knowledge
    Analysis { restriction: String, request: Request },
    /// Score for an entered row
    RowScore {
        attempt: usize,
        word: Word,
        request: Request,
    },
}

impl<R: SettingsRepository> BoardController<R> {
    /// Restriction string for the current store
    #[must_use]
    pub fn restriction(&self) -> String {
        query::build_restriction(&self.store)
    }

    /// Most recent accepted suggestions
    #[must_use]
    pub fn latest_analysis(&self) -> Option<&Analysis> {
        self.latest.as_ref()
    }

    /// Cached score of an entered row
    #[must_use]
    pub fn row_score(&self, attempt: usize) -> Option<RowScore> {
        match self.row_scores.get(attempt) {
            Some(ScoreSlot::Ready(score)) => Some(*score),
            _ => None,
        }
    }

    /// Whether a row score is in flight
    #[must_use]
    pub fn row_score_pending(&self, attempt: usize) -> bool {
        matches!(self.row_scores.get(attempt), Some(ScoreSlot::Pending(_)))
    }

    /// Drain queued requests
    ///
    /// An analysis request is added whenever the encoded state or the scoring
    /// settings differ from the last one sent.
    pub fn take_outgoing(&mut self) -> Vec<Outgoing> {
        let (restriction, request) = query::analysis_request(&self.store, &self.settings);
        if self.last_requested.as_ref() != Some(&request) {
            self.last_requested = Some(request.clone());
            self.outbox.push(Outgoing::Analysis {
                restriction,
                request,
            });
        }
        std::mem::take(&mut self.outbox)
    }

    /// Last analysis request handed out by [`Self::take_outgoing`]
    #[must_use]
    pub fn last_requested(&self) -> Option<&Request> {
        self.last_requested.as_ref()
    }

    fn is_current(&self, request: &Request) -> bool {
        self.last_requested.as_ref() == Some(request)
    }

    /// Accept suggestions unless they answer an older state
    ///
    /// `request` is the request the reply answers. Replies for anything but
    /// the latest request, or whose echoed restriction differs from the
    /// current one, are dropped and `false` is returned.
    pub fn accept_analysis(&mut self, request: &Request, analysis: Analysis) -> bool {
        if !self.is_current(request) {
            tracing::debug!(%request, "dropping analysis for superseded request");
            return false;
        }
        let current = self.restriction();
        if analysis.restriction_string != current {
            tracing::debug!(
                received = %analysis.restriction_string,
                %current,
                "dropping stale analysis"
            );
            return false;
        }

        tracing::debug!(total = analysis.total_words, "accepted analysis");
        self.latest = Some(analysis);
        self.last_error = None;
        true
    }

    /// Accept a row score if the row still holds the scored word
    pub fn accept_row_score(&mut self, attempt: usize, word: &Word, score: RowScore) -> bool {
        let Some(slot) = self.row_scores.get_mut(attempt) else {
            return false;
        };
        if *slot != ScoreSlot::Pending(word.clone()) {
            tracing::debug!(attempt, %word, "dropping stale row score");
            return false;
        }
        *slot = ScoreSlot::Ready(score);
        true
    }

    /// Note a failed request; previous results stay on screen
    ///
    /// Failures of superseded requests are only logged and return `false`.
    pub fn record_failure(&mut self, request: &Request, error: &RecommenderError) -> bool {
        if !self.is_current(request) {
            tracing::debug!(%request, %error, "ignoring failure of superseded request");
            return false;
        }
        tracing::warn!(%error, "recommender request failed");
        self.last_error = Some(error.to_string());
        true
    }

    /// Most recent request failure since the last accepted analysis
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Note a failed row score so the row can be scored again on re-entry
    pub fn record_row_score_failure(&mut self, attempt: usize, word: &Word, error: &RecommenderError) {
        tracing::warn!(attempt, %word, %error, "row score failed");
        if let Some(slot) = self.row_scores.get_mut(attempt) {
            if *slot == ScoreSlot::Pending(word.clone()) {
                *slot = ScoreSlot::Empty;
            }
        }
    }

    pub(super) fn queue_row_score(&mut self, attempt: usize, word: Word) {
        if !self.settings.rate_entered_words {
            return;
        }
        match &self.row_scores[attempt] {
            ScoreSlot::Pending(pending) if *pending == word => return,
            ScoreSlot::Ready(_) => return,
            _ => {}
        }

        let request = query::score_request(&self.restriction(), &word, &self.settings);
        self.row_scores[attempt] = ScoreSlot::Pending(word.clone());
        self.outbox.push(Outgoing::RowScore {
            attempt,
            word,
            request,
        });
    }
}
