//! Booking workflow.
//!
//! Orchestrates draft selection, submission to the remote service, and
//! recording the result into the persistent booking list.
//!
//! State per attempt: `Idle -> DraftSelected -> Submitting -> {Recorded | Failed}`.
//! The draft lives in the store (single slot, last write wins) so a workflow
//! created on a fresh booking page still finds it.

use std::sync::Arc;

use chrono::NaiveDate;
use stagelink_core::booking::{
    Booking, BookingConfirmation, BookingDraft, BookingForm, BookingRequest, BookingStatus,
    WorkflowState, earliest_bookable_date,
};
use stagelink_core::catalog::{Creative, CreativeCatalog, CreativeId};
use stagelink_core::error::{Result, StagelinkError};
use stagelink_core::remote::RemoteService;
use stagelink_core::store::{KeyValueStore, keys, load_json, store_json};
use tokio::sync::Mutex;

/// What the booking view needs to render: the creative and the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftContext {
    pub creative: Creative,
    pub draft: BookingDraft,
}

/// Result of a recorded booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub confirmation: BookingConfirmation,
    pub booking: Booking,
}

pub struct BookingWorkflow {
    store: Arc<dyn KeyValueStore>,
    remote: Arc<dyn RemoteService>,
    catalog: CreativeCatalog,
    state: Mutex<WorkflowState>,
    /// Serializes the read-modify-write append on the booking list.
    bookings_lock: Mutex<()>,
}

impl BookingWorkflow {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteService>,
        catalog: CreativeCatalog,
    ) -> Self {
        Self {
            store,
            remote,
            catalog,
            state: Mutex::new(WorkflowState::Idle),
            bookings_lock: Mutex::new(()),
        }
    }

    /// Earliest date the booking form accepts, relative to the local clock.
    pub fn earliest_date(&self) -> NaiveDate {
        earliest_bookable_date(chrono::Local::now().date_naive())
    }

    pub async fn state(&self) -> WorkflowState {
        self.state.lock().await.clone()
    }

    /// Records the selection, overwriting any previous draft.
    pub async fn select_for_booking(
        &self,
        creative_id: impl Into<CreativeId>,
        service: impl Into<String>,
    ) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.is_submitting() {
            return Err(StagelinkError::SubmissionInProgress);
        }

        let draft = BookingDraft::new(creative_id, service);
        self.store
            .set(keys::BOOKING_CREATIVE_ID, draft.creative_id.to_string())
            .await?;
        self.store
            .set(keys::BOOKING_SERVICE, draft.service.clone())
            .await?;

        tracing::info!(
            "[Booking] Draft selected: creative {} / {}",
            draft.creative_id,
            draft.service
        );
        *state = WorkflowState::DraftSelected(draft);
        Ok(())
    }

    /// Loads the stored draft and its creative for the booking view.
    ///
    /// Returns `None` if there is no draft or the creative is unknown.
    pub async fn load_draft_context(&self) -> Result<Option<DraftContext>> {
        let Some(draft) = self.stored_draft().await? else {
            return Ok(None);
        };
        let Some(creative) = self.catalog.find_by_id(&draft.creative_id) else {
            tracing::warn!("[Booking] Draft references unknown creative {}", draft.creative_id);
            return Ok(None);
        };

        let mut state = self.state.lock().await;
        if matches!(*state, WorkflowState::Idle | WorkflowState::Recorded(_)) {
            *state = WorkflowState::DraftSelected(draft.clone());
        }

        Ok(Some(DraftContext {
            creative: creative.clone(),
            draft,
        }))
    }

    /// Submits the draft with the form fields.
    ///
    /// Field validation is the caller's job (see `BookingForm::fields`).
    ///
    /// On success the booking is appended with status `Pending` and the draft
    /// is cleared. On failure the draft is kept; the caller retries by
    /// calling `submit` again.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` while another submission is in flight
    /// - `NotFound` if there is no draft or its creative is unknown
    /// - `SubmissionFailed` if the remote call fails
    pub async fn submit(&self, form: BookingForm) -> Result<BookingReceipt> {
        let (draft, creative) = {
            let mut state = self.state.lock().await;
            if state.is_submitting() {
                return Err(StagelinkError::SubmissionInProgress);
            }
            let draft = self
                .stored_draft()
                .await?
                .ok_or_else(|| StagelinkError::not_found("booking draft", "current"))?;
            let creative = self
                .catalog
                .find_by_id(&draft.creative_id)
                .cloned()
                .ok_or_else(|| StagelinkError::not_found("creative", draft.creative_id.as_str()))?;

            *state = WorkflowState::Submitting(draft.clone());
            (draft, creative)
        };

        tracing::info!(
            "[Booking] Submitting {} with {} on {}",
            form.service,
            creative.name,
            form.date
        );

        let request = BookingRequest::new(draft.creative_id.clone(), form.clone());
        let confirmation = match self.remote.submit_booking(request).await {
            Ok(confirmation) => confirmation,
            Err(err) => {
                let reason = err.to_string();
                tracing::warn!("[Booking] Submission failed: {}", reason);
                self.fail(draft, &reason).await;
                return Err(StagelinkError::SubmissionFailed(reason));
            }
        };

        let booking = Booking {
            id: confirmation.booking_id.clone(),
            creative: creative.name.clone(),
            service: form.service,
            date: form.date,
            status: BookingStatus::Pending,
        };

        if let Err(err) = self.record(&booking).await {
            self.fail(draft, &err.to_string()).await;
            return Err(err);
        }
        self.clear_draft().await;

        tracing::info!("[Booking] Recorded booking {}", booking.id);
        *self.state.lock().await = WorkflowState::Recorded(confirmation.clone());

        Ok(BookingReceipt {
            confirmation,
            booking,
        })
    }

    /// The persisted booking history.
    pub async fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(load_json(self.store.as_ref(), keys::BOOKINGS)
            .await?
            .unwrap_or_default())
    }

    async fn stored_draft(&self) -> Result<Option<BookingDraft>> {
        let creative_id = self.store.get(keys::BOOKING_CREATIVE_ID).await?;
        let service = self.store.get(keys::BOOKING_SERVICE).await?;
        Ok(match (creative_id, service) {
            (Some(creative_id), Some(service)) => Some(BookingDraft::new(creative_id, service)),
            _ => None,
        })
    }

    async fn record(&self, booking: &Booking) -> Result<()> {
        let _guard = self.bookings_lock.lock().await;
        let mut bookings = self.bookings().await?;
        bookings.push(booking.clone());
        store_json(self.store.as_ref(), keys::BOOKINGS, &bookings).await
    }

    /// Removes the consumed draft. The booking is already recorded, so a
    /// failure here is only logged.
    async fn clear_draft(&self) {
        for key in [keys::BOOKING_CREATIVE_ID, keys::BOOKING_SERVICE] {
            if let Err(err) = self.store.remove(key).await {
                tracing::warn!("[Booking] Failed to clear draft key {}: {}", key, err);
            }
        }
    }

    async fn fail(&self, draft: BookingDraft, reason: &str) {
        *self.state.lock().await = WorkflowState::Failed {
            draft,
            reason: reason.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stagelink_core::session::{CredentialRequest, UserSession};
    use stagelink_infrastructure::{InMemoryKeyValueStore, MockRemoteService};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` booking submissions, then delegates to the mock.
    struct FlakyRemote {
        failures: AtomicUsize,
        inner: MockRemoteService,
    }

    #[async_trait]
    impl RemoteService for FlakyRemote {
        async fn exchange_credentials(&self, request: CredentialRequest) -> Result<UserSession> {
            self.inner.exchange_credentials(request).await
        }

        async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation> {
            if self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(StagelinkError::request_failed("backend unavailable"));
            }
            self.inner.submit_booking(request).await
        }
    }

    /// Store whose `remove` always fails.
    struct StickyStore(InMemoryKeyValueStore);

    #[async_trait]
    impl KeyValueStore for StickyStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<()> {
            self.0.set(key, value).await
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(StagelinkError::io("disk full"))
        }
    }

    fn form(service: &str, date: &str) -> BookingForm {
        BookingForm {
            service: service.to_string(),
            date: date.to_string(),
            budget: "$500".to_string(),
            message: "Wedding reception".to_string(),
            location: "Lagos".to_string(),
        }
    }

    fn workflow(store: &InMemoryKeyValueStore, remote: Arc<dyn RemoteService>) -> BookingWorkflow {
        BookingWorkflow::new(Arc::new(store.clone()), remote, CreativeCatalog::builtin())
    }

    #[tokio::test]
    async fn test_select_overwrites_previous_draft() {
        let store = InMemoryKeyValueStore::new();
        let booking = workflow(&store, Arc::new(MockRemoteService::instant()));

        booking.select_for_booking(1u32, "Live Performance").await.unwrap();
        booking.select_for_booking("2", "Beat Production").await.unwrap();

        let context = booking.load_draft_context().await.unwrap().unwrap();
        assert_eq!(context.draft, BookingDraft::new(2u32, "Beat Production"));
        assert_eq!(context.creative.name, "Alex Beats");
    }

    #[tokio::test]
    async fn test_load_without_draft_or_unknown_creative() {
        let store = InMemoryKeyValueStore::new();
        let booking = workflow(&store, Arc::new(MockRemoteService::instant()));
        assert!(booking.load_draft_context().await.unwrap().is_none());

        booking.select_for_booking("99", "Anything").await.unwrap();
        assert!(booking.load_draft_context().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_records_pending_booking_and_clears_draft() {
        let store = InMemoryKeyValueStore::new();
        let booking = workflow(&store, Arc::new(MockRemoteService::instant()));

        booking.select_for_booking(1u32, "Live Performance").await.unwrap();
        let receipt = booking
            .submit(form("Live Performance", "2025-01-01"))
            .await
            .unwrap();

        let bookings = booking.bookings().await.unwrap();
        assert_eq!(bookings, vec![receipt.booking.clone()]);
        assert_eq!(receipt.booking.status, BookingStatus::Pending);
        assert_eq!(receipt.booking.creative, "DJ Nova");
        assert!(!receipt.booking.id.is_empty());
        assert_eq!(
            booking.state().await,
            WorkflowState::Recorded(receipt.confirmation)
        );

        assert!(booking.load_draft_context().await.unwrap().is_none());
        let err = booking
            .submit(form("Live Performance", "2025-01-01"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft_for_retry() {
        let store = InMemoryKeyValueStore::new();
        let remote = Arc::new(FlakyRemote {
            failures: AtomicUsize::new(1),
            inner: MockRemoteService::instant(),
        });
        let booking = workflow(&store, remote);

        booking.select_for_booking(2u32, "Beat Production").await.unwrap();
        let err = booking
            .submit(form("Beat Production", "2025-03-03"))
            .await
            .unwrap_err();
        assert!(matches!(err, StagelinkError::SubmissionFailed(_)));
        assert!(matches!(booking.state().await, WorkflowState::Failed { .. }));
        assert!(booking.bookings().await.unwrap().is_empty());

        let receipt = booking
            .submit(form("Beat Production", "2025-03-03"))
            .await
            .unwrap();
        assert_eq!(booking.bookings().await.unwrap(), vec![receipt.booking]);
    }

    #[tokio::test]
    async fn test_draft_clear_failure_still_records_once() {
        let store = InMemoryKeyValueStore::new();
        let booking = BookingWorkflow::new(
            Arc::new(StickyStore(store.clone())),
            Arc::new(MockRemoteService::instant()),
            CreativeCatalog::builtin(),
        );

        booking.select_for_booking(1u32, "Live Performance").await.unwrap();
        let receipt = booking
            .submit(form("Live Performance", "2025-01-01"))
            .await
            .unwrap();

        assert_eq!(
            booking.state().await,
            WorkflowState::Recorded(receipt.confirmation.clone())
        );
        assert_eq!(booking.bookings().await.unwrap(), vec![receipt.booking]);
    }

    #[tokio::test]
    async fn test_ids_distinct_across_submissions() {
        let store = InMemoryKeyValueStore::new();
        let booking = workflow(&store, Arc::new(MockRemoteService::instant()));

        for _ in 0..3 {
            booking.select_for_booking(1u32, "Virtual DJ Set").await.unwrap();
            booking.submit(form("Virtual DJ Set", "2025-05-05")).await.unwrap();
        }

        let mut ids: Vec<_> = booking
            .bookings()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_second_submit_rejected_while_in_flight() {
        let store = InMemoryKeyValueStore::new();
        let remote = Arc::new(MockRemoteService::new(
            std::time::Duration::ZERO,
            std::time::Duration::from_millis(200),
        ));
        let booking = Arc::new(workflow(&store, remote));
        booking.select_for_booking(1u32, "Live Performance").await.unwrap();

        let first = {
            let booking = booking.clone();
            tokio::spawn(async move { booking.submit(form("Live Performance", "2025-01-01")).await })
        };
        while !booking.state().await.is_submitting() {
            tokio::task::yield_now().await;
        }

        let second = booking.submit(form("Live Performance", "2025-01-01")).await;
        assert_eq!(second.unwrap_err(), StagelinkError::SubmissionInProgress);
        first.await.unwrap().unwrap();
        assert_eq!(booking.bookings().await.unwrap().len(), 1);
    }
}
