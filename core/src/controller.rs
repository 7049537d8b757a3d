//! Dashboard state and its reducer.
//!
//! The reducer never touches the contract. It returns a [`Request`] that the
//! caller runs against a facade, and the completion [`Event`] that produces is
//! fed back through [`Dashboard::update`].

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::DashboardError;
use crate::facade::{ContractFacade, TxOutcome};
use crate::snapshot::{load_snapshot, TokenSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(TokenSnapshot),
    LoadFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenAction {
    #[default]
    Transfer,
    Deposit,
    Withdraw,
}

impl TokenAction {
    pub const ALL: [TokenAction; 3] = [Self::Transfer, Self::Deposit, Self::Withdraw];
}

impl fmt::Display for TokenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "Transfer"),
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdraw => write!(f, "Withdraw"),
        }
    }
}

/// Fungible token form. Which fields matter depends on `action`; the rest are
/// kept and cleared along with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenForm {
    pub action: TokenAction,
    pub recipient_address: String,
    pub amount: String,
    pub token_id: String,
}

impl TokenForm {
    fn clear(&mut self) {
        *self = Self {
            action: self.action,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftForm {
    pub from: String,
    pub to: String,
    pub token_id: String,
    pub current_owner: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Submission phase plus the last outcome shown under a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub phase: Phase,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn begin(&mut self) {
        self.phase = Phase::Submitting;
        self.error = None;
        self.notice = None;
    }

    fn succeed(&mut self, notice: String) {
        self.phase = Phase::Idle;
        self.notice = Some(notice);
    }

    fn fail(&mut self, error: String) {
        self.phase = Phase::Idle;
        self.error = Some(error);
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    // Snapshot
    SnapshotLoaded(Result<TokenSnapshot, String>),
    Refresh,

    // Token form
    ActionSelected(TokenAction),
    RecipientChanged(String),
    AmountChanged(String),
    TokenIdChanged(String),
    SubmitToken,
    TokenSubmitted(Result<TxOutcome, String>),

    // NFT form
    NftFromChanged(String),
    NftToChanged(String),
    NftTokenIdChanged(String),
    CheckOwner,
    OwnerResolved(Result<String, String>),
    SubmitNft,
    NftSubmitted(Result<TxOutcome, String>),
}

/// One facade call (or the snapshot batch) the reducer wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadSnapshot,
    Transfer { to: String, amount: String },
    Deposit { id: String, amount: String },
    Withdraw { amount: String },
    NftTransfer { from: String, to: String, token_id: String },
    OwnerOf { token_id: String },
}

impl Request {
    /// Perform the call and return its completion event.
    pub async fn run(self, facade: Arc<dyn ContractFacade>) -> Event {
        match self {
            Request::LoadSnapshot => {
                Event::SnapshotLoaded(load_snapshot(facade.as_ref()).await.map_err(display))
            }
            Request::Transfer { to, amount } => {
                Event::TokenSubmitted(facade.transfer(&to, &amount).await.map_err(display))
            }
            Request::Deposit { id, amount } => {
                Event::TokenSubmitted(facade.deposit_tokens(&id, &amount).await.map_err(display))
            }
            Request::Withdraw { amount } => {
                Event::TokenSubmitted(facade.withdraw_tokens(&amount).await.map_err(display))
            }
            Request::NftTransfer { from, to, token_id } => Event::NftSubmitted(
                facade
                    .erc721_transfer_from(&from, &to, &token_id)
                    .await
                    .map_err(display),
            ),
            Request::OwnerOf { token_id } => {
                Event::OwnerResolved(facade.owner_of(&token_id).await.map_err(display))
            }
        }
    }

    /// Complete the request with `err` without running it.
    pub fn fail(self, err: DashboardError) -> Event {
        let msg = err.to_string();
        match self {
            Request::LoadSnapshot => Event::SnapshotLoaded(Err(msg)),
            Request::Transfer { .. } | Request::Deposit { .. } | Request::Withdraw { .. } => {
                Event::TokenSubmitted(Err(msg))
            }
            Request::NftTransfer { .. } => Event::NftSubmitted(Err(msg)),
            Request::OwnerOf { .. } => Event::OwnerResolved(Err(msg)),
        }
    }
}

fn display(err: DashboardError) -> String {
    debug!(kind = err.kind(), error = %err, "facade call failed");
    err.to_string()
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: LoadState,
    token_form: TokenForm,
    token_status: FormStatus,
    nft_form: NftForm,
    nft_status: FormStatus,
    owner_pending: bool,
}

impl Dashboard {
    /// Fresh dashboard plus the initial snapshot load.
    pub fn new() -> (Self, Request) {
        let dashboard = Self {
            snapshot: LoadState::Loading,
            token_form: TokenForm::default(),
            token_status: FormStatus::default(),
            nft_form: NftForm::default(),
            nft_status: FormStatus::default(),
            owner_pending: false,
        };
        (dashboard, Request::LoadSnapshot)
    }

    pub fn snapshot(&self) -> &LoadState {
        &self.snapshot
    }

    pub fn token_form(&self) -> &TokenForm {
        &self.token_form
    }

    pub fn token_status(&self) -> &FormStatus {
        &self.token_status
    }

    pub fn nft_form(&self) -> &NftForm {
        &self.nft_form
    }

    pub fn nft_status(&self) -> &FormStatus {
        &self.nft_status
    }

    pub fn owner_pending(&self) -> bool {
        self.owner_pending
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot == LoadState::Loading
    }

    pub fn update(&mut self, event: Event) -> Option<Request> {
        match event {
            Event::SnapshotLoaded(Ok(snapshot)) => {
                info!(symbol = %snapshot.symbol, "token data loaded");
                self.snapshot = LoadState::Loaded(snapshot);
                None
            }
            Event::SnapshotLoaded(Err(e)) => {
                warn!(error = %e, "error loading token data");
                self.snapshot = LoadState::LoadFailed(e);
                None
            }
            Event::Refresh => {
                if self.is_loading() {
                    return None;
                }
                self.snapshot = LoadState::Loading;
                Some(Request::LoadSnapshot)
            }

            Event::ActionSelected(action) => {
                self.token_form.action = action;
                None
            }
            Event::RecipientChanged(v) => {
                self.token_form.recipient_address = v;
                None
            }
            Event::AmountChanged(v) => {
                self.token_form.amount = v;
                None
            }
            Event::TokenIdChanged(v) => {
                self.token_form.token_id = v;
                None
            }
            Event::SubmitToken => {
                if self.token_status.is_submitting() {
                    return None;
                }
                self.token_status.begin();
                let form = &self.token_form;
                Some(match form.action {
                    TokenAction::Transfer => Request::Transfer {
                        to: form.recipient_address.clone(),
                        amount: form.amount.clone(),
                    },
                    TokenAction::Deposit => Request::Deposit {
                        id: form.token_id.clone(),
                        amount: form.amount.clone(),
                    },
                    TokenAction::Withdraw => Request::Withdraw {
                        amount: form.amount.clone(),
                    },
                })
            }
            Event::TokenSubmitted(Ok(outcome)) => {
                info!(tx_hash = %outcome.tx_hash, "token transaction confirmed");
                self.token_form.clear();
                self.token_status
                    .succeed(format!("Transaction confirmed: {}", outcome.tx_hash));
                None
            }
            Event::TokenSubmitted(Err(e)) => {
                warn!(error = %e, "error during token transaction");
                self.token_status.fail(e);
                None
            }

            Event::NftFromChanged(v) => {
                self.nft_form.from = v;
                None
            }
            Event::NftToChanged(v) => {
                self.nft_form.to = v;
                None
            }
            Event::NftTokenIdChanged(v) => {
                self.nft_form.token_id = v;
                None
            }
            Event::CheckOwner => {
                // A lookup would overwrite `from` under an in-flight transfer
                if self.owner_pending || self.nft_status.is_submitting() {
                    return None;
                }
                self.owner_pending = true;
                self.nft_status.error = None;
                self.nft_status.notice = None;
                Some(Request::OwnerOf {
                    token_id: self.nft_form.token_id.clone(),
                })
            }
            Event::OwnerResolved(Ok(owner)) => {
                self.owner_pending = false;
                self.nft_form.from = owner.clone();
                self.nft_form.current_owner = owner;
                None
            }
            Event::OwnerResolved(Err(e)) => {
                warn!(error = %e, "error fetching NFT owner");
                self.owner_pending = false;
                self.nft_status.error = Some(e);
                None
            }
            Event::SubmitNft => {
                if self.nft_status.is_submitting() {
                    return None;
                }
                self.nft_status.begin();
                Some(Request::NftTransfer {
                    from: self.nft_form.from.clone(),
                    to: self.nft_form.to.clone(),
                    token_id: self.nft_form.token_id.clone(),
                })
            }
            Event::NftSubmitted(Ok(outcome)) => {
                info!(tx_hash = %outcome.tx_hash, "NFT transfer confirmed");
                self.nft_form = NftForm::default();
                self.nft_status
                    .succeed(format!("NFT transferred: {}", outcome.tx_hash));
                None
            }
            Event::NftSubmitted(Err(e)) => {
                warn!(error = %e, "error transferring NFT");
                self.nft_status.fail(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockContract;

    const TO: &str = "0x1111111111111111111111111111111111111111";

    fn loaded() -> Dashboard {
        let (mut d, _) = Dashboard::new();
        d.update(Event::SnapshotLoaded(Ok(TokenSnapshot {
            balance: "1000".into(),
            total_supply: "1000000".into(),
            symbol: "TKN".into(),
        })));
        d
    }

    fn tx(hash: &str) -> TxOutcome {
        TxOutcome {
            tx_hash: hash.into(),
        }
    }

    #[test]
    fn starts_loading_with_snapshot_request() {
        let (d, req) = Dashboard::new();
        assert_eq!(req, Request::LoadSnapshot);
        assert!(d.is_loading());
        assert_eq!(d.token_form(), &TokenForm::default());
    }

    #[test]
    fn load_failure_is_reported() {
        let (mut d, _) = Dashboard::new();
        d.update(Event::SnapshotLoaded(Err("boom".into())));
        assert_eq!(d.snapshot(), &LoadState::LoadFailed("boom".into()));
    }

    #[test]
    fn refresh_ignored_while_loading() {
        let (mut d, _) = Dashboard::new();
        assert_eq!(d.update(Event::Refresh), None);

        let mut d = loaded();
        assert_eq!(d.update(Event::Refresh), Some(Request::LoadSnapshot));
        assert!(d.is_loading());
    }

    #[test]
    fn submit_builds_request_per_action() {
        let mut d = loaded();
        d.update(Event::RecipientChanged(TO.into()));
        d.update(Event::AmountChanged("10".into()));
        d.update(Event::TokenIdChanged("7".into()));

        assert_eq!(
            d.update(Event::SubmitToken),
            Some(Request::Transfer {
                to: TO.into(),
                amount: "10".into()
            })
        );
        d.update(Event::TokenSubmitted(Err("x".into())));

        d.update(Event::ActionSelected(TokenAction::Deposit));
        assert_eq!(
            d.update(Event::SubmitToken),
            Some(Request::Deposit {
                id: "7".into(),
                amount: "10".into()
            })
        );
        d.update(Event::TokenSubmitted(Err("x".into())));

        d.update(Event::ActionSelected(TokenAction::Withdraw));
        assert_eq!(
            d.update(Event::SubmitToken),
            Some(Request::Withdraw {
                amount: "10".into()
            })
        );
    }

    #[test]
    fn second_submit_ignored_while_in_flight() {
        let mut d = loaded();
        d.update(Event::AmountChanged("1".into()));
        assert!(d.update(Event::SubmitToken).is_some());
        assert!(d.token_status().is_submitting());
        assert_eq!(d.update(Event::SubmitToken), None);
    }

    #[test]
    fn success_clears_fields_keeps_action() {
        let mut d = loaded();
        d.update(Event::ActionSelected(TokenAction::Deposit));
        d.update(Event::RecipientChanged(TO.into()));
        d.update(Event::AmountChanged("3".into()));
        d.update(Event::TokenIdChanged("9".into()));
        d.update(Event::SubmitToken);
        d.update(Event::TokenSubmitted(Ok(tx("0xabc"))));

        let form = d.token_form();
        assert_eq!(form.action, TokenAction::Deposit);
        assert!(form.recipient_address.is_empty());
        assert!(form.amount.is_empty());
        assert!(form.token_id.is_empty());
        assert_eq!(d.token_status().phase, Phase::Idle);
        assert!(d.token_status().notice.as_deref().unwrap().contains("0xabc"));
    }

    #[test]
    fn failure_retains_fields() {
        let mut d = loaded();
        d.update(Event::RecipientChanged(TO.into()));
        d.update(Event::AmountChanged("0".into()));
        d.update(Event::SubmitToken);
        d.update(Event::TokenSubmitted(Err("Amount must be greater than 0".into())));

        assert_eq!(d.token_form().recipient_address, TO);
        assert_eq!(d.token_form().amount, "0");
        assert_eq!(d.token_status().phase, Phase::Idle);
        assert_eq!(
            d.token_status().error.as_deref(),
            Some("Amount must be greater than 0")
        );
    }

    #[test]
    fn new_submit_clears_previous_outcome() {
        let mut d = loaded();
        d.update(Event::SubmitToken);
        d.update(Event::TokenSubmitted(Err("bad".into())));
        d.update(Event::SubmitToken);
        assert_eq!(d.token_status().error, None);
        assert_eq!(d.token_status().notice, None);
    }

    #[test]
    fn owner_lookup_prefills_from() {
        let mut d = loaded();
        d.update(Event::NftTokenIdChanged("42".into()));
        assert_eq!(
            d.update(Event::CheckOwner),
            Some(Request::OwnerOf {
                token_id: "42".into()
            })
        );
        assert!(d.owner_pending());
        assert_eq!(d.update(Event::CheckOwner), None);

        d.update(Event::OwnerResolved(Ok(TO.into())));
        assert!(!d.owner_pending());
        assert_eq!(d.nft_form().current_owner, TO);
        assert_eq!(d.nft_form().from, TO);
    }

    #[test]
    fn owner_lookup_failure_surfaces_error() {
        let mut d = loaded();
        d.update(Event::CheckOwner);
        d.update(Event::OwnerResolved(Err("Token ID is required".into())));
        assert!(!d.owner_pending());
        assert_eq!(d.nft_status().error.as_deref(), Some("Token ID is required"));
    }

    #[test]
    fn owner_lookup_clears_previous_notice() {
        let mut d = loaded();
        d.update(Event::NftSubmitted(Ok(tx("0x01"))));
        assert!(d.nft_status().notice.is_some());
        d.update(Event::CheckOwner);
        assert_eq!(d.nft_status().notice, None);
        assert_eq!(d.nft_status().error, None);
    }

    #[test]
    fn owner_lookup_ignored_during_nft_transfer() {
        let mut d = loaded();
        d.update(Event::NftFromChanged(TO.into()));
        d.update(Event::NftToChanged(TO.into()));
        d.update(Event::NftTokenIdChanged("7".into()));
        assert!(d.update(Event::SubmitNft).is_some());

        assert_eq!(d.update(Event::CheckOwner), None);
        assert!(!d.owner_pending());

        d.update(Event::NftSubmitted(Err("execution reverted".into())));
        assert_eq!(d.nft_form().from, TO);
        assert_eq!(d.nft_form().to, TO);
        assert_eq!(d.nft_form().token_id, "7");
        assert_eq!(d.nft_status().error.as_deref(), Some("execution reverted"));

        // Lookups work again once the transfer has completed
        assert!(d.update(Event::CheckOwner).is_some());
    }

    #[test]
    fn nft_success_resets_form() {
        let mut d = loaded();
        d.update(Event::NftFromChanged(TO.into()));
        d.update(Event::NftToChanged(TO.into()));
        d.update(Event::NftTokenIdChanged("1".into()));
        assert!(d.update(Event::SubmitNft).is_some());
        assert_eq!(d.update(Event::SubmitNft), None);
        d.update(Event::NftSubmitted(Ok(tx("0x01"))));
        assert_eq!(d.nft_form(), &NftForm::default());
        assert!(!d.nft_status().is_submitting());
    }

    #[test]
    fn failed_request_routes_to_its_form() {
        let err = || DashboardError::NotConnected("No provider".into());
        assert!(matches!(
            Request::LoadSnapshot.fail(err()),
            Event::SnapshotLoaded(Err(_))
        ));
        assert!(matches!(
            Request::Withdraw { amount: "1".into() }.fail(err()),
            Event::TokenSubmitted(Err(m)) if m == "No provider"
        ));
        assert!(matches!(
            Request::OwnerOf { token_id: "1".into() }.fail(err()),
            Event::OwnerResolved(Err(_))
        ));
    }

    #[tokio::test]
    async fn run_against_mock() {
        let facade: Arc<dyn ContractFacade> = Arc::new(MockContract::new());
        let event = Request::Transfer {
            to: TO.into(),
            amount: "10".into(),
        }
        .run(facade.clone())
        .await;
        assert!(matches!(event, Event::TokenSubmitted(Ok(_))));

        let event = Request::OwnerOf {
            token_id: String::new(),
        }
        .run(facade)
        .await;
        assert!(matches!(event, Event::OwnerResolved(Err(m)) if m == "Token ID is required"));
    }
}
