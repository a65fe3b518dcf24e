use std::collections::BTreeMap;

use serde::Serialize;

use crate::actions::types::AllowedActionsResponse;
use crate::actions::{engine, ActionPolicy};
use crate::directory::CardDirectory;
use crate::errors::CardError;

/// Wire names of the query fields, used as keys in validation reports.
pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_CARD_NUMBER: &str = "cardNumber";

/// Reason codes for field failures. These are stable identifiers, not
/// display strings; rendering them for humans is a concern of the caller.
pub const USER_ID_REQUIRED: &str = "UserIdRequired";
pub const USER_DOES_NOT_EXIST: &str = "UserDoesNotExist";
pub const CARD_NUMBER_REQUIRED: &str = "CardNumberRequired";
pub const CARD_DOES_NOT_EXIST: &str = "CardDoesNotExist";

/// A card-actions query: which operations may this user currently perform
/// on this card?
#[derive(Debug, Clone)]
pub struct CardActionsQuery {
    pub user_id: String,
    pub card_number: String,
}

/// Per-field validation failures, aggregated across the whole query so the
/// caller sees every violated field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn add(&mut self, field: &str, reason: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(reason.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of a card-actions query. Validation failures and absence are
/// ordinary values callers match on; only unexpected faults travel through
/// the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The permitted actions, sorted ascending by name.
    Actions(AllowedActionsResponse),
    /// The query was well-formed but the detail fetch found nothing.
    NotFound,
    /// One or more fields failed validation.
    Invalid(ValidationReport),
}

/// Run the full query pipeline: validate, fetch, resolve, project.
///
/// Steps are strictly sequential within one query; across queries the
/// pipeline holds no mutable state and runs fully in parallel.
pub async fn card_actions(
    directory: &dyn CardDirectory,
    policy: &ActionPolicy,
    query: &CardActionsQuery,
) -> Result<QueryOutcome, CardError> {
    let report = validate(directory, query).await?;
    if !report.is_empty() {
        tracing::debug!(?report, "card-actions query failed validation");
        return Ok(QueryOutcome::Invalid(report));
    }

    // Existence was confirmed above, but the record can still vanish
    // between the check and the fetch; that degrades to absence, not a
    // failure.
    let Some(card) = directory
        .card_details(&query.user_id, &query.card_number)
        .await?
    else {
        return Ok(QueryOutcome::NotFound);
    };

    let allowed_actions = engine::resolve(policy, card.card_type, card.card_status);
    tracing::debug!(
        card_type = %card.card_type,
        card_status = %card.card_status,
        count = allowed_actions.len(),
        "resolved permitted actions"
    );

    Ok(QueryOutcome::Actions(AllowedActionsResponse {
        allowed_actions,
    }))
}

/// Validate the query: structural checks first, then existence and
/// ownership against the directory.
///
/// All field failures are aggregated into one report. An empty field
/// reports only its `*Required` code and skips the directory check for
/// that field; the other field is still evaluated in full. The ownership
/// check runs with the supplied user id even when that user is unknown —
/// the directory answers false and the card field fails alongside the
/// user field.
async fn validate(
    directory: &dyn CardDirectory,
    query: &CardActionsQuery,
) -> Result<ValidationReport, CardError> {
    let mut report = ValidationReport::default();

    if query.user_id.is_empty() {
        report.add(FIELD_USER_ID, USER_ID_REQUIRED);
    } else if !directory.user_exists(&query.user_id).await? {
        report.add(FIELD_USER_ID, USER_DOES_NOT_EXIST);
    }

    if query.card_number.is_empty() {
        report.add(FIELD_CARD_NUMBER, CARD_NUMBER_REQUIRED);
    } else if !directory
        .card_exists(&query.user_id, &query.card_number)
        .await?
    {
        report.add(FIELD_CARD_NUMBER, CARD_DOES_NOT_EXIST);
    }

    Ok(report)
}
