//! # Wizard Step Machine
//!
//! The four-step survey flow. Unlike a lifecycle machine that rejects bad
//! transitions, a stepper clamps: `go_next` on the last step and
//! `go_previous` on the first are no-ops, so the navigation buttons can
//! always be pressed. The only runtime-gated operation is `submit`, which
//! is meaningful only on the final step.
//!
//! Submission hands the results flow a real snapshot. The reference id is
//! the SHA-256 digest of the canonical snapshot JSON: equal answers produce
//! equal ids, and the id alone leaks nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use suriya_core::error::CanonicalizationError;
use suriya_core::{sha256_digest, CanonicalBytes, ContentDigest, SessionId, Timestamp};
use suriya_i18n::MessageKey;

use crate::response::SurveyResponse;

/// Number of wizard steps.
pub const STEP_COUNT: usize = 4;

/// One step of the survey flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Monthly electricity bill.
    Bill,
    /// Residence type and province.
    Residence,
    /// Household size.
    Household,
    /// Appliance inventory and snapshot review.
    Appliances,
}

impl WizardStep {
    /// All steps in flow order.
    pub fn all() -> &'static [WizardStep] {
        &[Self::Bill, Self::Residence, Self::Household, Self::Appliances]
    }

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            Self::Bill => 0,
            Self::Residence => 1,
            Self::Household => 2,
            Self::Appliances => 3,
        }
    }

    /// The step at a clamped zero-based index.
    pub fn at(index: usize) -> WizardStep {
        let clamped = index.min(STEP_COUNT - 1);
        Self::all()[clamped]
    }

    /// Stepper-overview title key.
    pub fn title_key(&self) -> MessageKey {
        match self {
            Self::Bill => MessageKey::StepBillTitle,
            Self::Residence => MessageKey::StepResidenceTitle,
            Self::Household => MessageKey::StepHouseholdTitle,
            Self::Appliances => MessageKey::StepAppliancesTitle,
        }
    }

    /// Stepper-overview description key.
    pub fn description_key(&self) -> MessageKey {
        match self {
            Self::Bill => MessageKey::StepBillDescription,
            Self::Residence => MessageKey::StepResidenceDescription,
            Self::Household => MessageKey::StepHouseholdDescription,
            Self::Appliances => MessageKey::StepAppliancesDescription,
        }
    }

    /// Description key for the step body.
    pub fn body_description_key(&self) -> MessageKey {
        match self {
            Self::Bill => MessageKey::BillDescription,
            Self::Residence => MessageKey::ResidenceDescription,
            Self::Household => MessageKey::HouseholdDescription,
            Self::Appliances => MessageKey::AppliancesDescription,
        }
    }

    /// Heading key for the step body (takes a `{step}` parameter).
    pub fn heading_key(&self) -> MessageKey {
        match self {
            Self::Bill => MessageKey::BillHeading,
            Self::Residence => MessageKey::ResidenceHeading,
            Self::Household => MessageKey::HouseholdHeading,
            Self::Appliances => MessageKey::AppliancesHeading,
        }
    }
}

/// Errors from wizard operations. Navigation never errors; only the
/// submission gate does.
#[derive(Error, Debug)]
pub enum WizardError {
    /// `submit` was called before the final step.
    #[error("submit is only available on the final step (currently on {current})")]
    NotAtFinalStep {
        /// The step the wizard was on.
        current: &'static str,
    },

    /// The snapshot could not be canonicalized for the reference id.
    #[error("snapshot canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// A submitted survey: the snapshot plus its hand-off metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    /// The wizard session that produced this submission.
    pub session: SessionId,
    /// Content-addressed reference id (the `refId` of the hand-off).
    pub reference: ContentDigest,
    /// When the survey was submitted (UTC).
    pub submitted_at: Timestamp,
    /// The full response snapshot.
    pub response: SurveyResponse,
}

impl Submission {
    /// The reference id as an opaque hex token.
    pub fn reference_id(&self) -> String {
        self.reference.to_hex()
    }
}

/// The survey wizard: response state plus the current step.
#[derive(Debug, Clone)]
pub struct Wizard {
    session: SessionId,
    response: SurveyResponse,
    step_index: usize,
}

impl Wizard {
    /// A fresh wizard on the first step with default answers.
    pub fn new() -> Self {
        Self {
            session: SessionId::new(),
            response: SurveyResponse::new(),
            step_index: 0,
        }
    }

    /// This wizard run's session id.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The current step.
    pub fn current_step(&self) -> WizardStep {
        WizardStep::at(self.step_index)
    }

    /// Zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// True on the first step.
    pub fn is_first_step(&self) -> bool {
        self.step_index == 0
    }

    /// True on the last step, where "next" becomes "submit".
    pub fn is_last_step(&self) -> bool {
        self.step_index == STEP_COUNT - 1
    }

    /// Advance one step, clamped at the end. Idempotent on the last step.
    pub fn go_next(&mut self) -> WizardStep {
        self.step_index = (self.step_index + 1).min(STEP_COUNT - 1);
        self.current_step()
    }

    /// Go back one step, clamped at the start. Idempotent on the first step.
    pub fn go_previous(&mut self) -> WizardStep {
        self.step_index = self.step_index.saturating_sub(1);
        self.current_step()
    }

    /// The collected answers.
    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    /// Mutable access for the per-step field handlers.
    pub fn response_mut(&mut self) -> &mut SurveyResponse {
        &mut self.response
    }

    /// Package the snapshot for the results flow.
    ///
    /// Gated to the final step; earlier steps get an error rather than a
    /// partial hand-off. The reference id is derived from the snapshot
    /// itself, so re-submitting unchanged answers yields the same id.
    pub fn submit(&self) -> Result<Submission, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotAtFinalStep {
                current: match self.current_step() {
                    WizardStep::Bill => "bill",
                    WizardStep::Residence => "residence",
                    WizardStep::Household => "household",
                    WizardStep::Appliances => "appliances",
                },
            });
        }

        let snapshot = self.response.clone();
        let canonical = CanonicalBytes::new(&snapshot)?;
        Ok(Submission {
            session: self.session.clone(),
            reference: sha256_digest(&canonical),
            submitted_at: Timestamp::now(),
            response: snapshot,
        })
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
