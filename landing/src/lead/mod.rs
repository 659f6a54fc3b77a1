//! Lead capture: the quote form's submission pipeline.
//!
//! A [`LeadController`] belongs to one rendered form. It validates the fields,
//! asks the [`BotVerifier`] for a token, and hands the resulting
//! [`EmailRequest`] to a [`LeadDelivery`]. One attempt per click; nothing is
//! retried, queued or cancelled.

mod delivery;
mod fields;
mod verify;

use std::cell::Cell;

pub use delivery::{EmailJs, LeadDelivery};
pub use fields::{
    EmailRequest, GENERAL_SUBJECT, LeadFields, ProjectType, TemplateParams, UNSPECIFIED_PROJECT,
};
pub use verify::{BotVerifier, Recaptcha};

use crate::config::{SITE, SiteConfig};
use crate::error::LeadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A request is in flight; the submit button is disabled.
    Sending,
    /// Confirmation panel is showing.
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    /// Another submission from this form is still in flight.
    Busy,
    /// The verification client was not loaded; the attempt was discarded.
    Dropped,
    Invalid(LeadError),
    Failed(LeadError),
}

type PhaseObserver = Box<dyn Fn(FormPhase)>;

pub struct LeadController<V, D> {
    verifier: V,
    delivery: D,
    config: SiteConfig,
    phase: Cell<FormPhase>,
    observer: Option<PhaseObserver>,
}

impl<V: BotVerifier, D: LeadDelivery> LeadController<V, D> {
    pub fn new(verifier: V, delivery: D) -> Self {
        Self::with_config(verifier, delivery, SITE)
    }

    pub fn with_config(verifier: V, delivery: D, config: SiteConfig) -> Self {
        Self {
            verifier,
            delivery,
            config,
            phase: Cell::new(FormPhase::Idle),
            observer: None,
        }
    }

    /// Called on every phase transition, used to mirror the phase into the view.
    pub fn on_phase_change(mut self, observer: impl Fn(FormPhase) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn is_sending(&self) -> bool {
        self.phase.get() == FormPhase::Sending
    }

    fn set_phase(&self, phase: FormPhase) {
        self.phase.set(phase);
        if let Some(observer) = &self.observer {
            observer(phase);
        }
    }

    /// Run one submission attempt. `subject` names the page or product the
    /// form sits on.
    pub async fn submit(&self, fields: &LeadFields, subject: Option<&str>) -> SubmitOutcome {
        if self.is_sending() {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Busy;
        }

        if let Err(err) = fields.validate() {
            return SubmitOutcome::Invalid(err);
        }

        if !self.verifier.is_ready() {
            tracing::warn!("reCAPTCHA not loaded, lead dropped");
            return SubmitOutcome::Dropped;
        }

        // Everything above runs before the first await, so a second call
        // observes `Sending` and bails out.
        self.set_phase(FormPhase::Sending);

        match self.send(fields, subject).await {
            Ok(()) => {
                tracing::info!(subject = subject.unwrap_or(GENERAL_SUBJECT), "lead sent");
                self.set_phase(FormPhase::Submitted);
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::error!(error = %err, "lead delivery failed");
                self.set_phase(FormPhase::Idle);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn send(&self, fields: &LeadFields, subject: Option<&str>) -> Result<(), LeadError> {
        let token = self.verifier.token(self.config.recaptcha_action).await?;
        let request = EmailRequest::new(&self.config, fields, subject, token);
        self.delivery.deliver(&request).await
    }

    /// The confirmation window is over; show the empty form again.
    pub fn confirmation_elapsed(&self) {
        if self.phase.get() == FormPhase::Submitted {
            self.set_phase(FormPhase::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::pin::pin;
    use std::rc::Rc;

    struct StubVerifier {
        ready: bool,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        actions: Rc<RefCell<Vec<String>>>,
    }

    impl StubVerifier {
        fn ready() -> Self {
            Self {
                ready: true,
                gate: RefCell::new(None),
                actions: Rc::default(),
            }
        }

        fn not_loaded() -> Self {
            Self { ready: false, ..Self::ready() }
        }

        /// Token is withheld until the sender fires.
        fn gated(rx: oneshot::Receiver<()>) -> Self {
            Self {
                gate: RefCell::new(Some(rx)),
                ..Self::ready()
            }
        }
    }

    impl BotVerifier for StubVerifier {
        fn is_ready(&self) -> bool {
            self.ready
        }

        async fn token(&self, action: &str) -> Result<String, LeadError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            self.actions.borrow_mut().push(action.to_string());
            Ok(format!("token-for-{action}"))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDelivery {
        sent: Rc<RefCell<Vec<EmailRequest>>>,
        fail_with: Option<LeadError>,
    }

    impl LeadDelivery for RecordingDelivery {
        async fn deliver(&self, request: &EmailRequest) -> Result<(), LeadError> {
            self.sent.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn filled() -> LeadFields {
        LeadFields {
            user_name: "Thomas B.".into(),
            user_phone: "01 23 45 67 89".into(),
            user_email: "thomas@example.fr".into(),
            project_type: Some(ProjectType::ConstructionNeuve),
            message: "Baie vitrée 4 vantaux".into(),
        }
    }

    #[test]
    fn successful_delivery_confirms_and_clears() {
        let delivery = RecordingDelivery::default();
        let sent = delivery.sent.clone();
        let verifier = StubVerifier::ready();
        let actions = verifier.actions.clone();
        let controller = LeadController::new(verifier, delivery);

        let mut fields = filled();
        let outcome = block_on(controller.submit(&fields, Some("Fenêtres PVC Premium")));
        fields.settle(&outcome);

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(controller.phase(), FormPhase::Submitted);
        assert_eq!(fields, LeadFields::default());
        assert_eq!(*actions.borrow(), vec!["contact_form".to_string()]);

        let sent = sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].template_params.recaptcha_token, "token-for-contact_form");
        assert_eq!(sent[0].template_params.context_subject, "Fenêtres PVC Premium");
    }

    #[test]
    fn confirmation_reverts_to_idle() {
        let controller = LeadController::new(StubVerifier::ready(), RecordingDelivery::default());
        block_on(controller.submit(&filled(), None));
        assert_eq!(controller.phase(), FormPhase::Submitted);

        controller.confirmation_elapsed();
        assert_eq!(controller.phase(), FormPhase::Idle);
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let delivery = RecordingDelivery {
            fail_with: Some(LeadError::Delivery {
                status: 500,
                body: "Internal".into(),
            }),
            ..Default::default()
        };
        let controller = LeadController::new(StubVerifier::ready(), delivery);

        let mut fields = filled();
        let outcome = block_on(controller.submit(&fields, None));
        fields.settle(&outcome);

        assert!(matches!(outcome, SubmitOutcome::Failed(LeadError::Delivery { status: 500, .. })));
        assert_eq!(controller.phase(), FormPhase::Idle);
        assert_eq!(fields, filled());
    }

    #[test]
    fn unloaded_verifier_drops_without_network() {
        let delivery = RecordingDelivery::default();
        let sent = delivery.sent.clone();
        let controller = LeadController::new(StubVerifier::not_loaded(), delivery);

        let outcome = block_on(controller.submit(&filled(), None));

        assert_eq!(outcome, SubmitOutcome::Dropped);
        assert_eq!(controller.phase(), FormPhase::Idle);
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn invalid_fields_never_reach_verifier() {
        let verifier = StubVerifier::ready();
        let actions = verifier.actions.clone();
        let controller = LeadController::new(verifier, RecordingDelivery::default());

        let mut fields = filled();
        fields.user_name.clear();
        let outcome = block_on(controller.submit(&fields, None));

        assert_eq!(outcome, SubmitOutcome::Invalid(LeadError::MissingField("user_name")));
        assert!(actions.borrow().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let (release, gate) = oneshot::channel();
        let delivery = RecordingDelivery::default();
        let sent = delivery.sent.clone();
        let controller = LeadController::new(StubVerifier::gated(gate), delivery);
        let fields = filled();

        block_on(async {
            let mut first = pin!(controller.submit(&fields, None));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(controller.is_sending());

            assert_eq!(controller.submit(&fields, None).await, SubmitOutcome::Busy);

            release.send(()).unwrap();
            assert_eq!(first.await, SubmitOutcome::Delivered);
        });

        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn observer_sees_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let controller = LeadController::new(StubVerifier::ready(), RecordingDelivery::default())
            .on_phase_change(move |p| log.borrow_mut().push(p));

        block_on(controller.submit(&filled(), None));
        controller.confirmation_elapsed();

        assert_eq!(
            *seen.borrow(),
            vec![FormPhase::Sending, FormPhase::Submitted, FormPhase::Idle]
        );
    }
}
