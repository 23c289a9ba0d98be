use crate::core::guard::{checkout_access, GuardOutcome};
use crate::core::pricing;
use crate::core::selection::SelectionStore;
use crate::domain::model::{
    OrderConfirmation, OrderForm, OrderSubmission, Package, PriceQuote, Remote, Step, Subject,
};
use crate::domain::ports::{CatalogSource, OrderGateway};
use crate::utils::error::{FunnelError, Result};
use crate::utils::validation::Validate;

/// Drives one order through the three funnel steps.
///
/// Owns the two selection stores, the catalog fetch state and the in-flight
/// submit flag. The funnel is an explicitly owned value passed to whatever
/// renders the steps; there is no global selection state. All state starts
/// empty and lives for the session only.
pub struct Funnel<C: CatalogSource, G: OrderGateway> {
    catalog: C,
    gateway: G,
    subject: SelectionStore<Subject>,
    package: SelectionStore<Package>,
    subjects: Remote<Vec<Subject>>,
    submitting: bool,
}

impl<C: CatalogSource, G: OrderGateway> Funnel<C, G> {
    pub fn new(catalog: C, gateway: G) -> Self {
        Self {
            catalog,
            gateway,
            subject: SelectionStore::new(),
            package: SelectionStore::new(),
            subjects: Remote::Loading,
            submitting: false,
        }
    }

    /// Fetches the subject catalog, moving `subjects()` out of the loading
    /// state. A failure is stored for the rendering layer and logged, never
    /// swallowed; the user retries by re-triggering the load.
    pub async fn load_subjects(&mut self) -> &Remote<Vec<Subject>> {
        self.subjects = Remote::Loading;
        self.subjects = match self.catalog.fetch_subjects().await {
            Ok(subjects) => {
                tracing::info!("loaded {} subjects", subjects.len());
                Remote::Ready(subjects)
            }
            Err(e) => {
                tracing::error!("failed to load subjects: {}", e);
                Remote::Failed(e.to_string())
            }
        };
        &self.subjects
    }

    pub fn subjects(&self) -> &Remote<Vec<Subject>> {
        &self.subjects
    }

    pub fn choose_subject(&mut self, subject: Subject) {
        tracing::debug!("subject selected: {}", subject.title);
        self.subject.select(subject);
    }

    pub fn choose_package(&mut self, package: Package) {
        tracing::debug!("package selected: {}", package.name);
        self.package.select(package);
    }

    pub fn clear_subject(&mut self) {
        self.subject.clear();
    }

    pub fn clear_package(&mut self) {
        self.package.clear();
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.get()
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.get()
    }

    /// Evaluates entry to a step. Only checkout is gated; the guard runs on
    /// every call, so a cleared selection revokes access on the next event.
    pub fn enter(&self, step: Step) -> GuardOutcome {
        match step {
            Step::Checkout => checkout_access(&self.subject, &self.package),
            _ => GuardOutcome::Granted,
        }
    }

    /// Price breakdown for the currently selected package.
    pub fn quote(&self) -> PriceQuote {
        pricing::quote(self.package.get())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the form, snapshots the selections into an order payload and
    /// forwards it. Rejected while a previous submission is still in flight.
    ///
    /// The navigation guard keeps this unreachable without both selections;
    /// the checks here are the residual null-checks, not a second gate.
    pub async fn submit(&mut self, form: OrderForm) -> Result<OrderConfirmation> {
        if self.submitting {
            return Err(FunnelError::SubmissionPending);
        }

        let subject = self
            .subject
            .get()
            .ok_or(FunnelError::MissingSelection { which: "subject" })?;
        let package = self
            .package
            .get()
            .ok_or(FunnelError::MissingSelection { which: "package" })?;

        form.validate()?;
        let order = OrderSubmission::snapshot(form, subject, package);

        self.submitting = true;
        let result = self.gateway.submit(&order).await;
        self.submitting = false;

        match &result {
            Ok(confirmation) => {
                tracing::info!("order submitted: {:?}", confirmation.order_id);
            }
            Err(e) => {
                tracing::error!("order submission failed: {}", e);
            }
        }
        result
    }

    /// Starts another order: both selections are cleared. Nothing else ever
    /// expires them.
    pub fn reset(&mut self) {
        self.subject.clear();
        self.package.clear();
    }
}
