use crate::core::selection::SelectionStore;
use crate::domain::model::Step;

/// Notice shown to the user when checkout is entered too early.
pub const CHECKOUT_NOTICE: &str = "Please select a subject and package before proceeding.";

/// Outcome of a guarded step entry.
///
/// A redirect is recovered by navigation and is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Granted,
    Redirect { to: Step, notice: &'static str },
}

/// Gates the checkout step on both selections being present.
///
/// Presence means a stored value exists; no field of the selected entity is
/// inspected. The check is pure, so callers re-evaluate it on every entry
/// attempt and whenever either selection changes.
pub fn checkout_access<S, P>(
    subject: &SelectionStore<S>,
    package: &SelectionStore<P>,
) -> GuardOutcome {
    if subject.is_selected() && package.is_selected() {
        GuardOutcome::Granted
    } else {
        tracing::warn!("checkout requested without both selections, redirecting");
        GuardOutcome::Redirect {
            to: Step::SubjectSelection,
            notice: CHECKOUT_NOTICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_subject_redirects() {
        let subjects: SelectionStore<&str> = SelectionStore::new();
        let mut packages = SelectionStore::new();
        packages.select("starter");

        assert_eq!(
            checkout_access(&subjects, &packages),
            GuardOutcome::Redirect {
                to: Step::SubjectSelection,
                notice: CHECKOUT_NOTICE,
            }
        );
    }

    #[test]
    fn test_missing_package_redirects() {
        let mut subjects = SelectionStore::new();
        subjects.select("Math");
        let packages: SelectionStore<&str> = SelectionStore::new();

        assert!(matches!(
            checkout_access(&subjects, &packages),
            GuardOutcome::Redirect { .. }
        ));
    }

    #[test]
    fn test_both_present_grants_access() {
        let mut subjects = SelectionStore::new();
        subjects.select("Math");
        let mut packages = SelectionStore::new();
        packages.select("starter");

        assert_eq!(checkout_access(&subjects, &packages), GuardOutcome::Granted);
    }

    #[test]
    fn test_clearing_a_selection_revokes_access() {
        let mut subjects = SelectionStore::new();
        subjects.select("Math");
        let mut packages = SelectionStore::new();
        packages.select("starter");
        assert_eq!(checkout_access(&subjects, &packages), GuardOutcome::Granted);

        packages.clear();
        assert!(matches!(
            checkout_access(&subjects, &packages),
            GuardOutcome::Redirect { .. }
        ));
    }
}
