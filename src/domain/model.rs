use crate::utils::error::{FunnelError, Result};
use crate::utils::validation::{
    validate_email, validate_min_length, validate_required_option, validate_required_text, Validate,
};
use serde::{Deserialize, Serialize};

/// A tutoring subject as published by the content API.
///
/// Immutable once fetched; the funnel selects subjects by value but they are
/// never edited client-side. Numeric ids coming off the wire are stringified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A purchasable session bundle.
///
/// Prices are whole currency units. `original_price`, when present, is the
/// pre-discount price and must be >= `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sessions: u32,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub recommended: bool,
}

impl Package {
    /// The standard three-tier catalog offered on the package step.
    ///
    /// At most one entry carries the `popular` flag, by convention.
    pub fn standard_catalog() -> Vec<Package> {
        vec![
            Package {
                id: "starter".to_string(),
                name: "Starter".to_string(),
                description: "Perfect for trying out our platform".to_string(),
                sessions: 4,
                price: 120,
                original_price: Some(160),
                features: vec![
                    "4 one-on-one sessions".to_string(),
                    "Basic study materials".to_string(),
                    "Progress tracking".to_string(),
                    "Email support".to_string(),
                    "Flexible scheduling".to_string(),
                ],
                popular: false,
                recommended: false,
            },
            Package {
                id: "popular".to_string(),
                name: "Most Popular".to_string(),
                description: "Best value for consistent learning".to_string(),
                sessions: 12,
                price: 324,
                original_price: Some(480),
                features: vec![
                    "12 one-on-one sessions".to_string(),
                    "Premium study materials".to_string(),
                    "Advanced progress tracking".to_string(),
                    "Priority support".to_string(),
                    "Homework assistance".to_string(),
                    "Exam preparation".to_string(),
                    "Parent progress reports".to_string(),
                ],
                popular: true,
                recommended: true,
            },
            Package {
                id: "intensive".to_string(),
                name: "Intensive".to_string(),
                description: "Maximum learning acceleration".to_string(),
                sessions: 24,
                price: 600,
                original_price: Some(960),
                features: vec![
                    "24 one-on-one sessions".to_string(),
                    "All premium materials".to_string(),
                    "Dedicated learning coach".to_string(),
                    "24/7 priority support".to_string(),
                    "Custom curriculum".to_string(),
                    "Weekly progress calls".to_string(),
                    "College prep assistance".to_string(),
                    "Guaranteed results".to_string(),
                ],
                popular: false,
                recommended: false,
            },
        ]
    }
}

/// The three funnel steps, in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SubjectSelection,
    PackageSelection,
    Checkout,
}

/// Three-state result of a remote fetch.
///
/// Exactly one state holds at any time; the rendering layer matches on it
/// instead of juggling separate loading/error booleans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Remote<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Remote<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Remote::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Price breakdown for a selected package, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriceQuote {
    pub discount: i64,
    pub discount_percent: i64,
    pub per_session: i64,
    pub tax: i64,
    pub total: i64,
}

/// Payment choice, tagged on the wire as `paymentMethod`.
///
/// Card sub-fields stay optional strings here; which of them are required is
/// decided by validation keyed on the active variant, and the submitter
/// forwards whatever is present without any card-format checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod", rename_all = "lowercase")]
pub enum Payment {
    Card {
        #[serde(rename = "cardNumber", skip_serializing_if = "Option::is_none")]
        card_number: Option<String>,
        #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
        expiry_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cvv: Option<String>,
        #[serde(rename = "billingAddress", skip_serializing_if = "Option::is_none")]
        billing_address: Option<String>,
    },
    Paypal,
}

/// The checkout form as filled in by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub student_age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub goals: String,
    #[serde(flatten)]
    pub payment: Payment,
    pub agree_terms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agree_newsletter: Option<bool>,
}

impl Validate for OrderForm {
    fn validate(&self) -> Result<()> {
        validate_required_text("firstName", &self.first_name)?;
        validate_required_text("lastName", &self.last_name)?;
        validate_email("email", &self.email)?;
        validate_required_text("phone", &self.phone)?;
        validate_required_text("studentAge", &self.student_age)?;
        validate_required_text("goals", &self.goals)?;

        if !self.agree_terms {
            return Err(FunnelError::InvalidField {
                field: "agreeTerms".to_string(),
                reason: "You must agree to the terms".to_string(),
            });
        }

        // Required-ness of the payment sub-fields is keyed on the variant.
        match &self.payment {
            Payment::Card {
                card_number,
                expiry_date,
                cvv,
                ..
            } => {
                let number = validate_required_option("cardNumber", card_number)?;
                validate_min_length("cardNumber", number, 4)?;
                validate_required_option("expiryDate", expiry_date)?;
                validate_required_option("cvv", cvv)?;
            }
            Payment::Paypal => {}
        }

        Ok(())
    }
}

/// Denormalized order payload sent to the submit endpoint.
///
/// The subject and package are copied in by id and display name at build time,
/// so clearing the selections afterwards cannot alter a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(flatten)]
    pub form: OrderForm,
    pub package_id: String,
    pub package_name: String,
    pub subject_id: String,
    pub subject_name: String,
}

impl OrderSubmission {
    pub fn snapshot(form: OrderForm, subject: &Subject, package: &Package) -> Self {
        Self {
            form,
            package_id: package.id.clone(),
            package_name: package.name.clone(),
            subject_id: subject.id.clone(),
            subject_name: subject.title.clone(),
        }
    }
}

/// Identifier assigned to a persisted order; the API may answer with either
/// a numeric post id or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

/// Successful response from the order submit endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderConfirmation {
    pub ok: bool,
    pub order_id: OrderId,
}
