pub mod funnel;
pub mod guard;
pub mod pricing;
pub mod selection;

pub use crate::domain::model::{
    OrderConfirmation, OrderForm, OrderSubmission, Package, Payment, PriceQuote, Remote, Step,
    Subject,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, OrderGateway};
pub use crate::utils::error::Result;
