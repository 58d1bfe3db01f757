// orderdesk/src/wizard/mod.rs

//! The two-step campaign order wizard: client and company details first, then
//! service, package and campaign terms.

pub mod order;
pub mod rules;
pub mod steps;

pub use order::{build_campaign_order, total_amount, CampaignOrder, CampaignStatus};
pub use steps::{validate_client_details, validate_service_selection, ClientDetails, ServiceSelection};
