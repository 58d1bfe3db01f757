// orderdesk/src/auth/guard.rs

//! The permission table: which role, if any, each guarded operation requires.

use tracing::warn;

use crate::auth::principal::Principal;
use crate::error::{DeskError, DeskResult};
use crate::model::Role;

/// Every operation that requires an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  ListUsers,
  CreateUser,
  ListOrders,
  CreateOrder,
  UpdateOrderStatus,
  OrderStats,
  OrdersByDate,
  OrdersByStatus,
  OrdersByUser,
  ViewCatalog,
  ManageCatalog,
  ValidateWizardStep,
  PlaceCampaignOrder,
  ListCampaignOrders,
}

impl Operation {
  /// The declared role requirement. `None` admits any authenticated caller.
  pub const fn required_role(self) -> Option<Role> {
    match self {
      Operation::ListUsers
      | Operation::CreateUser
      | Operation::OrdersByDate
      | Operation::OrdersByStatus
      | Operation::OrdersByUser
      | Operation::ManageCatalog => Some(Role::Admin),
      Operation::ListOrders
      | Operation::CreateOrder
      | Operation::UpdateOrderStatus
      | Operation::OrderStats
      | Operation::ViewCatalog
      | Operation::ValidateWizardStep
      | Operation::PlaceCampaignOrder
      | Operation::ListCampaignOrders => None,
    }
  }
}

/// Turns the optional request principal into a hard requirement.
pub fn authenticate(principal: Option<&Principal>) -> DeskResult<&Principal> {
  principal.ok_or_else(|| DeskError::Unauthorized("Authentication required".to_string()))
}

/// Checks `principal` against the requirement of `operation`.
pub fn authorize(operation: Operation, principal: &Principal) -> DeskResult<()> {
  match operation.required_role() {
    None => Ok(()),
    Some(required) if principal.role == required => Ok(()),
    Some(required) => {
      warn!(
        ?operation,
        user_id = %principal.user_id,
        role = %principal.role,
        required = %required,
        "Operation denied by role guard."
      );
      Err(DeskError::Forbidden(format!("{} role required", required)))
    }
  }
}
