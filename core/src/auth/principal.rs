// orderdesk/src/auth/principal.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Role;

/// The authenticated caller of one request, decoded from its session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
  pub user_id: Uuid,
  pub role: Role,
}

impl Principal {
  pub fn new(user_id: Uuid, role: Role) -> Self {
    Self { user_id, role }
  }

  pub fn is_admin(&self) -> bool {
    self.role.is_admin()
  }

  /// Admins may act on anything; everyone else only on what they own.
  pub fn can_act_for(&self, owner_id: Uuid) -> bool {
    self.is_admin() || self.user_id == owner_id
  }
}
