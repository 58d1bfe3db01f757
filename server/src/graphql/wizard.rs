// orderdesk/server/src/graphql/wizard.rs

use async_graphql::{Context, Object, Result};
use orderdesk::{CampaignOrder, ClientDetails, FieldError, ServiceSelection};

use super::{app_state, caller, gql};

#[derive(Default)]
pub struct WizardQuery;

#[Object]
impl WizardQuery {
  /// Step-1 field errors. Empty when the step is complete.
  async fn validate_client_details(&self, ctx: &Context<'_>, input: ClientDetails) -> Result<Vec<FieldError>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .catalog
      .validate_client_details(&principal, &input)
      .map_err(gql)
  }

  /// Step-2 field errors. Empty when the wizard may be submitted.
  async fn validate_service_selection(&self, ctx: &Context<'_>, input: ServiceSelection) -> Result<Vec<FieldError>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .catalog
      .validate_service_selection(&principal, &input)
      .map_err(gql)
  }

  async fn campaign_orders(&self, ctx: &Context<'_>) -> Result<Vec<CampaignOrder>> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.campaign_orders(&principal).map_err(gql)
  }
}

#[derive(Default)]
pub struct WizardMutation;

#[Object]
impl WizardMutation {
  async fn place_campaign_order(
    &self,
    ctx: &Context<'_>,
    client: ClientDetails,
    selection: ServiceSelection,
  ) -> Result<CampaignOrder> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .catalog
      .place_campaign_order(&principal, client, selection)
      .map_err(gql)
  }
}
