// orderdesk/server/src/graphql/catalog.rs

use async_graphql::{Context, Object, Result, ID};
use orderdesk::catalog::{
  Activity, ActivityInput, ActivityPatch, CascadeReport, Package, PackageInput, PackagePatch, Service, ServiceInput,
  ServicePatch,
};

use super::{app_state, caller, gql};

#[derive(Default)]
pub struct CatalogQuery;

#[Object]
impl CatalogQuery {
  async fn services(&self, ctx: &Context<'_>) -> Result<Vec<Service>> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.services(&principal).map_err(gql)
  }

  async fn service(&self, ctx: &Context<'_>, id: ID) -> Result<Service> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.service(&principal, &id).map_err(gql)
  }

  /// All packages, or those of one service.
  async fn packages(&self, ctx: &Context<'_>, service_id: Option<ID>) -> Result<Vec<Package>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .catalog
      .packages(&principal, service_id.as_ref().map(|id| id.as_str()))
      .map_err(gql)
  }

  async fn package(&self, ctx: &Context<'_>, id: ID) -> Result<Package> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.package(&principal, &id).map_err(gql)
  }

  /// All activities, or those of one package.
  async fn activities(&self, ctx: &Context<'_>, package_id: Option<ID>) -> Result<Vec<Activity>> {
    let principal = caller(ctx)?;
    app_state(ctx)?
      .catalog
      .activities(&principal, package_id.as_ref().map(|id| id.as_str()))
      .map_err(gql)
  }
}

#[derive(Default)]
pub struct CatalogMutation;

#[Object]
impl CatalogMutation {
  async fn create_service(&self, ctx: &Context<'_>, input: ServiceInput) -> Result<Service> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.create_service(&principal, input).map_err(gql)
  }

  async fn update_service(&self, ctx: &Context<'_>, id: ID, input: ServicePatch) -> Result<Service> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.update_service(&principal, &id, input).map_err(gql)
  }

  /// Removes the service, its packages and their activities.
  async fn delete_service(&self, ctx: &Context<'_>, id: ID) -> Result<CascadeReport> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.delete_service(&principal, &id).map_err(gql)
  }

  async fn create_package(&self, ctx: &Context<'_>, input: PackageInput) -> Result<Package> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.create_package(&principal, input).map_err(gql)
  }

  async fn update_package(&self, ctx: &Context<'_>, id: ID, input: PackagePatch) -> Result<Package> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.update_package(&principal, &id, input).map_err(gql)
  }

  /// Removes the package and its activities.
  async fn delete_package(&self, ctx: &Context<'_>, id: ID) -> Result<CascadeReport> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.delete_package(&principal, &id).map_err(gql)
  }

  async fn create_activity(&self, ctx: &Context<'_>, input: ActivityInput) -> Result<Activity> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.create_activity(&principal, input).map_err(gql)
  }

  async fn update_activity(&self, ctx: &Context<'_>, id: ID, input: ActivityPatch) -> Result<Activity> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.update_activity(&principal, &id, input).map_err(gql)
  }

  async fn delete_activity(&self, ctx: &Context<'_>, id: ID) -> Result<CascadeReport> {
    let principal = caller(ctx)?;
    app_state(ctx)?.catalog.delete_activity(&principal, &id).map_err(gql)
  }
}
