//! Steam catalog session
//!
//! [`CatalogSession`] is the capability the interaction flow holds for the
//! lifetime of one run. [`SteamCatalog`] implements it over an anonymous
//! `steam-vent` connection; tests substitute an in-memory fake.

pub mod product;

pub use product::ProductInfo;

use async_trait::async_trait;
use steam_vent::connection::Connection;
use steam_vent::proto::steammessages_clientserver_appinfo::{
    CMsgClientPICSProductInfoRequest, CMsgClientPICSProductInfoResponse,
    cmsg_client_picsproduct_info_request,
};
use steam_vent::{ConnectionTrait, ServerList};

use crate::error::{Result, catalog};

/// Remote catalog access: anonymous login/logout and product metadata lookup
#[async_trait]
pub trait CatalogSession: Send + Sync {
    /// Establish an anonymous session, resolving on the first of success or error
    async fn login(&mut self) -> Result<()>;

    /// Drop the session. Best effort, safe to call repeatedly.
    async fn logout(&mut self);

    /// Fetch raw product metadata for one app
    async fn fetch_product(&self, app_id: u32) -> Result<ProductInfo>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Disconnected,
    LoggedOn,
}

/// Anonymous Steam session backed by `steam-vent`
pub struct SteamCatalog {
    connection: Option<Connection>,
    state: SessionState,
}

impl Default for SteamCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamCatalog {
    pub fn new() -> Self {
        Self {
            connection: None,
            state: SessionState::Disconnected,
        }
    }

    pub fn is_logged_on(&self) -> bool {
        self.state == SessionState::LoggedOn && self.connection.is_some()
    }
}

#[async_trait]
impl CatalogSession for SteamCatalog {
    async fn login(&mut self) -> Result<()> {
        if self.is_logged_on() {
            tracing::debug!("Steam session already established");
            return Ok(());
        }

        let server_list = ServerList::discover()
            .await
            .map_err(|e| catalog::auth_failed(format!("CM server discovery failed: {e}")))?;

        let connection = Connection::anonymous(&server_list)
            .await
            .map_err(|e| catalog::auth_failed(e.to_string()))?;

        tracing::info!("Logged in to Steam anonymously");
        self.connection = Some(connection);
        self.state = SessionState::LoggedOn;
        Ok(())
    }

    async fn logout(&mut self) {
        if self.connection.take().is_some() {
            tracing::info!("Logged out of Steam");
        }
        self.state = SessionState::Disconnected;
    }

    async fn fetch_product(&self, app_id: u32) -> Result<ProductInfo> {
        let connection = self
            .connection
            .as_ref()
            .ok_or_else(|| catalog::lookup_failed(app_id, "not logged in to Steam"))?;

        let mut request = CMsgClientPICSProductInfoRequest::new();
        request
            .apps
            .push(cmsg_client_picsproduct_info_request::AppInfo {
                appid: Some(app_id),
                ..Default::default()
            });

        tracing::debug!(app_id, "Requesting product info");
        let response: CMsgClientPICSProductInfoResponse = connection
            .job(request)
            .await
            .map_err(|e| catalog::lookup_failed(app_id, e.to_string()))?;

        let app = response
            .apps
            .iter()
            .find(|entry| entry.appid() == app_id)
            .ok_or_else(|| catalog::lookup_failed(app_id, "no product info returned"))?;

        let raw_vdf = String::from_utf8_lossy(app.buffer());
        ProductInfo::from_vdf(app_id, &raw_vdf)
    }
}
