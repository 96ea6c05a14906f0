use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace, warn};

use crate::envelope;
use crate::error::Result;
use crate::ruleset::Ruleset;
use crate::snapshot::PathSnapshot;
use crate::transport::{Method, Request, Response, Transport, TransportError};

/// snapd system configuration, written by enable/disable.
pub const SYSTEM_CONF_PATH: &str = "/v2/snaps/system/conf";
/// The `experimental` subtree of the system configuration.
pub const EXPERIMENTAL_CONF_PATH: &str = "/v2/snaps/system/conf?keys=experimental";
/// The prompting rules collection.
pub const RULES_PATH: &str = "/v2/interfaces/requests/rules";

/// Configuration key toggling AppArmor prompting.
pub const PROMPTING_KEY: &str = "experimental.apparmor-prompting";

#[derive(Debug, Deserialize)]
struct ExperimentalConf {
    experimental: Experimental,
}

#[derive(Debug, Deserialize)]
struct Experimental {
    #[serde(rename = "apparmor-prompting")]
    apparmor_prompting: bool,
}

/// Translates permission operations into snapd REST calls.
///
/// Every operation performs exactly one exchange through the injected
/// [`Transport`] and holds no state between calls, so a server can be shared
/// freely between tasks.
///
/// # Example
///
/// ```no_run
/// # async fn run(transport: impl appperms::Transport) -> appperms::Result<()> {
/// use appperms::PermissionServer;
///
/// let server = PermissionServer::new(transport);
/// if !server.is_app_permissions_enabled().await? {
///     server.enable_app_permissions().await?;
/// }
/// for folder in server.list_personal_folders_permissions().await? {
///     println!("{folder}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PermissionServer<T> {
    transport: T,
}

impl<T: Transport> PermissionServer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Turns the permission-prompting mode on.
    pub async fn enable_app_permissions(&self) -> Result<()> {
        self.set_prompting(true).await
    }

    /// Turns the permission-prompting mode off.
    pub async fn disable_app_permissions(&self) -> Result<()> {
        self.set_prompting(false).await
    }

    /// Reports whether the permission-prompting mode is on.
    pub async fn is_app_permissions_enabled(&self) -> Result<bool> {
        let response = self.exchange(Request::get(EXPERIMENTAL_CONF_PATH)).await?;
        let conf: ExperimentalConf = envelope::decode_result("prompting state", &response.body)?;
        Ok(conf.experimental.apparmor_prompting)
    }

    /// Fetches every custom rule visible to the caller.
    pub async fn list_rules(&self) -> Result<Ruleset> {
        let response = self.exchange(Request::get(RULES_PATH)).await?;
        let rules: Ruleset = envelope::decode_result("rules", &response.body)?;
        debug!(count = rules.len(), "fetched custom rules");
        Ok(rules)
    }

    /// Reports whether any custom rule exists.
    pub async fn are_custom_rules_applied(&self) -> Result<bool> {
        Ok(!self.list_rules().await?.is_empty())
    }

    /// Lists the folder access granted or refused by custom rules.
    ///
    /// An empty rule list yields an empty vector.
    pub async fn list_personal_folders_permissions(&self) -> Result<Vec<PathSnapshot>> {
        Ok(self.list_rules().await?.path_snapshots())
    }

    /// Removes every custom rule of `snap` on `interface`.
    ///
    /// Returns the rules the daemon removed.
    pub async fn remove_app_permission(&self, snap: &str, interface: &str) -> Result<Ruleset> {
        let body = json!({
            "action": "remove",
            "remove-selector": {
                "snap": snap,
                "interface": interface,
            },
        });
        let response = self
            .exchange(Request::json(Method::Post, RULES_PATH, &body))
            .await?;
        let removed: Ruleset = envelope::decode_result("removed rules", &response.body)?;
        debug!(snap, interface, count = removed.len(), "removed custom rules");
        Ok(removed)
    }

    async fn set_prompting(&self, enabled: bool) -> Result<()> {
        let body = json!({ PROMPTING_KEY: enabled });
        let response = self
            .exchange(Request::json(Method::Put, SYSTEM_CONF_PATH, &body))
            .await?;
        if let Some(change) = envelope::change_id(&response.body) {
            debug!(enabled, change = %change, "prompting change accepted");
        }
        Ok(())
    }

    /// Sends one request and rejects non-2xx responses.
    async fn exchange(&self, request: Request) -> Result<Response, TransportError> {
        debug!(method = %request.method, path = %request.path, "sending request to snapd");

        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await.inspect_err(|err| {
            warn!(%method, %path, error = %err, "snapd request failed");
        })?;
        trace!(status = response.status, bytes = response.body.len(), "snapd responded");

        if response.is_success() {
            Ok(response)
        } else {
            let message = envelope::error_message(&response.body);
            warn!(%method, %path, status = response.status, %message, "snapd rejected request");
            Err(TransportError::Status {
                status: response.status,
                message,
            })
        }
    }
}
