//! Preview lookup through the code host's deployment API.

use previewlink_core::{CodeHost, Lookup, NotFoundReason, PreviewRecord, Result};
use tracing::debug;

/// Deployment state that marks a usable preview.
const SUCCESS_STATE: &str = "success";

/// Preview of the single deployment created for `sha`.
///
/// Only an unambiguous deployment whose newest status is `success` and
/// carries an environment URL yields a record. The avatar is the status
/// creator's.
pub async fn deployment_preview(host: &dyn CodeHost, sha: &str) -> Result<Lookup<PreviewRecord>> {
    let deployments = host.get_deployments(sha).await?;

    let deployment = match deployments.as_slice() {
        [] => return Ok(Lookup::NotFound(NotFoundReason::NoDeployment)),
        [deployment] => deployment,
        many => {
            return Ok(Lookup::NotFound(NotFoundReason::AmbiguousDeployment {
                count: many.len(),
            }))
        }
    };

    let statuses = host.get_deployment_statuses(deployment.id).await?;
    let Some(status) = statuses.into_iter().next() else {
        return Ok(Lookup::NotFound(NotFoundReason::NoDeploymentStatus));
    };

    if status.state != SUCCESS_STATE {
        return Ok(Lookup::NotFound(NotFoundReason::DeploymentNotSuccessful {
            state: status.state,
        }));
    }

    let avatar = status.creator.and_then(|creator| creator.avatar_url);
    let record = status
        .environment_url
        .and_then(|url| PreviewRecord::new(url, avatar));

    match record {
        Some(record) => {
            debug!(
                deployment_id = deployment.id,
                url = record.url(),
                "Found deployment preview"
            );
            Ok(Lookup::Found(record))
        }
        None => Ok(Lookup::NotFound(NotFoundReason::NoEnvironmentUrl)),
    }
}
