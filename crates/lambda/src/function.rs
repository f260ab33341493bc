use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, info_span, Instrument};

use flink_autostart_core::{ControlPlane, EventHandler};

/// Run one invocation inside its own span.
///
/// Always succeeds: the outcome is logged and dropped so the event source
/// never sees a failure it would redeliver.
pub async fn handle_invocation<C: ControlPlane>(
    handler: &EventHandler<C>,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    let outcome = handler.handle_value(payload).instrument(span.clone()).await;
    span.in_scope(|| info!(outcome = outcome.label(), "Invocation complete"));

    Ok(())
}
