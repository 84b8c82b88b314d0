use anyhow::anyhow;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use std::fmt::Debug;

/// Maps an `InvokeModel` SDK error to a single actionable message.
pub(crate) fn invoke_request_error<R>(
    err: SdkError<InvokeModelError, R>,
    model_id: &str,
) -> anyhow::Error
where
    R: Debug + Send + Sync + 'static,
{
    if let Some(service_err) = err.as_service_error() {
        if service_err.is_access_denied_exception() {
            return anyhow!(
                "Access denied invoking model '{}'. \
                 Check the AWS credential chain and that Bedrock access to this model is enabled.",
                model_id
            );
        }
        if service_err.is_resource_not_found_exception() {
            return anyhow!(
                "Model '{}' was not found. \
                 Check MODEL_ID and that the model is available in the configured AWS_REGION.",
                model_id
            );
        }
        if service_err.is_throttling_exception() {
            return anyhow!(
                "Bedrock throttled the request for model '{}'. Try again later.",
                model_id
            );
        }
        if service_err.is_model_timeout_exception() || service_err.is_model_not_ready_exception() {
            return anyhow!(
                "Model '{}' did not answer in time. Try again later.",
                model_id
            );
        }
        if service_err.is_validation_exception() {
            return anyhow!(
                "Bedrock rejected the request body for model '{}': {}",
                model_id,
                DisplayErrorContext(&err)
            );
        }
    }

    match &err {
        SdkError::TimeoutError(_) => anyhow!(
            "Request timed out while invoking model '{}'. Check network connectivity.",
            model_id
        ),
        SdkError::DispatchFailure(failure) if failure.is_timeout() => anyhow!(
            "Request timed out while invoking model '{}'. Check network connectivity.",
            model_id
        ),
        SdkError::DispatchFailure(_) => anyhow!(
            "Failed to reach the Bedrock endpoint while invoking model '{}'. \
             Check AWS_REGION and network connectivity.",
            model_id
        ),
        _ => anyhow!(
            "An error occurred while invoking model '{}': {}",
            model_id,
            DisplayErrorContext(&err)
        ),
    }
}
