//! Mapping between kube-rs admission reviews and the Memcached policy.
//!
//! The host owns transport; it hands over a decoded `AdmissionReview` and
//! sends back whatever review these functions return.
//!
//! - `mutate`: runs the defaulter on CREATE and UPDATE and attaches a JSON patch
//! - `validate`: dispatches CREATE, UPDATE and DELETE to the validator

use kube::core::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use tracing::{debug, error, info, warn};

use super::defaulter::MemcachedDefaulter;
use super::error::{Error, Result};
use super::observer::AdmissionObserver;
use super::policies::ValidationResult;
use super::validator::MemcachedValidator;

/// Create a denial response with reason embedded in message.
/// kube-rs deny() only sets status.message, so we format as "[reason] message"
fn deny_with_reason(
    request: &AdmissionRequest<DynamicObject>,
    result: &ValidationResult,
) -> AdmissionResponse {
    let reason = result.reason.as_deref().unwrap_or("ValidationFailed");
    let message = result.message.as_deref().unwrap_or("Validation failed");
    AdmissionResponse::from(request).deny(format!("[{}] {}", reason, message))
}

/// Turn a review into a request, or an `invalid` response if it has none
fn extract_request(
    review: AdmissionReview<DynamicObject>,
) -> std::result::Result<AdmissionRequest<DynamicObject>, AdmissionReview<DynamicObject>> {
    let request: std::result::Result<AdmissionRequest<DynamicObject>, _> = review.try_into();
    request.map_err(|e| {
        error!(error = %e, "Failed to extract admission request");
        AdmissionResponse::invalid(format!("Invalid AdmissionReview: {}", e)).into_review()
    })
}

fn log_request(request: &AdmissionRequest<DynamicObject>) {
    debug!(
        uid = %request.uid,
        operation = ?request.operation,
        namespace = ?request.namespace,
        name = ?request.name,
        dry_run = request.dry_run,
        "Processing admission request"
    );
}

/// Handle a mutating admission review
pub fn mutate<O: AdmissionObserver>(
    defaulter: &MemcachedDefaulter<O>,
    review: AdmissionReview<DynamicObject>,
) -> AdmissionReview<DynamicObject> {
    let request = match extract_request(review) {
        Ok(request) => request,
        Err(invalid) => return invalid,
    };
    log_request(&request);

    match mutate_request(defaulter, &request) {
        Ok(response) => {
            info!(uid = %request.uid, "Admission request defaulted");
            response.into_review()
        }
        Err(e) => {
            warn!(uid = %request.uid, error = %e, "Defaulting failed");
            AdmissionResponse::from(&request)
                .deny(e.to_string())
                .into_review()
        }
    }
}

fn mutate_request<O: AdmissionObserver>(
    defaulter: &MemcachedDefaulter<O>,
    request: &AdmissionRequest<DynamicObject>,
) -> Result<AdmissionResponse> {
    let response = AdmissionResponse::from(request);

    // Only CREATE and UPDATE carry an object that can be mutated
    if !matches!(request.operation, Operation::Create | Operation::Update) {
        return Ok(response);
    }

    let mut object = request.object.clone().ok_or(Error::MissingObject("object"))?;
    let defaulted = defaulter.default_object(&mut object)?;
    if defaulted.is_empty() {
        return Ok(response);
    }

    Ok(response.with_patch(defaulted.patch)?)
}

/// Handle a validating admission review
pub fn validate<O: AdmissionObserver>(
    validator: &MemcachedValidator<O>,
    review: AdmissionReview<DynamicObject>,
) -> AdmissionReview<DynamicObject> {
    let request = match extract_request(review) {
        Ok(request) => request,
        Err(invalid) => return invalid,
    };
    log_request(&request);

    let result = match validate_request(validator, &request) {
        Ok(result) => result,
        Err(e) => {
            warn!(uid = %request.uid, error = %e, "Validation failed");
            return AdmissionResponse::from(&request)
                .deny(e.to_string())
                .into_review();
        }
    };

    if !result.allowed {
        warn!(uid = %request.uid, reason = ?result.reason, "Admission request denied");
        return deny_with_reason(&request, &result).into_review();
    }

    info!(uid = %request.uid, "Admission request allowed");
    let mut response = AdmissionResponse::from(&request);
    if !result.warnings.is_empty() {
        response.warnings = Some(result.warnings);
    }
    response.into_review()
}

fn validate_request<O: AdmissionObserver>(
    validator: &MemcachedValidator<O>,
    request: &AdmissionRequest<DynamicObject>,
) -> Result<ValidationResult> {
    let object = || request.object.as_ref().ok_or(Error::MissingObject("object"));
    let old_object = || {
        request
            .old_object
            .as_ref()
            .ok_or(Error::MissingObject("oldObject"))
    };

    match request.operation {
        Operation::Create => validator.validate_create_object(object()?),
        Operation::Update => validator.validate_update_object(old_object()?, object()?),
        // The object being deleted is sent as oldObject
        Operation::Delete => validator.validate_delete_object(old_object()?),
        // CONNECT is not registered for this resource
        _ => Ok(ValidationResult::allowed()),
    }
}
