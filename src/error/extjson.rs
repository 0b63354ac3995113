use crate::error::{Error, ErrorKind};

impl Error {
    pub(crate) fn discriminator_payload(discriminator: &'static str, message: impl ToString) -> Self {
        let message = message.to_string();
        tracing::debug!(discriminator, %message, "rejecting extended JSON payload");
        ErrorKind::UnrecognizedDiscriminatorPayload {
            discriminator,
            message,
        }
        .into()
    }

    /// Rejects a payload whose value failed to parse as its BSON type, keeping only the inner
    /// reason in the message.
    pub(crate) fn invalid_payload_value(discriminator: &'static str, err: Error) -> Self {
        let message = match err.kind {
            ErrorKind::ObjectId { kind } => kind.to_string(),
            ErrorKind::Decimal128 { kind } => kind.to_string(),
            ErrorKind::DateTime { kind } => kind.to_string(),
            other => other.to_string(),
        };
        Self::discriminator_payload(discriminator, message)
    }

    pub(crate) fn unsupported_number_shape(number: impl ToString) -> Self {
        ErrorKind::UnsupportedNumberShape {
            number: number.to_string(),
        }
        .into()
    }
}
