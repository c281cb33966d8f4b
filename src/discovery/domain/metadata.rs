//! Application metadata attached to a discovery record.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for the application a discovery record belongs to.
///
/// Metadata is written once when the record is created. Values supplied on
/// later saves are discarded by the record merger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryMetadata {
    application_name: String,
    business_application: String,
    business_service: String,
    template: String,
    title: String,
    #[serde(rename = "type")]
    kind: String,
}

impl DiscoveryMetadata {
    /// Creates metadata for the named application with empty remaining
    /// fields.
    #[must_use]
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            ..Self::default()
        }
    }

    /// Sets the business application identifier.
    #[must_use]
    pub fn with_business_application(mut self, value: impl Into<String>) -> Self {
        self.business_application = value.into();
        self
    }

    /// Sets the business service identifier.
    #[must_use]
    pub fn with_business_service(mut self, value: impl Into<String>) -> Self {
        self.business_service = value.into();
        self
    }

    /// Sets the dashboard template name.
    #[must_use]
    pub fn with_template(mut self, value: impl Into<String>) -> Self {
        self.template = value.into();
        self
    }

    /// Sets the dashboard title.
    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    /// Sets the dashboard type (for example `Team` or `Product`).
    #[must_use]
    pub fn with_kind(mut self, value: impl Into<String>) -> Self {
        self.kind = value.into();
        self
    }

    /// Returns the application name.
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Returns the business application identifier.
    #[must_use]
    pub fn business_application(&self) -> &str {
        &self.business_application
    }

    /// Returns the business service identifier.
    #[must_use]
    pub fn business_service(&self) -> &str {
        &self.business_service
    }

    /// Returns the dashboard template name.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the dashboard title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the dashboard type.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}
