//! Object-model plumbing shared by the automation objects.

/// Service identification of an automation object.
///
/// Every object exposed to macro code reports an implementation name and the
/// service names it supports; hosts use them to register and look up
/// objects.
pub trait AutomationObject {
    /// Implementation name of the object.
    fn service_impl_name(&self) -> &'static str;

    /// Service names the object supports.
    fn service_names(&self) -> &'static [&'static str];

    /// Whether the object supports the named service.
    fn supports_service(&self, name: &str) -> bool {
        self.service_names().contains(&name)
    }
}

/// Execution context handed to every automation object.
#[derive(Debug, Clone)]
pub struct AutomationContext {
    application_name: String,
}

impl Default for AutomationContext {
    fn default() -> Self {
        Self {
            application_name: "Word".to_string(),
        }
    }
}

impl AutomationContext {
    /// Create a context for the named host application.
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    /// Name of the host application.
    #[inline]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }
}
