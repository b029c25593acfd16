use serde::{Deserialize, Serialize};

pub const SERVICE_API_VERSION: &str = "v1";
pub const SERVICE_KIND: &str = "Service";
pub const SERVICE_PORT: u16 = 80;
pub const DEFAULT_COUNT: usize = 500;

/// One generation pass, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    /// Empty means the services carry no selector.
    pub selector: String,
}

impl GenerationRequest {
    pub fn new(count: usize, selector: impl Into<String>) -> Self {
        Self {
            count,
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> Option<&str> {
        if self.selector.is_empty() {
            None
        } else {
            Some(&self.selector)
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, "")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub ports: Vec<ServicePort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePort {
    pub port: u16,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    pub app: String,
}

impl Service {
    /// A fixture service exposing TCP/80, optionally selecting pods by `app`.
    pub fn fixture(name: impl Into<String>, selector: Option<&str>) -> Self {
        Self {
            api_version: SERVICE_API_VERSION.to_string(),
            kind: SERVICE_KIND.to_string(),
            metadata: ObjectMeta { name: name.into() },
            spec: ServiceSpec {
                ports: vec![ServicePort {
                    port: SERVICE_PORT,
                    protocol: Protocol::Tcp,
                }],
                selector: selector.map(|app| Selector {
                    app: app.to_string(),
                }),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector_is_none() {
        assert_eq!(GenerationRequest::new(3, "").selector(), None);
        assert_eq!(GenerationRequest::new(3, "web").selector(), Some("web"));
    }

    #[test]
    fn test_default_request() {
        let request = GenerationRequest::default();
        assert_eq!(request.count, 500);
        assert!(request.selector().is_none());
    }

    #[test]
    fn test_fixture_service() {
        let service = Service::fixture("eager-curie", Some("web"));
        assert_eq!(service.api_version, "v1");
        assert_eq!(service.kind, "Service");
        assert_eq!(service.name(), "eager-curie");
        assert_eq!(service.spec.ports.len(), 1);
        assert_eq!(service.spec.ports[0].port, 80);
        assert_eq!(service.spec.ports[0].protocol, Protocol::Tcp);
        assert_eq!(service.spec.selector.as_ref().map(|s| s.app.as_str()), Some("web"));

        let bare = Service::fixture("eager-curie", None);
        assert!(bare.spec.selector.is_none());
    }
}
