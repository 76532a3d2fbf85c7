use crate::srv::ServiceEndpoint;

pub const SCHEMA_VERSION: &str = "1.1";
pub const SOCKET_TYPE_SSL: &str = "SSL";
pub const AUTH_PASSWORD_CLEARTEXT: &str = "password-cleartext";
pub const USERNAME_LOCALPART: &str = "%EMAILLOCALPART%";

/// Which side of the mail flow a server handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Incoming,
    Outgoing,
}

impl Role {
    /// SRV service label advertising this role over implicit TLS.
    #[must_use]
    pub fn service(self) -> &'static str {
        match self {
            Role::Incoming => "imaps",
            Role::Outgoing => "submission",
        }
    }

    /// Value of the server element's `type` attribute.
    #[must_use]
    pub fn protocol(self) -> &'static str {
        match self {
            Role::Incoming => "imap",
            Role::Outgoing => "smtp",
        }
    }

    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            Role::Incoming => "incomingServer",
            Role::Outgoing => "outgoingServer",
        }
    }
}

/// Connection settings for one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub role: Role,
    pub kind: &'static str,
    pub endpoint: ServiceEndpoint,
    pub socket_type: &'static str,
    pub authentication: &'static str,
    pub username: &'static str,
}

impl ServerDescriptor {
    #[must_use]
    pub fn new(role: Role, endpoint: ServiceEndpoint) -> Self {
        Self {
            role,
            kind: role.protocol(),
            endpoint,
            socket_type: SOCKET_TYPE_SSL,
            authentication: AUTH_PASSWORD_CLEARTEXT,
            username: USERNAME_LOCALPART,
        }
    }
}

/// The `emailProvider` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRecord {
    pub id: String,
    pub domain: String,
    pub display_name: String,
    pub display_short_name: String,
    pub incoming: Vec<ServerDescriptor>,
    pub outgoing: Vec<ServerDescriptor>,
}

impl ProviderRecord {
    /// A provider named after `domain` in every identifying field.
    #[must_use]
    pub fn for_domain(
        domain: &str,
        incoming: ServerDescriptor,
        outgoing: ServerDescriptor,
    ) -> Self {
        Self {
            id: domain.to_string(),
            domain: domain.to_string(),
            display_name: domain.to_string(),
            display_short_name: domain.to_string(),
            incoming: vec![incoming],
            outgoing: vec![outgoing],
        }
    }
}

/// The `clientConfig` root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    pub version: &'static str,
    pub providers: Vec<ProviderRecord>,
}
