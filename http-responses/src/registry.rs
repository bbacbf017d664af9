//! Identifier-keyed table of status constructors.
//!
//! Built once, on first access, from [`Status::ALL`]. Each entry is keyed by
//! the identifier derived from its reason phrase and also indexed by code.
//! After construction the registry is only ever reachable through
//! `&'static Registry`.

use crate::error::RegistryError;
use crate::identifier::to_identifier;
use crate::response::{Response, create};
use crate::status::Status;

use common::{ErrorLocation, HttpStatusCode};

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, info, trace, warn};
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::initialize);

/// The process-wide registry, built on first call.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Callable bound to one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConstructor {
    identifier: String,
    status: Status,
}

impl StatusConstructor {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn http_status(&self) -> HttpStatusCode {
        self.status.http_status()
    }

    pub fn reason_phrase(&self) -> &'static str {
        self.status.reason_phrase()
    }

    /// Build a fresh response; `None` uses the standard reason phrase.
    #[track_caller]
    pub fn call(&self, custom_message: Option<&str>) -> Response {
        create(
            self.status.code(),
            custom_message.unwrap_or(self.status.reason_phrase()),
        )
    }
}

#[derive(Debug)]
pub struct Registry {
    constructors: Vec<StatusConstructor>,
    by_identifier: HashMap<String, usize>,
    by_code: HashMap<u16, usize>,
}

impl Registry {
    fn initialize() -> Self {
        Self::from_statuses(Status::ALL)
    }

    /// Duplicate identifiers keep the first registration.
    pub(crate) fn from_statuses(statuses: &[Status]) -> Self {
        let mut registry = Registry {
            constructors: Vec::with_capacity(statuses.len()),
            by_identifier: HashMap::with_capacity(statuses.len()),
            by_code: HashMap::with_capacity(statuses.len()),
        };

        for &status in statuses {
            let identifier = to_identifier(status.reason_phrase());

            match registry.by_identifier.entry(identifier.clone()) {
                Entry::Occupied(existing) => {
                    warn!(
                        "Identifier {identifier} for {status} already bound to {}, skipping",
                        registry.constructors[*existing.get()].status
                    );
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(registry.constructors.len());
                }
            }

            registry
                .by_code
                .entry(status.code())
                .or_insert(registry.constructors.len());

            debug!("Registered {identifier} -> {status} ({:?})", status.class());
            registry.constructors.push(StatusConstructor { identifier, status });
        }

        info!(
            "Status registry initialized with {} constructors",
            registry.constructors.len()
        );

        registry
    }

    pub fn get(&self, identifier: &str) -> Option<&StatusConstructor> {
        self.by_identifier
            .get(identifier)
            .map(|&index| &self.constructors[index])
    }

    pub fn by_code(&self, code: u16) -> Option<&StatusConstructor> {
        self.by_code.get(&code).map(|&index| &self.constructors[index])
    }

    #[track_caller]
    pub fn lookup(&self, identifier: &str) -> Result<&StatusConstructor, RegistryError> {
        let location = ErrorLocation::caller();

        self.get(identifier).ok_or_else(|| {
            trace!("No constructor registered for {identifier}");
            RegistryError::UnknownIdentifier {
                identifier: identifier.to_string(),
                location,
            }
        })
    }

    #[track_caller]
    pub fn lookup_code(&self, code: u16) -> Result<&StatusConstructor, RegistryError> {
        let location = ErrorLocation::caller();

        self.by_code(code).ok_or_else(|| {
            trace!("No constructor registered for code {code}");
            RegistryError::UnknownCode { code, location }
        })
    }

    /// Look up `identifier` and call it in one step.
    #[track_caller]
    pub fn respond(
        &self,
        identifier: &str,
        custom_message: Option<&str>,
    ) -> Result<Response, RegistryError> {
        let constructor = self.lookup(identifier)?;
        Ok(constructor.call(custom_message))
    }

    /// Constructors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusConstructor> {
        self.constructors.iter()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
