//! Static service and provider catalog.
//!
//! The catalog is immutable once built. Building it checks that every service
//! a provider claims exists, so eligibility lookups never dangle.

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

pub type ServiceId = u32;
pub type ProviderId = u32;

/// A bookable offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub icon: String,
    pub duration_minutes: u32,
    pub price: u32,
}

impl Service {
    pub fn new(
        id: ServiceId,
        name: impl Into<String>,
        icon: impl Into<String>,
        duration_minutes: u32,
        price: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            duration_minutes,
            price,
        }
    }
}

/// A staff member able to perform a subset of services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub initials: String,
    pub services: BTreeSet<ServiceId>,
}

impl Provider {
    pub fn new(
        id: ProviderId,
        name: impl Into<String>,
        initials: impl Into<String>,
        services: impl IntoIterator<Item = ServiceId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            initials: initials.into(),
            services: services.into_iter().collect(),
        }
    }

    pub fn can_perform(&self, service: ServiceId) -> bool {
        self.services.contains(&service)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    services: Vec<Service>,
    providers: Vec<Provider>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    services: Vec<Service>,
    providers: Vec<Provider>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and providers that reference
    /// unknown services.
    pub fn new(services: Vec<Service>, providers: Vec<Provider>) -> Result<Self, BookingError> {
        let mut service_ids = BTreeSet::new();
        for service in &services {
            if !service_ids.insert(service.id) {
                return Err(BookingError::InvalidRef(format!(
                    "duplicate service id {}",
                    service.id
                )));
            }
        }

        let mut provider_ids = BTreeSet::new();
        for provider in &providers {
            if !provider_ids.insert(provider.id) {
                return Err(BookingError::InvalidRef(format!(
                    "duplicate provider id {}",
                    provider.id
                )));
            }
            if let Some(missing) = provider.services.difference(&service_ids).next() {
                return Err(BookingError::InvalidRef(format!(
                    "provider `{}` references unknown service {}",
                    provider.name, missing
                )));
            }
        }

        Ok(Self {
            services,
            providers,
        })
    }

    /// The barbershop catalog the wizard ships with.
    pub fn barbershop() -> Self {
        Self {
            services: vec![
                Service::new(1, "Men's haircut", "✂️", 30, 450),
                Service::new(2, "Beard trim", "🪒", 20, 300),
                Service::new(3, "Haircut + beard", "💈", 45, 650),
                Service::new(4, "Kids' haircut", "👦", 25, 350),
                Service::new(5, "Eyebrow trim", "✨", 10, 150),
                Service::new(6, "Head shave", "🪮", 20, 400),
            ],
            providers: vec![
                Provider::new(1, "Jakub Černý", "JČ", [1, 2, 3, 4, 5, 6]),
                Provider::new(2, "Martin Král", "MK", [1, 2, 3, 6]),
                Provider::new(3, "Tomáš Dvořák", "TD", [1, 3, 4, 5]),
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, BookingError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.services, file.providers)
    }

    pub fn load(path: &Path) -> Result<Self, BookingError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn provider(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    /// Providers able to perform `service`, in catalog order. With no service
    /// selected every provider is listed.
    pub fn eligible_providers(&self, service: Option<ServiceId>) -> Vec<&Provider> {
        self.providers
            .iter()
            .filter(|provider| service.map_or(true, |id| provider.can_perform(id)))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::barbershop()
    }
}
