// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tariff, extra-service and calendar catalogs.
//!
//! Staff maintain these; the pricing engine only ever receives read-only
//! snapshots. Extra services keep their insertion order, which is the
//! catalog order invoices are laid out in.

use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use tassbok_domain::{
    ExtraService, PricingCalendar, TariffRate, validate_extra_service, validate_tariff_rates,
};

/// In-memory catalog store for organization pricing configuration.
#[derive(Debug)]
pub struct CatalogStore {
    tariffs: RwLock<Vec<TariffRate>>,
    extras: RwLock<Vec<ExtraService>>,
    calendars: RwLock<HashMap<i64, PricingCalendar>>,
    next_rate_id: AtomicI64,
}

impl CatalogStore {
    /// Creates an empty catalog store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tariffs: RwLock::new(Vec::new()),
            extras: RwLock::new(Vec::new()),
            calendars: RwLock::new(HashMap::new()),
            next_rate_id: AtomicI64::new(1),
        }
    }

    /// Adds a tariff rate, assigning its id.
    ///
    /// The combined rate table is validated before anything is written, so
    /// an ambiguous active match can never be stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmbiguousRate` (wrapped) if the new rate
    /// conflicts with an existing active rate, or `LockPoisoned` if a
    /// previous writer panicked.
    pub fn add_rate(&self, mut rate: TariffRate) -> Result<i64, StoreError> {
        let mut tariffs = self
            .tariffs
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;

        let rate_id: i64 = self.next_rate_id.fetch_add(1, Ordering::SeqCst);
        rate.rate_id = Some(rate_id);

        let mut candidate: Vec<TariffRate> = tariffs.clone();
        candidate.push(rate.clone());
        validate_tariff_rates(&candidate)?;

        tariffs.push(rate);
        Ok(rate_id)
    }

    /// Activates or retires a tariff rate.
    ///
    /// Reactivation re-validates the table: a retired rate whose slot has
    /// been taken over cannot come back and create an ambiguous match.
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousRate` (wrapped) on a conflicting reactivation, or
    /// `LockPoisoned` if a previous writer panicked.
    pub fn set_rate_active(&self, rate_id: i64, is_active: bool) -> Result<(), StoreError> {
        let mut tariffs = self
            .tariffs
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;

        let mut candidate: Vec<TariffRate> = tariffs.clone();
        for rate in &mut candidate {
            if rate.rate_id == Some(rate_id) {
                rate.is_active = is_active;
            }
        }
        validate_tariff_rates(&candidate)?;

        *tariffs = candidate;
        Ok(())
    }

    /// Returns all rates owned by an organization.
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a previous writer panicked.
    pub fn rates_for_org(&self, org_id: i64) -> Result<Vec<TariffRate>, StoreError> {
        let tariffs = self
            .tariffs
            .read()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        Ok(tariffs
            .iter()
            .filter(|rate| rate.org_id == org_id)
            .cloned()
            .collect())
    }

    /// Adds an extra service to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty label or negative price, or
    /// `LockPoisoned` if a previous writer panicked.
    pub fn add_extra_service(&self, service: ExtraService) -> Result<(), StoreError> {
        validate_extra_service(&service)?;

        let mut extras = self
            .extras
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        extras.push(service);
        Ok(())
    }

    /// Activates or deactivates an extra service.
    ///
    /// Deactivation is an expected operational event: bookings that still
    /// reference the service keep settling, with the selection dropped and
    /// reported by the pricer.
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a previous writer panicked.
    pub fn set_extra_service_active(
        &self,
        service_id: i64,
        is_active: bool,
    ) -> Result<(), StoreError> {
        let mut extras = self
            .extras
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        for service in extras.iter_mut() {
            if service.service_id == service_id {
                service.is_active = is_active;
            }
        }
        Ok(())
    }

    /// Returns an organization's extra services in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a previous writer panicked.
    pub fn extras_for_org(&self, org_id: i64) -> Result<Vec<ExtraService>, StoreError> {
        let extras = self
            .extras
            .read()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        Ok(extras
            .iter()
            .filter(|service| service.org_id == org_id)
            .cloned()
            .collect())
    }

    /// Replaces an organization's pricing calendar.
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a previous writer panicked.
    pub fn set_calendar(&self, org_id: i64, calendar: PricingCalendar) -> Result<(), StoreError> {
        let mut calendars = self
            .calendars
            .write()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        calendars.insert(org_id, calendar);
        Ok(())
    }

    /// Returns an organization's pricing calendar, empty if none is set.
    ///
    /// # Errors
    ///
    /// Returns `LockPoisoned` if a previous writer panicked.
    pub fn calendar_for_org(&self, org_id: i64) -> Result<PricingCalendar, StoreError> {
        let calendars = self
            .calendars
            .read()
            .map_err(|err| StoreError::LockPoisoned(err.to_string()))?;
        Ok(calendars.get(&org_id).cloned().unwrap_or_default())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
