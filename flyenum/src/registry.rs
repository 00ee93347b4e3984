//! The registry owning declared value tables and canonical instances.
//!
//! [`EnumRegistry`] is the only way to obtain an [`Enum`] instance. It keeps two caches:
//!
//! - Declared value tables, computed once per enumeration the first time they are needed.
//! - Canonical instances keyed by `(enumeration, value)`, created lazily and never evicted.
//!
//! Both caches are safe to share between threads. Racing first requests for the same key
//! always observe a single instance: the first writer wins and everyone else reads its entry.
use std::{any::TypeId, collections::HashMap, sync::Arc};

use dashmap::DashMap;
use log::{debug, info};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::{
    conf::RegistryConfig,
    error::{EnumError, EnumResult, InvalidReason},
    instance::{Enum, EnumCell},
    table::ValueTable,
    types::{EnumDescriptor, EnumType},
    value::EnumValue,
};

#[derive(Debug, PartialEq, Eq, Hash)]
struct InstanceKey {
    type_id: TypeId,
    value: EnumValue,
}

/// Central store of enumeration instances.
///
/// Example:
///
/// ```rust
/// # use flyenum::{declare_enum, EnumRegistry, EnumValue};
/// declare_enum! {
///     pub struct Status {
///         ACTIVE = "active",
///         BANNED = "banned",
///     }
/// }
///
/// let registry = EnumRegistry::default();
/// let active = registry.get::<Status>("active").unwrap();
/// assert_eq!(registry.get::<Status>("active").unwrap(), active);
/// assert_eq!(active.value(), &EnumValue::from("active"));
/// assert!(registry.get::<Status>("deleted").is_err());
/// ```
pub struct EnumRegistry {
    config: RegistryConfig,
    tables: DashMap<TypeId, Arc<ValueTable>>,
    instances: RwLock<HashMap<InstanceKey, Arc<EnumCell>>>,
}

impl EnumRegistry {
    /// Create a new, empty [`EnumRegistry`].
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            tables: DashMap::new(),
            instances: RwLock::new(HashMap::with_capacity(config.instance_capacity)),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of canonical instances created so far.
    pub fn cached_instances(&self) -> usize {
        self.instances.read().len()
    }

    /// Retrieve the canonical instance of `T` holding `value`.
    ///
    /// Fails with [`EnumError::InvalidValue`] if `value` is not declared by `T`. For bitmask
    /// enumerations (see [`crate::types::MultiEnumType`]) the value must instead be a
    /// non-negative integer whose every set bit is a declared flag.
    pub fn get<T: EnumType>(&self, value: impl Into<EnumValue>) -> EnumResult<Enum<T>> {
        self.resolve(&EnumDescriptor::of::<T>(), value.into())
            .map(Enum::from_cell)
    }

    /// Retrieve the canonical instance of the constant `name` of `T`.
    pub fn get_by_name<T: EnumType>(&self, name: &str) -> EnumResult<Enum<T>> {
        let table = self.available_values::<T>()?;
        let value = table.get(name)?.clone();
        self.get::<T>(value)
    }

    /// Canonical instances of every declared value of `T`, in declaration order.
    pub fn all<T: EnumType>(&self) -> EnumResult<Vec<Enum<T>>> {
        self.available_values::<T>()?
            .values()
            .map(|value| self.get::<T>(value))
            .collect()
    }

    /// The declared value table of `T`.
    ///
    /// For bitmask enumerations this lists only the composites `T` itself declares, which is
    /// often none; the individual flags are `available_values::<T::Flags>()`.
    ///
    /// Fails with [`EnumError::DuplicateValueSpecified`] if two constants of `T` share a value.
    pub fn available_values<T: EnumType>(&self) -> EnumResult<Arc<ValueTable>> {
        self.table_of(&EnumDescriptor::of::<T>())
    }

    /// Returns `true` if [`Self::get`] would accept `value` for `T`.
    ///
    /// Declaration errors are still reported as errors.
    pub fn is_valid_value<T: EnumType>(&self, value: impl Into<EnumValue>) -> EnumResult<bool> {
        match self.check(&EnumDescriptor::of::<T>(), value.into()) {
            Ok(_) => Ok(true),
            Err(EnumError::InvalidValue { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Like [`Self::is_valid_value`], but fails with [`EnumError::InvalidValue`] instead of
    /// returning `false`.
    pub fn check_value<T: EnumType>(&self, value: impl Into<EnumValue>) -> EnumResult<()> {
        self.check(&EnumDescriptor::of::<T>(), value.into())
            .map(|_| ())
    }

    /// Name of the constant declaring the value of `instance`.
    pub fn name_of<T: EnumType>(&self, instance: &Enum<T>) -> EnumResult<Option<&'static str>> {
        Ok(self.available_values::<T>()?.name_of(instance.value()))
    }

    pub(crate) fn resolve(
        &self,
        descriptor: &EnumDescriptor,
        value: EnumValue,
    ) -> EnumResult<Arc<EnumCell>> {
        let value = self.check(descriptor, value)?;
        Ok(self.canonicalize(descriptor, value))
    }

    fn check(&self, descriptor: &EnumDescriptor, value: EnumValue) -> EnumResult<EnumValue> {
        match descriptor.flag_source() {
            Some(flags) => self.check_bitmask(descriptor, &flags, value),
            None => self.check_declared(descriptor, value),
        }
    }

    fn check_declared(
        &self,
        descriptor: &EnumDescriptor,
        value: EnumValue,
    ) -> EnumResult<EnumValue> {
        let table = self.table_of(descriptor)?;
        if table.contains_value(&value) {
            Ok(value)
        } else {
            Err(EnumError::InvalidValue {
                enum_name: descriptor.name(),
                value,
                reason: InvalidReason::NotDeclared,
                available: table,
            })
        }
    }

    pub(crate) fn table_of(&self, descriptor: &EnumDescriptor) -> EnumResult<Arc<ValueTable>> {
        if let Some(table) = self.tables.get(&descriptor.type_id()) {
            return Ok(Arc::clone(table.value()));
        }

        // Declarations are user code, build outside of the map lock.
        let table = match ValueTable::from_declaration(descriptor) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                info!("Rejected declaration of enum `{}`: {}", descriptor.name(), err);
                return Err(err);
            }
        };

        let published = self
            .tables
            .entry(descriptor.type_id())
            .or_insert_with(|| {
                debug!(
                    "Declared values of enum `{}` computed: {}",
                    descriptor.name(),
                    table
                );
                table
            });
        Ok(Arc::clone(published.value()))
    }

    fn canonicalize(&self, descriptor: &EnumDescriptor, value: EnumValue) -> Arc<EnumCell> {
        let key = InstanceKey {
            type_id: descriptor.type_id(),
            value,
        };

        if let Some(cell) = self.instances.read().get(&key) {
            return Arc::clone(cell);
        }

        // Upgradable readers exclude each other, re-check before inserting.
        let instances = self.instances.upgradable_read();
        if let Some(cell) = instances.get(&key) {
            return Arc::clone(cell);
        }

        let mut instances = RwLockUpgradableReadGuard::upgrade(instances);
        let cell = Arc::new(EnumCell {
            enum_name: descriptor.name(),
            value: key.value.clone(),
        });
        debug!(
            "New instance of enum `{}` registered for value {}.",
            descriptor.name(),
            key.value
        );
        instances.insert(key, Arc::clone(&cell));
        cell
    }
}

impl Default for EnumRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl std::fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumRegistry")
            .field("config", &self.config)
            .field("tables", &self.tables.len())
            .field("instances", &self.cached_instances())
            .finish()
    }
}
