//! Canonical flyweight enumerations over dynamic scalar values.
//!
//! An enumeration is a closed set of named scalars ([`EnumValue`]) declared once per marker
//! type ([`EnumType`]). An [`EnumRegistry`] validates requested values against that set and
//! hands out canonical [`Enum`] instances: asking twice for the same value of the same
//! enumeration yields the very same instance.
//!
//! Bitmask enumerations ([`MultiEnumType`]) build on top of this: their values are sets of
//! flags declared by a component enumeration, combined into a single integer and
//! manipulated with set operations (see [`multi`]).
//!
//! ```rust
//! use flyenum::{EnumRegistry, declare_enum, declare_multi_enum};
//!
//! declare_enum! {
//!     pub struct Role {
//!         USER = 1,
//!         EMPLOYEE = 2,
//!         ADMIN = 4,
//!     }
//! }
//!
//! declare_multi_enum! {
//!     pub struct Roles(Role);
//! }
//!
//! let registry = EnumRegistry::default();
//! let admin = registry.get::<Role>(4).unwrap();
//! assert_eq!(registry.get::<Role>(4).unwrap(), admin);
//!
//! let staff = registry.get_multi::<Roles>([2, 4]).unwrap();
//! let manager = registry.remove(&staff, &registry.get::<Role>(2).unwrap()).unwrap();
//! assert_eq!(manager, registry.get::<Roles>(4).unwrap());
//! ```

pub mod check;
pub mod collection;
pub mod conf;
pub mod error;
pub mod instance;
mod macros;
pub mod multi;
pub mod registry;
pub mod table;
pub mod types;
pub mod value;

pub use conf::RegistryConfig;
pub use error::{EnumError, EnumResult, InvalidReason};
pub use instance::Enum;
pub use registry::EnumRegistry;
pub use table::ValueTable;
pub use types::{EnumDescriptor, EnumType, MultiEnumType};
pub use value::{EnumValue, ValueKind};
