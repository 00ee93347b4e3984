use flyenum::{
    EnumError, EnumRegistry, EnumValue, InvalidReason, ValueKind, declare_enum,
    declare_multi_enum,
};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha20Rng;

declare_enum! {
    pub struct UserRole {
        USER = 1,
        EMPLOYEE = 2,
        ADMIN = 4,
    }
}

declare_multi_enum! {
    pub struct UserRoles(UserRole);
}

declare_enum! {
    pub struct Channel {
        EMAIL = 1,
        SMS = 2,
    }
}

declare_multi_enum! {
    pub struct Channels(Channel) {
        ALL = 3,
    }
}

const USER: i64 = 1;
const EMPLOYEE: i64 = 2;
const ADMIN: i64 = 4;

#[test]
fn flag_order_does_not_matter() {
    let registry = EnumRegistry::default();
    let a = registry.get_multi::<UserRoles>([USER, ADMIN]).unwrap();
    let b = registry.get_multi::<UserRoles>([ADMIN, USER]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.bitmask(), 5);
    assert_eq!(a.value(), &EnumValue::from(5));
}

#[test]
fn shuffled_arrays_resolve_to_one_instance() {
    let registry = EnumRegistry::default();
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    let expected = registry.get::<UserRoles>(7).unwrap();

    let mut flags = vec![USER, EMPLOYEE, ADMIN, USER];
    for _ in 0..16 {
        flags.shuffle(&mut rng);
        let got = registry.get_multi_by_array::<UserRoles>(&flags).unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn undeclared_bits_are_invalid() {
    let registry = EnumRegistry::default();
    let err = registry.get::<UserRoles>(8).unwrap_err();
    assert_eq!(
        err,
        EnumError::InvalidValue {
            enum_name: "UserRole",
            value: 8.into(),
            reason: InvalidReason::NotDeclared,
            available: registry.available_values::<UserRole>().unwrap(),
        }
    );

    // The first undeclared bit is the one reported.
    match registry.get::<UserRoles>(1 | 16 | 32).unwrap_err() {
        EnumError::InvalidValue { value, .. } => assert_eq!(value, EnumValue::from(16)),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn negative_bitmasks_are_invalid() {
    let registry = EnumRegistry::default();
    match registry.get::<UserRoles>(-1).unwrap_err() {
        EnumError::InvalidValue {
            enum_name, reason, ..
        } => {
            assert_eq!(enum_name, "UserRoles");
            assert_eq!(reason, InvalidReason::Negative);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn flags_must_be_integers() {
    let registry = EnumRegistry::default();
    let err = registry.get_multi::<UserRoles>(["4"]).unwrap_err();
    match err {
        EnumError::InvalidValue { reason, .. } => assert_eq!(
            reason,
            InvalidReason::WrongKind {
                expected: ValueKind::Int,
                found: ValueKind::Str,
            }
        ),
        other => panic!("unexpected error {other:?}"),
    }

    let roles = registry.get::<UserRoles>(0).unwrap();
    assert!(
        registry
            .contains_value(&roles, true)
            .unwrap_err()
            .is_invalid_value()
    );
    assert!(
        registry
            .add_value(&roles, 8)
            .unwrap_err()
            .is_invalid_value()
    );
}

#[test]
fn add_sets_flags() {
    let registry = EnumRegistry::default();
    let roles = registry.get_multi::<UserRoles>([USER, ADMIN]).unwrap();
    let employee = registry.get::<UserRole>(EMPLOYEE).unwrap();

    let all = registry.add(&roles, &employee).unwrap();
    assert_eq!(all.bitmask(), 7);

    let same = registry.add(&roles, &registry.get::<UserRole>(USER).unwrap()).unwrap();
    assert_eq!(same, roles);
    assert_eq!(same.equals(&roles), Ok(true));

    assert_eq!(registry.add_value(&roles, EMPLOYEE).unwrap(), all);
    assert_eq!(registry.add(&roles, &all).unwrap(), all);
}

#[test]
fn remove_clears_flags() {
    let registry = EnumRegistry::default();
    let roles = registry.get_multi::<UserRoles>([USER, ADMIN]).unwrap();
    let user = registry.get::<UserRole>(USER).unwrap();

    let admin_only = registry.remove(&roles, &user).unwrap();
    assert_eq!(admin_only, registry.get::<UserRoles>(ADMIN).unwrap());
    assert_eq!(registry.remove_value(&roles, USER).unwrap(), admin_only);

    let nothing = registry.remove(&roles, &roles).unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn intersect_keeps_common_flags() {
    let registry = EnumRegistry::default();
    let a = registry.get_multi::<UserRoles>([USER, EMPLOYEE]).unwrap();
    let b = registry.get_multi::<UserRoles>([EMPLOYEE, ADMIN]).unwrap();

    let common = registry.intersect(&a, &b).unwrap();
    assert_eq!(common.bitmask(), EMPLOYEE);
    assert_eq!(registry.intersect_value(&a, ADMIN).unwrap().bitmask(), 0);
    assert_eq!(registry.intersect_value(&a, USER).unwrap().bitmask(), USER);
}

#[test]
fn contains_checks_every_bit() {
    let registry = EnumRegistry::default();
    let roles = registry.get_multi::<UserRoles>([USER, ADMIN]).unwrap();

    let user = registry.get::<UserRole>(USER).unwrap();
    let employee = registry.get::<UserRole>(EMPLOYEE).unwrap();
    assert_eq!(registry.contains(&roles, &user), Ok(true));
    assert_eq!(registry.contains(&roles, &employee), Ok(false));
    assert_eq!(registry.contains_value(&roles, ADMIN), Ok(true));

    let subset = registry.get::<UserRoles>(ADMIN).unwrap();
    let superset = registry.get::<UserRoles>(7).unwrap();
    assert_eq!(registry.contains(&roles, &subset), Ok(true));
    assert_eq!(registry.contains(&roles, &superset), Ok(false));
}

#[test]
fn empty_bitmask() {
    let registry = EnumRegistry::default();
    let empty = registry.get_multi_by_array::<UserRoles>(&[]).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.bitmask(), 0);
    assert!(registry.values(&empty).unwrap().is_empty());
    assert_eq!(registry.get::<UserRoles>(0).unwrap(), empty);
}

#[test]
fn empty_flag_list() {
    let registry = EnumRegistry::default();
    let empty = registry
        .get_multi::<UserRoles>(std::iter::empty::<i64>())
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty, registry.get_multi_by_array::<UserRoles>(&[]).unwrap());
    assert!(registry.enums(&empty).unwrap().is_empty());
}

#[test]
fn validity_queries_check_bitmasks() {
    let registry = EnumRegistry::default();
    assert_eq!(registry.is_valid_value::<UserRoles>(5), Ok(true));
    assert_eq!(registry.is_valid_value::<UserRoles>(USER), Ok(true));
    assert_eq!(registry.is_valid_value::<UserRoles>(0), Ok(true));
    assert_eq!(registry.is_valid_value::<UserRoles>(8), Ok(false));
    assert_eq!(registry.is_valid_value::<UserRoles>(-1), Ok(false));
    assert_eq!(registry.is_valid_value::<UserRoles>("1"), Ok(false));

    assert_eq!(registry.check_value::<UserRoles>(USER), Ok(()));
    assert_eq!(registry.check_value::<UserRoles>(7), Ok(()));
    assert_eq!(
        registry.check_value::<UserRoles>(9).unwrap_err(),
        registry.get::<UserRoles>(9).unwrap_err()
    );
    // Validation alone never creates instances.
    assert_eq!(registry.cached_instances(), 0);
}

#[test]
fn available_values_of_bitmask_enums() {
    let registry = EnumRegistry::default();
    assert!(registry.available_values::<UserRoles>().unwrap().is_empty());
    assert_eq!(
        registry
            .available_values::<Channels>()
            .unwrap()
            .names()
            .collect::<Vec<_>>(),
        ["ALL"]
    );
    assert_eq!(registry.available_values::<UserRole>().unwrap().len(), 3);
}

#[test]
fn enums_lists_component_instances() {
    let registry = EnumRegistry::default();
    let roles = registry.get_multi::<UserRoles>([ADMIN, USER]).unwrap();
    let flags = registry.enums(&roles).unwrap();
    assert_eq!(
        flags,
        [
            registry.get::<UserRole>(USER).unwrap(),
            registry.get::<UserRole>(ADMIN).unwrap(),
        ]
    );
    for flag in &flags {
        assert_eq!(registry.contains(&roles, flag), Ok(true));
    }
}

#[test]
fn values_lists_set_flags_in_declaration_order() {
    let registry = EnumRegistry::default();
    let roles = registry.get_multi::<UserRoles>([ADMIN, USER]).unwrap();
    let values = registry.values(&roles).unwrap();
    assert_eq!(
        values.iter().collect::<Vec<_>>(),
        [("USER", &EnumValue::from(1)), ("ADMIN", &EnumValue::from(4))]
    );
}

#[test]
fn mixing_unrelated_enums_fails() {
    let registry = EnumRegistry::default();
    let roles = registry.get::<UserRoles>(1).unwrap();
    let channels = registry.get::<Channels>(1).unwrap();
    let sms = registry.get::<Channel>(2).unwrap();

    assert!(
        roles
            .equals(&channels)
            .unwrap_err()
            .is_operation_supported_only_for_same_enum()
    );

    let errors = [
        registry.contains(&roles, &channels).unwrap_err(),
        registry.contains(&roles, &sms).unwrap_err(),
        registry.add(&roles, &channels).map(|_| ()).unwrap_err(),
        registry.remove(&roles, &sms).map(|_| ()).unwrap_err(),
        registry.intersect(&roles, &channels).map(|_| ()).unwrap_err(),
    ];
    for err in errors {
        assert!(err.is_operation_supported_only_for_same_enum(), "{err}");
    }
}

#[test]
fn declared_composites_are_listed_but_not_required() {
    let registry = EnumRegistry::default();
    let all = registry.get_by_name::<Channels>("ALL").unwrap();
    assert_eq!(all.bitmask(), 3);
    assert_eq!(registry.name_of(&all), Ok(Some("ALL")));

    let email = registry.get::<Channels>(1).unwrap();
    assert_eq!(registry.name_of(&email), Ok(None));
    assert_eq!(
        registry.values(&all).unwrap().names().collect::<Vec<_>>(),
        ["EMAIL", "SMS"]
    );
}
