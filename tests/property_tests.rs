use proptest::prelude::*;
use sovran_vocab::{any_cast, any_cast_ref, AnyValue, BadAnyCast, Optional, TypeInfo};

proptest! {
    #[test]
    fn prop_any_round_trips_value(v in any::<i64>(), s in ".*") {
        let value = AnyValue::new(v);
        prop_assert!(value.has_value());
        prop_assert_eq!(value.type_info(), TypeInfo::of::<i64>());
        prop_assert_eq!(any_cast::<i64>(&value), Ok(v));

        let text = AnyValue::new(s.clone());
        prop_assert_eq!(any_cast::<String>(&text), Ok(s));
    }

    #[test]
    fn prop_any_clear_resets_type(v in any::<u16>()) {
        let mut value = AnyValue::new(v);
        value.clear();
        prop_assert!(!value.has_value());
        prop_assert_eq!(value.type_info(), TypeInfo::void());
        prop_assert!(any_cast_ref::<u16>(Some(&value)).is_none());
    }

    #[test]
    fn prop_any_reassign_changes_type(v in any::<i32>(), s in "[a-z]{0,8}") {
        let mut value = AnyValue::new(v);
        value.set(s.clone());
        prop_assert_eq!(value.type_info(), TypeInfo::of::<String>());
        let mismatch = matches!(any_cast::<i32>(&value), Err(BadAnyCast::TypeMismatch { .. }));
        prop_assert!(mismatch);
        prop_assert!(any_cast_ref::<i32>(Some(&value)).is_none());
    }

    #[test]
    fn prop_any_copy_is_independent(v in any::<i32>(), w in any::<bool>()) {
        let mut first = AnyValue::new(v);
        let second = first.clone();
        first.set(w);
        prop_assert_eq!(any_cast::<i32>(&second), Ok(v));
        prop_assert_eq!(any_cast::<bool>(&first), Ok(w));
    }

    #[test]
    fn prop_any_take_moves(v in any::<i32>()) {
        let mut first = AnyValue::new(v);
        let second = first.take();
        prop_assert!(!first.has_value());
        prop_assert_eq!(any_cast::<i32>(&second), Ok(v));
    }

    #[test]
    fn prop_optional_set_then_get(v in any::<i32>()) {
        let mut slot = Optional::<i32>::new();
        prop_assert!(!slot.has_value());
        slot.set(v);
        prop_assert!(slot.has_value());
        prop_assert_eq!(slot.get_value(), Ok(&v));
    }

    #[test]
    fn prop_optional_value_or(v in proptest::option::of(any::<i32>()), d in any::<i32>()) {
        let slot = Optional::<i32>::from(v);
        prop_assert_eq!(slot.get_value_or(d), v.unwrap_or(d));
    }

    #[test]
    fn prop_optional_order_matches_option(a in proptest::option::of(any::<i8>()), b in proptest::option::of(any::<i8>())) {
        prop_assert_eq!(Optional::<i8>::from(a).cmp(&Optional::<i8>::from(b)), a.cmp(&b));
        prop_assert_eq!(Optional::<i8>::from(a) == Optional::<i8>::from(b), a == b);
    }
}
