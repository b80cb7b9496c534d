//! Tests for core types.

use super::*;

// ============================================================================
// Item Tests
// ============================================================================

mod item {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(Item::new(10.0, 60.0).ratio(), 6.0);
        assert_eq!(Item::new(4.0, 0.0).ratio(), 0.0);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let err = Item::new(0.0, 10.0).validate(3).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.violation(),
            Some(&InputViolation::NonPositiveWeight {
                index: 3,
                weight: 0.0
            })
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = Item::new(-2.0, 10.0).validate(0).unwrap_err();
        assert!(matches!(
            err,
            AllocForgeError::InvalidInput(InputViolation::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = Item::new(10.0, -5.0).validate(1).unwrap_err();
        assert_eq!(
            err,
            AllocForgeError::InvalidInput(InputViolation::NegativeValue {
                index: 1,
                value: -5.0
            })
        );
    }

    #[test]
    fn test_zero_value_accepted() {
        assert!(Item::new(1.0, 0.0).validate(0).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Item::new(f64::NAN, 1.0).validate(0),
            Err(AllocForgeError::InvalidInput(
                InputViolation::NonFiniteWeight { .. }
            ))
        ));
        assert!(matches!(
            Item::new(1.0, f64::INFINITY).validate(0),
            Err(AllocForgeError::InvalidInput(
                InputViolation::NonFiniteValue { .. }
            ))
        ));
    }

    #[test]
    fn test_from_tuple() {
        let item: Item = (20.0, 100.0).into();
        assert_eq!(item, Item::new(20.0, 100.0));
    }
}

// ============================================================================
// ItemSet Tests
// ============================================================================

mod item_set {
    use super::*;

    #[test]
    fn test_from_pairs_preserves_order() {
        let set = ItemSet::from_pairs([(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set[0], Item::new(10.0, 60.0));
        assert_eq!(set[2], Item::new(30.0, 120.0));
    }

    #[test]
    fn test_totals() {
        let set = ItemSet::from_pairs([(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]);
        assert_eq!(set.total_weight(), 60.0);
        assert_eq!(set.total_value(), 280.0);
        assert_eq!(set.max_ratio(), Some(6.0));
        assert_eq!(ItemSet::new().max_ratio(), None);
    }

    #[test]
    fn test_from_parallel_mismatch() {
        let err = ItemSet::from_parallel(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err();
        assert_eq!(
            err.violation(),
            Some(&InputViolation::LengthMismatch {
                weights: 3,
                values: 1
            })
        );
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let set = ItemSet::from_pairs([(1.0, 1.0), (0.0, 1.0), (1.0, -1.0)]);
        let err = set.validate().unwrap_err();
        assert_eq!(
            err.violation(),
            Some(&InputViolation::NonPositiveWeight {
                index: 1,
                weight: 0.0
            })
        );
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(ItemSet::new().validate().is_ok());
    }

    #[test]
    fn test_slice_and_vec_views() {
        let mut set = ItemSet::from_pairs([(10.0, 60.0)]);
        set.push(Item::new(20.0, 100.0));

        assert_eq!(
            set.as_slice(),
            &[Item::new(10.0, 60.0), Item::new(20.0, 100.0)]
        );
        let items = set.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(ItemSet::from(items).total_value(), 160.0);
    }
}

// ============================================================================
// Capacity and Request Tests
// ============================================================================

mod capacity {
    use super::*;

    #[test]
    fn test_valid() {
        assert_eq!(Capacity::new(0.0).unwrap(), Capacity::ZERO);
        assert!(Capacity::new(0.0).unwrap().is_zero());
        assert_eq!(Capacity::try_from(7.5).unwrap().get(), 7.5);
        assert!(Capacity::try_from(-1.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            Capacity::new(-1.0).unwrap_err(),
            AllocForgeError::InvalidInput(InputViolation::NegativeCapacity(-1.0))
        );
        assert!(matches!(
            Capacity::new(f64::INFINITY),
            Err(AllocForgeError::InvalidInput(
                InputViolation::NonFiniteCapacity(_)
            ))
        ));
    }

    #[test]
    fn test_request_validate_checks_capacity_first() {
        let request = AllocationRequest::new(-1.0, vec![Item::new(0.0, 1.0)]);
        assert_eq!(
            request.validate().unwrap_err().violation(),
            Some(&InputViolation::NegativeCapacity(-1.0))
        );
    }

    #[test]
    fn test_request_from_parallel() {
        let request = AllocationRequest::from_parallel(50.0, &[10.0], &[60.0]).unwrap();
        assert_eq!(request.items(), &[Item::new(10.0, 60.0)]);
        assert_eq!(request.validate().unwrap().get(), 50.0);
    }
}

// ============================================================================
// AllocationResult Tests
// ============================================================================

mod allocation_result {
    use super::*;

    fn sample() -> AllocationResult {
        AllocationResult::new(
            Capacity::new(50.0).unwrap(),
            vec![
                ItemAllocation {
                    index: 0,
                    fraction: 1.0,
                    taken_weight: 10.0,
                    gained_value: 60.0,
                },
                ItemAllocation {
                    index: 1,
                    fraction: 1.0,
                    taken_weight: 20.0,
                    gained_value: 100.0,
                },
                ItemAllocation {
                    index: 2,
                    fraction: 20.0 / 30.0,
                    taken_weight: 20.0,
                    gained_value: 80.0,
                },
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_derived_totals() {
        let result = sample();
        assert_eq!(result.total_value, 240.0);
        assert_eq!(result.remaining_capacity, 0.0);
        assert_eq!(result.used_capacity(), 50.0);
        assert!(result.is_saturated());
        assert_eq!(result.utilization(), 1.0);
    }

    #[test]
    fn test_item_classification() {
        let result = sample();
        assert!(result.allocations[0].is_whole());
        assert!(result.allocations[2].is_partial());
        assert!(ItemAllocation::untouched(4).is_untouched());
        assert_eq!(result.fraction(5), None);
    }

    #[test]
    fn test_empty() {
        let result = AllocationResult::empty(Capacity::new(100.0).unwrap());
        assert_eq!(result.total_value, 0.0);
        assert_eq!(result.remaining_capacity, 100.0);
        assert!(result.fractions().is_empty());
        assert!(!result.is_saturated());
    }

    #[test]
    fn test_zero_capacity_utilization() {
        let result = AllocationResult::empty(Capacity::ZERO);
        assert_eq!(result.utilization(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_json() {
        let request: AllocationRequest = serde_json::from_str(
            r#"{"capacity": 50.0, "items": [{"weight": 10.0, "value": 60.0}]}"#,
        )
        .unwrap();
        assert_eq!(request.capacity, 50.0);
        assert_eq!(request.items.len(), 1);
    }
}
