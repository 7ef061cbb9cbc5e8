use madori_core::{apply_filter, FilterCriteria, UnitRecord, UnitStatus, PRICE_MAX, PRICE_MIN};

fn build_records() -> Vec<UnitRecord> {
    vec![
        UnitRecord {
            code: 1,
            status: UnitStatus::Available,
            price: 10_000,
        },
        UnitRecord {
            code: 2,
            status: UnitStatus::Sold,
            price: 60_000,
        },
        UnitRecord {
            code: 3,
            status: UnitStatus::Reserved,
            price: 45_000,
        },
        UnitRecord {
            code: 4,
            status: UnitStatus::Available,
            price: 95_000,
        },
    ]
}

fn criteria(status: Option<UnitStatus>, min: u32, max: u32) -> FilterCriteria {
    FilterCriteria {
        status,
        price_range: (min, max),
    }
}

#[test]
fn result_is_order_preserving_subset() {
    let records = build_records();
    let filtered = apply_filter(&records, &criteria(None, 20_000, PRICE_MAX));

    assert_eq!(
        filtered.iter().map(|r| r.code).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
    for record in &filtered {
        assert!(records.contains(record));
    }
    for record in &records {
        let included = filtered.contains(record);
        let passes = record.price >= 20_000 && record.price <= PRICE_MAX;
        assert_eq!(included, passes);
    }
}

#[test]
fn repeated_apply_is_deterministic() {
    let records = build_records();
    let c = criteria(Some(UnitStatus::Available), PRICE_MIN, PRICE_MAX);
    assert_eq!(apply_filter(&records, &c), apply_filter(&records, &c));
}

#[test]
fn absent_status_matches_all_statuses() {
    let records = build_records();
    let filtered = apply_filter(&records, &criteria(None, PRICE_MIN, PRICE_MAX));
    assert_eq!(filtered, records);
}

#[test]
fn status_filter_excludes_other_statuses() {
    let records = build_records();
    let filtered = apply_filter(&records, &criteria(Some(UnitStatus::Available), 0, 100_000));
    assert_eq!(
        filtered.iter().map(|r| r.code).collect::<Vec<_>>(),
        vec![1, 4]
    );
}

#[test]
fn price_bounds_are_inclusive() {
    let records = build_records();
    let filtered = apply_filter(&records, &criteria(None, 45_000, 60_000));
    assert_eq!(
        filtered.iter().map(|r| r.code).collect::<Vec<_>>(),
        vec![2, 3]
    );
}

#[test]
fn available_in_full_range_scenario() {
    let records = vec![
        UnitRecord {
            code: 1,
            status: UnitStatus::Available,
            price: 10_000,
        },
        UnitRecord {
            code: 2,
            status: UnitStatus::Sold,
            price: 60_000,
        },
    ];
    let filtered = apply_filter(&records, &criteria(Some(UnitStatus::Available), 0, 100_000));
    assert_eq!(filtered, vec![records[0]]);
}

#[test]
fn high_price_floor_scenario_matches_nothing() {
    let records = vec![
        UnitRecord {
            code: 1,
            status: UnitStatus::Available,
            price: 10_000,
        },
        UnitRecord {
            code: 2,
            status: UnitStatus::Sold,
            price: 60_000,
        },
    ];
    let filtered = apply_filter(&records, &criteria(None, 70_000, 100_000));
    assert!(filtered.is_empty());
}

#[test]
fn min_above_max_yields_empty_view() {
    let records = build_records();
    let filtered = apply_filter(&records, &criteria(None, 80_000, 20_000));
    assert!(filtered.is_empty());
}

#[test]
fn empty_input_yields_empty_output() {
    let filtered = apply_filter(&[], &FilterCriteria::default());
    assert!(filtered.is_empty());
}

#[test]
fn default_criteria_matches_everything() {
    let records = build_records();
    assert_eq!(apply_filter(&records, &FilterCriteria::default()), records);
}
