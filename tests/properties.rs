//! Invariants of the trend engine over generated inputs

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use expense_trend::models::{BudgetContext, ExpenseRecord, Money};
use expense_trend::trends::{
    compute_series, DateRange, FilterContext, Granularity, ResolvedMode, Timeframe, TrendOutput,
    ViewMode,
};

fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 13)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap()
}

const CATEGORIES: [&str; 4] = ["Food", "Rent", "Transport", "Fun"];

/// Up to `max` expenses spread over ~15 months from `origin()`
fn expense_sets(max: usize) -> impl Strategy<Value = Vec<ExpenseRecord>> {
    prop::collection::vec(
        (0i64..450, 0i64..24 * 60, 1i64..50_000, 0..CATEGORIES.len()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(day, minute, cents, category)| {
                ExpenseRecord::new(
                    origin() + Duration::days(day) + Duration::minutes(minute),
                    Money::from_cents(cents),
                    CATEGORIES[category],
                    "generated",
                )
            })
            .collect()
    })
}

fn view_modes() -> impl Strategy<Value = ViewMode> {
    prop_oneof![
        Just(ViewMode::Auto),
        Just(ViewMode::Granular),
        Just(ViewMode::Aggregated),
    ]
}

fn granularities() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

fn run(
    records: &[ExpenseRecord],
    filter: &FilterContext,
    mode: ViewMode,
    granularity: Granularity,
    budget: &BudgetContext,
) -> TrendOutput {
    compute_series(records, filter, mode, granularity, budget, now()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeated_invocations_are_byte_identical(
        records in expense_sets(80),
        mode in view_modes(),
        granularity in granularities(),
        budget in -1_000i64..10_000,
    ) {
        let budget = BudgetContext::new(Money::from_dollars(budget));
        let filter = FilterContext::default();
        let first = run(&records, &filter, mode, granularity, &budget);
        let second = run(&records, &filter, mode, granularity, &budget);

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn granular_series_are_monotonic(records in expense_sets(80), budget in 0i64..5_000) {
        let output = run(
            &records,
            &FilterContext::default(),
            ViewMode::Granular,
            Granularity::Month,
            &BudgetContext::new(Money::from_dollars(budget)),
        );

        let values = output.expense_series.values();
        prop_assert!(values.windows(2).all(|pair| pair[1] >= pair[0]));

        let depletion = output.depletion_series.unwrap();
        prop_assert!(depletion.values().windows(2).all(|pair| pair[1] <= pair[0]));
        prop_assert_eq!(depletion.len(), output.expense_series.len());
        prop_assert_eq!(output.expense_series.len(), records.len());
    }

    #[test]
    fn granular_labels_are_chronological(records in expense_sets(60)) {
        let output = run(
            &records,
            &FilterContext::default(),
            ViewMode::Granular,
            Granularity::Month,
            &BudgetContext::none(),
        );
        let labels = output.expense_series.labels();
        prop_assert!(labels.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn bucket_totals_conserve_spend(records in expense_sets(120), granularity in granularities()) {
        let expected: Money = records.iter().map(|r| r.amount).sum();
        let output = run(
            &records,
            &FilterContext::default(),
            ViewMode::Aggregated,
            granularity,
            &BudgetContext::none(),
        );

        let total: Money = output.expense_series.values().iter().sum();
        prop_assert_eq!(total, expected, "granularity {}", granularity);

        let labels = output.expense_series.labels();
        prop_assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn aggregated_depletion_is_never_negative(
        records in expense_sets(100),
        granularity in granularities(),
        budget in -500i64..30_000,
    ) {
        let output = run(
            &records,
            &FilterContext::default(),
            ViewMode::Aggregated,
            granularity,
            &BudgetContext::new(Money::from_dollars(budget)),
        );
        let depletion = output.depletion_series.unwrap();
        prop_assert!(depletion.values().iter().all(|v| !v.is_negative()));
        prop_assert!(depletion.values().windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn timeframe_then_range_matches_range_then_timeframe(
        records in expense_sets(150),
        start_offset in prop::option::of(0i64..450),
        length in prop::option::of(0i64..450),
    ) {
        let range_start = start_offset.map(|days| (origin() + Duration::days(days)).date());
        let range_end = length.map(|days| {
            range_start.unwrap_or_else(|| origin().date()) + Duration::days(days)
        });
        let explicit = DateRange::new(range_start, range_end);

        for timeframe in Timeframe::ALL {
            let combined = FilterContext::new(timeframe, range_start, range_end);
            let forward: Vec<_> = combined.apply(&records, now()).iter().map(|r| r.id).collect();

            // The same timeframe expressed as an absolute inclusive range
            let window_range = match timeframe.window(now()) {
                Some(window) => DateRange::new(
                    Some(window.start),
                    Some(window.end - Duration::days(1)),
                ),
                None => DateRange::default(),
            };
            let reverse: Vec<_> = window_range
                .filter(explicit.filter(&records))
                .iter()
                .map(|r| r.id)
                .collect();

            prop_assert_eq!(forward, reverse, "timeframe {}", timeframe);
        }
    }

    #[test]
    fn totals_beyond_cents_range_fail_cleanly(
        amounts in prop::collection::vec(i64::MAX / 4..=i64::MAX / 2, 1..6),
        mode in view_modes(),
    ) {
        let records: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| {
                ExpenseRecord::new(
                    origin() + Duration::days(i as i64),
                    Money::from_cents(*cents),
                    "Rent",
                    "",
                )
            })
            .collect();
        let fits = amounts
            .iter()
            .try_fold(0i64, |acc, cents| acc.checked_add(*cents))
            .is_some();

        let result = compute_series(
            &records,
            &FilterContext::default(),
            mode,
            Granularity::Year,
            &BudgetContext::none(),
            now(),
        );

        match result {
            Ok(output) => {
                prop_assert!(fits);
                prop_assert_eq!(output.record_count, records.len());
            }
            Err(err) => {
                prop_assert!(!fits);
                prop_assert!(err.is_validation());
            }
        }
    }
}

#[test]
fn auto_mode_follows_thresholds() {
    let budget = BudgetContext::none();
    let filter = FilterContext::default();
    let every_twenty_days = |count: i64| -> Vec<ExpenseRecord> {
        (0..count)
            .map(|i| {
                ExpenseRecord::new(
                    origin() + Duration::days(i * 20),
                    Money::from_cents(100),
                    "Food",
                    "",
                )
            })
            .collect()
    };

    assert_eq!(
        run(&every_twenty_days(20), &filter, ViewMode::Auto, Granularity::Month, &budget).mode,
        ResolvedMode::Granular
    );
    // 21 records spread over more than a year
    assert_eq!(
        run(&every_twenty_days(21), &filter, ViewMode::Auto, Granularity::Month, &budget).mode,
        ResolvedMode::Aggregated
    );

    // Dense week: many records but short span
    let dense: Vec<_> = (0..50)
        .map(|i| {
            ExpenseRecord::new(
                origin() + Duration::hours(i * 3),
                Money::from_cents(100),
                "Food",
                "",
            )
        })
        .collect();
    assert_eq!(
        run(&dense, &filter, ViewMode::Auto, Granularity::Month, &budget).mode,
        ResolvedMode::Granular
    );
}

#[test]
fn week_buckets_are_keyed_by_sunday() {
    // Saturday 2024-03-09, Sunday 2024-03-10, Monday 2024-03-11
    let at = |d| {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    };
    let records = vec![
        ExpenseRecord::new(at(9), Money::from_dollars(1), "Food", ""),
        ExpenseRecord::new(at(10), Money::from_dollars(2), "Food", ""),
        ExpenseRecord::new(at(11), Money::from_dollars(4), "Food", ""),
    ];
    let output = run(
        &records,
        &FilterContext::default(),
        ViewMode::Aggregated,
        Granularity::Week,
        &BudgetContext::new(Money::from_dollars(5)),
    );

    let labels: Vec<_> = output
        .expense_series
        .labels()
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(labels, vec!["2024-03-03", "2024-03-10"]);
    assert_eq!(
        output.expense_series.values(),
        &[Money::from_dollars(1), Money::from_dollars(6)]
    );
    assert_eq!(
        output.depletion_series.unwrap().values(),
        &[Money::from_dollars(4), Money::zero()]
    );
}
