use super::*;
use crate::model::percentiles::PercentileStep;
use crate::model::tables::LookupTable;
use crate::pipeline::stage1_validate::ValidationIssue;

fn tables(verbal: &[(u32, u32)], quant: &[(u32, u32)], english: &[(u32, u32)]) -> ScaleTables {
    ScaleTables::new(
        verbal.iter().copied().collect::<LookupTable>(),
        quant.iter().copied().collect::<LookupTable>(),
        english.iter().copied().collect::<LookupTable>(),
    )
}

fn pools(verbal: &[Option<f64>], quant: &[Option<f64>], english: &[Option<f64>]) -> RawPools {
    RawPools {
        verbal: verbal.to_vec(),
        quantitative: quant.to_vec(),
        english: english.to_vec(),
    }
}

fn no_pick(_len: usize) -> (usize, usize) {
    panic!("unexpected pair selection");
}

#[test]
fn test_all_fifty_lands_in_floor_band() {
    let pipeline = ScoringPipeline::standard(tables(&[(20, 50)], &[(20, 50)], &[(20, 50)])).unwrap();
    let p = pools(
        &[Some(10.0), Some(10.0)],
        &[Some(10.0), Some(10.0)],
        &[Some(11.0), Some(11.0)],
    );
    let result = pipeline.run(&p, &mut no_pick).unwrap();

    assert_eq!(
        result.raw_sums,
        RawSums {
            verbal: 20.0,
            quantitative: 20.0,
            english: 22.0
        }
    );
    assert_eq!(
        result.standardized,
        Standardized {
            verbal: 50,
            quantitative: 50,
            english: 50
        }
    );
    for outcome in result.outcomes() {
        assert_eq!(outcome.composite, 50.0);
        assert_eq!(outcome.rounded, 50);
        assert_eq!(outcome.label, "200");
        assert_eq!(outcome.percentile_below, 0);
        assert_eq!(
            outcome.percentile_text,
            "Approximately 0% scored below this score."
        );
    }
}

#[test]
fn test_single_value_domain_fails_validation() {
    let pipeline = ScoringPipeline::standard(tables(&[(20, 50)], &[(20, 50)], &[(20, 50)])).unwrap();
    let p = pools(
        &[Some(12.0), None],
        &[Some(10.0), Some(10.0)],
        &[Some(11.0), Some(11.0)],
    );
    let err = pipeline.run(&p, &mut no_pick).unwrap_err();
    match err {
        PipelineError::Validation(v) => {
            assert_eq!(v.domains(), vec![Domain::Verbal]);
            assert_eq!(
                v.issues,
                vec![ValidationIssue::TooFewValues {
                    domain: Domain::Verbal,
                    present: 1
                }]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_validation_runs_before_any_selection() {
    let pipeline = ScoringPipeline::standard(tables(&[(20, 50)], &[(20, 50)], &[(20, 50)])).unwrap();
    let p = pools(
        &[Some(1.0), Some(2.0), Some(3.0)],
        &[Some(10.0)],
        &[Some(11.0), Some(30.0)],
    );
    let err = pipeline.run(&p, &mut no_pick).unwrap_err();
    let PipelineError::Validation(v) = err else {
        panic!("expected validation error");
    };
    assert_eq!(v.domains(), vec![Domain::Quantitative, Domain::English]);
}

#[test]
fn test_rounded_149_routes_to_last_interval() {
    let pipeline =
        ScoringPipeline::standard(tables(&[(40, 149)], &[(40, 149)], &[(44, 149)])).unwrap();
    let p = pools(
        &[Some(20.0), Some(20.0)],
        &[Some(20.0), Some(20.0)],
        &[Some(22.0), Some(22.0)],
    );
    let result = pipeline.run(&p, &mut no_pick).unwrap();
    for outcome in result.outcomes() {
        assert_eq!(outcome.rounded, 149);
        assert_eq!(outcome.label, "762 - 795");
        assert_eq!(
            outcome.percentile_text,
            "Approximately 97% of examinees scored below this range."
        );
    }
}

#[test]
fn test_above_table_is_ceiling() {
    let pipeline =
        ScoringPipeline::standard(tables(&[(40, 150)], &[(40, 150)], &[(44, 150)])).unwrap();
    let p = pools(
        &[Some(20.0), Some(20.0)],
        &[Some(20.0), Some(20.0)],
        &[Some(22.0), Some(22.0)],
    );
    let result = pipeline.run(&p, &mut no_pick).unwrap();
    assert_eq!(result.general.label, "800");
    assert_eq!(
        result.general.percentile_text,
        "Approximately 97% scored below this score."
    );
}

#[test]
fn test_distinct_composite_views() {
    let pipeline =
        ScoringPipeline::standard(tables(&[(30, 140)], &[(25, 100)], &[(33, 120)])).unwrap();
    let p = pools(
        &[Some(15.0), Some(15.0)],
        &[Some(12.0), None, Some(13.0)],
        &[Some(16.0), Some(17.0)],
    );
    let result = pipeline.run(&p, &mut no_pick).unwrap();

    assert_eq!(result.general.rounded, 120);
    assert_eq!(result.general.label, "588 - 616");
    assert_eq!(result.general.percentile_below, 61);

    assert_eq!(result.humanities.rounded, 128);
    assert_eq!(result.humanities.label, "645 - 672");
    assert_eq!(result.humanities.percentile_below, 76);

    assert_eq!(result.science.rounded, 112);
    assert_eq!(result.science.label, "560 - 587");
    assert_eq!(result.science.percentile_below, 54);
}

#[test]
fn test_more_than_two_uses_picker() {
    let pipeline = ScoringPipeline::standard(tables(&[(12, 80)], &[(20, 50)], &[(22, 50)])).unwrap();
    let p = pools(
        &[Some(5.0), Some(6.0), Some(7.0)],
        &[Some(10.0), Some(10.0)],
        &[Some(11.0), Some(11.0)],
    );
    let mut picker = |len: usize| {
        assert_eq!(len, 3);
        (0, 2)
    };
    let result = pipeline.run(&p, &mut picker).unwrap();
    assert_eq!(result.raw_sums.verbal, 12.0);
    assert_eq!(result.standardized.verbal, 80);
}

#[test]
fn test_invalid_pick_is_reported() {
    let pipeline = ScoringPipeline::standard(tables(&[(20, 50)], &[(20, 50)], &[(20, 50)])).unwrap();
    let p = pools(
        &[Some(5.0), Some(6.0), Some(7.0)],
        &[Some(10.0), Some(10.0)],
        &[Some(11.0), Some(11.0)],
    );
    let mut picker = |_len: usize| (2, 2);
    let err = pipeline.run(&p, &mut picker).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidPick(Domain::Verbal)));
}

#[test]
fn test_two_value_pools_are_idempotent() {
    let pipeline =
        ScoringPipeline::standard(tables(&[(30, 140)], &[(25, 100)], &[(33, 120)])).unwrap();
    let p = pools(
        &[Some(15.0), Some(15.0)],
        &[Some(12.0), Some(13.0)],
        &[Some(16.0), Some(17.0)],
    );
    let first = pipeline.run(&p, &mut no_pick).unwrap();
    let second = pipeline.run(&p, &mut no_pick).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rejects_percentiles_that_miss_band_labels() {
    let percentiles = PercentileTable::new(vec![PercentileStep::new(700, 50)]).unwrap();
    let err = ScoringPipeline::new(
        tables(&[(20, 50)], &[(20, 50)], &[(20, 50)]),
        RangeTable::standard().unwrap(),
        percentiles,
    )
    .unwrap_err();
    assert_eq!(err, TableError::UnmappedLabel("702 - 729".to_string()));
}
