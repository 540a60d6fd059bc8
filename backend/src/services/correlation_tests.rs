#[cfg(test)]
mod tests {
    use crate::error::InvalidRangeError;
    use crate::models::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelector};
    use crate::services::correlation::{
        color_key, compute_scatter_chart, filter_by_payload, filter_by_payload_bounds,
        scatter_chart_title,
    };

    fn scenario() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, true),
            LaunchRecord::new("SiteA", 1500.0, false),
            LaunchRecord::new("SiteB", 2500.0, true),
            LaunchRecord::new("SiteB", 2500.0, true),
        ])
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    #[test]
    fn test_all_sites_within_range() {
        let points = filter_by_payload(&scenario(), &SiteSelector::All, &range(1000.0, 3000.0));

        assert_eq!(points.len(), 3);
        let payloads: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![1500.0, 2500.0, 2500.0]);
    }

    #[test]
    fn test_single_site_within_range() {
        let points = filter_by_payload(
            &scenario(),
            &SiteSelector::parse("SiteB"),
            &range(0.0, 3000.0),
        );

        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.launch_site == "SiteB"));
        assert!(points.iter().all(|p| p.class == 1));
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let points = filter_by_payload(
            &scenario(),
            &SiteSelector::parse("SiteC"),
            &range(0.0, 5000.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let points = filter_by_payload(&scenario(), &SiteSelector::All, &range(500.0, 1500.0));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_range_outside_data_is_empty() {
        let points = filter_by_payload(&scenario(), &SiteSelector::All, &range(10000.0, 20000.0));
        assert!(points.is_empty());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let data = LaunchDataset::from_records(vec![
            LaunchRecord::new("SiteB", 3000.0, true).with_flight_number(1),
            LaunchRecord::new("SiteA", 1000.0, false).with_flight_number(2),
            LaunchRecord::new("SiteB", 2000.0, false).with_flight_number(3),
        ]);
        let points = filter_by_payload(&data, &SiteSelector::All, &range(0.0, 5000.0));
        let payloads: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, vec![3000.0, 1000.0, 2000.0]);
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let result = filter_by_payload_bounds(&scenario(), &SiteSelector::All, 3000.0, 1000.0);
        assert_eq!(
            result,
            Err(InvalidRangeError::Inverted {
                low: 3000.0,
                high: 1000.0
            })
        );
    }

    #[test]
    fn test_valid_bounds_pass_through() {
        let points =
            filter_by_payload_bounds(&scenario(), &SiteSelector::All, 0.0, 10000.0).unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_unbounded_range_returns_every_record() {
        let points = filter_by_payload_bounds(
            &scenario(),
            &SiteSelector::All,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
        .unwrap();
        assert_eq!(points.len(), 4);

        let upper_open =
            filter_by_payload_bounds(&scenario(), &SiteSelector::All, 2000.0, f64::INFINITY)
                .unwrap();
        assert_eq!(upper_open.len(), 2);
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        let result = filter_by_payload_bounds(&scenario(), &SiteSelector::All, f64::NAN, 1000.0);
        assert!(matches!(result, Err(InvalidRangeError::NotANumber { .. })));
    }

    #[test]
    fn test_category_falls_back_to_site_without_column() {
        let points = filter_by_payload(&scenario(), &SiteSelector::All, &range(0.0, 5000.0));
        assert!(points.iter().all(|p| p.category == p.launch_site));
        assert_eq!(color_key(&scenario()), "Launch Site");
    }

    #[test]
    fn test_category_uses_booster_column_when_present() {
        let data = LaunchDataset::new(
            vec![
                LaunchRecord::new("KSC LC-39A", 2490.0, true).with_booster_category("FT"),
                LaunchRecord::new("VAFB SLC-4E", 500.0, false).with_booster_category("v1.1"),
            ],
            true,
        );
        let points = filter_by_payload(&data, &SiteSelector::All, &range(0.0, 5000.0));

        assert_eq!(points[0].category, "FT");
        assert_eq!(points[1].category, "v1.1");
        assert_eq!(color_key(&data), "Booster Version Category");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = scenario();
        let selector = SiteSelector::parse("SiteA");
        let r = range(0.0, 2000.0);
        assert_eq!(
            filter_by_payload(&data, &selector, &r),
            filter_by_payload(&data, &selector, &r)
        );
    }

    #[test]
    fn test_scatter_titles() {
        assert_eq!(
            scatter_chart_title(&SiteSelector::All, &range(0.0, 9600.0)),
            "Payload vs. Outcome for All Sites (0–9600 kg)"
        );
        assert_eq!(
            scatter_chart_title(&SiteSelector::parse("CCAFS LC-40"), &range(1000.5, 2999.9)),
            "Payload vs. Outcome for CCAFS LC-40 (1000–2999 kg)"
        );
        assert_eq!(
            scatter_chart_title(&SiteSelector::All, &range(f64::NEG_INFINITY, f64::INFINITY)),
            "Payload vs. Outcome for All Sites (-inf–inf kg)"
        );
    }

    #[test]
    fn test_compute_scatter_chart() {
        let chart = compute_scatter_chart(&scenario(), &SiteSelector::All, &range(1000.0, 3000.0));
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.color_key, "Launch Site");
        assert_eq!(chart.range.low(), 1000.0);
    }
}
