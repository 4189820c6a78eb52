use conch_report::{MantaReport, ProcessOptions, ReportError};
use conch_testing::{device, failure_pair, product, FakeConch};
use conch_types::{FailurePair, RawMboReport};
use uuid::Uuid;

const HOUR_NS: i64 = 3_600_000_000_000;

fn dell_product_id() -> Uuid {
    "c0ffee00-0000-4000-8000-0000000000aa".parse().unwrap()
}

fn ams1_id() -> Uuid {
    "abc12345-1111-4000-8000-000000000001".parse().unwrap()
}

fn raw(entries: Vec<(&str, Vec<(&str, FailurePair)>)>) -> RawMboReport {
    entries
        .into_iter()
        .map(|(serial, failures)| {
            (
                serial.to_string(),
                failures
                    .into_iter()
                    .map(|(key, pair)| (key.to_string(), pair))
                    .collect(),
            )
        })
        .collect()
}

fn ams1_fake() -> FakeConch {
    FakeConch::new()
        .with_product(product(dell_product_id(), "Joyent-S1", "Dell"))
        .with_device(
            "srv001",
            device("srv001", dell_product_id(), Some((ams1_id(), "AMS1"))),
        )
}

fn bios_pair() -> FailurePair {
    failure_pair(
        "BIOS",
        "product_name",
        Some("2020-01-01T00:00:00Z"),
        Some("2020-01-01T02:00:00Z"),
    )
}

fn options(min_seconds: i64) -> ProcessOptions {
    ProcessOptions {
        datacenter: None,
        remediation_min_seconds: min_seconds,
    }
}

#[test]
fn bios_scenario_lands_in_all_three_aggregates() {
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", bios_pair())])]));
    let stats = report.process(&ams1_fake(), &options(60)).unwrap();

    assert_eq!(stats.devices_seen, 1);
    assert_eq!(stats.devices_skipped, 0);
    assert_eq!(stats.observations, 1);
    assert!(report.been_processed);

    let dc = &report.processed["AMS1"];
    assert_eq!(dc.id, ams1_id());

    let by_type = &dc.times_by_type["BIOS"];
    assert_eq!(by_type.count, 1);
    assert_eq!(by_type.mean, 2 * HOUR_NS);
    assert_eq!(by_type.median, 2 * HOUR_NS);

    assert_eq!(dc.times_by_subtype["BIOS"]["product_name"].count, 1);
    assert_eq!(dc.times_by_vendor_and_type["Dell"]["BIOS"].count, 1);

    let detail = &by_type.devices[0];
    assert_eq!(detail.device_id, "srv001");
    assert_eq!(detail.failure_type, "BIOS");
    assert_eq!(detail.component_name, "product_name");
    assert_eq!(detail.remediation_ns, 2 * HOUR_NS);
}

#[test]
fn zero_timestamp_records_are_excluded() {
    let pair = failure_pair("BIOS", "product_name", Some("2020-01-01T00:00:00Z"), None);
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", pair)])]));
    report.process(&ams1_fake(), &options(60)).unwrap();

    // The device resolved, so the datacenter entry exists; no aggregate does.
    let dc = &report.processed["AMS1"];
    assert!(dc.times_by_type.is_empty());
    assert!(dc.times_by_subtype.is_empty());
    assert!(dc.times_by_vendor_and_type.is_empty());
}

#[test]
fn below_threshold_datacenter_still_appears_with_empty_aggregates() {
    // 2h duration, 10000s threshold: nothing qualifies but the datacenter
    // entry is created before the per-failure filter runs.
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", bios_pair())])]));
    let stats = report.process(&ams1_fake(), &options(10_000)).unwrap();

    assert_eq!(stats.observations, 0);
    let dc = &report.processed["AMS1"];
    assert!(dc.times_by_type.is_empty());
    assert!(dc.times_by_subtype.is_empty());
    assert!(dc.times_by_vendor_and_type.is_empty());
}

#[test]
fn threshold_boundary_is_inclusive() {
    let at_threshold = failure_pair(
        "NET",
        "links_up",
        Some("2020-01-01T00:00:00Z"),
        Some("2020-01-01T00:01:30Z"),
    );
    let below = failure_pair(
        "NET",
        "nics_num",
        Some("2020-01-01T00:00:00Z"),
        Some("2020-01-01T00:01:29Z"),
    );
    let mut report = MantaReport::from_raw(raw(vec![(
        "srv001",
        vec![("net0", at_threshold), ("net1", below)],
    )]));
    report.process(&ams1_fake(), &options(90)).unwrap();

    let dc = &report.processed["AMS1"];
    assert_eq!(dc.times_by_type["NET"].count, 1);
    assert!(dc.times_by_subtype["NET"].contains_key("links_up"));
    assert!(!dc.times_by_subtype["NET"].contains_key("nics_num"));
}

#[test]
fn unresolvable_devices_are_skipped_not_fatal() {
    let api = ams1_fake()
        .with_device(
            "srv002",
            device("srv002", dell_product_id(), Some((ams1_id(), "AMS1"))),
        )
        .with_broken_serial("srv002");
    let mut report = MantaReport::from_raw(raw(vec![
        ("srv001", vec![("bios", bios_pair())]),
        ("srv002", vec![("bios", bios_pair())]),
    ]));

    let stats = report.process(&api, &options(60)).unwrap();
    assert_eq!(stats.devices_seen, 2);
    assert_eq!(stats.devices_skipped, 1);
    assert_eq!(report.processed["AMS1"].times_by_type["BIOS"].count, 1);
}

#[test]
fn unknown_serial_is_skipped_too() {
    let mut report = MantaReport::from_raw(raw(vec![
        ("srv001", vec![("bios", bios_pair())]),
        ("ghost", vec![("bios", bios_pair())]),
    ]));
    let stats = report.process(&ams1_fake(), &options(60)).unwrap();
    assert_eq!(stats.devices_skipped, 1);
    assert_eq!(report.processed.len(), 1);
}

#[test]
fn catalog_failure_aborts_the_run() {
    let api = ams1_fake().with_broken_catalog();
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", bios_pair())])]));

    let err = report.process(&api, &options(60)).unwrap_err();
    assert!(matches!(err, ReportError::Catalog(_)));
    assert!(!report.been_processed);
    assert!(report.processed.is_empty());
}

#[test]
fn nil_hardware_product_is_skipped() {
    let api = ams1_fake().with_device(
        "srv003",
        device("srv003", Uuid::nil(), Some((ams1_id(), "AMS1"))),
    );
    let mut report = MantaReport::from_raw(raw(vec![("srv003", vec![("bios", bios_pair())])]));

    let stats = report.process(&api, &options(60)).unwrap();
    assert_eq!(stats.devices_skipped, 1);
    assert!(report.processed.is_empty());
}

#[test]
fn unresolvable_vendor_defaults_to_unknown() {
    let off_catalog: Uuid = "deadbeef-0000-4000-8000-000000000099".parse().unwrap();
    let api = FakeConch::new()
        .with_product(product(dell_product_id(), "Joyent-S1", "Dell"))
        .with_device(
            "srv004",
            device("srv004", off_catalog, Some((ams1_id(), "AMS1"))),
        );
    let mut report = MantaReport::from_raw(raw(vec![("srv004", vec![("bios", bios_pair())])]));
    report.process(&api, &options(60)).unwrap();

    let dc = &report.processed["AMS1"];
    assert_eq!(dc.times_by_vendor_and_type["UNKNOWN"]["BIOS"].count, 1);
}

#[test]
fn device_without_location_lands_in_unknown_datacenter() {
    let api = FakeConch::new()
        .with_product(product(dell_product_id(), "Joyent-S1", "Dell"))
        .with_device("srv005", device("srv005", dell_product_id(), None));
    let mut report = MantaReport::from_raw(raw(vec![("srv005", vec![("bios", bios_pair())])]));
    report.process(&api, &options(60)).unwrap();

    let dc = &report.processed["UNKNOWN"];
    assert!(dc.id.is_nil());
    assert_eq!(dc.times_by_type["BIOS"].count, 1);
}

#[test]
fn short_uuid_datacenter_filter_matches() {
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", bios_pair())])]));
    let opts = ProcessOptions {
        datacenter: Some("abc12345".to_string()),
        remediation_min_seconds: 60,
    };
    report.process(&ams1_fake(), &opts).unwrap();
    assert!(report.processed.contains_key("AMS1"));
}

#[test]
fn non_matching_datacenter_filter_drops_everything() {
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("bios", bios_pair())])]));
    let opts = ProcessOptions {
        datacenter: Some("ewr99999".to_string()),
        remediation_min_seconds: 60,
    };
    let stats = report.process(&ams1_fake(), &opts).unwrap();
    assert!(report.processed.is_empty());
    assert_eq!(stats.observations, 0);
}

#[test]
fn undetermined_type_normalizes_to_unknown() {
    let pair = failure_pair(
        "Undetermined",
        "",
        Some("2020-01-01T00:00:00Z"),
        Some("2020-01-01T02:00:00Z"),
    );
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("mystery", pair)])]));
    report.process(&ams1_fake(), &options(60)).unwrap();

    let dc = &report.processed["AMS1"];
    assert_eq!(dc.times_by_type["UNKNOWN"].count, 1);
    assert_eq!(dc.times_by_subtype["UNKNOWN"]["UNKNOWN"].count, 1);
}

#[test]
fn peer_component_is_normalized_in_aggregate_key() {
    let pair = failure_pair(
        "NET",
        "switch1_peer",
        Some("2020-01-01T00:00:00Z"),
        Some("2020-01-01T02:00:00Z"),
    );
    let mut report = MantaReport::from_raw(raw(vec![("srv001", vec![("net0", pair)])]));
    report.process(&ams1_fake(), &options(60)).unwrap();

    let dc = &report.processed["AMS1"];
    assert!(dc.times_by_subtype["NET"].contains_key("switch_peer"));
    assert!(!dc.times_by_subtype["NET"].contains_key("switch1_peer"));
}

#[test]
fn mean_and_median_cover_all_samples() {
    let two_hours = bios_pair();
    let four_hours = failure_pair(
        "BIOS",
        "bios_firmware_version",
        Some("2020-01-02T00:00:00Z"),
        Some("2020-01-02T04:00:00Z"),
    );
    let mut report = MantaReport::from_raw(raw(vec![(
        "srv001",
        vec![("bios0", two_hours), ("bios1", four_hours)],
    )]));
    report.process(&ams1_fake(), &options(60)).unwrap();

    let by_type = &report.processed["AMS1"].times_by_type["BIOS"];
    assert_eq!(by_type.count, 2);
    assert_eq!(by_type.all.len(), 2);
    assert_eq!(by_type.mean, 3 * HOUR_NS);
    assert_eq!(by_type.median, 3 * HOUR_NS);
}

#[test]
fn process_is_idempotent_across_fresh_instances() {
    let input = raw(vec![(
        "srv001",
        vec![
            ("bios", bios_pair()),
            (
                "net0",
                failure_pair(
                    "NET",
                    "switch1_peer",
                    Some("2020-01-01T00:00:00Z"),
                    Some("2020-01-01T05:00:00Z"),
                ),
            ),
        ],
    )]);

    let mut first = MantaReport::from_raw(input.clone());
    let mut second = MantaReport::from_raw(input);
    first.process(&ams1_fake(), &options(60)).unwrap();
    second.process(&ams1_fake(), &options(60)).unwrap();

    assert_eq!(first.as_text(true, false, false), second.as_text(true, false, false));
    assert_eq!(first.as_csv().unwrap(), second.as_csv().unwrap());
}
