use teklink_core::{
    AlarmLimit, LimitSlot, ParamValue, ParamWriteRequest, Polarity, decode_uplink,
    parse_param_response,
};

#[test]
fn write_request_round_trips_through_the_registry() {
    let limit = AlarmLimit {
        threshold_cm: 320,
        tolerance_cm: 5,
        enabled: true,
        polarity: Polarity::HigherThanThreshold,
    };
    let payload = ParamWriteRequest::new()
        .tx_period_hours(12)
        .tx_random_minutes(30)
        .logger_interval_minutes(15)
        .status_period_days(7)
        .ping_rate_minutes(10)
        .rf_rssi_threshold_dbm(-97)
        .limit(LimitSlot::Limit1, limit)
        .encode();

    let response = parse_param_response(&payload).expect("parse write request body");
    assert_eq!(response.msg_type, 0x42);
    assert_eq!(response.params["tx_period_s"], ParamValue::Integer(43200));
    assert_eq!(response.params["tx_period_h"], ParamValue::Float(12.0));
    assert_eq!(response.params["tx_random_s"], ParamValue::Integer(1800));
    assert_eq!(response.params["tx_random_min"], ParamValue::Float(30.0));
    assert_eq!(
        response.params["logger_interval_s"],
        ParamValue::Integer(900)
    );
    assert_eq!(
        response.params["logger_interval_min"],
        ParamValue::Float(15.0)
    );
    assert_eq!(
        response.params["status_period_s"],
        ParamValue::Integer(604800)
    );
    assert_eq!(
        response.params["status_period_days"],
        ParamValue::Float(7.0)
    );
    assert_eq!(response.params["ping_rate_min"], ParamValue::Integer(10));
    assert_eq!(
        response.params["rf_rssi_threshold_dbm"],
        ParamValue::Integer(-97)
    );
    assert_eq!(response.params["limit1"], ParamValue::Limit(limit));
    assert_eq!(response.raw_records.len(), 7);
    assert!(response.raw_records.iter().all(|r| !r.truncated));
}

#[test]
fn each_limit_slot_round_trips() {
    let limit = AlarmLimit {
        threshold_cm: 448,
        tolerance_cm: 3,
        enabled: false,
        polarity: Polarity::LowerThanThreshold,
    };

    for (slot, key) in [
        (LimitSlot::Limit1, "limit1"),
        (LimitSlot::Limit2, "limit2"),
        (LimitSlot::Limit3, "limit3"),
    ] {
        let payload = ParamWriteRequest::new().limit(slot, limit).encode();
        let response = parse_param_response(&payload).expect("parse write request body");
        assert_eq!(response.params[key], ParamValue::Limit(limit));
    }
}

#[test]
fn identical_inputs_decode_identically() {
    let payload = [
        0x43, 0x00, 0x00, 0x04, 0x05, 0x00, 0x3c, 0x00, 0x00, 0x00, 0x01, 0x40, 0x05, 0x0f,
    ];

    let first = decode_uplink(67, &payload).expect("decode uplink");
    let second = decode_uplink(67, &payload).expect("decode uplink");
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).expect("serialize document");
    let second_json = serde_json::to_string(&second).expect("serialize document");
    assert_eq!(first_json, second_json);
}
