//! Tests for loading plot configuration and writing display data.

use chrono::NaiveDate;
use serde_json::Value;
use test_utils::fixtures::{configs, names};
use test_utils::write_temp_yaml;
use velocity_map::wire::CENTER_OPTION;
use velocity_map::{
    Dataset, DisplayDataWriter, DisplayOptions, GridFieldFormatter, PlotConfig, Variable,
    VelmapError, VELOCITY_MEDIA_TYPE,
};

fn short_dims_dataset() -> Dataset {
    Dataset::new()
        .with_coord(names::LAT, vec![60.0, 61.0])
        .with_coord(names::LON, vec![4.0, 5.0, 6.0])
        .with_variable(
            Variable::new(names::U_CURRENT, [names::LAT, names::LON], vec![0.1; 6])
                .with_units("m s-1"),
        )
        .unwrap()
        .with_variable(Variable::new(
            names::V_CURRENT,
            [names::LAT, names::LON],
            vec![0.2; 6],
        ))
        .unwrap()
}

#[test]
fn test_config_from_file() {
    let file = write_temp_yaml(configs::SHORT_DIMS_YAML);
    let config = PlotConfig::from_file(file.path()).unwrap();

    assert_eq!(config.lat_dim, names::LAT);
    assert_eq!(config.lon_dim, names::LON);
    assert_eq!(config.units.as_deref(), Some("m/s"));
    assert!(config.ref_time.is_none());
}

#[test]
fn test_config_ref_time() {
    let config = PlotConfig::from_yaml_str(configs::REF_TIME_YAML).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_eq!(config.ref_time, Some(expected));
    assert_eq!(config.ref_time_string(), "2024-01-15 12:00:00");
    // Unset fields keep their defaults.
    assert_eq!(config.lat_dim, "latitude");
}

#[test]
fn test_config_rejects_same_dims() {
    let file = write_temp_yaml(configs::SAME_DIMS_YAML);
    let err = PlotConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, VelmapError::InvalidConfig(_)));
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlotConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.error_code(), "InvalidConfig");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_loaded_config_drives_formatting() {
    let file = write_temp_yaml(configs::SHORT_DIMS_YAML);
    let mut yaml = std::fs::read_to_string(file.path()).unwrap();
    yaml.push_str(configs::REF_TIME_YAML);

    let formatter = GridFieldFormatter::new(PlotConfig::from_yaml_str(&yaml).unwrap());
    let payload = formatter
        .format(
            &short_dims_dataset(),
            names::U_CURRENT,
            names::V_CURRENT,
            DisplayOptions::new(),
        )
        .unwrap();

    for record in payload.records() {
        // The configured units replace the mismatched attributes.
        assert_eq!(record.header.parameter_unit, "m/s");
        assert_eq!(record.header.ref_time, "2024-01-15 12:00:00");
        assert_eq!(record.header.la1, 61.0);
    }
}

#[test]
fn test_display_data_writer_output() {
    let formatter = GridFieldFormatter::new(
        PlotConfig::new()
            .with_lat_dim(names::LAT)
            .with_lon_dim(names::LON)
            .with_units("m/s"),
    );
    let writer = DisplayDataWriter::new(Vec::new());

    formatter
        .plot(
            &short_dims_dataset(),
            names::U_CURRENT,
            names::V_CURRENT,
            DisplayOptions::new(),
            &writer,
        )
        .unwrap();
    formatter
        .plot(
            &short_dims_dataset(),
            names::U_CURRENT,
            names::V_CURRENT,
            DisplayOptions::new(),
            &writer,
        )
        .unwrap();

    let output = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);

    let message: Value = serde_json::from_str(lines[0]).unwrap();
    let records: Value = serde_json::from_str(
        message["data"][VELOCITY_MEDIA_TYPE].as_str().unwrap(),
    )
    .unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[1]["header"]["parameterNumberName"], "Northward current");

    let center = &message["metadata"][VELOCITY_MEDIA_TYPE][CENTER_OPTION];
    assert_eq!(center[0], 60.5);
    assert_eq!(center[1], 5.0);
}
